use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// NOTE: Schema Design Goals
//
// 1. Draft/persisted split: a bill without an id only exists as form state.
//    `DraftBill` cannot carry an id, `Bill` always does; the type system
//    enforces the "id immutable after assignment" invariant instead of a
//    runtime check.
//
// 2. Raw dates at rest: `date` stays the ISO-8601 string the backend stores.
//    Chronological ordering parses it on demand; display formatting never
//    feeds back into the stored value, so malformed dates survive round
//    trips unchanged and still reach the screen.
//
// 3. Attachment atomicity: `file_url`/`file_name` are written together after
//    a successful upload, or not at all. A new selection replaces the pair
//    wholesale.

/// Review status of a submitted bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Submitted, awaiting review. Every new bill starts here.
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

/// Fixed expense-category set offered by the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExpenseType {
    /// Sentinel category used when the form field is left untouched.
    #[default]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    RestaurantsEtBars,
    #[serde(rename = "Hôtel et logement")]
    HotelEtLogement,
    Services,
    Fournitures,
    #[serde(rename = "IT et électronique")]
    ItEtElectronique,
    #[serde(rename = "Equipement et matériel")]
    EquipementEtMateriel,
}

impl ExpenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::RestaurantsEtBars => "Restaurants et bars",
            ExpenseType::HotelEtLogement => "Hôtel et logement",
            ExpenseType::Services => "Services",
            ExpenseType::Fournitures => "Fournitures",
            ExpenseType::ItEtElectronique => "IT et électronique",
            ExpenseType::EquipementEtMateriel => "Equipement et matériel",
        }
    }

    /// Parse a form value back into a category, falling back to the
    /// sentinel `Transports` for anything unknown.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "Restaurants et bars" => ExpenseType::RestaurantsEtBars,
            "Hôtel et logement" => ExpenseType::HotelEtLogement,
            "Services" => ExpenseType::Services,
            "Fournitures" => ExpenseType::Fournitures,
            "IT et électronique" => ExpenseType::ItEtElectronique,
            "Equipement et matériel" => ExpenseType::EquipementEtMateriel,
            _ => ExpenseType::Transports,
        }
    }

    pub fn all() -> &'static [ExpenseType] {
        &[
            ExpenseType::Transports,
            ExpenseType::RestaurantsEtBars,
            ExpenseType::HotelEtLogement,
            ExpenseType::Services,
            ExpenseType::Fournitures,
            ExpenseType::ItEtElectronique,
            ExpenseType::EquipementEtMateriel,
        ]
    }
}

/// A persisted expense bill as returned by a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Opaque identifier assigned by the backend on creation.
    pub id: String,
    /// Owner email, sourced from the session at submission time.
    pub email: String,
    /// Expense category.
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    /// Free-text expense name.
    pub name: String,
    /// Amount in whole currency units. No subunit handling.
    pub amount: i64,
    /// ISO-8601 date string as stored by the backend. May be malformed in
    /// legacy data; kept verbatim either way.
    pub date: String,
    /// VAT amount. Free-form, not validated beyond presence.
    pub vat: String,
    /// VAT percentage.
    pub pct: i64,
    /// Optional free-text commentary.
    #[serde(default)]
    pub commentary: String,
    /// Attachment URL, set only after a successful upload.
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    /// Original attachment filename.
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    /// Review status. New bills start `pending`.
    #[serde(default)]
    pub status: BillStatus,
}

impl Bill {
    /// Chronological date value, when the stored string parses as ISO-8601.
    ///
    /// Ordering and comparisons go through this; display formatting and
    /// persistence keep the raw string.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// A bill that exists only as form state: no id yet, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftBill {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    #[serde(default)]
    pub commentary: String,
    #[serde(rename = "fileUrl", default)]
    pub file_url: Option<String>,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
}

impl DraftBill {
    /// Promote a draft to a persisted bill once a backend assigned an id.
    pub fn into_bill(self, id: String) -> Bill {
        Bill {
            id,
            email: self.email,
            expense_type: self.expense_type,
            name: self.name,
            amount: self.amount,
            date: self.date,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_url: self.file_url,
            file_name: self.file_name,
            status: self.status,
        }
    }
}
