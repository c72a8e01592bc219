use billed_types::BillStatus;
use chrono::{Datelike, NaiveDate};

/// Three-letter French month abbreviations, capitalized, as the original
/// front end derived them from `Intl.DateTimeFormat("fr")` short months.
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format an ISO-8601 date for display: `"2004-04-04"` → `"4 Avr. 04"`.
///
/// Day without leading zero, abbreviated month with trailing period,
/// two-digit year. Callers fall back to the raw string on parse failure so
/// malformed legacy data still reaches the screen.
pub fn format_date(date_str: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?;
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        MONTHS_FR[date.month0() as usize],
        date.year().rem_euclid(100)
    ))
}

/// Display string for a review status.
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}
