use crate::error::Result;
use crate::format::{format_date, format_status};
use crate::router::{Navigator, RoutePath};
use crate::view_root::{ModalState, ViewHandle};
use billed_store::RemoteStore;
use billed_types::{Bill, Session};
use std::cmp::Ordering;
use std::sync::Arc;

/// Share of the preview region width the attachment is scaled to.
const PREVIEW_WIDTH_PCT: u32 = 50;

/// A bill enriched with its display fields.
///
/// The raw record keeps its identity untouched; only the derived strings
/// differ from what the backend returned. When the stored date fails to
/// parse, `date_display` falls back to the raw string so the bill still
/// reaches the employee.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    pub bill: Bill,
    pub date_display: String,
    pub status_display: String,
}

impl DisplayBill {
    fn from_bill(bill: Bill) -> Self {
        let date_display = format_date(&bill.date).unwrap_or_else(|_| bill.date.clone());
        let status_display = format_status(bill.status).to_string();
        DisplayBill {
            bill,
            date_display,
            status_display,
        }
    }
}

/// Most recent first. Records whose date fails to parse sort after all
/// parseable records; between themselves they fall back to reverse
/// lexicographic order on the raw string so the order stays total.
fn anti_chrono(a: &Bill, b: &Bill) -> Ordering {
    match (a.parsed_date(), b.parsed_date()) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.date.cmp(&a.date),
    }
}

/// Container for the employee bill list: fetches, sorts, formats and wires
/// the row-level interactions.
pub struct BillsContainer {
    view: ViewHandle,
    navigator: Navigator,
    store: Option<Arc<dyn RemoteStore>>,
    session: Session,
}

impl BillsContainer {
    pub fn new(
        view: ViewHandle,
        navigator: Navigator,
        store: Option<Arc<dyn RemoteStore>>,
        session: Session,
    ) -> Self {
        BillsContainer {
            view,
            navigator,
            store,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch, sort and format the bills.
    ///
    /// Without a configured store this resolves to an empty sequence (the
    /// isolated-view test mode). A store rejection propagates unchanged;
    /// the caller turns it into the displayed error state. No retry here.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };

        let mut bills = store.bills().list().await?;
        bills.sort_by(anti_chrono);
        Ok(bills.into_iter().map(DisplayBill::from_bill).collect())
    }

    /// Open the attachment preview for a clicked row. The row carries the
    /// attachment URL; no network call happens here.
    pub fn handle_click_icon_eye(&self, row: &DisplayBill) {
        self.view.open_modal(ModalState {
            file_url: row.bill.file_url.clone(),
            width_pct: PREVIEW_WIDTH_PCT,
            open: true,
        });
    }

    /// Jump to the creation view. Pure dispatch.
    pub async fn handle_click_new_bill(&self) -> Result<()> {
        self.navigator.navigate(RoutePath::NewBill.token()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Dispatcher;
    use billed_store::{FailingStore, MemoryStore};
    use billed_types::{BillStatus, DraftBill, ExpenseType};

    fn fixture_bill(name: &str, date: &str, status: BillStatus) -> Bill {
        DraftBill {
            email: "a@a".to_string(),
            expense_type: ExpenseType::Transports,
            name: name.to_string(),
            amount: 100,
            date: date.to_string(),
            vat: "20".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some(format!("https://test.storage.tld/{}.jpg", name)),
            file_name: Some(format!("{}.jpg", name)),
            status,
        }
        .into_bill(name.to_string())
    }

    fn fixture_store() -> Arc<dyn RemoteStore> {
        Arc::new(MemoryStore::with_bills(vec![
            fixture_bill("encore", "2004-04-04", BillStatus::Pending),
            fixture_bill("test1", "2001-01-01", BillStatus::Refused),
            fixture_bill("test3", "2003-03-03", BillStatus::Accepted),
            fixture_bill("test2", "2002-02-02", BillStatus::Refused),
        ]))
    }

    fn container(store: Option<Arc<dyn RemoteStore>>) -> BillsContainer {
        let view = ViewHandle::new();
        let session = Session::employee("a@a");
        let dispatcher = Dispatcher::new(view.clone(), store.clone(), session.clone());
        BillsContainer::new(view, dispatcher.navigator(), store, session)
    }

    #[tokio::test]
    async fn no_store_resolves_to_an_empty_sequence() {
        let rows = container(None).get_bills().await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn bills_are_ordered_from_latest_to_earliest() {
        let rows = container(Some(fixture_store())).get_bills().await.unwrap();
        let dates: Vec<&str> = rows.iter().map(|r| r.bill.date.as_str()).collect();
        assert_eq!(dates, ["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);

        for pair in rows.windows(2) {
            assert!(pair[0].bill.parsed_date() >= pair[1].bill.parsed_date());
        }
    }

    #[tokio::test]
    async fn malformed_date_is_kept_with_its_raw_string() {
        let store = Arc::new(MemoryStore::with_bills(vec![
            fixture_bill("ok", "2002-02-02", BillStatus::Pending),
            fixture_bill("broken", "not-a-date", BillStatus::Pending),
            fixture_bill("recent", "2004-04-04", BillStatus::Pending),
        ]));

        let rows = container(Some(store)).get_bills().await.unwrap();
        assert_eq!(rows.len(), 3, "a malformed date must not hide a bill");
        assert_eq!(rows[2].bill.name, "broken");
        assert_eq!(rows[2].date_display, "not-a-date");
        assert_eq!(rows[0].date_display, "4 Avr. 04");
    }

    #[tokio::test]
    async fn statuses_are_formatted_for_display() {
        let rows = container(Some(fixture_store())).get_bills().await.unwrap();
        assert_eq!(rows[0].status_display, "En attente");
        assert_eq!(rows[1].status_display, "Accepté");
        assert_eq!(rows[2].status_display, "Refusé");
    }

    #[tokio::test]
    async fn store_rejection_propagates_verbatim() {
        let store: Arc<dyn RemoteStore> = Arc::new(FailingStore::new("Erreur 500"));
        let err = container(Some(store)).get_bills().await.unwrap_err();
        assert_eq!(err.to_string(), "Erreur 500");
    }

    #[tokio::test]
    async fn eye_click_opens_the_preview_with_the_row_url() {
        let view = ViewHandle::new();
        let session = Session::employee("a@a");
        let store = Some(fixture_store());
        let dispatcher = Dispatcher::new(view.clone(), store.clone(), session.clone());
        let container = BillsContainer::new(view.clone(), dispatcher.navigator(), store, session);

        let rows = container.get_bills().await.unwrap();
        container.handle_click_icon_eye(&rows[0]);

        let modal = view.modal().expect("preview should be open");
        assert!(modal.open);
        assert_eq!(modal.width_pct, 50);
        assert_eq!(
            modal.file_url.as_deref(),
            Some("https://test.storage.tld/encore.jpg")
        );
    }

    #[tokio::test]
    async fn new_bill_click_navigates_to_the_creation_view() {
        let view = ViewHandle::new();
        let session = Session::employee("a@a");
        let dispatcher = Dispatcher::new(view.clone(), None, session.clone());
        let container = BillsContainer::new(view.clone(), dispatcher.navigator(), None, session);

        container.handle_click_new_bill().await.unwrap();
        assert_eq!(view.active_icon(), Some(crate::view_root::NavIcon::Mail));
        assert!(view.content().contains("Envoyer une note de frais"));
    }
}
