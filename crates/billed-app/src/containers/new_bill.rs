use crate::error::Result;
use crate::router::{Navigator, RoutePath};
use crate::view_root::ViewHandle;
use billed_store::RemoteStore;
use billed_types::{
    BillStatus, DraftBill, ExpenseType, FileSelection, FileUpload, Session,
};
use std::sync::Arc;

/// Extensions the creation form accepts for a justificatif.
///
/// gif is excluded on purpose even though it is an image format; the
/// backend review tooling only handles these three.
const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

const INVALID_FILE_ALERT: &str =
    "Seuls les justificatifs au format jpg, jpeg ou png sont acceptés.";

/// Snapshot of the form's current field values.
///
/// The form state is the source of truth between renders; submission reads
/// it into a typed draft instead of keeping a parallel shadow copy.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
    /// Filename shown next to the file input. Keeps showing a rejected
    /// selection (a file input cannot be reverted); the accepted
    /// attachment is tracked separately.
    pub file_display: String,
}

impl Default for NewBillForm {
    fn default() -> Self {
        NewBillForm {
            expense_type: ExpenseType::default().as_str().to_string(),
            name: String::new(),
            date: String::new(),
            amount: String::new(),
            vat: String::new(),
            pct: String::new(),
            commentary: String::new(),
            file_display: String::new(),
        }
    }
}

/// The attachment accepted for this submission attempt. A new valid
/// selection replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
struct Attachment {
    file_name: String,
    /// Set only when the upload succeeded.
    file_url: Option<String>,
    key: Option<String>,
}

/// Container for the creation form: owns the field state, enforces the
/// file-type rule and turns a submission into a persisted bill.
pub struct NewBillContainer {
    view: ViewHandle,
    navigator: Navigator,
    store: Option<Arc<dyn RemoteStore>>,
    session: Session,
    pub form: NewBillForm,
    attachment: Option<Attachment>,
}

impl NewBillContainer {
    pub fn new(
        view: ViewHandle,
        navigator: Navigator,
        store: Option<Arc<dyn RemoteStore>>,
        session: Session,
    ) -> Self {
        NewBillContainer {
            view,
            navigator,
            store,
            session,
            form: NewBillForm::default(),
            attachment: None,
        }
    }

    /// Filename of the currently accepted attachment, if any.
    pub fn attachment_file_name(&self) -> Option<&str> {
        self.attachment.as_ref().map(|a| a.file_name.as_str())
    }

    /// Stored URL of the currently accepted attachment. `None` until an
    /// upload succeeded.
    pub fn attachment_url(&self) -> Option<&str> {
        self.attachment.as_ref()?.file_url.as_deref()
    }

    /// React to a file selection.
    ///
    /// The input display always shows the selected name. A wrong extension
    /// raises the blocking warning and leaves the previously accepted
    /// attachment in place. A valid selection is uploaded right away when
    /// a store is configured; an upload failure is logged and swallowed,
    /// the form flow continues with the attachment effectively missing.
    pub async fn handle_change_file(&mut self, selection: FileSelection) {
        self.form.file_display = selection.file_name.clone();

        if !ACCEPTED_EXTENSIONS.contains(&selection.extension().as_str()) {
            self.view.raise_alert(INVALID_FILE_ALERT);
            return;
        }

        let file_name = selection.file_name.clone();
        let Some(store) = &self.store else {
            self.attachment = Some(Attachment {
                file_name,
                file_url: None,
                key: None,
            });
            return;
        };

        let upload = FileUpload {
            email: self.session.email.clone(),
            selection,
        };
        self.attachment = match store.upload(upload).await {
            Ok(receipt) => Some(Attachment {
                file_name,
                file_url: Some(receipt.file_url),
                key: Some(receipt.key),
            }),
            Err(err) => {
                eprintln!("Warning: justificatif upload failed: {}", err);
                Some(Attachment {
                    file_name,
                    file_url: None,
                    key: None,
                })
            }
        };
    }

    /// Submit the form: snapshot the fields into a draft, persist it and
    /// go back to the list.
    ///
    /// Numeric fields are coerced totally: a non-numeric or empty amount
    /// becomes 0, a non-numeric pct becomes 20 (the form's default VAT
    /// percentage). A create rejection is logged, not rethrown; the
    /// navigation back happens once the call has been issued either way.
    pub async fn handle_submit(&mut self) -> Result<()> {
        let draft = self.snapshot_draft();

        if let Some(store) = &self.store {
            if let Err(err) = store.bills().create(draft).await {
                eprintln!("Warning: could not persist the bill: {}", err);
            }
        }

        self.navigator.navigate(RoutePath::Bills.token()).await
    }

    fn snapshot_draft(&self) -> DraftBill {
        let attachment = self.attachment.as_ref();
        DraftBill {
            email: self.session.email.clone(),
            expense_type: ExpenseType::parse_or_default(&self.form.expense_type),
            name: self.form.name.clone(),
            amount: self.form.amount.trim().parse().unwrap_or(0),
            date: self.form.date.clone(),
            vat: self.form.vat.clone(),
            pct: self.form.pct.trim().parse().unwrap_or(20),
            commentary: self.form.commentary.clone(),
            file_url: attachment.and_then(|a| a.file_url.clone()),
            file_name: attachment.map(|a| a.file_name.clone()),
            status: BillStatus::Pending,
        }
    }
}
