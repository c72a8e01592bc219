use crate::error::{Error, Result};
use crate::traits::{BillsResource, RemoteStore};
use async_trait::async_trait;
use billed_types::{Bill, DraftBill, FileUpload, UploadReceipt};
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory bill store.
///
/// The documented "no backing store" variant: isolated container tests and
/// `--store memory` runs use it instead of a database. Uploads are not
/// written anywhere; the receipt points at a `memory://` URL.
#[derive(Default)]
pub struct MemoryStore {
    bills: Mutex<Vec<Bill>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with fixture bills.
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        MemoryStore {
            bills: Mutex::new(bills),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Bill>> {
        // A poisoned lock means a panicking test thread; propagating the
        // data is still sound for a Vec of plain records.
        self.bills.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl BillsResource for MemoryStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        Ok(self.lock().clone())
    }

    async fn create(&self, draft: DraftBill) -> Result<Bill> {
        let bill = draft.into_bill(Uuid::new_v4().to_string());
        self.lock().push(bill.clone());
        Ok(bill)
    }

    async fn update(&self, id: &str, bill: Bill) -> Result<Bill> {
        let mut bills = self.lock();
        let slot = bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        *slot = Bill {
            id: id.to_string(),
            ..bill
        };
        Ok(slot.clone())
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    fn bills(&self) -> &dyn BillsResource {
        self
    }

    async fn upload(&self, upload: FileUpload) -> Result<UploadReceipt> {
        let key = Uuid::new_v4().to_string();
        Ok(UploadReceipt {
            file_url: format!("memory://uploads/{}/{}", key, upload.selection.file_name),
            key,
        })
    }
}

/// Store whose every operation rejects with a fixed message.
///
/// Exercises the error states of the views ("Erreur 404", "Erreur 500")
/// without a real backend.
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        FailingStore {
            message: message.into(),
        }
    }

    fn reject<T>(&self) -> Result<T> {
        Err(Error::Backend(self.message.clone()))
    }
}

#[async_trait]
impl BillsResource for FailingStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        self.reject()
    }

    async fn create(&self, _draft: DraftBill) -> Result<Bill> {
        self.reject()
    }

    async fn update(&self, _id: &str, _bill: Bill) -> Result<Bill> {
        self.reject()
    }
}

#[async_trait]
impl RemoteStore for FailingStore {
    fn bills(&self) -> &dyn BillsResource {
        self
    }

    async fn upload(&self, _upload: FileUpload) -> Result<UploadReceipt> {
        self.reject()
    }
}
