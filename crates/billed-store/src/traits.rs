use crate::error::Result;
use async_trait::async_trait;
use billed_types::{Bill, DraftBill, FileUpload, UploadReceipt};

/// Collection-style access to the bills resource.
///
/// Responsibilities:
/// - Retrieve every stored bill (no server-side filtering or paging)
/// - Assign an id to a draft on creation
/// - Replace a stored bill wholesale on update
#[async_trait]
pub trait BillsResource: Send + Sync {
    /// Fetch all stored bills, in backend order.
    async fn list(&self) -> Result<Vec<Bill>>;

    /// Persist a draft. The backend assigns the id.
    async fn create(&self, draft: DraftBill) -> Result<Bill>;

    /// Replace the bill stored under `id`.
    async fn update(&self, id: &str, bill: Bill) -> Result<Bill>;
}

/// The remote persistence API, treated as opaque by the containers.
///
/// Presence is always an explicit `Option<Arc<dyn RemoteStore>>` at the
/// call sites: the absent case is a first-class test mode, not a falsy
/// check.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Accessor for the bills collection.
    fn bills(&self) -> &dyn BillsResource;

    /// File-upload entry point. Receives the selection together with the
    /// owner email, multipart-style, and returns where the attachment
    /// ended up.
    async fn upload(&self, upload: FileUpload) -> Result<UploadReceipt>;
}

/// The persisted key-value store holding the logged-in session.
///
/// The core only ever reads the `"user"` key; `set` exists for the login
/// flow that seeds it.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
