use crate::error::{Error, Result};
use billed_store::SessionStore;
use billed_types::Session;

/// Read and decode the logged-in session from the persisted store.
///
/// This is the one fallible parse of the stored `"user"` JSON; everything
/// downstream receives an already-typed `Session` by value instead of
/// re-reading the store.
pub fn load_session(store: &dyn SessionStore) -> Result<Session> {
    let raw = store.get("user").ok_or(Error::NotLoggedIn)?;
    let session: Session =
        serde_json::from_str(&raw).map_err(billed_types::Error::MalformedSession)?;
    Ok(session)
}
