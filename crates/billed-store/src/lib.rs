pub mod db;
pub mod error;
pub mod memory;
pub mod session;
pub mod traits;

pub use db::Database;
pub use error::{Error, Result};
pub use memory::{FailingStore, MemoryStore};
pub use session::{FileSessionStore, MemorySessionStore};
pub use traits::{BillsResource, RemoteStore, SessionStore};
