pub mod bill;
pub mod error;
pub mod session;
pub mod upload;

pub use bill::*;
pub use error::{Error, Result};
pub use session::*;
pub use upload::*;
