pub mod containers;
pub mod error;
pub mod format;
pub mod router;
pub mod session;
pub mod view_root;
pub mod views;

pub use containers::{BillsContainer, DisplayBill, NewBillContainer, NewBillForm};
pub use error::{Error, Result};
pub use router::{default_route, Dispatcher, Navigator, RoutePath};
pub use session::load_session;
pub use view_root::{ModalState, NavIcon, ViewHandle};
