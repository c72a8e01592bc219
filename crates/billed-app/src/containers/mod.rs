pub mod bills;
pub mod new_bill;

pub use bills::{BillsContainer, DisplayBill};
pub use new_bill::{NewBillContainer, NewBillForm};
