mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;

pub use args::{Cli, Commands, NewBillArgs, OutputFormat};
pub use commands::run;
