pub mod bills;
pub mod init;
pub mod login;
pub mod new_bill;
pub mod preview;

use anyhow::Result;
use billed_app::{load_session, Dispatcher, ViewHandle};
use billed_types::Session;

use crate::context::ExecutionContext;

/// Session + dispatcher wired from the context, shared by the view-driving
/// handlers.
pub(crate) fn app_shell(ctx: &ExecutionContext) -> Result<(Session, ViewHandle, Dispatcher)> {
    let session_store = ctx.session_store()?;
    let session = load_session(&session_store)?;
    let store = ctx.remote_store()?;

    let view = ViewHandle::new();
    let dispatcher = Dispatcher::new(view.clone(), store, session.clone());
    Ok((session, view, dispatcher))
}
