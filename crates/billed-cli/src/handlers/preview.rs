use crate::context::ExecutionContext;
use crate::handlers::app_shell;
use anyhow::{anyhow, Result};
use billed_app::{BillsContainer, RoutePath};

/// Render the bill list, then run the eye-icon handler for the requested
/// row and print the view with the preview open.
pub async fn handle(ctx: &ExecutionContext, bill_id: &str) -> Result<()> {
    let (session, view, dispatcher) = app_shell(ctx)?;

    dispatcher.navigate(RoutePath::Bills.token()).await?;

    let container = BillsContainer::new(
        view.clone(),
        dispatcher.navigator(),
        ctx.remote_store()?,
        session,
    );
    let rows = container.get_bills().await?;
    let row = rows
        .iter()
        .find(|r| r.bill.id == bill_id)
        .ok_or_else(|| anyhow!("No bill with id '{}'. See 'billed bills --format json'", bill_id))?;

    container.handle_click_icon_eye(row);
    print!("{}", view.rendered());
    Ok(())
}
