use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::app_shell;
use anyhow::Result;
use billed_app::{default_route, BillsContainer};
use owo_colors::OwoColorize;

/// Open the app on the landing view for the session role and print it.
pub async fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let (session, view, dispatcher) = app_shell(ctx)?;
    let target = default_route("", session.user_type);

    if format == OutputFormat::Json {
        // Raw records for pipes: fetch through the container, skip the
        // rendered view.
        let container = BillsContainer::new(
            view.clone(),
            dispatcher.navigator(),
            ctx.remote_store()?,
            session,
        );
        let rows = container.get_bills().await?;
        let bills: Vec<_> = rows.iter().map(|r| &r.bill).collect();
        println!("{}", serde_json::to_string_pretty(&bills)?);
        return Ok(());
    }

    if let Err(err) = dispatcher.navigate(target).await {
        // Unknown routes are recoverable: warn, keep whatever is mounted.
        eprintln!("{} {}", "Warning:".yellow(), err);
    }

    println!("Connecté : {}", session.email);
    println!();
    print!("{}", view.rendered());
    Ok(())
}
