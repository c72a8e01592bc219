use crate::args::NewBillArgs;
use crate::context::ExecutionContext;
use crate::handlers::app_shell;
use anyhow::{Context, Result};
use billed_app::{NewBillContainer, RoutePath};
use billed_types::FileSelection;
use owo_colors::OwoColorize;
use std::path::Path;

/// Fill the creation form from the arguments and submit it, landing on
/// the refreshed bill list.
pub async fn handle(ctx: &ExecutionContext, args: NewBillArgs) -> Result<()> {
    let (session, view, dispatcher) = app_shell(ctx)?;

    dispatcher.navigate(RoutePath::NewBill.token()).await?;

    let mut container = NewBillContainer::new(
        view.clone(),
        dispatcher.navigator(),
        ctx.remote_store()?,
        session,
    );

    container.form.expense_type = args.expense_type;
    container.form.name = args.name;
    container.form.date = args.date;
    container.form.amount = args.amount;
    container.form.vat = args.vat;
    container.form.pct = args.pct;
    container.form.commentary = args.commentary;

    if let Some(path) = args.file.as_deref() {
        let selection = read_selection(path)?;
        container.handle_change_file(selection).await;

        // The blocking warning of the form: surface it and stop, like the
        // alert would before the user can go on.
        if let Some(alert) = view.take_alert() {
            anyhow::bail!("{}", alert);
        }
    }

    container.handle_submit().await?;

    println!("{} note de frais envoyée", "✓".green());
    println!();
    print!("{}", view.rendered());
    Ok(())
}

fn read_selection(path: &Path) -> Result<FileSelection> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read attachment: {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = match path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    };

    Ok(FileSelection::new(file_name, content_type, bytes))
}
