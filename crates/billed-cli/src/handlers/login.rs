use crate::context::ExecutionContext;
use anyhow::Result;
use billed_store::SessionStore;
use billed_types::{Session, UserType};
use owo_colors::OwoColorize;

/// Seed the persisted session store with the `"user"` payload the app
/// reads on every navigation. The login flow itself (credentials) lives
/// with the backend, not here.
pub fn handle(ctx: &ExecutionContext, email: &str, user_type: UserType) -> Result<()> {
    let session = Session {
        user_type,
        email: email.to_string(),
    };

    let store = ctx.session_store()?;
    store.set("user", &serde_json::to_string(&session)?)?;

    println!(
        "{} logged in as {} ({})",
        "✓".green(),
        email,
        user_type.as_str()
    );
    Ok(())
}
