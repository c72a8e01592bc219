use crate::context::ExecutionContext;
use anyhow::Result;
use owo_colors::OwoColorize;

/// Create the data directory, default config and bill database.
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    std::fs::create_dir_all(ctx.data_dir())?;

    let config = ctx.config()?.clone();
    if !ctx.config_path().exists() {
        config.save_to(&ctx.config_path())?;
    }

    // Opening the store initializes the schema and the uploads dir.
    let backend = config.store.backend;
    ctx.remote_store()?;

    println!("{} billed initialized", "✓".green());
    println!("  data dir : {}", ctx.data_dir().display());
    println!("  config   : {}", ctx.config_path().display());
    match backend {
        crate::config::StoreBackend::Sqlite => {
            println!("  store    : {}", ctx.db_path().display())
        }
        crate::config::StoreBackend::Memory => println!("  store    : memory (volatile)"),
        crate::config::StoreBackend::None => println!("  store    : none (list resolves empty)"),
    }
    println!("\nNext: billed login --email you@company.tld");
    Ok(())
}
