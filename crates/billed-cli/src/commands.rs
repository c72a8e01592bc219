use crate::args::{Cli, Commands};
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir);
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Init => handlers::init::handle(&ctx),

        Commands::Login { email, user_type } => {
            handlers::login::handle(&ctx, &email, user_type.into())
        }

        Commands::Bills { format } => runtime.block_on(handlers::bills::handle(&ctx, format)),

        Commands::Preview { bill_id } => {
            runtime.block_on(handlers::preview::handle(&ctx, &bill_id))
        }

        Commands::New(args) => runtime.block_on(handlers::new_bill::handle(&ctx, args)),
    }
}
