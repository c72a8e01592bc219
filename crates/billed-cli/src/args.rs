use billed_types::UserType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered view, as the app displays it
    Plain,
    /// Raw records for pipes/scripts
    Json,
}

#[derive(Parser)]
#[command(name = "billed")]
#[command(about = "Submit expense bills and review their status", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to BILLED_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory, config and bill database
    Init,

    /// Store the logged-in session used by every other command
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, value_enum, default_value_t = UserTypeArg::Employee)]
        user_type: UserTypeArg,
    },

    /// Open the app on its landing view for the session role
    Bills {
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },

    /// Open the attachment preview for one bill of the list
    Preview {
        /// Bill id as shown by `bills --format json`
        bill_id: String,
    },

    /// Fill and submit the creation form
    New(NewBillArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UserTypeArg {
    Employee,
    Admin,
}

impl From<UserTypeArg> for UserType {
    fn from(arg: UserTypeArg) -> Self {
        match arg {
            UserTypeArg::Employee => UserType::Employee,
            UserTypeArg::Admin => UserType::Admin,
        }
    }
}

/// The creation form fields. Required ones mirror the form's native
/// constraints; the file-type rule stays with the container.
#[derive(Args)]
pub struct NewBillArgs {
    #[arg(long)]
    pub name: String,

    /// ISO-8601 date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Amount in whole currency units
    #[arg(long)]
    pub amount: String,

    #[arg(long, default_value = "Transports")]
    pub expense_type: String,

    /// VAT amount
    #[arg(long, default_value = "")]
    pub vat: String,

    /// VAT percentage
    #[arg(long, default_value = "20")]
    pub pct: String,

    #[arg(long, default_value = "")]
    pub commentary: String,

    /// Justificatif to attach (jpg, jpeg or png)
    #[arg(long)]
    pub file: Option<PathBuf>,
}
