use crate::export::ExportFormat;
use crate::models::filter::SortField;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rPonto
/// CLI application to reconcile attendance reports (espelhos de ponto)
#[derive(Parser)]
#[command(
    name = "rponto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile attendance reports: expected vs worked hours, signature check and time balance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Reconcile one or more attendance reports
    Process {
        /// Documents to process (.txt text dumps, or anything the configured extract_command reads)
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        #[arg(long = "save", help = "Save results to the database")]
        save: bool,

        #[arg(long = "details", help = "Show the per-day breakdown")]
        details: bool,

        #[arg(long = "json", help = "Print results as JSON")]
        json: bool,
    },

    /// List saved results
    List {
        #[arg(long, short, help = "Filter by period: MM, YYYY or MM/YYYY")]
        period: Option<String>,

        #[arg(long, short, help = "Search employee name or period text")]
        search: Option<String>,

        #[arg(long, value_enum, default_value = "name")]
        sort: SortField,

        #[arg(long, help = "Sort in descending order")]
        desc: bool,
    },

    /// Summary statistics over saved results
    Stats {
        #[arg(long, short, help = "Filter by period: MM, YYYY or MM/YYYY")]
        period: Option<String>,
    },

    /// Export saved results
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Filter by period: MM, YYYY or MM/YYYY")]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
