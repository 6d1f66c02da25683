use crate::manifest::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for camplog
/// CLI application to track camp departures and returns with SQLite
#[derive(Parser)]
#[command(
    name = "camplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple camp check-in/check-out CLI: track departures, returns, and a personnel manifest using SQLite",
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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Check a person out of camp
    Out {
        /// Person name (added to the manifest when unknown)
        name: String,

        /// Where they are going
        destination: String,

        /// Expected duration in hours (default from config: 3)
        #[arg(long = "hours", help = "Expected trip duration in hours")]
        hours: Option<i64>,

        /// Explicit expected return ("YYYY-MM-DD HH:MM"); alternative to --hours
        #[arg(long = "until", help = "Expected return time (YYYY-MM-DD HH:MM)")]
        until: Option<String>,

        #[arg(long = "phone", help = "Contact phone (overrides the manifest)")]
        phone: Option<String>,

        #[arg(long = "supervisor", help = "Supervisor name (overrides the manifest)")]
        supervisor: Option<String>,

        #[arg(long = "supervisor-phone", help = "Supervisor phone")]
        supervisor_phone: Option<String>,

        #[arg(long = "company", help = "Company (overrides the manifest)")]
        company: Option<String>,
    },

    /// Mark a departure as returned (idempotent)
    Back {
        /// Departure id as shown by `board`
        id: i64,
    },

    /// Push back a departure's expected return
    Extend {
        /// Departure id as shown by `board`
        id: i64,

        #[arg(long = "hours", help = "Hours to add to the expected return")]
        hours: i64,
    },

    /// Show everyone currently out of camp, soonest return first
    Board {
        #[arg(long = "details", help = "Show the extension history for each row")]
        details: bool,
    },

    /// List the personnel manifest, or add/update one record
    Personnel {
        /// Add or update a single manifest record (last write wins)
        #[arg(long = "add", value_name = "NAME", help = "Add or update one record")]
        add: Option<String>,

        #[arg(long = "phone", requires = "add")]
        phone: Option<String>,

        #[arg(long = "supervisor", requires = "add")]
        supervisor: Option<String>,

        #[arg(long = "supervisor-phone", requires = "add")]
        supervisor_phone: Option<String>,

        #[arg(long = "company", requires = "add")]
        company: Option<String>,
    },

    /// Import the personnel manifest from a CSV file
    Import {
        /// CSV file with a header row; common header aliases are recognized
        /// (Mobile/Cell → phone, Manager → supervisor, Employer → company, ...)
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the personnel manifest
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: personnel_manifest_YYYYMMDD.<ext>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show camp statistics (counts, average trip duration, top destinations)
    Stats,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        /// Overwrite the destination file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
