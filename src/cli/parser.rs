use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tablepos
#[derive(Parser)]
#[command(
    name = "tablepos",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small restaurant point-of-sale: tables, orders, kitchen queue and PDF receipts on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the receipts directory
    #[arg(global = true, long = "receipts")]
    pub receipts: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, database and receipts directory
    Init,

    /// Show every table with its status
    Tables,

    /// Show the menu
    Menu {
        #[arg(long, help = "Only items of this category (e.g. Pizza)")]
        category: Option<String>,
    },

    /// Order entry for a table
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Kitchen screen: pending items across all tables
    Kitchen {
        #[command(subcommand)]
        action: KitchenAction,
    },

    /// Print the bill of a table: writes the receipt, records the sale and frees the table
    Bill {
        #[arg(long, help = "Table number")]
        table: Option<i64>,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Tax percent (default from configuration)"
        )]
        tax: Option<f64>,
    },

    /// Free a table, discarding its unbilled items
    Free {
        #[arg(long, help = "Table number")]
        table: Option<i64>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Sales report
    Sales {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (e.g. 2025-03 or 2025-03-01:2025-03-15)"
        )]
        range: Option<String>,
    },

    /// Export archived sales
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(long, value_name = "RANGE", help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal audit log
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// Show the open tab of a table with its totals
    Show {
        #[arg(long, help = "Table number")]
        table: Option<i64>,

        #[arg(long, allow_negative_numbers = true, help = "Tax percent for the totals")]
        tax: Option<f64>,
    },

    /// Add a menu item to a table
    Add {
        #[arg(long, help = "Table number")]
        table: Option<i64>,

        #[arg(long, help = "Menu item id (see `tablepos menu`)")]
        item: Option<i64>,

        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        qty: i64,
    },

    /// Remove an order line by id
    Remove {
        #[arg(long, help = "Order line id")]
        line: Option<i64>,
    },

    /// Send a table's pending items to the kitchen
    Send {
        #[arg(long, help = "Table number")]
        table: Option<i64>,
    },
}

#[derive(Subcommand)]
pub enum KitchenAction {
    /// List pending items, oldest first
    List,

    /// Mark an order line as prepared
    Done {
        #[arg(long, help = "Order line id")]
        line: Option<i64>,
    },
}
