//! CLI definition using clap

use avtopark_types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "avtopark")]
#[command(author = "dubinin")]
#[command(version)]
#[command(about = "Vehicle type registry - creates vehicles by their type name")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a vehicle by its type name
    Create {
        /// Vehicle type name (e.g., "грузовой автомобиль"). Uses config value if not specified.
        vehicle_type: Option<String>,

        /// Prompt for a keypress before exiting (overrides config)
        #[arg(long)]
        wait: bool,
    },

    /// List type names wired into the registry
    List,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default vehicle type
        #[arg(long)]
        set_default_type: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable keypress prompt on exit
        #[arg(long)]
        set_wait: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
