//! CLI definition using clap

use clap::{Parser, Subcommand};
use ensayo_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ensayo-lab")]
#[command(version)]
#[command(about = "Soil laboratory data entry - moisture content and CBR forms")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a moisture content record (normalize, derive, report)
    Humedad {
        /// Path to a JSON record file
        input: PathBuf,

        /// Save the finalized record to the store
        #[arg(long)]
        save: bool,

        /// Also export the record to an Excel file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Process a CBR record (normalize, humidity compliance, report)
    Cbr {
        /// Path to a JSON record file
        input: PathBuf,

        /// Save the finalized record to the store
        #[arg(long)]
        save: bool,

        /// Also export the record to an Excel file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Look up the minimum test mass for a particle size
    Tm {
        /// Particle size as printed in the table (e.g. "3/4", "N°4")
        tamano: String,

        /// Sample mass in grams, to check against the minimum
        #[arg(long, short = 'm')]
        masa: Option<f64>,
    },

    /// List saved records
    List,

    /// Show one saved record
    Show {
        /// Record id
        id: u64,
    },

    /// Export a saved record to Excel
    Export {
        /// Record id
        id: u64,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Delete a saved record
    Delete {
        /// Record id
        id: u64,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default reviewer name
        #[arg(long)]
        set_revisado_por: Option<String>,

        /// Set default approver name
        #[arg(long)]
        set_aprobado_por: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
