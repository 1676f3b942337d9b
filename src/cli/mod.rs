use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod export;
mod info;
mod plot;

/// vamas - VAMAS (ISO 14976) surface analysis data toolkit
#[derive(Parser)]
#[command(name = "vamas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the metadata of a VAMAS file
    Info {
        /// Input VAMAS file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Export a decoded experiment (or one block) as JSON
    Export {
        /// Input VAMAS file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Export only the block with this index
        #[arg(short, long)]
        block: Option<usize>,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render spectrum overlays described by a JSON run configuration
    Plot {
        /// Run configuration file
        #[arg(long, value_name = "FILE")]
        config: PathBuf,

        /// Output SVG path (plot-type dependent default when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Mark peaks above this prominence
        #[arg(long, value_name = "COUNTS")]
        prominence: Option<f64>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { file } => info::run(file),
        Commands::Export { file, block, output } => export::run(file, block, output),
        Commands::Plot {
            config,
            output,
            prominence,
        } => plot::run(config, output, prominence),
    }
}
