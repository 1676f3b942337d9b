//! # vamas command-line tool
//!
//! Decode, inspect, export and plot VAMAS (ISO 14976) surface analysis data.
//!
//! ## Usage
//!
//! ```bash
//! # Summarize a file's experiment and block metadata
//! vamas info spectrum.vms
//!
//! # Dump a decoded block as JSON
//! vamas export spectrum.vms --block 0
//!
//! # Render the overlays described by a run configuration
//! vamas plot --config runs/ito_depth.json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    cli::init_logging(args.verbosity());
    cli::dispatch(args)
}
