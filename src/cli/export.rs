use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use vamas::parser::VamasParser;

/// Export a decoded experiment (or one block) as JSON
pub fn run(file: PathBuf, block: Option<usize>, output: Option<PathBuf>) -> Result<()> {
    let parser = VamasParser::from_path(&file)
        .with_context(|| format!("Failed to decode {}", file.display()))?;
    let experiment = parser.experiment();

    let json = match block {
        Some(index) => {
            let block = experiment
                .block(index)
                .with_context(|| format!("No block {index} in {}", file.display()))?;
            serde_json::to_string_pretty(block)?
        }
        None => serde_json::to_string_pretty(experiment)?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
