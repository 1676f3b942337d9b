use anyhow::{Context, Result};
use std::path::PathBuf;

use vamas::parser::VamasParser;
use vamas::record::BlockRecord;

fn heading(text: &str) -> String {
    #[cfg(feature = "colorized_output")]
    {
        console::style(text).bold().cyan().to_string()
    }
    #[cfg(not(feature = "colorized_output"))]
    {
        text.to_string()
    }
}

/// Display the metadata of a VAMAS file
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let parser = VamasParser::from_path(&file)
        .with_context(|| format!("Failed to decode {}", file.display()))?;
    let experiment = parser.experiment();

    println!("{}", heading("VAMAS Experiment"));
    println!("================");
    println!("File:        {}", file.display());
    println!("Format:      {}", experiment.format_identifier);
    println!("Institution: {}", experiment.institution_identifier);
    println!("Instrument:  {}", experiment.instrument_model_identifier);
    println!("Operator:    {}", experiment.operator_identifier);
    println!("Experiment:  {}", experiment.experiment_identifier);
    println!("Mode:        {} / {}", experiment.experiment_mode, experiment.scan_mode);
    if !experiment.comment.is_empty() {
        println!("Comment:");
        for line in &experiment.comment {
            println!("  {line}");
        }
    }
    if !experiment.experimental_variable_labels.is_empty() {
        println!("Experimental variables:");
        for (label, unit) in experiment
            .experimental_variable_labels
            .iter()
            .zip(&experiment.experimental_variable_units)
        {
            println!("  {label} [{unit}]");
        }
    }
    println!();

    println!("{} ({})", heading("Blocks"), experiment.blocks.len());
    for (i, block) in experiment.blocks.iter().enumerate() {
        print_block(i, block);
    }

    Ok(())
}

fn print_block(index: usize, block: &BlockRecord) {
    println!(
        "  {:3}. {} / {}",
        index,
        block.block_identifier.trim(),
        block.sample_identifier.trim()
    );
    println!("       technique: {}", block.technique);
    if let Some(stamp) = block.datetime() {
        println!("       acquired:  {}", stamp.to_rfc3339());
    }
    let species = block.species_label.trim();
    if !species.is_empty() {
        println!(
            "       species:   {} {}",
            species,
            block.transition_label.trim()
        );
    }
    let variables = block.ordinate.variables();
    println!(
        "       data:      {} variables x {} points",
        variables,
        block.ordinate.samples_per_variable()
    );
    for v in 0..variables {
        let label = block.variable_label(v).unwrap_or("?");
        let units = block.variable_units(v).unwrap_or("?");
        match block.ordinate_limits(v) {
            Ok((min, max)) => {
                println!("         [{v}] {label} [{units}]  {min} .. {max}")
            }
            Err(_) => println!("         [{v}] {label} [{units}]"),
        }
    }
    if let Ok(axis) = block.abscissa_axis() {
        if let (Some(first), Some(last)) = (axis.first(), axis.last()) {
            let label = block.abscissa_label.as_deref().unwrap_or("abscissa");
            let units = block.abscissa_units.as_deref().unwrap_or("?");
            println!("       axis:      {label} [{units}]  {first} .. {last}");
        }
    }
}
