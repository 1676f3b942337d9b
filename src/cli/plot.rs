use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use vamas::config::{PlotType, RunConfig};
use vamas::energy::kinetic_to_binding;
use vamas::parser::VamasParser;
use vamas::plot::{self, OverlayOptions, SpectrumSeries};
use vamas::record::{BlockRecord, ExperimentRecord};

/// Render spectrum overlays described by a JSON run configuration
pub fn run(config_path: PathBuf, output: Option<PathBuf>, prominence: Option<f64>) -> Result<()> {
    let config = RunConfig::from_path(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    if config.filenames.is_empty() {
        anyhow::bail!("Run configuration names no input files");
    }

    let mut experiments: Vec<ExperimentRecord> = Vec::with_capacity(config.filenames.len());
    for index in 0..config.filenames.len() {
        let path = config.file_path(index);
        let experiment = VamasParser::from_path(&path)
            .map(VamasParser::into_experiment)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        experiments.push(experiment);
    }

    match config.plot_type {
        PlotType::Spectra => plot_spectra(&config, &experiments, output, prominence),
        PlotType::HighRes => plot_high_res(&config, &experiments, output),
        PlotType::Depth => plot_depth(&config, &experiments, output),
    }
}

/// Build one binding-energy series from a block, styled for file `index`.
fn binding_series(
    config: &RunConfig,
    index: usize,
    block: &BlockRecord,
) -> Result<SpectrumSeries> {
    let axis = block.abscissa_axis()?;
    let x: Vec<f64> = axis
        .iter()
        .map(|&kinetic| kinetic_to_binding(config.photon_energy_ev, kinetic))
        .collect();
    let y = block.ordinate_series(0)?.to_vec();
    Ok(SpectrumSeries {
        label: config.labels[index].clone(),
        color: plot::parse_hex(&config.colors[index])?,
        x,
        y,
    })
}

fn y_axis_label(block: &BlockRecord) -> String {
    match block.variable_label(0) {
        Ok(label) => format!("{} [a.u.]", label.trim()),
        Err(_) => "intensity [a.u.]".to_string(),
    }
}

/// One overlay of every file's first block, vertically offset.
fn plot_spectra(
    config: &RunConfig,
    experiments: &[ExperimentRecord],
    output: Option<PathBuf>,
    prominence: Option<f64>,
) -> Result<()> {
    let mut series = Vec::new();
    for (index, experiment) in experiments.iter().enumerate() {
        let block = experiment.block(0)?;
        series.push(binding_series(config, index, block)?);
    }

    let first_block = experiments[0].block(0)?;
    let options = OverlayOptions {
        x_label: "Binding Energy [eV]".to_string(),
        y_label: y_axis_label(first_block),
        offset: config.offset,
        peak_prominence: prominence,
        ..Default::default()
    };

    let path = output.unwrap_or_else(|| PathBuf::from("spectra.svg"));
    plot::render_overlay(&path, &series, &options)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// One overlay per block index across all files.
fn plot_high_res(
    config: &RunConfig,
    experiments: &[ExperimentRecord],
    output: Option<PathBuf>,
) -> Result<()> {
    let out_dir = output.unwrap_or_else(|| PathBuf::from("."));
    let block_count = experiments[0].blocks.len();

    for block_index in 0..block_count {
        let mut series = Vec::new();
        for (index, experiment) in experiments.iter().enumerate() {
            // Files may carry fewer blocks than the first one; skip those.
            if let Ok(block) = experiment.block(block_index) {
                series.push(binding_series(config, index, block)?);
            }
        }
        if series.is_empty() {
            continue;
        }

        let block = experiments[0].block(block_index)?;
        let identifier = block.block_identifier.trim().to_string();
        let options = OverlayOptions {
            title: identifier.clone(),
            x_label: "Binding Energy [eV]".to_string(),
            y_label: y_axis_label(block),
            ..Default::default()
        };

        let path = out_dir.join(format!("{}.svg", sanitize(&identifier)));
        plot::render_overlay(&path, &series, &options)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

/// Colour-faded series grouped by block identifier, for depth profiles:
/// every sputter cycle of one spectral region lands in one figure, shaded
/// from the first configured colour to the second.
fn plot_depth(
    config: &RunConfig,
    experiments: &[ExperimentRecord],
    output: Option<PathBuf>,
) -> Result<()> {
    let out_dir = output.unwrap_or_else(|| PathBuf::from("."));
    let fade_start = plot::parse_hex(&config.colors[0])?;
    let fade_end = plot::parse_hex(config.colors.last().map(String::as_str).unwrap_or("#000000"))?;

    // Group blocks across all files by identifier prefix, keeping file order.
    let mut groups: Vec<(String, Vec<&BlockRecord>)> = Vec::new();
    for experiment in experiments {
        for block in &experiment.blocks {
            let prefix: String = block.block_identifier.trim().chars().take(2).collect();
            match groups.iter_mut().find(|(p, _)| *p == prefix) {
                Some((_, blocks)) => blocks.push(block),
                None => groups.push((prefix, vec![block])),
            }
        }
    }

    for (prefix, blocks) in &groups {
        let denominator = (blocks.len().saturating_sub(1)).max(1) as f64;
        let mut series = Vec::new();
        for (cycle, block) in blocks.iter().enumerate() {
            let axis = block.abscissa_axis()?;
            let x: Vec<f64> = axis
                .iter()
                .map(|&kinetic| kinetic_to_binding(config.photon_energy_ev, kinetic))
                .collect();
            series.push(SpectrumSeries {
                label: format!("cycle {cycle}"),
                color: plot::fade(fade_start, fade_end, cycle as f64 / denominator),
                x,
                y: block.ordinate_series(0)?.to_vec(),
            });
        }

        let options = OverlayOptions {
            title: prefix.clone(),
            x_label: "Binding Energy [eV]".to_string(),
            y_label: y_axis_label(blocks[0]),
            // Successive cycles stack downwards, newest at the bottom.
            offset: -config.offset,
            legend: false,
            ..Default::default()
        };

        let path = out_dir.join(format!("{}_depth.svg", sanitize(prefix)));
        plot::render_overlay(&path, &series, &options)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "block".to_string()
    } else {
        cleaned
    }
}
