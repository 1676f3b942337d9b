//! JSON run configuration for batch plotting.
//!
//! A run configuration names a set of VAMAS files plus their display labels
//! and colours, and selects one of the plot types in [`crate::plot`]. The
//! key names match the historical JSON configurations ("plot type",
//! "photon energy"), so existing run files keep working.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::energy::AL_K_ALPHA_EV;

/// Errors raised while loading or validating a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the configuration file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Per-file lists (labels, colours) do not match the file list length
    #[error("config lists out of step: {filenames} filenames but {found} {what}")]
    MismatchedLists {
        /// Number of entries in `filenames`
        filenames: usize,
        /// The list that does not match
        what: &'static str,
        /// Its actual length
        found: usize,
    },
}

/// Which figure to produce from the configured files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotType {
    /// One overlay of every file's first block, vertically offset
    Spectra,
    /// One overlay per block index across all files
    HighRes,
    /// Colour-faded series grouped by block identifier (depth profiles)
    Depth,
}

/// A batch plotting run: input files, display styling, plot selection.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Directory containing the VAMAS files
    pub filepath: String,
    /// File names relative to `filepath`
    pub filenames: Vec<String>,
    /// One legend label per file
    pub labels: Vec<String>,
    /// One hex colour (`#rrggbb`) per file
    pub colors: Vec<String>,
    /// The figure to produce
    #[serde(rename = "plot type")]
    pub plot_type: PlotType,
    /// Vertical offset inserted between successive spectra for readability
    #[serde(default)]
    pub offset: f64,
    /// Photon energy of the excitation source in eV (binding-energy axis)
    #[serde(rename = "photon energy", default = "default_photon_energy")]
    pub photon_energy_ev: f64,
    /// Upper bound of the sputter-time colourbar for depth profiles, minutes
    #[serde(rename = "sputter stop", default)]
    pub sputter_stop: Option<f64>,
}

fn default_photon_energy() -> f64 {
    AL_K_ALPHA_EV
}

impl RunConfig {
    /// Load and validate a run configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        let config: RunConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the per-file lists line up with the file list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let filenames = self.filenames.len();
        if self.labels.len() != filenames {
            return Err(ConfigError::MismatchedLists {
                filenames,
                what: "labels",
                found: self.labels.len(),
            });
        }
        if self.colors.len() != filenames {
            return Err(ConfigError::MismatchedLists {
                filenames,
                what: "colors",
                found: self.colors.len(),
            });
        }
        Ok(())
    }

    /// Full path of the i-th input file.
    pub fn file_path(&self, index: usize) -> PathBuf {
        Path::new(&self.filepath).join(&self.filenames[index])
    }
}
