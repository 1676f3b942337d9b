//! The experiment-level record: header fields plus the owned blocks.

use serde::Serialize;

use crate::schema::{ExperimentMode, ScanMode};

use super::block::BlockRecord;
use super::error::QueryError;

/// One fully decoded VAMAS experiment.
///
/// Created empty at the start of a decode, populated by the experiment
/// decoder, and owning one [`BlockRecord`] per declared block. The invariant
/// `number_of_blocks == blocks.len()` is established the moment the block
/// count is decoded (blocks are pre-allocated, then filled in file order).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperimentRecord {
    /// Format identifier (the first line of the file)
    pub format_identifier: String,
    /// Institution identifier
    pub institution_identifier: String,
    /// Instrument model identifier
    pub instrument_model_identifier: String,
    /// Operator identifier
    pub operator_identifier: String,
    /// Experiment identifier
    pub experiment_identifier: String,
    /// Experiment comment lines
    pub comment: Vec<String>,
    /// Experiment mode
    pub experiment_mode: ExperimentMode,
    /// Scan mode
    pub scan_mode: ScanMode,
    /// Number of spectral regions (MAP/MAPDP/NORM/SDP only)
    pub number_of_spectral_regions: Option<i64>,
    /// Number of analysis positions (MAP/MAPDP only)
    pub number_of_analysis_positions: Option<i64>,
    /// Number of discrete x coordinates in the full map (MAP/MAPDP only)
    pub number_of_discrete_x: Option<i64>,
    /// Number of discrete y coordinates in the full map (MAP/MAPDP only)
    pub number_of_discrete_y: Option<i64>,
    /// One label per experimental variable
    pub experimental_variable_labels: Vec<String>,
    /// One unit per experimental variable
    pub experimental_variable_units: Vec<String>,
    /// Parameter-inclusion-list prefix numbers
    pub inclusion_prefixes: Vec<i64>,
    /// Manually-entered-item prefix numbers
    pub manual_entry_prefixes: Vec<i64>,
    /// Future-upgrade experiment entries
    pub future_upgrade_experiment_entries: Vec<String>,
    /// Declared number of future-upgrade block entries (consumed per block)
    pub number_of_future_upgrade_block_entries: i64,
    /// Declared number of blocks
    pub number_of_blocks: i64,
    /// The decoded blocks, in file order
    pub blocks: Vec<BlockRecord>,
}

impl ExperimentRecord {
    /// Access one block by index.
    pub fn block(&self, index: usize) -> Result<&BlockRecord, QueryError> {
        self.blocks.get(index).ok_or(QueryError::BlockIndexOutOfRange {
            index,
            count: self.blocks.len(),
        })
    }
}
