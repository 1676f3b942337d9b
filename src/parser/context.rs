//! Mutable state carried across the single decode pass.

use crate::schema::{
    BlockField, CountSource, ExperimentField, ExperimentMode, Gate, ScanMode, Technique,
};

/// Counts and enumeration values already decoded, consulted by the schema
/// gates and counted-repeat rules for everything decoded later.
///
/// One context exists per file decode; it is mutated exclusively by the
/// decoder currently advancing the cursor and never shared between decodes.
#[derive(Debug, Default)]
pub struct DecodeContext {
    mode: Option<ExperimentMode>,
    scan_mode: Option<ScanMode>,
    technique: Option<Technique>,

    // Experiment-level repetition counts.
    comment_lines: usize,
    exp_variables: usize,
    inclusion_entries: usize,
    manual_entries: usize,
    future_upgrade_exp_entries: usize,
    future_upgrade_block_entries: usize,
    blocks: usize,

    // Per-block repetition counts, reset at each block header.
    block_comment_lines: usize,
    corresponding_variables: usize,
    additional_params: usize,
    ordinate_values: usize,
}

impl DecodeContext {
    /// A fresh context for one file decode.
    pub fn new() -> Self {
        Self::default()
    }

    /// The decoded experiment mode, if already past that slot.
    pub fn mode(&self) -> Option<ExperimentMode> {
        self.mode
    }

    /// The decoded scan mode, if already past that slot.
    pub fn scan_mode(&self) -> Option<ScanMode> {
        self.scan_mode
    }

    /// The current block's technique; `None` before the technique slot or
    /// when the token was not recognised.
    pub fn technique(&self) -> Option<Technique> {
        self.technique
    }

    pub(crate) fn set_mode(&mut self, mode: ExperimentMode) {
        self.mode = Some(mode);
    }

    pub(crate) fn set_scan_mode(&mut self, scan_mode: ScanMode) {
        self.scan_mode = Some(scan_mode);
    }

    pub(crate) fn set_technique(&mut self, technique: Option<Technique>) {
        self.technique = technique;
    }

    /// Evaluate a schema gate against the decoded enumeration values.
    pub fn gate_holds(&self, gate: &Gate) -> bool {
        gate.holds(self.mode, self.scan_mode, self.technique)
    }

    /// The repetition count supplied by a previously decoded field.
    pub fn count(&self, source: CountSource) -> usize {
        match source {
            CountSource::Experiment(ExperimentField::NumberOfLinesInComment) => self.comment_lines,
            CountSource::Experiment(ExperimentField::NumberOfExpVariables) => self.exp_variables,
            CountSource::Experiment(ExperimentField::NumberOfEntriesInclusionList) => {
                self.inclusion_entries
            }
            CountSource::Experiment(ExperimentField::NumberOfManualEntries) => self.manual_entries,
            CountSource::Experiment(ExperimentField::NumberOfFutureUpgradeExpEntries) => {
                self.future_upgrade_exp_entries
            }
            CountSource::Experiment(ExperimentField::NumberOfFutureUpgradeBlockEntries) => {
                self.future_upgrade_block_entries
            }
            CountSource::Experiment(ExperimentField::NumberOfBlocks) => self.blocks,
            CountSource::Block(BlockField::NumberOfLinesInComment) => self.block_comment_lines,
            CountSource::Block(BlockField::NumberOfCorrespondingVariables) => {
                self.corresponding_variables
            }
            CountSource::Block(BlockField::NumberOfAdditionalParams) => self.additional_params,
            CountSource::Block(BlockField::NumberOfOrdinateValues) => self.ordinate_values,
            // No schema rule is keyed by any other field.
            _ => 0,
        }
    }

    /// Record a decoded count so later rules can consult it.
    pub(crate) fn record_experiment_count(&mut self, field: ExperimentField, value: usize) {
        match field {
            ExperimentField::NumberOfLinesInComment => self.comment_lines = value,
            ExperimentField::NumberOfExpVariables => self.exp_variables = value,
            ExperimentField::NumberOfEntriesInclusionList => self.inclusion_entries = value,
            ExperimentField::NumberOfManualEntries => self.manual_entries = value,
            ExperimentField::NumberOfFutureUpgradeExpEntries => {
                self.future_upgrade_exp_entries = value
            }
            ExperimentField::NumberOfFutureUpgradeBlockEntries => {
                self.future_upgrade_block_entries = value
            }
            ExperimentField::NumberOfBlocks => self.blocks = value,
            _ => {}
        }
    }

    /// Record a decoded per-block count.
    pub(crate) fn record_block_count(&mut self, field: BlockField, value: usize) {
        match field {
            BlockField::NumberOfLinesInComment => self.block_comment_lines = value,
            BlockField::NumberOfCorrespondingVariables => self.corresponding_variables = value,
            BlockField::NumberOfAdditionalParams => self.additional_params = value,
            BlockField::NumberOfOrdinateValues => self.ordinate_values = value,
            _ => {}
        }
    }

    /// Clear the per-block counters and technique at a new block header.
    pub(crate) fn reset_block_state(&mut self) {
        self.technique = None;
        self.block_comment_lines = 0;
        self.corresponding_variables = 0;
        self.additional_params = 0;
        self.ordinate_values = 0;
    }
}
