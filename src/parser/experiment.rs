//! The experiment-header decoder.

use std::io::BufRead;

use crate::record::{BlockRecord, ExperimentRecord};
use crate::schema::{ExperimentField, FieldSpec, Rule, EXPERIMENT_SCHEMA};

use super::context::DecodeContext;
use super::cursor::LineCursor;
use super::error::{DecodeError, Result};

/// Walks [`EXPERIMENT_SCHEMA`] strictly forward, populating the experiment
/// record and the decode context. On consuming the block-count line it
/// pre-allocates the empty block records, establishing the
/// `number_of_blocks == blocks.len()` invariant before any block is decoded.
pub(super) struct ExperimentDecoder<'a, R: BufRead> {
    cursor: &'a mut LineCursor<R>,
    ctx: &'a mut DecodeContext,
    record: &'a mut ExperimentRecord,
}

impl<'a, R: BufRead> ExperimentDecoder<'a, R> {
    pub(super) fn new(
        cursor: &'a mut LineCursor<R>,
        ctx: &'a mut DecodeContext,
        record: &'a mut ExperimentRecord,
    ) -> Self {
        Self { cursor, ctx, record }
    }

    pub(super) fn run(mut self) -> Result<()> {
        for spec in EXPERIMENT_SCHEMA {
            self.apply(spec)?;
        }
        Ok(())
    }

    fn apply(&mut self, spec: &FieldSpec<ExperimentField>) -> Result<()> {
        match spec.rule {
            Rule::Fixed(field) => self.consume(field),
            Rule::Gated { gate, fields } => {
                if self.ctx.gate_holds(&gate) {
                    for field in fields {
                        self.consume(*field)?;
                    }
                }
                Ok(())
            }
            Rule::Counted { count, per_item } => {
                let repetitions = self.ctx.count(count);
                for _ in 0..repetitions {
                    for field in per_item {
                        self.consume(*field)?;
                    }
                }
                Ok(())
            }
        }
    }

    /// One line in, zero-or-more field writes out; a line is never
    /// re-examined.
    fn consume(&mut self, field: ExperimentField) -> Result<()> {
        let line = self.cursor.next_line()?.ok_or(DecodeError::PrematureEnd {
            expected: field.as_str(),
            line: self.cursor.line_number(),
        })?;
        self.store(field, line)
    }

    fn store(&mut self, field: ExperimentField, line: String) -> Result<()> {
        use ExperimentField as E;
        match field {
            E::FormatIdentifier => self.record.format_identifier = line,
            E::InstitutionIdentifier => self.record.institution_identifier = line,
            E::InstrumentModelIdentifier => self.record.instrument_model_identifier = line,
            E::OperatorIdentifier => self.record.operator_identifier = line,
            E::ExperimentIdentifier => self.record.experiment_identifier = line,
            E::NumberOfLinesInComment => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_experiment_count(field, n);
            }
            E::Comment => self.record.comment.push(line),
            E::ExperimentMode => {
                let mode = line.parse().map_err(|_| DecodeError::UnknownExperimentMode {
                    token: line.clone(),
                    line: self.cursor.line_number(),
                })?;
                self.record.experiment_mode = mode;
                self.ctx.set_mode(mode);
            }
            E::ScanMode => {
                let scan_mode = line.parse().map_err(|_| DecodeError::UnknownScanMode {
                    token: line.clone(),
                    line: self.cursor.line_number(),
                })?;
                self.record.scan_mode = scan_mode;
                self.ctx.set_scan_mode(scan_mode);
            }
            E::NumberOfSpectralRegions => {
                self.record.number_of_spectral_regions =
                    Some(self.count_value(field, &line)? as i64);
            }
            E::NumberOfAnalysisPositions => {
                self.record.number_of_analysis_positions =
                    Some(self.count_value(field, &line)? as i64);
            }
            E::NumberOfDiscreteX => {
                self.record.number_of_discrete_x = Some(self.count_value(field, &line)? as i64);
            }
            E::NumberOfDiscreteY => {
                self.record.number_of_discrete_y = Some(self.count_value(field, &line)? as i64);
            }
            E::NumberOfExpVariables => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_experiment_count(field, n);
            }
            E::ExpVariableLabel => self.record.experimental_variable_labels.push(line),
            E::ExpVariableUnit => self.record.experimental_variable_units.push(line),
            E::NumberOfEntriesInclusionList => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_experiment_count(field, n);
            }
            E::InclusionPrefixNumber => {
                let value = self.int_value(field, &line)?;
                self.record.inclusion_prefixes.push(value);
            }
            E::NumberOfManualEntries => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_experiment_count(field, n);
            }
            E::ManualEntryPrefixNumber => {
                let value = self.int_value(field, &line)?;
                self.record.manual_entry_prefixes.push(value);
            }
            E::NumberOfFutureUpgradeExpEntries => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_experiment_count(field, n);
            }
            E::NumberOfFutureUpgradeBlockEntries => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_experiment_count(field, n);
                self.record.number_of_future_upgrade_block_entries = n as i64;
            }
            E::FutureUpgradeExpEntry => {
                self.record.future_upgrade_experiment_entries.push(line);
            }
            E::NumberOfBlocks => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_experiment_count(field, n);
                self.record.number_of_blocks = n as i64;
                // Pre-allocate so the block-count invariant holds from here on.
                self.record.blocks = vec![BlockRecord::default(); n];
            }
        }
        Ok(())
    }

    fn count_value(&self, field: ExperimentField, line: &str) -> Result<usize> {
        let value: i64 = line.trim().parse().map_err(|_| DecodeError::MalformedCount {
            field: field.as_str(),
            line: self.cursor.line_number(),
            token: line.to_string(),
        })?;
        if value < 0 {
            return Err(DecodeError::NegativeCount {
                field: field.as_str(),
                line: self.cursor.line_number(),
                value,
            });
        }
        Ok(value as usize)
    }

    fn int_value(&self, field: ExperimentField, line: &str) -> Result<i64> {
        line.trim().parse().map_err(|_| DecodeError::MalformedNumber {
            field: field.as_str(),
            line: self.cursor.line_number(),
            token: line.to_string(),
        })
    }
}
