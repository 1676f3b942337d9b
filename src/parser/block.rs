//! The per-block decoder.

use std::io::BufRead;

use log::warn;

use crate::record::{BlockRecord, OrdinateMatrix};
use crate::schema::{
    BlockField, CountSource, FieldSpec, Rule, BLOCK_BODY_SCHEMA, BLOCK_FOOTER_SCHEMA,
    BLOCK_HEADER_SCHEMA,
};

use super::context::DecodeContext;
use super::cursor::LineCursor;
use super::error::{DecodeError, Result};

/// Decodes one pre-allocated block on the shared cursor.
///
/// Three ordered phases: the two-line header (whose completion resets the
/// per-block repetition counters), the numbered body, and the footer ending
/// in the interleaved ordinate data. Sample `k` of the ordinate data is
/// routed to corresponding variable `k mod N` in arrival order.
pub(super) struct BlockDecoder<'a, R: BufRead> {
    cursor: &'a mut LineCursor<R>,
    ctx: &'a mut DecodeContext,
    record: &'a mut BlockRecord,
    ordinate_index: usize,
}

impl<'a, R: BufRead> BlockDecoder<'a, R> {
    pub(super) fn new(
        cursor: &'a mut LineCursor<R>,
        ctx: &'a mut DecodeContext,
        record: &'a mut BlockRecord,
    ) -> Self {
        Self {
            cursor,
            ctx,
            record,
            ordinate_index: 0,
        }
    }

    pub(super) fn run(mut self) -> Result<()> {
        for spec in BLOCK_HEADER_SCHEMA {
            self.apply(spec)?;
        }
        self.ctx.reset_block_state();
        for spec in BLOCK_BODY_SCHEMA {
            self.apply(spec)?;
        }
        for spec in BLOCK_FOOTER_SCHEMA {
            self.apply(spec)?;
        }
        Ok(())
    }

    fn apply(&mut self, spec: &FieldSpec<BlockField>) -> Result<()> {
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

    fn consume(&mut self, field: BlockField) -> Result<()> {
        let line = self.cursor.next_line()?.ok_or(DecodeError::PrematureEnd {
            expected: field.as_str(),
            line: self.cursor.line_number(),
        })?;
        self.store(field, line)
    }

    fn store(&mut self, field: BlockField, line: String) -> Result<()> {
        use BlockField as B;
        match field {
            B::BlockIdentifier => self.record.block_identifier = line,
            B::SampleIdentifier => self.record.sample_identifier = line,
            B::Year => self.record.year = line,
            B::Month => self.record.month = line,
            B::Day => self.record.day = line,
            B::Hours => self.record.hours = line,
            B::Minutes => self.record.minutes = line,
            B::Seconds => self.record.seconds = line,
            B::GmtOffset => self.record.gmt_offset = line,
            B::NumberOfLinesInComment => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_block_count(field, n);
            }
            B::Comment => self.record.comment.push(line),
            B::Technique => {
                match line.parse() {
                    Ok(technique) => self.ctx.set_technique(Some(technique)),
                    Err(()) => {
                        warn!(
                            "unrecognised technique {:?} on line {}; \
                             technique-gated fields will be treated as absent",
                            line,
                            self.cursor.line_number()
                        );
                        self.ctx.set_technique(None);
                    }
                }
                self.record.technique = line;
            }
            B::XCoord => self.record.x_coord = Some(line),
            B::YCoord => self.record.y_coord = Some(line),
            B::ExperimentalVariableValue => {
                self.record.experimental_variable_values.push(line)
            }
            B::AnalysisSourceLabel => self.record.analysis_source_label = line,
            B::SputteringIon => self.record.sputtering_ion = Some(line),
            B::NumberOfAtomsInIon => self.record.number_of_atoms_in_ion = Some(line),
            B::SputteringIonCharge => self.record.sputtering_ion_charge = Some(line),
            B::SourceCharacteristicEnergy => self.record.source_characteristic_energy = line,
            B::SourceStrength => self.record.source_strength = line,
            B::SourceBeamWidthX => self.record.source_beam_width_x = line,
            B::SourceBeamWidthY => self.record.source_beam_width_y = line,
            B::FieldOfViewX => self.record.field_of_view_x = Some(line),
            B::FieldOfViewY => self.record.field_of_view_y = Some(line),
            B::FirstLinescanStartX => self.record.first_linescan_start_x = Some(line),
            B::FirstLinescanStartY => self.record.first_linescan_start_y = Some(line),
            B::FirstLinescanEndX => self.record.first_linescan_end_x = Some(line),
            B::FirstLinescanEndY => self.record.first_linescan_end_y = Some(line),
            B::LastLinescanEndX => self.record.last_linescan_end_x = Some(line),
            B::LastLinescanEndY => self.record.last_linescan_end_y = Some(line),
            B::SourcePolarAngle => self.record.source_polar_angle = line,
            B::SourceAzimuth => self.record.source_azimuth = line,
            B::AnalyzerMode => self.record.analyzer_mode = line,
            B::AnalyzerPassEnergy => self.record.analyzer_pass_energy = line,
            B::DifferentialWidth => self.record.differential_width = Some(line),
            B::TransferLensMagnification => self.record.transfer_lens_magnification = line,
            B::AnalyzerWorkFunction => self.record.analyzer_work_function = line,
            B::TargetBias => self.record.target_bias = line,
            B::AnalysisWidthX => self.record.analysis_width_x = line,
            B::AnalysisWidthY => self.record.analysis_width_y = line,
            B::AnalyzerPolarTakeoff => self.record.analyzer_polar_takeoff = line,
            B::AnalyzerAzimuthTakeoff => self.record.analyzer_azimuth_takeoff = line,
            B::SpeciesLabel => self.record.species_label = line,
            B::TransitionLabel => self.record.transition_label = line,
            B::DetectedParticleCharge => self.record.detected_particle_charge = line,
            B::AbscissaLabel => self.record.abscissa_label = Some(line),
            B::AbscissaUnits => self.record.abscissa_units = Some(line),
            B::AbscissaStart => {
                self.record.abscissa_start = Some(self.float_value(field, &line)?)
            }
            B::AbscissaIncrement => {
                self.record.abscissa_increment = Some(self.float_value(field, &line)?)
            }
            B::NumberOfCorrespondingVariables => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_block_count(field, n);
                self.record.number_of_corresponding_variables = n as i64;
            }
            B::CorrespondingVariableLabel => {
                self.record.corresponding_variable_labels.push(line)
            }
            B::CorrespondingVariableUnits => {
                self.record.corresponding_variable_units.push(line)
            }
            B::SignalMode => self.record.signal_mode = line,
            B::SignalCollectionTime => self.record.signal_collection_time = line,
            B::NumberOfScans => self.record.number_of_scans = line,
            B::SignalTimeCorrection => self.record.signal_time_correction = line,
            B::SputteringSourceEnergy => self.record.sputtering_source_energy = Some(line),
            B::SputteringSourceBeamCurrent => {
                self.record.sputtering_source_beam_current = Some(line)
            }
            B::SputteringSourceWidthX => self.record.sputtering_source_width_x = Some(line),
            B::SputteringSourceWidthY => self.record.sputtering_source_width_y = Some(line),
            B::SputteringSourcePolarAngle => {
                self.record.sputtering_source_polar_angle = Some(line)
            }
            B::SputteringSourceAzimuth => self.record.sputtering_source_azimuth = Some(line),
            B::SputteringMode => self.record.sputtering_mode = Some(line),
            B::SampleNormalPolarTilt => self.record.sample_normal_polar_tilt = line,
            B::SampleNormalAzimuthTilt => self.record.sample_normal_azimuth_tilt = line,
            B::SampleRotationAngle => self.record.sample_rotation_angle = line,
            B::NumberOfAdditionalParams => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_block_count(field, n);
            }
            B::AdditionalParamLabel => self.record.additional_param_labels.push(line),
            B::AdditionalParamUnits => self.record.additional_param_units.push(line),
            B::AdditionalParamValue => self.record.additional_param_values.push(line),
            B::FutureUpgradeBlockEntry => {
                self.record.future_upgrade_block_entries.push(line)
            }
            B::NumberOfOrdinateValues => {
                let n = self.count_value(field, &line)?;
                self.ctx.record_block_count(field, n);
                self.record.number_of_ordinate_values = n as i64;
                self.begin_ordinate_data(n)?;
            }
            B::MinimumOrdinateValue => {
                let value = self.float_value(field, &line)?;
                self.record.minimum_ordinate_values.push(value);
            }
            B::MaximumOrdinateValue => {
                let value = self.float_value(field, &line)?;
                self.record.maximum_ordinate_values.push(value);
            }
            B::OrdinateValue => {
                let value = self.float_value(field, &line)?;
                self.record
                    .ordinate
                    .push_interleaved(self.ordinate_index, value);
                self.ordinate_index += 1;
            }
        }
        Ok(())
    }

    /// Validate the ordinate count against the corresponding-variable count
    /// and allocate the de-interleaved matrix.
    fn begin_ordinate_data(&mut self, count: usize) -> Result<()> {
        let variables = self
            .ctx
            .count(CountSource::Block(BlockField::NumberOfCorrespondingVariables));
        if (variables == 0 && count != 0) || (variables != 0 && count % variables != 0) {
            return Err(DecodeError::OrdinateRemainder { count, variables });
        }
        self.record.ordinate = OrdinateMatrix::with_variables(variables);
        self.ordinate_index = 0;
        Ok(())
    }

    fn count_value(&self, field: BlockField, line: &str) -> Result<usize> {
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

    fn float_value(&self, field: BlockField, line: &str) -> Result<f64> {
        line.trim().parse().map_err(|_| DecodeError::MalformedNumber {
            field: field.as_str(),
            line: self.cursor.line_number(),
            token: line.to_string(),
        })
    }
}
