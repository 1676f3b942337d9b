//! Field lookup by identifier.
//!
//! The records are fixed-shape structs; this module preserves the
//! "dictionary of heterogeneous value shapes" view over them without
//! dynamic typing: every field is addressable through its schema identifier
//! and yields a borrowed [`FieldValue`].

use crate::schema::{BlockField, ExperimentField};

use super::block::BlockRecord;
use super::error::QueryError;
use super::experiment::ExperimentRecord;

/// A borrowed view of one decoded field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A single text line
    Text(&'a str),
    /// A decoded integer count
    Integer(i64),
    /// A decoded floating-point value
    Real(f64),
    /// An ordered sequence of text lines
    TextList(&'a [String]),
    /// An ordered sequence of integers
    IntegerList(&'a [i64]),
    /// An ordered sequence of floating-point values
    RealList(&'a [f64]),
}

impl<'a> FieldValue<'a> {
    /// The value as text, if it is a single text line.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The value as a float, if it is one.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            FieldValue::Real(v) => Some(*v),
            _ => None,
        }
    }
}

/// Present an optional scalar, mapping absence to [`QueryError::AbsentField`].
fn opt_text<'a>(value: &'a Option<String>, field: &'static str) -> Result<FieldValue<'a>, QueryError> {
    value
        .as_deref()
        .map(FieldValue::Text)
        .ok_or(QueryError::AbsentField { field })
}

impl ExperimentRecord {
    /// Retrieve one experiment field by identifier.
    ///
    /// Derived counts (comment lines, variable counts, list lengths) are
    /// reported from the decoded sequences themselves. Conditional-skip
    /// fields that were absent for this file's mode yield
    /// [`QueryError::AbsentField`].
    pub fn field(&self, id: ExperimentField) -> Result<FieldValue<'_>, QueryError> {
        use ExperimentField as E;
        let value = match id {
            E::FormatIdentifier => FieldValue::Text(&self.format_identifier),
            E::InstitutionIdentifier => FieldValue::Text(&self.institution_identifier),
            E::InstrumentModelIdentifier => FieldValue::Text(&self.instrument_model_identifier),
            E::OperatorIdentifier => FieldValue::Text(&self.operator_identifier),
            E::ExperimentIdentifier => FieldValue::Text(&self.experiment_identifier),
            E::NumberOfLinesInComment => FieldValue::Integer(self.comment.len() as i64),
            E::Comment => FieldValue::TextList(&self.comment),
            E::ExperimentMode => FieldValue::Text(self.experiment_mode.as_str()),
            E::ScanMode => FieldValue::Text(self.scan_mode.as_str()),
            E::NumberOfSpectralRegions => {
                return self
                    .number_of_spectral_regions
                    .map(FieldValue::Integer)
                    .ok_or(QueryError::AbsentField { field: id.as_str() })
            }
            E::NumberOfAnalysisPositions => {
                return self
                    .number_of_analysis_positions
                    .map(FieldValue::Integer)
                    .ok_or(QueryError::AbsentField { field: id.as_str() })
            }
            E::NumberOfDiscreteX => {
                return self
                    .number_of_discrete_x
                    .map(FieldValue::Integer)
                    .ok_or(QueryError::AbsentField { field: id.as_str() })
            }
            E::NumberOfDiscreteY => {
                return self
                    .number_of_discrete_y
                    .map(FieldValue::Integer)
                    .ok_or(QueryError::AbsentField { field: id.as_str() })
            }
            E::NumberOfExpVariables => {
                FieldValue::Integer(self.experimental_variable_labels.len() as i64)
            }
            E::ExpVariableLabel => FieldValue::TextList(&self.experimental_variable_labels),
            E::ExpVariableUnit => FieldValue::TextList(&self.experimental_variable_units),
            E::NumberOfEntriesInclusionList => {
                FieldValue::Integer(self.inclusion_prefixes.len() as i64)
            }
            E::InclusionPrefixNumber => FieldValue::IntegerList(&self.inclusion_prefixes),
            E::NumberOfManualEntries => {
                FieldValue::Integer(self.manual_entry_prefixes.len() as i64)
            }
            E::ManualEntryPrefixNumber => FieldValue::IntegerList(&self.manual_entry_prefixes),
            E::NumberOfFutureUpgradeExpEntries => {
                FieldValue::Integer(self.future_upgrade_experiment_entries.len() as i64)
            }
            E::NumberOfFutureUpgradeBlockEntries => {
                FieldValue::Integer(self.number_of_future_upgrade_block_entries)
            }
            E::FutureUpgradeExpEntry => {
                FieldValue::TextList(&self.future_upgrade_experiment_entries)
            }
            E::NumberOfBlocks => FieldValue::Integer(self.number_of_blocks),
        };
        Ok(value)
    }
}

impl BlockRecord {
    /// Retrieve one block field by identifier.
    ///
    /// The raw ordinate data is not addressable as a single value; use
    /// [`BlockRecord::ordinate_series`] instead.
    pub fn field(&self, id: BlockField) -> Result<FieldValue<'_>, QueryError> {
        use BlockField as B;
        let value = match id {
            B::BlockIdentifier => FieldValue::Text(&self.block_identifier),
            B::SampleIdentifier => FieldValue::Text(&self.sample_identifier),
            B::Year => FieldValue::Text(&self.year),
            B::Month => FieldValue::Text(&self.month),
            B::Day => FieldValue::Text(&self.day),
            B::Hours => FieldValue::Text(&self.hours),
            B::Minutes => FieldValue::Text(&self.minutes),
            B::Seconds => FieldValue::Text(&self.seconds),
            B::GmtOffset => FieldValue::Text(&self.gmt_offset),
            B::NumberOfLinesInComment => FieldValue::Integer(self.comment.len() as i64),
            B::Comment => FieldValue::TextList(&self.comment),
            B::Technique => FieldValue::Text(&self.technique),
            B::XCoord => return opt_text(&self.x_coord, id.as_str()),
            B::YCoord => return opt_text(&self.y_coord, id.as_str()),
            B::ExperimentalVariableValue => {
                FieldValue::TextList(&self.experimental_variable_values)
            }
            B::AnalysisSourceLabel => FieldValue::Text(&self.analysis_source_label),
            B::SputteringIon => return opt_text(&self.sputtering_ion, id.as_str()),
            B::NumberOfAtomsInIon => return opt_text(&self.number_of_atoms_in_ion, id.as_str()),
            B::SputteringIonCharge => return opt_text(&self.sputtering_ion_charge, id.as_str()),
            B::SourceCharacteristicEnergy => {
                FieldValue::Text(&self.source_characteristic_energy)
            }
            B::SourceStrength => FieldValue::Text(&self.source_strength),
            B::SourceBeamWidthX => FieldValue::Text(&self.source_beam_width_x),
            B::SourceBeamWidthY => FieldValue::Text(&self.source_beam_width_y),
            B::FieldOfViewX => return opt_text(&self.field_of_view_x, id.as_str()),
            B::FieldOfViewY => return opt_text(&self.field_of_view_y, id.as_str()),
            B::FirstLinescanStartX => return opt_text(&self.first_linescan_start_x, id.as_str()),
            B::FirstLinescanStartY => return opt_text(&self.first_linescan_start_y, id.as_str()),
            B::FirstLinescanEndX => return opt_text(&self.first_linescan_end_x, id.as_str()),
            B::FirstLinescanEndY => return opt_text(&self.first_linescan_end_y, id.as_str()),
            B::LastLinescanEndX => return opt_text(&self.last_linescan_end_x, id.as_str()),
            B::LastLinescanEndY => return opt_text(&self.last_linescan_end_y, id.as_str()),
            B::SourcePolarAngle => FieldValue::Text(&self.source_polar_angle),
            B::SourceAzimuth => FieldValue::Text(&self.source_azimuth),
            B::AnalyzerMode => FieldValue::Text(&self.analyzer_mode),
            B::AnalyzerPassEnergy => FieldValue::Text(&self.analyzer_pass_energy),
            B::DifferentialWidth => return opt_text(&self.differential_width, id.as_str()),
            B::TransferLensMagnification => FieldValue::Text(&self.transfer_lens_magnification),
            B::AnalyzerWorkFunction => FieldValue::Text(&self.analyzer_work_function),
            B::TargetBias => FieldValue::Text(&self.target_bias),
            B::AnalysisWidthX => FieldValue::Text(&self.analysis_width_x),
            B::AnalysisWidthY => FieldValue::Text(&self.analysis_width_y),
            B::AnalyzerPolarTakeoff => FieldValue::Text(&self.analyzer_polar_takeoff),
            B::AnalyzerAzimuthTakeoff => FieldValue::Text(&self.analyzer_azimuth_takeoff),
            B::SpeciesLabel => FieldValue::Text(&self.species_label),
            B::TransitionLabel => FieldValue::Text(&self.transition_label),
            B::DetectedParticleCharge => FieldValue::Text(&self.detected_particle_charge),
            B::AbscissaLabel => return opt_text(&self.abscissa_label, id.as_str()),
            B::AbscissaUnits => return opt_text(&self.abscissa_units, id.as_str()),
            B::AbscissaStart => {
                return self
                    .abscissa_start
                    .map(FieldValue::Real)
                    .ok_or(QueryError::AbsentField { field: id.as_str() })
            }
            B::AbscissaIncrement => {
                return self
                    .abscissa_increment
                    .map(FieldValue::Real)
                    .ok_or(QueryError::AbsentField { field: id.as_str() })
            }
            B::NumberOfCorrespondingVariables => {
                FieldValue::Integer(self.number_of_corresponding_variables)
            }
            B::CorrespondingVariableLabel => {
                FieldValue::TextList(&self.corresponding_variable_labels)
            }
            B::CorrespondingVariableUnits => {
                FieldValue::TextList(&self.corresponding_variable_units)
            }
            B::SignalMode => FieldValue::Text(&self.signal_mode),
            B::SignalCollectionTime => FieldValue::Text(&self.signal_collection_time),
            B::NumberOfScans => FieldValue::Text(&self.number_of_scans),
            B::SignalTimeCorrection => FieldValue::Text(&self.signal_time_correction),
            B::SputteringSourceEnergy => {
                return opt_text(&self.sputtering_source_energy, id.as_str())
            }
            B::SputteringSourceBeamCurrent => {
                return opt_text(&self.sputtering_source_beam_current, id.as_str())
            }
            B::SputteringSourceWidthX => {
                return opt_text(&self.sputtering_source_width_x, id.as_str())
            }
            B::SputteringSourceWidthY => {
                return opt_text(&self.sputtering_source_width_y, id.as_str())
            }
            B::SputteringSourcePolarAngle => {
                return opt_text(&self.sputtering_source_polar_angle, id.as_str())
            }
            B::SputteringSourceAzimuth => {
                return opt_text(&self.sputtering_source_azimuth, id.as_str())
            }
            B::SputteringMode => return opt_text(&self.sputtering_mode, id.as_str()),
            B::SampleNormalPolarTilt => FieldValue::Text(&self.sample_normal_polar_tilt),
            B::SampleNormalAzimuthTilt => FieldValue::Text(&self.sample_normal_azimuth_tilt),
            B::SampleRotationAngle => FieldValue::Text(&self.sample_rotation_angle),
            B::NumberOfAdditionalParams => {
                FieldValue::Integer(self.additional_param_labels.len() as i64)
            }
            B::AdditionalParamLabel => FieldValue::TextList(&self.additional_param_labels),
            B::AdditionalParamUnits => FieldValue::TextList(&self.additional_param_units),
            B::AdditionalParamValue => FieldValue::TextList(&self.additional_param_values),
            B::FutureUpgradeBlockEntry => {
                FieldValue::TextList(&self.future_upgrade_block_entries)
            }
            B::NumberOfOrdinateValues => FieldValue::Integer(self.number_of_ordinate_values),
            B::MinimumOrdinateValue => FieldValue::RealList(&self.minimum_ordinate_values),
            B::MaximumOrdinateValue => FieldValue::RealList(&self.maximum_ordinate_values),
            B::OrdinateValue => {
                return Err(QueryError::NotAddressable { field: id.as_str() })
            }
        };
        Ok(value)
    }
}
