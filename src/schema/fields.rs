//! Field identifiers for the experiment header and the block groups.
//!
//! Identifier strings follow the 1988 standard's field names; they are the
//! names surfaced in decode errors and accepted by the query interface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a logical field in the experiment header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperimentField {
    /// Format identifier line (first line of the file)
    FormatIdentifier,
    /// Institution identifier
    InstitutionIdentifier,
    /// Instrument model identifier
    InstrumentModelIdentifier,
    /// Operator identifier
    OperatorIdentifier,
    /// Experiment identifier
    ExperimentIdentifier,
    /// Number of lines in the experiment comment
    NumberOfLinesInComment,
    /// One comment line
    Comment,
    /// Experiment mode token
    ExperimentMode,
    /// Scan mode token
    ScanMode,
    /// Number of spectral regions
    NumberOfSpectralRegions,
    /// Number of analysis positions
    NumberOfAnalysisPositions,
    /// Number of discrete x coordinates available in full map
    NumberOfDiscreteX,
    /// Number of discrete y coordinates available in full map
    NumberOfDiscreteY,
    /// Number of experimental variables
    NumberOfExpVariables,
    /// Experimental variable label
    ExpVariableLabel,
    /// Experimental variable unit
    ExpVariableUnit,
    /// Number of entries in the parameter inclusion list
    NumberOfEntriesInclusionList,
    /// One inclusion-list prefix number
    InclusionPrefixNumber,
    /// Number of manually entered items
    NumberOfManualEntries,
    /// One manual-entry prefix number
    ManualEntryPrefixNumber,
    /// Number of future-upgrade experiment entries
    NumberOfFutureUpgradeExpEntries,
    /// Number of future-upgrade block entries
    NumberOfFutureUpgradeBlockEntries,
    /// One future-upgrade experiment entry
    FutureUpgradeExpEntry,
    /// Number of blocks
    NumberOfBlocks,
}

impl ExperimentField {
    /// The field's identifier string.
    pub fn as_str(&self) -> &'static str {
        use ExperimentField::*;
        match self {
            FormatIdentifier => "format_identifier",
            InstitutionIdentifier => "institution_identifier",
            InstrumentModelIdentifier => "instrument_model_identifier",
            OperatorIdentifier => "operator_identifier",
            ExperimentIdentifier => "experiment_identifier",
            NumberOfLinesInComment => "number_of_lines_in_comment",
            Comment => "comment",
            ExperimentMode => "experiment_mode",
            ScanMode => "scan_mode",
            NumberOfSpectralRegions => "number_of_spectral_regions",
            NumberOfAnalysisPositions => "number_of_analysis_positions",
            NumberOfDiscreteX => "number_of_discrete_x",
            NumberOfDiscreteY => "number_of_discrete_y",
            NumberOfExpVariables => "number_of_exp_variables",
            ExpVariableLabel => "exp_variable_label",
            ExpVariableUnit => "exp_variable_unit",
            NumberOfEntriesInclusionList => "number_of_entries_include_list",
            InclusionPrefixNumber => "inclusion_prefix_number",
            NumberOfManualEntries => "number_of_manually_entered_items",
            ManualEntryPrefixNumber => "prefix_number_of_manual_entry",
            NumberOfFutureUpgradeExpEntries => "number_of_future_upgrade_exp_entries",
            NumberOfFutureUpgradeBlockEntries => "number_of_future_upgrade_block_entries",
            FutureUpgradeExpEntry => "future_upgrade_exp_entry",
            NumberOfBlocks => "number_of_blocks",
        }
    }
}

impl fmt::Display for ExperimentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a logical field in a block (header, numbered body, footer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockField {
    /// Block identifier
    BlockIdentifier,
    /// Sample identifier
    SampleIdentifier,
    /// Year of acquisition (Gregorian calendar)
    Year,
    /// Month of acquisition
    Month,
    /// Day of acquisition
    Day,
    /// Hour of acquisition (24-hour clock)
    Hours,
    /// Minutes of acquisition
    Minutes,
    /// Seconds of acquisition
    Seconds,
    /// Number of hours in advance of Greenwich Mean Time
    GmtOffset,
    /// Number of lines in the block comment
    NumberOfLinesInComment,
    /// One block comment line
    Comment,
    /// Technique token
    Technique,
    /// Map x coordinate
    XCoord,
    /// Map y coordinate
    YCoord,
    /// Value of one experimental variable
    ExperimentalVariableValue,
    /// Analysis source label
    AnalysisSourceLabel,
    /// Sputtering ion or atom species
    SputteringIon,
    /// Number of atoms in the sputtering ion
    NumberOfAtomsInIon,
    /// Sputtering ion charge sign and number
    SputteringIonCharge,
    /// Analysis source characteristic energy (eV)
    SourceCharacteristicEnergy,
    /// Analysis source strength (W)
    SourceStrength,
    /// Analysis source beam width along x (micrometres)
    SourceBeamWidthX,
    /// Analysis source beam width along y (micrometres)
    SourceBeamWidthY,
    /// Field of view along x (micrometres)
    FieldOfViewX,
    /// Field of view along y (micrometres)
    FieldOfViewY,
    /// First linescan start x coordinate
    FirstLinescanStartX,
    /// First linescan start y coordinate
    FirstLinescanStartY,
    /// First linescan finish x coordinate
    FirstLinescanEndX,
    /// First linescan finish y coordinate
    FirstLinescanEndY,
    /// Last linescan finish x coordinate
    LastLinescanEndX,
    /// Last linescan finish y coordinate
    LastLinescanEndY,
    /// Analysis source polar angle of incidence (degrees)
    SourcePolarAngle,
    /// Analysis source azimuth (degrees)
    SourceAzimuth,
    /// Analyser mode (FAT, FRR, constant dE, ...)
    AnalyzerMode,
    /// Analyser pass energy, retard ratio or mass resolution
    AnalyzerPassEnergy,
    /// Differential width (AES diff only)
    DifferentialWidth,
    /// Magnification of the analyser transfer lens
    TransferLensMagnification,
    /// Analyser work function or acceptance energy (eV)
    AnalyzerWorkFunction,
    /// Target bias (V)
    TargetBias,
    /// Analysis width along x (micrometres)
    AnalysisWidthX,
    /// Analysis width along y (micrometres)
    AnalysisWidthY,
    /// Analyser axis polar take-off angle (degrees)
    AnalyzerPolarTakeoff,
    /// Analyser axis azimuth take-off angle (degrees)
    AnalyzerAzimuthTakeoff,
    /// Species label (element or molecule)
    SpeciesLabel,
    /// Transition or charge state label
    TransitionLabel,
    /// Charge of the detected particle
    DetectedParticleCharge,
    /// Abscissa label
    AbscissaLabel,
    /// Abscissa units
    AbscissaUnits,
    /// Abscissa start value
    AbscissaStart,
    /// Abscissa increment
    AbscissaIncrement,
    /// Number of corresponding variables
    NumberOfCorrespondingVariables,
    /// Corresponding variable label
    CorrespondingVariableLabel,
    /// Corresponding variable units
    CorrespondingVariableUnits,
    /// Signal mode (analogue or pulse counting)
    SignalMode,
    /// Signal collection time per ordinate value (s)
    SignalCollectionTime,
    /// Number of scans compiled into this block
    NumberOfScans,
    /// Signal time correction (s)
    SignalTimeCorrection,
    /// Sputtering source energy (eV)
    SputteringSourceEnergy,
    /// Sputtering source beam current (nA)
    SputteringSourceBeamCurrent,
    /// Sputtering source width along x (micrometres)
    SputteringSourceWidthX,
    /// Sputtering source width along y (micrometres)
    SputteringSourceWidthY,
    /// Sputtering source polar angle of incidence (degrees)
    SputteringSourcePolarAngle,
    /// Sputtering source azimuth (degrees)
    SputteringSourceAzimuth,
    /// Sputtering mode (continuous or cyclic)
    SputteringMode,
    /// Sample normal polar angle of tilt (degrees)
    SampleNormalPolarTilt,
    /// Sample normal azimuth angle of tilt (degrees)
    SampleNormalAzimuthTilt,
    /// Sample rotation angle (degrees)
    SampleRotationAngle,
    /// Number of additional numerical parameters
    NumberOfAdditionalParams,
    /// Additional numerical parameter label
    AdditionalParamLabel,
    /// Additional numerical parameter units
    AdditionalParamUnits,
    /// Additional numerical parameter value
    AdditionalParamValue,
    /// One future-upgrade block entry
    FutureUpgradeBlockEntry,
    /// Number of ordinate values in this block
    NumberOfOrdinateValues,
    /// Minimum ordinate value of one corresponding variable
    MinimumOrdinateValue,
    /// Maximum ordinate value of one corresponding variable
    MaximumOrdinateValue,
    /// One ordinate value
    OrdinateValue,
}

impl BlockField {
    /// The field's identifier string.
    pub fn as_str(&self) -> &'static str {
        use BlockField::*;
        match self {
            BlockIdentifier => "block_identifier",
            SampleIdentifier => "sample_identifier",
            Year => "year",
            Month => "month",
            Day => "day",
            Hours => "hours",
            Minutes => "minutes",
            Seconds => "seconds",
            GmtOffset => "number_of_hours_in_advance_of_GMT",
            NumberOfLinesInComment => "number_of_lines_in_comment",
            Comment => "comment",
            Technique => "technique",
            XCoord => "x_coord",
            YCoord => "y_coord",
            ExperimentalVariableValue => "value_of_experimental_variable",
            AnalysisSourceLabel => "analysis_source_label",
            SputteringIon => "sputtering_ion",
            NumberOfAtomsInIon => "number_of_atoms_in_ion",
            SputteringIonCharge => "sputtering_ion_charge",
            SourceCharacteristicEnergy => "analysis_source_characteristic_energy",
            SourceStrength => "analysis_source_strength",
            SourceBeamWidthX => "analysis_source_beam_width_x",
            SourceBeamWidthY => "analysis_source_beam_width_y",
            FieldOfViewX => "field_of_view_x",
            FieldOfViewY => "field_of_view_y",
            FirstLinescanStartX => "first_linescan_xi",
            FirstLinescanStartY => "first_linescan_yi",
            FirstLinescanEndX => "first_linescan_xf",
            FirstLinescanEndY => "first_linescan_yf",
            LastLinescanEndX => "last_linescan_xf",
            LastLinescanEndY => "last_linescan_yf",
            SourcePolarAngle => "analysis_source_polar_aoi",
            SourceAzimuth => "analysis_source_azimuth",
            AnalyzerMode => "analyzer_mode",
            AnalyzerPassEnergy => "analyzer_pass_energy",
            DifferentialWidth => "differential_width",
            TransferLensMagnification => "magnification_of_analyzer_transfer_lens",
            AnalyzerWorkFunction => "analyzer_work_function",
            TargetBias => "target_bias",
            AnalysisWidthX => "analysis_width_x",
            AnalysisWidthY => "analysis_width_y",
            AnalyzerPolarTakeoff => "analyzer_polar_takeoff",
            AnalyzerAzimuthTakeoff => "analyzer_azimuth_takeoff",
            SpeciesLabel => "species_label",
            TransitionLabel => "transition_state_label",
            DetectedParticleCharge => "charge_of_detected_particle",
            AbscissaLabel => "abscissa_label",
            AbscissaUnits => "abscissa_units",
            AbscissaStart => "abscissa_start",
            AbscissaIncrement => "abscissa_increment",
            NumberOfCorrespondingVariables => "number_of_corresponding_variables",
            CorrespondingVariableLabel => "corresponding_variable_label",
            CorrespondingVariableUnits => "corresponding_variable_units",
            SignalMode => "signal_mode",
            SignalCollectionTime => "signal_collection_time",
            NumberOfScans => "number_of_scans",
            SignalTimeCorrection => "signal_time_correction",
            SputteringSourceEnergy => "sputtering_source_energy",
            SputteringSourceBeamCurrent => "sputtering_source_beam_current",
            SputteringSourceWidthX => "sputtering_source_width_x",
            SputteringSourceWidthY => "sputtering_source_width_y",
            SputteringSourcePolarAngle => "sputtering_source_polar_aoi",
            SputteringSourceAzimuth => "sputtering_source_azimuth",
            SputteringMode => "sputtering_mode",
            SampleNormalPolarTilt => "sample_normal_polar_tilt",
            SampleNormalAzimuthTilt => "sample_normal_azimuth_tilt",
            SampleRotationAngle => "sample_rotation_angle",
            NumberOfAdditionalParams => "number_of_additional_params",
            AdditionalParamLabel => "additional_param_label",
            AdditionalParamUnits => "additional_param_units",
            AdditionalParamValue => "additional_param_value",
            FutureUpgradeBlockEntry => "future_upgrade_block_entry",
            NumberOfOrdinateValues => "number_of_ordinate_values",
            MinimumOrdinateValue => "minimum_ordinate_value",
            MaximumOrdinateValue => "maximum_ordinate_value",
            OrdinateValue => "ordinate_value",
        }
    }
}

impl fmt::Display for BlockField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
