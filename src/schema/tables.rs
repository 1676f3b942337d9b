//! The schema tables themselves: one row per ordinal slot, in
//! file-declaration order. Pure data, consulted by both decoders.

use super::fields::{BlockField as B, ExperimentField as E};
use super::modes::{ExperimentMode as M, ScanMode, Technique as T};
use super::rules::{CountSource, FieldSpec, Gate, Rule};

/// Experiment modes that involve sputter depth profiling.
const DEPTH_PROFILE_MODES: &[M] = &[M::MAPDP, M::SDP, M::SDPV];

/// Ion- and particle-beam techniques that always carry sputtering-ion fields.
const ION_BEAM_TECHNIQUES: &[T] = &[
    T::Fabms,
    T::FabmsEnergySpec,
    T::Iss,
    T::Sims,
    T::SimsEnergySpec,
    T::Snms,
    T::SnmsEnergySpec,
];

/// Electron/photon spectroscopies that carry the sputtering-source septuple
/// when combined with a depth-profiling experiment mode.
const SPECTROSCOPY_TECHNIQUES: &[T] = &[
    T::AesDiff,
    T::AesDir,
    T::Edx,
    T::Els,
    T::Ups,
    T::Xps,
    T::Xrf,
];

/// The experiment header, slots in file order.
pub const EXPERIMENT_SCHEMA: &[FieldSpec<E>] = &[
    FieldSpec { slot: 1, rule: Rule::Fixed(E::FormatIdentifier) },
    FieldSpec { slot: 2, rule: Rule::Fixed(E::InstitutionIdentifier) },
    FieldSpec { slot: 3, rule: Rule::Fixed(E::InstrumentModelIdentifier) },
    FieldSpec { slot: 4, rule: Rule::Fixed(E::OperatorIdentifier) },
    FieldSpec { slot: 5, rule: Rule::Fixed(E::ExperimentIdentifier) },
    FieldSpec { slot: 6, rule: Rule::Fixed(E::NumberOfLinesInComment) },
    FieldSpec {
        slot: 6,
        rule: Rule::Counted {
            count: CountSource::Experiment(E::NumberOfLinesInComment),
            per_item: &[E::Comment],
        },
    },
    FieldSpec { slot: 7, rule: Rule::Fixed(E::ExperimentMode) },
    FieldSpec { slot: 8, rule: Rule::Fixed(E::ScanMode) },
    FieldSpec {
        slot: 9,
        rule: Rule::Gated {
            gate: Gate::ModeIn(&[M::MAP, M::MAPDP, M::NORM, M::SDP]),
            fields: &[E::NumberOfSpectralRegions],
        },
    },
    FieldSpec {
        slot: 10,
        rule: Rule::Gated {
            gate: Gate::ModeIn(&[M::MAP, M::MAPDP]),
            fields: &[
                E::NumberOfAnalysisPositions,
                E::NumberOfDiscreteX,
                E::NumberOfDiscreteY,
            ],
        },
    },
    FieldSpec { slot: 11, rule: Rule::Fixed(E::NumberOfExpVariables) },
    FieldSpec {
        slot: 11,
        rule: Rule::Counted {
            count: CountSource::Experiment(E::NumberOfExpVariables),
            per_item: &[E::ExpVariableLabel, E::ExpVariableUnit],
        },
    },
    FieldSpec { slot: 12, rule: Rule::Fixed(E::NumberOfEntriesInclusionList) },
    FieldSpec {
        slot: 12,
        rule: Rule::Counted {
            count: CountSource::Experiment(E::NumberOfEntriesInclusionList),
            per_item: &[E::InclusionPrefixNumber],
        },
    },
    FieldSpec { slot: 13, rule: Rule::Fixed(E::NumberOfManualEntries) },
    FieldSpec {
        slot: 13,
        rule: Rule::Counted {
            count: CountSource::Experiment(E::NumberOfManualEntries),
            per_item: &[E::ManualEntryPrefixNumber],
        },
    },
    FieldSpec { slot: 14, rule: Rule::Fixed(E::NumberOfFutureUpgradeExpEntries) },
    FieldSpec { slot: 15, rule: Rule::Fixed(E::NumberOfFutureUpgradeBlockEntries) },
    FieldSpec {
        slot: 15,
        rule: Rule::Counted {
            count: CountSource::Experiment(E::NumberOfFutureUpgradeExpEntries),
            per_item: &[E::FutureUpgradeExpEntry],
        },
    },
    FieldSpec { slot: 16, rule: Rule::Fixed(E::NumberOfBlocks) },
];

/// The block header: two fixed lines.
pub const BLOCK_HEADER_SCHEMA: &[FieldSpec<B>] = &[
    FieldSpec { slot: 1, rule: Rule::Fixed(B::BlockIdentifier) },
    FieldSpec { slot: 2, rule: Rule::Fixed(B::SampleIdentifier) },
];

/// The numbered block body, slots 1-40 of the 1988 standard.
pub const BLOCK_BODY_SCHEMA: &[FieldSpec<B>] = &[
    FieldSpec { slot: 1, rule: Rule::Fixed(B::Year) },
    FieldSpec { slot: 2, rule: Rule::Fixed(B::Month) },
    FieldSpec { slot: 3, rule: Rule::Fixed(B::Day) },
    FieldSpec { slot: 4, rule: Rule::Fixed(B::Hours) },
    FieldSpec { slot: 5, rule: Rule::Fixed(B::Minutes) },
    FieldSpec { slot: 6, rule: Rule::Fixed(B::Seconds) },
    FieldSpec { slot: 7, rule: Rule::Fixed(B::GmtOffset) },
    FieldSpec { slot: 8, rule: Rule::Fixed(B::NumberOfLinesInComment) },
    FieldSpec {
        slot: 8,
        rule: Rule::Counted {
            count: CountSource::Block(B::NumberOfLinesInComment),
            per_item: &[B::Comment],
        },
    },
    FieldSpec { slot: 9, rule: Rule::Fixed(B::Technique) },
    FieldSpec {
        slot: 10,
        rule: Rule::Gated {
            gate: Gate::ModeIn(&[M::MAP, M::MAPDP]),
            fields: &[B::XCoord, B::YCoord],
        },
    },
    FieldSpec {
        slot: 11,
        rule: Rule::Counted {
            count: CountSource::Experiment(E::NumberOfExpVariables),
            per_item: &[B::ExperimentalVariableValue],
        },
    },
    FieldSpec { slot: 12, rule: Rule::Fixed(B::AnalysisSourceLabel) },
    FieldSpec {
        slot: 13,
        rule: Rule::Gated {
            gate: Gate::ModeInOrTechniqueIn(DEPTH_PROFILE_MODES, ION_BEAM_TECHNIQUES),
            fields: &[B::SputteringIon, B::NumberOfAtomsInIon, B::SputteringIonCharge],
        },
    },
    FieldSpec { slot: 14, rule: Rule::Fixed(B::SourceCharacteristicEnergy) },
    FieldSpec { slot: 15, rule: Rule::Fixed(B::SourceStrength) },
    FieldSpec { slot: 16, rule: Rule::Fixed(B::SourceBeamWidthX) },
    FieldSpec { slot: 16, rule: Rule::Fixed(B::SourceBeamWidthY) },
    FieldSpec {
        slot: 17,
        rule: Rule::Gated {
            gate: Gate::ModeIn(&[M::MAP, M::MAPDP, M::MAPSV, M::SEM]),
            fields: &[B::FieldOfViewX, B::FieldOfViewY],
        },
    },
    FieldSpec {
        slot: 18,
        rule: Rule::Gated {
            gate: Gate::ModeIn(&[M::MAPSV, M::SEM]),
            fields: &[
                B::FirstLinescanStartX,
                B::FirstLinescanStartY,
                B::FirstLinescanEndX,
                B::FirstLinescanEndY,
                B::LastLinescanEndX,
                B::LastLinescanEndY,
            ],
        },
    },
    FieldSpec { slot: 19, rule: Rule::Fixed(B::SourcePolarAngle) },
    FieldSpec { slot: 20, rule: Rule::Fixed(B::SourceAzimuth) },
    FieldSpec { slot: 21, rule: Rule::Fixed(B::AnalyzerMode) },
    FieldSpec { slot: 22, rule: Rule::Fixed(B::AnalyzerPassEnergy) },
    FieldSpec {
        slot: 23,
        rule: Rule::Gated {
            gate: Gate::TechniqueIs(T::AesDiff),
            fields: &[B::DifferentialWidth],
        },
    },
    FieldSpec { slot: 24, rule: Rule::Fixed(B::TransferLensMagnification) },
    FieldSpec { slot: 25, rule: Rule::Fixed(B::AnalyzerWorkFunction) },
    FieldSpec { slot: 26, rule: Rule::Fixed(B::TargetBias) },
    FieldSpec { slot: 27, rule: Rule::Fixed(B::AnalysisWidthX) },
    FieldSpec { slot: 27, rule: Rule::Fixed(B::AnalysisWidthY) },
    FieldSpec { slot: 28, rule: Rule::Fixed(B::AnalyzerPolarTakeoff) },
    FieldSpec { slot: 28, rule: Rule::Fixed(B::AnalyzerAzimuthTakeoff) },
    FieldSpec { slot: 29, rule: Rule::Fixed(B::SpeciesLabel) },
    FieldSpec { slot: 30, rule: Rule::Fixed(B::TransitionLabel) },
    FieldSpec { slot: 30, rule: Rule::Fixed(B::DetectedParticleCharge) },
    FieldSpec {
        slot: 31,
        rule: Rule::Gated {
            gate: Gate::ScanModeIs(ScanMode::Regular),
            fields: &[
                B::AbscissaLabel,
                B::AbscissaUnits,
                B::AbscissaStart,
                B::AbscissaIncrement,
            ],
        },
    },
    FieldSpec { slot: 32, rule: Rule::Fixed(B::NumberOfCorrespondingVariables) },
    FieldSpec {
        slot: 32,
        rule: Rule::Counted {
            count: CountSource::Block(B::NumberOfCorrespondingVariables),
            per_item: &[B::CorrespondingVariableLabel, B::CorrespondingVariableUnits],
        },
    },
    FieldSpec { slot: 33, rule: Rule::Fixed(B::SignalMode) },
    FieldSpec { slot: 34, rule: Rule::Fixed(B::SignalCollectionTime) },
    FieldSpec { slot: 35, rule: Rule::Fixed(B::NumberOfScans) },
    FieldSpec { slot: 36, rule: Rule::Fixed(B::SignalTimeCorrection) },
    FieldSpec {
        slot: 37,
        rule: Rule::Gated {
            gate: Gate::TechniqueInAndModeIn(SPECTROSCOPY_TECHNIQUES, DEPTH_PROFILE_MODES),
            fields: &[
                B::SputteringSourceEnergy,
                B::SputteringSourceBeamCurrent,
                B::SputteringSourceWidthX,
                B::SputteringSourceWidthY,
                B::SputteringSourcePolarAngle,
                B::SputteringSourceAzimuth,
                B::SputteringMode,
            ],
        },
    },
    FieldSpec { slot: 38, rule: Rule::Fixed(B::SampleNormalPolarTilt) },
    FieldSpec { slot: 38, rule: Rule::Fixed(B::SampleNormalAzimuthTilt) },
    FieldSpec { slot: 39, rule: Rule::Fixed(B::SampleRotationAngle) },
    FieldSpec { slot: 40, rule: Rule::Fixed(B::NumberOfAdditionalParams) },
    FieldSpec {
        slot: 40,
        rule: Rule::Counted {
            count: CountSource::Block(B::NumberOfAdditionalParams),
            per_item: &[
                B::AdditionalParamLabel,
                B::AdditionalParamUnits,
                B::AdditionalParamValue,
            ],
        },
    },
];

/// The block footer: future-upgrade entries (keyed by the experiment-level
/// count), the ordinate-value count, one min/max pair per corresponding
/// variable, then the interleaved ordinate data itself.
pub const BLOCK_FOOTER_SCHEMA: &[FieldSpec<B>] = &[
    FieldSpec {
        slot: 41,
        rule: Rule::Counted {
            count: CountSource::Experiment(E::NumberOfFutureUpgradeBlockEntries),
            per_item: &[B::FutureUpgradeBlockEntry],
        },
    },
    FieldSpec { slot: 42, rule: Rule::Fixed(B::NumberOfOrdinateValues) },
    FieldSpec {
        slot: 43,
        rule: Rule::Counted {
            count: CountSource::Block(B::NumberOfCorrespondingVariables),
            per_item: &[B::MinimumOrdinateValue, B::MaximumOrdinateValue],
        },
    },
    FieldSpec {
        slot: 44,
        rule: Rule::Counted {
            count: CountSource::Block(B::NumberOfOrdinateValues),
            per_item: &[B::OrdinateValue],
        },
    },
];
