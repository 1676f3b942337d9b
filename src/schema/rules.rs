//! Presence and repetition rules.
//!
//! Every schema row carries one [`Rule`]. The decoders evaluate rules against
//! the decode context; the rules themselves are pure data.

use super::fields::{BlockField, ExperimentField};
use super::modes::{ExperimentMode, ScanMode, Technique};

/// One row of a schema table: an ordinal slot plus the rule governing it.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<F: 'static> {
    /// Nominal ordinal slot in file-declaration order. Fields sharing a slot
    /// (paired labels/units, multi-line groups) appear as separate entries or
    /// destination lists under the same number.
    pub slot: u16,
    /// The presence/repetition rule for this slot.
    pub rule: Rule<F>,
}

/// Presence/repetition rule kinds.
#[derive(Debug, Clone, Copy)]
pub enum Rule<F: 'static> {
    /// Exactly one line, unconditional.
    Fixed(F),
    /// Conditional-skip group: when `gate` does not hold, every field in the
    /// group is absent and consumes no lines (skip-width = `fields.len()`).
    Gated {
        /// Predicate over previously decoded mode/technique values.
        gate: Gate,
        /// The fields of the group, in line order.
        fields: &'static [F],
    },
    /// Counted-repeat: the repetition count is the value of a previously
    /// decoded count field. Each repetition consumes one line per entry in
    /// `per_item`, cycling through the destinations (two destinations form a
    /// paired slot, three a label/unit/value triple). A count of zero yields
    /// empty sequences, not absent fields.
    Counted {
        /// Which previously decoded field supplies the repetition count.
        count: CountSource,
        /// Destination fields cycled once per repetition.
        per_item: &'static [F],
    },
}

/// Names the previously decoded integer field that supplies a repetition
/// count. Block-level rules may be keyed by experiment-level counts (e.g. the
/// per-block experimental-variable values and future-upgrade entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSource {
    /// A count decoded in the experiment header.
    Experiment(ExperimentField),
    /// A count decoded earlier in the same block.
    Block(BlockField),
}

/// A pure predicate over already-decoded enumeration values.
///
/// All mode/technique conditions are membership tests against explicit sets;
/// an undetermined technique (unrecognised token) fails every technique
/// condition, so the gated fields are treated as absent.
#[derive(Debug, Clone, Copy)]
pub enum Gate {
    /// Experiment mode is a member of the set.
    ModeIn(&'static [ExperimentMode]),
    /// Scan mode equals the given value.
    ScanModeIs(ScanMode),
    /// Block technique equals the given value.
    TechniqueIs(Technique),
    /// Experiment mode is in the first set, or technique is in the second.
    ModeInOrTechniqueIn(&'static [ExperimentMode], &'static [Technique]),
    /// Technique is in the first set and experiment mode is in the second.
    TechniqueInAndModeIn(&'static [Technique], &'static [ExperimentMode]),
}

impl Gate {
    /// Evaluate the predicate against decoded enumeration values.
    pub fn holds(
        &self,
        mode: Option<ExperimentMode>,
        scan_mode: Option<ScanMode>,
        technique: Option<Technique>,
    ) -> bool {
        match self {
            Gate::ModeIn(set) => mode.is_some_and(|m| set.contains(&m)),
            Gate::ScanModeIs(want) => scan_mode == Some(*want),
            Gate::TechniqueIs(want) => technique == Some(*want),
            Gate::ModeInOrTechniqueIn(modes, techniques) => {
                mode.is_some_and(|m| modes.contains(&m))
                    || technique.is_some_and(|t| techniques.contains(&t))
            }
            Gate::TechniqueInAndModeIn(techniques, modes) => {
                technique.is_some_and(|t| techniques.contains(&t))
                    && mode.is_some_and(|m| modes.contains(&m))
            }
        }
    }
}
