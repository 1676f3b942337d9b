use super::*;
use std::str::FromStr;

#[test]
fn test_mode_tokens_round_trip() {
    for mode in ExperimentMode::ALL {
        assert_eq!(ExperimentMode::from_str(mode.as_str()), Ok(*mode));
    }
    for scan in ScanMode::ALL {
        assert_eq!(ScanMode::from_str(scan.as_str()), Ok(*scan));
    }
    for technique in Technique::ALL {
        assert_eq!(Technique::from_str(technique.as_str()), Ok(*technique));
    }
}

#[test]
fn test_technique_accepts_underscore_spelling() {
    assert_eq!(Technique::from_str("AES_diff"), Ok(Technique::AesDiff));
    assert_eq!(
        Technique::from_str("SIMS_energy_spec"),
        Ok(Technique::SimsEnergySpec)
    );
}

#[test]
fn test_unknown_tokens_rejected() {
    assert!(ExperimentMode::from_str("MAPSVDP").is_err());
    assert!(ScanMode::from_str("SOMETIMES").is_err());
    assert!(Technique::from_str("LEED").is_err());
}

#[test]
fn test_experiment_schema_slot_order() {
    let slots: Vec<u16> = EXPERIMENT_SCHEMA.iter().map(|s| s.slot).collect();
    let mut sorted = slots.clone();
    sorted.sort_unstable();
    assert_eq!(slots, sorted, "experiment slots must be in file order");
    assert_eq!(*slots.last().unwrap(), 16);
}

#[test]
fn test_block_body_schema_slot_order() {
    let slots: Vec<u16> = BLOCK_BODY_SCHEMA.iter().map(|s| s.slot).collect();
    let mut sorted = slots.clone();
    sorted.sort_unstable();
    assert_eq!(slots, sorted, "block slots must be in file order");
    assert_eq!(*slots.first().unwrap(), 1);
    assert_eq!(*slots.last().unwrap(), 40);
}

#[test]
fn test_gate_membership_not_always_true() {
    // A NORM experiment must fail every map-only gate.
    let gate = Gate::ModeIn(&[ExperimentMode::MAP, ExperimentMode::MAPDP]);
    assert!(!gate.holds(Some(ExperimentMode::NORM), None, None));
    assert!(gate.holds(Some(ExperimentMode::MAPDP), None, None));
}

#[test]
fn test_compound_gates() {
    let sput_ion = Gate::ModeInOrTechniqueIn(
        &[ExperimentMode::MAPDP, ExperimentMode::SDP, ExperimentMode::SDPV],
        &[Technique::Sims, Technique::Iss],
    );
    // Ion technique alone is enough.
    assert!(sput_ion.holds(Some(ExperimentMode::NORM), None, Some(Technique::Sims)));
    // Depth-profile mode alone is enough.
    assert!(sput_ion.holds(Some(ExperimentMode::SDP), None, Some(Technique::Xps)));
    // Neither: absent.
    assert!(!sput_ion.holds(Some(ExperimentMode::NORM), None, Some(Technique::Xps)));

    let sput_source = Gate::TechniqueInAndModeIn(
        &[Technique::Xps],
        &[ExperimentMode::MAPDP, ExperimentMode::SDP],
    );
    assert!(sput_source.holds(Some(ExperimentMode::SDP), None, Some(Technique::Xps)));
    assert!(!sput_source.holds(Some(ExperimentMode::NORM), None, Some(Technique::Xps)));
    // Undetermined technique fails the conjunction.
    assert!(!sput_source.holds(Some(ExperimentMode::SDP), None, None));
}

#[test]
fn test_undetermined_technique_fails_technique_gates() {
    let gate = Gate::TechniqueIs(Technique::AesDiff);
    assert!(!gate.holds(Some(ExperimentMode::NORM), None, None));
}
