//! Integration tests for the VAMAS decoder.
//!
//! These exercise the full pipeline over synthetic files: header decoding,
//! block decoding with mode/technique gating, ordinate de-interleaving and
//! the query interface.

use std::io::Cursor;

use proptest::prelude::*;

use vamas::parser::{DecodeError, VamasParser};
use vamas::record::ExperimentRecord;

/// A minimal NORM/REGULAR experiment header with no experimental variables.
fn header(blocks: usize) -> Vec<String> {
    [
        "VAMAS Surface Chemical Analysis Standard Data Transfer Format 1988 May 4",
        "Test Institute",
        "Test 1000",
        "operator",
        "synthetic experiment",
        "0", // comment lines
        "NORM",
        "REGULAR",
        "1", // spectral regions
        "0", // experimental variables
        "0", // inclusion list
        "0", // manual entries
        "0", // future upgrade experiment entries
        "0", // future upgrade block entries
    ]
    .iter()
    .map(|s| s.to_string())
    .chain(std::iter::once(blocks.to_string()))
    .collect()
}

/// One XPS block with `variables` corresponding variables and the given
/// interleaved ordinate values on a `start + increment * i` axis.
fn block(identifier: &str, variables: usize, values: &[f64], start: f64, increment: f64) -> Vec<String> {
    let mut lines: Vec<String> = [
        identifier,
        "sample",
        "2020",
        "6",
        "15",
        "12",
        "0",
        "0",
        "0", // GMT offset
        "0", // comment lines
        "XPS",
        "Al Ka",
        "1486.6",
        "300",
        "1",
        "1",
        "54.4",
        "180",
        "FAT",
        "50",
        "1",
        "4.5",
        "0",
        "1",
        "1",
        "0",
        "0",
        "In",
        "3d",
        "-1",
        "kinetic energy",
        "eV",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    lines.push(start.to_string());
    lines.push(increment.to_string());
    lines.push(variables.to_string());
    for v in 0..variables {
        lines.push(format!("channel {v}"));
        lines.push("d".to_string());
    }
    lines.extend(
        ["pulse counting", "0.1", "1", "0", "0", "0", "0", "0"]
            .iter()
            .map(|s| s.to_string()),
    );
    lines.push(values.len().to_string());
    for _ in 0..variables {
        lines.push("0".to_string()); // minimum ordinate value
        lines.push("1".to_string()); // maximum ordinate value
    }
    lines.extend(values.iter().map(|v| v.to_string()));
    lines
}

fn decode(lines: Vec<String>) -> Result<ExperimentRecord, DecodeError> {
    VamasParser::from_reader(Cursor::new(lines.join("\n")))
        .map(VamasParser::into_experiment)
}

#[test]
fn test_block_count_matches_blocks_decoded() {
    for count in [0usize, 1, 3] {
        let mut lines = header(count);
        for i in 0..count {
            lines.extend(block(&format!("region {i}"), 1, &[1.0, 2.0], 10.0, 1.0));
        }
        let experiment = decode(lines).unwrap();
        assert_eq!(experiment.number_of_blocks as usize, count);
        assert_eq!(experiment.blocks.len(), count);
    }
}

#[test]
fn test_round_robin_deinterleaving() {
    let mut lines = header(1);
    lines.extend(block("dual", 2, &[1.0, 10.0, 2.0, 20.0, 3.0, 30.0], 100.0, -0.5));
    let experiment = decode(lines).unwrap();
    let block = experiment.block(0).unwrap();

    assert_eq!(block.ordinate_series(0).unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(block.ordinate_series(1).unwrap(), &[10.0, 20.0, 30.0]);
    assert_eq!(block.abscissa_axis().unwrap(), vec![100.0, 99.5, 99.0]);
}

#[test]
fn test_conditional_fields_absent_for_norm() {
    let mut lines = header(1);
    lines.extend(block("survey", 1, &[5.0], 0.0, 1.0));
    let experiment = decode(lines).unwrap();
    let block = experiment.block(0).unwrap();

    assert_eq!(experiment.number_of_analysis_positions, None);
    assert_eq!(block.x_coord, None);
    assert_eq!(block.field_of_view_x, None);
    assert_eq!(block.sputtering_source_energy, None);
}

#[test]
fn test_declared_blocks_exceed_present_blocks() {
    let mut lines = header(2);
    lines.extend(block("only one", 1, &[5.0], 0.0, 1.0));
    assert!(matches!(
        decode(lines),
        Err(DecodeError::PrematureEnd { .. })
    ));
}

#[test]
fn test_decode_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("synthetic.vms");

    let mut lines = header(1);
    lines.extend(block("from disk", 1, &[7.0, 8.0], 50.0, 0.25));
    std::fs::write(&path, lines.join("\r\n")).unwrap();

    let experiment = vamas::parser::decode_file(&path).unwrap();
    assert_eq!(experiment.blocks.len(), 1);
    // CRLF endings are stripped.
    assert_eq!(experiment.block(0).unwrap().block_identifier, "from disk");
    assert_eq!(experiment.block(0).unwrap().ordinate_series(0).unwrap(), &[7.0, 8.0]);
}

proptest! {
    /// Every valid (N, M) interleaving de-interleaves into N series of
    /// length M, preserving arrival order within each variable.
    #[test]
    fn prop_deinterleave_shapes(variables in 1usize..5, samples in 0usize..24) {
        let values: Vec<f64> = (0..variables * samples)
            .map(|k| (k * 7 % 101) as f64)
            .collect();

        let mut lines = header(1);
        lines.extend(block("prop", variables, &values, 0.0, 1.0));
        let experiment = decode(lines).unwrap();
        let block = experiment.block(0).unwrap();

        prop_assert_eq!(block.ordinate.variables(), variables);
        for v in 0..variables {
            let series = block.ordinate_series(v).unwrap();
            prop_assert_eq!(series.len(), samples);
            for (m, &value) in series.iter().enumerate() {
                prop_assert_eq!(value, values[m * variables + v]);
            }
        }
    }

    /// Axis reconstruction is affine in the sample index.
    #[test]
    fn prop_axis_is_affine(
        start in -1000.0f64..1000.0,
        increment in -10.0f64..10.0,
        samples in 1usize..32,
    ) {
        let values: Vec<f64> = vec![0.0; samples];
        let mut lines = header(1);
        lines.extend(block("axis", 1, &values, start, increment));
        let experiment = decode(lines).unwrap();

        let axis = experiment.block(0).unwrap().abscissa_axis().unwrap();
        prop_assert_eq!(axis.len(), samples);
        for (i, &x) in axis.iter().enumerate() {
            prop_assert!((x - (start + increment * i as f64)).abs() < 1e-9);
        }
    }

    /// Byte-identical input decodes to structurally equal records.
    #[test]
    fn prop_decode_is_deterministic(samples in 0usize..8) {
        let values: Vec<f64> = (0..samples * 2).map(|k| k as f64).collect();
        let mut lines = header(1);
        lines.extend(block("same", 2, &values, 1.0, 1.0));

        let first = decode(lines.clone()).unwrap();
        let second = decode(lines).unwrap();
        prop_assert_eq!(first, second);
    }
}
