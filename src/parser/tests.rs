use super::*;
use crate::record::QueryError;
use crate::schema::{ExperimentMode, ScanMode};
use std::io::Cursor;

fn decode(text: &str) -> Result<crate::record::ExperimentRecord> {
    VamasParser::from_reader(Cursor::new(text.to_string())).map(VamasParser::into_experiment)
}

/// Experiment header: NORM / REGULAR, two experimental variables, no
/// inclusion/manual/future-upgrade entries.
fn norm_header(blocks: usize) -> Vec<String> {
    [
        "VAMAS Surface Chemical Analysis Standard Data Transfer Format 1988 May 4",
        "Acme Institute",
        "Acme 5000",
        "J. Smith",
        "ITO depth series",
        "2",
        "XPS survey",
        "second comment line",
        "NORM",
        "REGULAR",
        "1", // number_of_spectral_regions (gated in for NORM)
        "2", // number_of_exp_variables
        "Temp",
        "K",
        "Pressure",
        "Pa",
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

/// One XPS block compatible with [`norm_header`]: two corresponding
/// variables, six interleaved ordinate values.
fn xps_block(identifier: &str) -> Vec<String> {
    [
        identifier,
        "Sample A",
        "2021",
        "11",
        "24",
        "10",
        "30",
        "0",
        "1", // GMT offset
        "1", // block comment lines
        "survey scan",
        "XPS",
        "300",  // experimental variable values (2, from the header)
        "1.2",
        "Al Ka",
        "1486.6", // characteristic energy
        "300",    // source strength
        "1",      // beam width x
        "1",      // beam width y
        "54.4",   // source polar angle
        "180",    // source azimuth
        "FAT",
        "50", // pass energy
        "1",  // transfer lens magnification
        "4.5",
        "0", // target bias
        "1", // analysis width x
        "1", // analysis width y
        "0", // polar takeoff
        "0", // azimuth takeoff
        "In",
        "3d",
        "-1",             // detected particle charge
        "kinetic energy", // abscissa quadruple (REGULAR)
        "eV",
        "100.0",
        "-0.5",
        "2", // corresponding variables
        "counts",
        "c/s",
        "ratio",
        "d",
        "pulse counting",
        "0.1",
        "5",
        "0",
        "0", // sample normal polar tilt
        "0", // sample normal azimuth tilt
        "0", // rotation angle
        "1", // additional params
        "etch level",
        "d",
        "42",
        "6", // ordinate values
        "1",
        "3", // min/max variable 1
        "10",
        "30", // min/max variable 2
        "1",
        "10",
        "2",
        "20",
        "3",
        "30",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn join(parts: Vec<Vec<String>>) -> String {
    let mut lines: Vec<String> = Vec::new();
    for part in parts {
        lines.extend(part);
    }
    lines.join("\n")
}

#[test]
fn test_decode_single_block() {
    let text = join(vec![norm_header(1), xps_block("In 3d")]);
    let experiment = decode(&text).unwrap();

    assert_eq!(experiment.experiment_mode, ExperimentMode::NORM);
    assert_eq!(experiment.scan_mode, ScanMode::Regular);
    assert_eq!(experiment.number_of_blocks, 1);
    assert_eq!(experiment.blocks.len(), 1);
    assert_eq!(experiment.number_of_spectral_regions, Some(1));
    // MAP-only counts were gated out.
    assert_eq!(experiment.number_of_analysis_positions, None);
    assert_eq!(experiment.comment, vec!["XPS survey", "second comment line"]);

    // Label/unit pairs preserve pairing order.
    assert_eq!(experiment.experimental_variable_labels, vec!["Temp", "Pressure"]);
    assert_eq!(experiment.experimental_variable_units, vec!["K", "Pa"]);

    let block = experiment.block(0).unwrap();
    assert_eq!(block.block_identifier, "In 3d");
    assert_eq!(block.technique, "XPS");
    assert_eq!(block.experimental_variable_values, vec!["300", "1.2"]);
    assert_eq!(block.corresponding_variable_labels, vec!["counts", "ratio"]);
    assert_eq!(block.corresponding_variable_units, vec!["c/s", "d"]);
    assert_eq!(block.additional_param_labels, vec!["etch level"]);
    assert_eq!(block.additional_param_values, vec!["42"]);
    assert_eq!(block.number_of_ordinate_values, 6);
    assert_eq!(block.minimum_ordinate_values, vec![1.0, 10.0]);
    assert_eq!(block.maximum_ordinate_values, vec![3.0, 30.0]);

    // Round-robin de-interleaving.
    assert_eq!(block.ordinate_series(0).unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(block.ordinate_series(1).unwrap(), &[10.0, 20.0, 30.0]);

    // Affine axis reconstruction.
    assert_eq!(block.abscissa_axis().unwrap(), vec![100.0, 99.5, 99.0]);
}

#[test]
fn test_gated_fields_absent_not_defaulted() {
    let text = join(vec![norm_header(1), xps_block("In 3d")]);
    let experiment = decode(&text).unwrap();
    let block = experiment.block(0).unwrap();

    // NORM: no map coordinates, no field of view, no sputtering fields.
    assert_eq!(block.x_coord, None);
    assert_eq!(block.field_of_view_x, None);
    assert_eq!(block.sputtering_ion, None);
    assert_eq!(block.sputtering_source_energy, None);
    assert_eq!(
        block.field(crate::schema::BlockField::FieldOfViewX),
        Err(QueryError::AbsentField { field: "field_of_view_x" })
    );
}

#[test]
fn test_decode_two_blocks_resets_per_block_state() {
    let mut second = xps_block("Sn 3d");
    // Second block carries no comment lines: counter must reset between blocks.
    second[9] = "0".to_string();
    second.remove(10);

    let text = join(vec![norm_header(2), xps_block("In 3d"), second]);
    let experiment = decode(&text).unwrap();

    assert_eq!(experiment.blocks.len(), 2);
    assert_eq!(experiment.block(0).unwrap().comment, vec!["survey scan"]);
    assert!(experiment.block(1).unwrap().comment.is_empty());
    assert_eq!(experiment.block(1).unwrap().block_identifier, "Sn 3d");
    assert_eq!(
        experiment.block(1).unwrap().ordinate_series(1).unwrap(),
        &[10.0, 20.0, 30.0]
    );
}

#[test]
fn test_decode_is_deterministic() {
    let text = join(vec![norm_header(1), xps_block("In 3d")]);
    let first = decode(&text).unwrap();
    let second = decode(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_experiment_mode_is_fatal() {
    let mut header = norm_header(0);
    header[8] = "MAPSVDP".to_string();
    let text = join(vec![header]);
    match decode(&text) {
        Err(DecodeError::UnknownExperimentMode { token, line }) => {
            assert_eq!(token, "MAPSVDP");
            assert_eq!(line, 9);
        }
        other => panic!("expected UnknownExperimentMode, got {other:?}"),
    }
}

#[test]
fn test_unknown_scan_mode_is_fatal() {
    let mut header = norm_header(0);
    header[9] = "SOMETIMES".to_string();
    let text = join(vec![header]);
    assert!(matches!(
        decode(&text),
        Err(DecodeError::UnknownScanMode { .. })
    ));
}

#[test]
fn test_unknown_technique_degrades_with_warning() {
    let mut block = xps_block("In 3d");
    block[11] = "LEED".to_string();
    let text = join(vec![norm_header(1), block]);

    let experiment = decode(&text).unwrap();
    let block = experiment.block(0).unwrap();
    // Raw token preserved; technique-gated fields simply absent.
    assert_eq!(block.technique, "LEED");
    assert_eq!(block.differential_width, None);
}

#[test]
fn test_malformed_count_names_field_and_line() {
    let mut header = norm_header(1);
    header[5] = "two".to_string(); // number_of_lines_in_comment
    let text = join(vec![header, xps_block("In 3d")]);
    match decode(&text) {
        Err(DecodeError::MalformedCount { field, line, token }) => {
            assert_eq!(field, "number_of_lines_in_comment");
            assert_eq!(line, 6);
            assert_eq!(token, "two");
        }
        other => panic!("expected MalformedCount, got {other:?}"),
    }
}

#[test]
fn test_negative_block_count_is_fatal() {
    let text = join(vec![norm_header(0)]).replacen("\n0", "\n-1", 4);
    // The first negative count encountered aborts the decode.
    assert!(matches!(
        decode(&text),
        Err(DecodeError::NegativeCount { .. })
    ));
}

#[test]
fn test_missing_block_ends_in_premature_end() {
    // Two blocks declared, only one present.
    let text = join(vec![norm_header(2), xps_block("In 3d")]);
    match decode(&text) {
        Err(DecodeError::PrematureEnd { expected, .. }) => {
            assert_eq!(expected, "block_identifier");
        }
        other => panic!("expected PrematureEnd, got {other:?}"),
    }
}

#[test]
fn test_truncated_ordinate_data_is_premature_end() {
    let mut block = xps_block("In 3d");
    block.truncate(block.len() - 2); // drop the last two ordinate lines
    let text = join(vec![norm_header(1), block]);
    assert!(matches!(
        decode(&text),
        Err(DecodeError::PrematureEnd { expected: "ordinate_value", .. })
    ));
}

#[test]
fn test_ordinate_remainder_is_fatal() {
    let mut block = xps_block("In 3d");
    let count_index = block.len() - 11; // the "6" ordinate-count line
    assert_eq!(block[count_index], "6");
    block[count_index] = "5".to_string();
    block.truncate(block.len() - 1);
    let text = join(vec![norm_header(1), block]);
    match decode(&text) {
        Err(DecodeError::OrdinateRemainder { count, variables }) => {
            assert_eq!(count, 5);
            assert_eq!(variables, 2);
        }
        other => panic!("expected OrdinateRemainder, got {other:?}"),
    }
}

#[test]
fn test_malformed_ordinate_value() {
    let mut block = xps_block("In 3d");
    let last = block.len() - 1;
    block[last] = "thirty".to_string();
    let text = join(vec![norm_header(1), block]);
    assert!(matches!(
        decode(&text),
        Err(DecodeError::MalformedNumber { field: "ordinate_value", .. })
    ));
}

#[test]
fn test_trailing_content_ignored() {
    let text = join(vec![
        norm_header(1),
        xps_block("In 3d"),
        vec!["trailing garbage".to_string(), "more garbage".to_string()],
    ]);
    let experiment = decode(&text).unwrap();
    assert_eq!(experiment.blocks.len(), 1);
}

/// MAPDP experiment: the map/depth-profile gates all hold, so the header
/// carries the position counts and each block carries map coordinates, the
/// sputtering-ion triple and the sputtering-source septuple.
#[test]
fn test_mapdp_gates_include_optional_fields() {
    let header: Vec<String> = [
        "VAMAS Surface Chemical Analysis Standard Data Transfer Format 1988 May 4",
        "Acme Institute",
        "Acme 5000",
        "J. Smith",
        "sputter map",
        "0", // no comment
        "MAPDP",
        "REGULAR",
        "1", // spectral regions
        "4", // analysis positions
        "2", // discrete x
        "2", // discrete y
        "0", // experimental variables
        "0", // inclusion list
        "0", // manual entries
        "0", // future upgrade experiment entries
        "0", // future upgrade block entries
        "1",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let block: Vec<String> = [
        "map point 1",
        "Sample B",
        "2022",
        "3",
        "1",
        "9",
        "0",
        "0",
        "0",  // GMT offset
        "0",  // comment lines
        "XPS",
        "10", // x coordinate (MAPDP)
        "20", // y coordinate (MAPDP)
        "Al Ka",
        "Ar+", // sputtering ion triple (MAPDP)
        "1",
        "1",
        "1486.6",
        "300",
        "1",
        "1",
        "100", // field of view x (MAPDP)
        "100", // field of view y (MAPDP)
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
        "10.0",
        "1.0",
        "1", // corresponding variables
        "counts",
        "c/s",
        "pulse counting",
        "0.1",
        "1",
        "0",
        "1000", // sputtering-source septuple (XPS + MAPDP)
        "50",
        "2",
        "2",
        "45",
        "90",
        "continuous",
        "0",
        "0",
        "0",
        "0", // additional params
        "2", // ordinate values
        "5",
        "7", // min/max variable 1
        "5",
        "7",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let experiment = decode(&join(vec![header, block])).unwrap();
    assert_eq!(experiment.number_of_analysis_positions, Some(4));

    let block = experiment.block(0).unwrap();
    assert_eq!(block.x_coord.as_deref(), Some("10"));
    assert_eq!(block.y_coord.as_deref(), Some("20"));
    assert_eq!(block.sputtering_ion.as_deref(), Some("Ar+"));
    assert_eq!(block.field_of_view_x.as_deref(), Some("100"));
    assert_eq!(block.sputtering_source_energy.as_deref(), Some("1000"));
    assert_eq!(block.sputtering_mode.as_deref(), Some("continuous"));
    assert_eq!(block.ordinate_series(0).unwrap(), &[5.0, 7.0]);
    assert_eq!(block.abscissa_axis().unwrap(), vec![10.0, 11.0]);
}

#[test]
fn test_zero_corresponding_variables_with_zero_ordinates() {
    let mut block = xps_block("In 3d");
    // Rewrite the tail: no corresponding variables, no ordinate data.
    block.truncate(block.len() - 27);
    block.extend(
        [
            "0", // corresponding variables
            "pulse counting",
            "0.1",
            "5",
            "0",
            "0",
            "0",
            "0",
            "0", // additional params
            "0", // ordinate values
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    let text = join(vec![norm_header(1), block]);
    let experiment = decode(&text).unwrap();
    let block = experiment.block(0).unwrap();
    assert_eq!(block.ordinate.variables(), 0);
    assert_eq!(block.ordinate.total_values(), 0);
}
