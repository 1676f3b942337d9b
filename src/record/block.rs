//! One block of a VAMAS experiment: metadata fields in slot order plus the
//! de-interleaved ordinate-value matrix.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::Serialize;

use crate::schema::BlockField;

use super::error::QueryError;

/// The ordinate-value matrix of one block.
///
/// Semantically an ordered sequence of N corresponding variables, each
/// holding M samples. The source interleaves values line by line, cycling
/// through all N variables before advancing to the next sample index; the
/// decoder routes sample `k` to variable `k mod N`, so the stored series are
/// already de-interleaved and of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrdinateMatrix {
    series: Vec<Vec<f64>>,
}

impl OrdinateMatrix {
    /// Create an empty matrix with `variables` corresponding variables.
    pub(crate) fn with_variables(variables: usize) -> Self {
        Self {
            series: vec![Vec::new(); variables],
        }
    }

    /// Append the sample with interleaved index `index` (file arrival order).
    pub(crate) fn push_interleaved(&mut self, index: usize, value: f64) {
        let n = self.series.len();
        if n > 0 {
            self.series[index % n].push(value);
        }
    }

    /// Number of corresponding variables (N).
    pub fn variables(&self) -> usize {
        self.series.len()
    }

    /// Number of samples per variable (M).
    pub fn samples_per_variable(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    /// Total number of stored samples (N * M).
    pub fn total_values(&self) -> usize {
        self.series.iter().map(Vec::len).sum()
    }

    /// One variable's sample sequence, if the index is in range.
    pub fn series(&self, index: usize) -> Option<&[f64]> {
        self.series.get(index).map(Vec::as_slice)
    }

    /// Iterate over the per-variable sample sequences in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.series.iter().map(Vec::as_slice)
    }
}

/// One decoded block, fields in the slot order of the 1988 standard.
///
/// Scalars are kept as the raw line text except for the fields that feed
/// axis/series reconstruction (abscissa start/increment, min/max and
/// ordinate values), which are decoded to `f64`, and the structural counts,
/// which are decoded to integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockRecord {
    /// Block identifier
    pub block_identifier: String,
    /// Sample identifier
    pub sample_identifier: String,
    /// Year of acquisition
    pub year: String,
    /// Month of acquisition
    pub month: String,
    /// Day of acquisition
    pub day: String,
    /// Hour of acquisition
    pub hours: String,
    /// Minutes of acquisition
    pub minutes: String,
    /// Seconds of acquisition
    pub seconds: String,
    /// Hours in advance of GMT
    pub gmt_offset: String,
    /// Block comment lines
    pub comment: Vec<String>,
    /// Technique token as it appeared in the file
    pub technique: String,
    /// Map x coordinate (MAP/MAPDP only)
    pub x_coord: Option<String>,
    /// Map y coordinate (MAP/MAPDP only)
    pub y_coord: Option<String>,
    /// One value per experiment-level experimental variable
    pub experimental_variable_values: Vec<String>,
    /// Analysis source label
    pub analysis_source_label: String,
    /// Sputtering ion species (depth-profile modes or ion-beam techniques)
    pub sputtering_ion: Option<String>,
    /// Number of atoms in the sputtering ion
    pub number_of_atoms_in_ion: Option<String>,
    /// Sputtering ion charge
    pub sputtering_ion_charge: Option<String>,
    /// Analysis source characteristic energy
    pub source_characteristic_energy: String,
    /// Analysis source strength
    pub source_strength: String,
    /// Analysis source beam width along x
    pub source_beam_width_x: String,
    /// Analysis source beam width along y
    pub source_beam_width_y: String,
    /// Field of view along x (map/imaging modes only)
    pub field_of_view_x: Option<String>,
    /// Field of view along y (map/imaging modes only)
    pub field_of_view_y: Option<String>,
    /// First linescan start x (linescan modes only)
    pub first_linescan_start_x: Option<String>,
    /// First linescan start y
    pub first_linescan_start_y: Option<String>,
    /// First linescan finish x
    pub first_linescan_end_x: Option<String>,
    /// First linescan finish y
    pub first_linescan_end_y: Option<String>,
    /// Last linescan finish x
    pub last_linescan_end_x: Option<String>,
    /// Last linescan finish y
    pub last_linescan_end_y: Option<String>,
    /// Analysis source polar angle of incidence
    pub source_polar_angle: String,
    /// Analysis source azimuth
    pub source_azimuth: String,
    /// Analyser mode
    pub analyzer_mode: String,
    /// Analyser pass energy / retard ratio / mass resolution
    pub analyzer_pass_energy: String,
    /// Differential width (AES diff only)
    pub differential_width: Option<String>,
    /// Magnification of the analyser transfer lens
    pub transfer_lens_magnification: String,
    /// Analyser work function or acceptance energy
    pub analyzer_work_function: String,
    /// Target bias
    pub target_bias: String,
    /// Analysis width along x
    pub analysis_width_x: String,
    /// Analysis width along y
    pub analysis_width_y: String,
    /// Analyser axis polar take-off angle
    pub analyzer_polar_takeoff: String,
    /// Analyser axis azimuth take-off angle
    pub analyzer_azimuth_takeoff: String,
    /// Species label
    pub species_label: String,
    /// Transition or charge state label
    pub transition_label: String,
    /// Charge of the detected particle
    pub detected_particle_charge: String,
    /// Abscissa label (REGULAR scan mode only)
    pub abscissa_label: Option<String>,
    /// Abscissa units (REGULAR scan mode only)
    pub abscissa_units: Option<String>,
    /// Abscissa start value (REGULAR scan mode only)
    pub abscissa_start: Option<f64>,
    /// Abscissa increment (REGULAR scan mode only)
    pub abscissa_increment: Option<f64>,
    /// Declared number of corresponding variables
    pub number_of_corresponding_variables: i64,
    /// One label per corresponding variable
    pub corresponding_variable_labels: Vec<String>,
    /// One unit per corresponding variable
    pub corresponding_variable_units: Vec<String>,
    /// Signal mode
    pub signal_mode: String,
    /// Signal collection time per ordinate value
    pub signal_collection_time: String,
    /// Number of scans compiled into this block
    pub number_of_scans: String,
    /// Signal time correction
    pub signal_time_correction: String,
    /// Sputtering source energy (depth-profile spectroscopies only)
    pub sputtering_source_energy: Option<String>,
    /// Sputtering source beam current
    pub sputtering_source_beam_current: Option<String>,
    /// Sputtering source width along x
    pub sputtering_source_width_x: Option<String>,
    /// Sputtering source width along y
    pub sputtering_source_width_y: Option<String>,
    /// Sputtering source polar angle of incidence
    pub sputtering_source_polar_angle: Option<String>,
    /// Sputtering source azimuth
    pub sputtering_source_azimuth: Option<String>,
    /// Sputtering mode (continuous or cyclic)
    pub sputtering_mode: Option<String>,
    /// Sample normal polar angle of tilt
    pub sample_normal_polar_tilt: String,
    /// Sample normal azimuth angle of tilt
    pub sample_normal_azimuth_tilt: String,
    /// Sample rotation angle
    pub sample_rotation_angle: String,
    /// One label per additional numerical parameter
    pub additional_param_labels: Vec<String>,
    /// One unit per additional numerical parameter
    pub additional_param_units: Vec<String>,
    /// One value per additional numerical parameter
    pub additional_param_values: Vec<String>,
    /// Future-upgrade block entries
    pub future_upgrade_block_entries: Vec<String>,
    /// Declared number of ordinate values (N * M)
    pub number_of_ordinate_values: i64,
    /// Minimum ordinate value per corresponding variable
    pub minimum_ordinate_values: Vec<f64>,
    /// Maximum ordinate value per corresponding variable
    pub maximum_ordinate_values: Vec<f64>,
    /// The de-interleaved ordinate data
    pub ordinate: OrdinateMatrix,
}

impl BlockRecord {
    /// Reconstruct the abscissa (axis) sequence for this block.
    ///
    /// The axis is affine: `start + increment * i` for `i` in `0..M`, where
    /// `M = number_of_ordinate_values / number_of_corresponding_variables`.
    /// Fails with [`QueryError::AbsentField`] when the scan mode was not
    /// REGULAR (the abscissa quadruple never appeared in the file).
    pub fn abscissa_axis(&self) -> Result<Vec<f64>, QueryError> {
        let start = self.abscissa_start.ok_or(QueryError::AbsentField {
            field: BlockField::AbscissaStart.as_str(),
        })?;
        let increment = self.abscissa_increment.ok_or(QueryError::AbsentField {
            field: BlockField::AbscissaIncrement.as_str(),
        })?;
        let len = self.ordinate.samples_per_variable();
        Ok((0..len).map(|i| start + increment * i as f64).collect())
    }

    /// One corresponding variable's sample sequence.
    pub fn ordinate_series(&self, index: usize) -> Result<&[f64], QueryError> {
        self.ordinate
            .series(index)
            .ok_or(QueryError::VariableIndexOutOfRange {
                index,
                count: self.ordinate.variables(),
            })
    }

    /// One corresponding variable's display label.
    pub fn variable_label(&self, index: usize) -> Result<&str, QueryError> {
        self.corresponding_variable_labels
            .get(index)
            .map(String::as_str)
            .ok_or(QueryError::VariableIndexOutOfRange {
                index,
                count: self.corresponding_variable_labels.len(),
            })
    }

    /// One corresponding variable's units.
    pub fn variable_units(&self, index: usize) -> Result<&str, QueryError> {
        self.corresponding_variable_units
            .get(index)
            .map(String::as_str)
            .ok_or(QueryError::VariableIndexOutOfRange {
                index,
                count: self.corresponding_variable_units.len(),
            })
    }

    /// The declared minimum/maximum ordinate pair of one variable.
    pub fn ordinate_limits(&self, index: usize) -> Result<(f64, f64), QueryError> {
        match (
            self.minimum_ordinate_values.get(index),
            self.maximum_ordinate_values.get(index),
        ) {
            (Some(min), Some(max)) => Ok((*min, *max)),
            _ => Err(QueryError::VariableIndexOutOfRange {
                index,
                count: self.minimum_ordinate_values.len(),
            }),
        }
    }

    /// The acquisition timestamp assembled from the block's date/time fields.
    ///
    /// Returns `None` when any component is missing or out of range; VAMAS
    /// writers commonly store `-1` for unknown components.
    pub fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        let year: i32 = self.year.trim().parse().ok()?;
        let month: u32 = self.month.trim().parse().ok()?;
        let day: u32 = self.day.trim().parse().ok()?;
        let hours: u32 = self.hours.trim().parse().ok()?;
        let minutes: u32 = self.minutes.trim().parse().ok()?;
        let seconds: u32 = self.seconds.trim().parse().ok()?;
        // The GMT offset may be fractional (half-hour timezones).
        let offset_hours: f64 = self.gmt_offset.trim().parse().ok()?;
        let offset = FixedOffset::east_opt((offset_hours * 3600.0) as i32)?;

        let naive = NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hours, minutes, seconds)?;
        offset.from_local_datetime(&naive).single()
    }
}
