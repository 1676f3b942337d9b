//! Prominence-based peak picking.

/// Indices of local maxima whose prominence is at least `prominence`.
///
/// The prominence of a peak is its height above the higher of the two lowest
/// points separating it from higher terrain (or from the signal edge on
/// sides with no higher peak). This mirrors the usual definition used when
/// annotating XPS survey spectra.
pub fn find_peaks(values: &[f64], prominence: f64) -> Vec<usize> {
    let n = values.len();
    if n < 3 {
        return Vec::new();
    }

    let mut peaks = Vec::new();
    for i in 1..n - 1 {
        if !(values[i] > values[i - 1] && values[i] >= values[i + 1]) {
            continue;
        }

        // Lowest point between the peak and higher terrain on each side.
        let mut left_base = values[i];
        for j in (0..i).rev() {
            left_base = left_base.min(values[j]);
            if values[j] > values[i] {
                break;
            }
        }
        let mut right_base = values[i];
        for &v in &values[i + 1..] {
            right_base = right_base.min(v);
            if v > values[i] {
                break;
            }
        }

        if values[i] - left_base.max(right_base) >= prominence {
            peaks.push(i);
        }
    }
    peaks
}
