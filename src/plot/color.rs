//! Hex-colour parsing and two-colour fades for depth series.

use plotters::style::RGBColor;

use super::PlotError;

/// Parse a `#rrggbb` (or bare `rrggbb`) colour string.
pub fn parse_hex(token: &str) -> Result<RGBColor, PlotError> {
    let hex = token.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PlotError::InvalidColor {
            token: token.to_string(),
        });
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or(0)
    };
    Ok(RGBColor(channel(0..2), channel(2..4), channel(4..6)))
}

/// Linear mix between two colours; `mix` is clamped to `[0, 1]`.
///
/// Used to span a depth-profile series between two endpoint colours, one
/// shade per sputter cycle.
pub fn fade(start: RGBColor, end: RGBColor, mix: f64) -> RGBColor {
    let mix = mix.clamp(0.0, 1.0);
    let blend = |a: u8, b: u8| ((1.0 - mix) * a as f64 + mix * b as f64).round() as u8;
    RGBColor(
        blend(start.0, end.0),
        blend(start.1, end.1),
        blend(start.2, end.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_hex("#1f77b4").unwrap(), RGBColor(0x1f, 0x77, 0xb4));
        assert_eq!(parse_hex("d62728").unwrap(), RGBColor(0xd6, 0x27, 0x28));
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("red").is_err());
    }

    #[test]
    fn test_fade_endpoints_and_midpoint() {
        let black = RGBColor(0, 0, 0);
        let white = RGBColor(255, 255, 255);
        assert_eq!(fade(black, white, 0.0), black);
        assert_eq!(fade(black, white, 1.0), white);
        assert_eq!(fade(black, white, 0.5), RGBColor(128, 128, 128));
        // Out-of-range mixes clamp.
        assert_eq!(fade(black, white, 2.0), white);
    }
}
