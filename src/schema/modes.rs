//! Closed enumerations decoded early in the stream.
//!
//! `experiment_mode` and `scan_mode` are decoded once per file and gate
//! optional fields for the remainder of the decode; `technique` is decoded
//! once per block and gates technique-specific fields within that block.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The experiment mode declared in the experiment header.
///
/// Gates several optional experiment- and block-level fields (spectral-region
/// counts, map coordinates, sputtering fields, field of view, linescans).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum ExperimentMode {
    /// Map: a spectrum is recorded at each point of a regular grid
    MAP,
    /// Map with depth profiling (alternating sputtering)
    MAPDP,
    /// Map recorded as linescans over the sample
    MAPSV,
    /// Normal: independent spectral regions (the common single-spectrum case)
    #[default]
    NORM,
    /// Sputter depth profile
    SDP,
    /// Sputter depth profile recorded as linescans
    SDPV,
    /// Electron image, no spectral data
    SEM,
}

impl ExperimentMode {
    /// The token used for this mode in VAMAS files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentMode::MAP => "MAP",
            ExperimentMode::MAPDP => "MAPDP",
            ExperimentMode::MAPSV => "MAPSV",
            ExperimentMode::NORM => "NORM",
            ExperimentMode::SDP => "SDP",
            ExperimentMode::SDPV => "SDPV",
            ExperimentMode::SEM => "SEM",
        }
    }

    /// All members of the closed enumeration.
    pub const ALL: &'static [ExperimentMode] = &[
        ExperimentMode::MAP,
        ExperimentMode::MAPDP,
        ExperimentMode::MAPSV,
        ExperimentMode::NORM,
        ExperimentMode::SDP,
        ExperimentMode::SDPV,
        ExperimentMode::SEM,
    ];
}

impl FromStr for ExperimentMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

impl fmt::Display for ExperimentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scan mode declared in the experiment header.
///
/// `REGULAR` means the abscissa is an arithmetic progression described by a
/// start value and an increment; only then does a block carry the abscissa
/// quadruple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanMode {
    /// Abscissa values form a regular progression (start + increment)
    #[default]
    Regular,
    /// Abscissa values are irregular and transferred explicitly
    Irregular,
    /// Abscissa is a position on the sample (mapping)
    Mapping,
}

impl ScanMode {
    /// The token used for this scan mode in VAMAS files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Regular => "REGULAR",
            ScanMode::Irregular => "IRREGULAR",
            ScanMode::Mapping => "MAPPING",
        }
    }

    /// All members of the closed enumeration.
    pub const ALL: &'static [ScanMode] = &[ScanMode::Regular, ScanMode::Irregular, ScanMode::Mapping];
}

impl FromStr for ScanMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The analysis technique declared in each block.
///
/// Unlike the experiment and scan modes, an unrecognised technique token is
/// not fatal: the decoder degrades to "no technique-specific optional
/// fields" for that block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Technique {
    /// Differentiated Auger electron spectroscopy
    AesDiff,
    /// Direct Auger electron spectroscopy
    AesDir,
    /// Energy-dispersive X-ray spectroscopy
    Edx,
    /// Electron energy-loss spectroscopy
    Els,
    /// Fast atom bombardment mass spectrometry
    Fabms,
    /// FABMS energy spectrum
    FabmsEnergySpec,
    /// Ion scattering spectroscopy
    Iss,
    /// Secondary ion mass spectrometry
    Sims,
    /// SIMS energy spectrum
    SimsEnergySpec,
    /// Sputtered neutral mass spectrometry
    Snms,
    /// SNMS energy spectrum
    SnmsEnergySpec,
    /// Ultraviolet photoelectron spectroscopy
    Ups,
    /// X-ray photoelectron spectroscopy
    Xps,
    /// X-ray fluorescence spectroscopy
    Xrf,
}

impl Technique {
    /// The token used for this technique in VAMAS files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Technique::AesDiff => "AES diff",
            Technique::AesDir => "AES dir",
            Technique::Edx => "EDX",
            Technique::Els => "ELS",
            Technique::Fabms => "FABMS",
            Technique::FabmsEnergySpec => "FABMS energy spec",
            Technique::Iss => "ISS",
            Technique::Sims => "SIMS",
            Technique::SimsEnergySpec => "SIMS energy spec",
            Technique::Snms => "SNMS",
            Technique::SnmsEnergySpec => "SNMS energy spec",
            Technique::Ups => "UPS",
            Technique::Xps => "XPS",
            Technique::Xrf => "XRF",
        }
    }

    /// All members of the closed enumeration.
    pub const ALL: &'static [Technique] = &[
        Technique::AesDiff,
        Technique::AesDir,
        Technique::Edx,
        Technique::Els,
        Technique::Fabms,
        Technique::FabmsEnergySpec,
        Technique::Iss,
        Technique::Sims,
        Technique::SimsEnergySpec,
        Technique::Snms,
        Technique::SnmsEnergySpec,
        Technique::Ups,
        Technique::Xps,
        Technique::Xrf,
    ];
}

impl FromStr for Technique {
    type Err = ();

    // Tokens appear with spaces in files ("AES diff", "SIMS energy spec");
    // underscore spellings are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().replace('_', " ");
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(&token))
            .ok_or(())
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
