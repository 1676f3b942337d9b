//! # vamas - VAMAS Surface Chemical Analysis Data Decoder
//!
//! `vamas` decodes the VAMAS data transfer format (ISO 14976): the
//! line-oriented text format for surface chemical analysis data defined by
//! W.A. Dench, L.B. Hazell and M.P. Seah in *Surf. Interface Anal.* 13
//! (1988) 63-122, as written by XPS/AES/SIMS instrument software.
//!
//! VAMAS is schema-driven rather than self-describing: field presence and
//! repetition counts are not declared inline but follow from values decoded
//! earlier in the same stream (the experiment mode, the scan mode, each
//! block's technique, and several explicit count fields). The decoder makes
//! a single forward pass, reconstructing the nested experiment/block
//! structure with no backtracking and no random access.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vamas::parser::VamasParser;
//!
//! let parser = VamasParser::from_path("spectrum.vms")?;
//! let experiment = parser.experiment();
//!
//! println!("operator: {}", experiment.operator_identifier);
//! for block in &experiment.blocks {
//!     let axis = block.abscissa_axis()?;
//!     let counts = block.ordinate_series(0)?;
//!     println!("{}: {} points", block.block_identifier, counts.len());
//!     # let _ = (axis, counts);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`schema`]: static tables describing every field, its ordinal slot and
//!   its presence/repetition rule (conditional-skip, counted-repeat,
//!   paired slots)
//! - [`parser`]: the single-pass decoder (line cursor, decode context,
//!   experiment and block decoders)
//! - [`record`]: the decoded records and the read-only query interface
//!   (axis reconstruction, per-variable series, field lookup by identifier)
//! - [`energy`]: kinetic/binding energy-axis conversion
//! - [`config`]: JSON run configuration for batch plotting
//! - [`plot`]: SVG spectrum overlays, depth-profile fades, peak picking
//!
//! ## Scope
//!
//! Only the text block-mode variant is supported, with exactly one
//! experiment per file. Records cannot be serialized back to VAMAS text,
//! and no scientific validation of the data is performed.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod energy;
pub mod parser;
pub mod plot;
pub mod record;
pub mod schema;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ConfigError, PlotType, RunConfig};
    pub use crate::energy::{binding_to_kinetic, kinetic_to_binding, AL_K_ALPHA_EV, MG_K_ALPHA_EV};
    pub use crate::parser::{decode_file, DecodeError, VamasParser};
    pub use crate::plot::{OverlayOptions, PlotError, SpectrumSeries};
    pub use crate::record::{
        BlockRecord, ExperimentRecord, FieldValue, OrdinateMatrix, QueryError,
    };
    pub use crate::schema::{BlockField, ExperimentField, ExperimentMode, ScanMode, Technique};
}
