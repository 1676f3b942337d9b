//! # VAMAS Schema Tables
//!
//! Declarative description of every logical field in a VAMAS file: its group
//! (experiment header, block header, block body, block footer), its ordinal
//! slot in the 1988 transfer format, and the presence/repetition rule that
//! governs it. The decoders in [`crate::parser`] walk these tables as a
//! read-only oracle; nothing in this module performs I/O or mutates state.
//!
//! ## Reference
//! - W.A. Dench, L.B. Hazell, M.P. Seah: *VAMAS Surface Chemical Analysis
//!   Standard Data Transfer Format with Skeleton Decoding Programs*,
//!   Surf. Interface Anal. 13 (1988) 63-122 (ISO 14976).

mod fields;
mod modes;
mod rules;
mod tables;

#[cfg(test)]
mod tests;

pub use fields::{BlockField, ExperimentField};
pub use modes::{ExperimentMode, ScanMode, Technique};
pub use rules::{CountSource, FieldSpec, Gate, Rule};
pub use tables::{
    BLOCK_BODY_SCHEMA, BLOCK_FOOTER_SCHEMA, BLOCK_HEADER_SCHEMA, EXPERIMENT_SCHEMA,
};
