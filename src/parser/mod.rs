//! # VAMAS Decoder
//!
//! A single forward pass over the lines of a VAMAS file. The experiment
//! decoder runs to completion first (establishing the block count and the
//! mode/scan-mode values that gate later fields), then the block decoder
//! runs once per block in file order; both consume from one continuous
//! [`LineCursor`] and there is no rewinding between stages.
//!
//! The decode is deterministic, single-threaded and transactional: any fatal
//! condition discards the partial record. Independent files may be decoded
//! concurrently by independent [`VamasParser`] instances; nothing is shared.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vamas::parser::VamasParser;
//!
//! let parser = VamasParser::from_path("spectrum.vms")?;
//! let experiment = parser.experiment();
//! println!("{} blocks", experiment.blocks.len());
//! # Ok::<(), vamas::parser::DecodeError>(())
//! ```

mod block;
mod context;
mod cursor;
mod error;
mod experiment;

#[cfg(test)]
mod tests;

pub use context::DecodeContext;
pub use cursor::LineCursor;
pub use error::{DecodeError, Result};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::record::ExperimentRecord;

use block::BlockDecoder;
use experiment::ExperimentDecoder;

/// Decoder for one VAMAS file.
///
/// One call decodes the file exactly once, start to end, stopping at the
/// final ordinate line of the final block; trailing content is ignored. The
/// decoded [`ExperimentRecord`] is immutable thereafter.
pub struct VamasParser {
    experiment: ExperimentRecord,
}

impl VamasParser {
    /// Open and decode a VAMAS file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Decoding VAMAS file: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::with_capacity(64 * 1024, file))
    }

    /// Decode a VAMAS experiment from any buffered line source.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut cursor = LineCursor::new(reader);
        let mut ctx = DecodeContext::new();
        let mut experiment = ExperimentRecord::default();

        ExperimentDecoder::new(&mut cursor, &mut ctx, &mut experiment).run()?;
        let declared = experiment.number_of_blocks as usize;
        debug!(
            "experiment header complete after line {}: {} blocks declared",
            cursor.line_number(),
            declared
        );

        let mut decoded = 0usize;
        for block in experiment.blocks.iter_mut() {
            BlockDecoder::new(&mut cursor, &mut ctx, block).run()?;
            decoded += 1;
            debug!("block {}/{} complete", decoded, declared);
        }

        if decoded != declared {
            return Err(DecodeError::BlockCountMismatch { declared, decoded });
        }

        Ok(Self { experiment })
    }

    /// The decoded experiment.
    pub fn experiment(&self) -> &ExperimentRecord {
        &self.experiment
    }

    /// Consume the parser, yielding the decoded experiment.
    pub fn into_experiment(self) -> ExperimentRecord {
        self.experiment
    }
}

/// Decode a file directly to its [`ExperimentRecord`].
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<ExperimentRecord> {
    Ok(VamasParser::from_path(path)?.into_experiment())
}
