// File:    block_generator.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Writes pseudo-random alphanumeric content to a sink in fixed-size blocks, reporting progress.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Block-wise generation of random printable content.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// The characters used to fill generated content.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Errors that abort a generation run.
#[derive(Debug)]
pub enum GenerateError {
    /// A job was requested with a block size of zero bytes.
    ZeroBlockSize,
    /// Writing a block to the sink failed. Bytes written before the failure are left in place.
    Write(io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBlockSize => write!(f, "block size must be greater than zero"),
            Self::Write(e) => write!(f, "failed to write block: {e}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ZeroBlockSize => None,
            Self::Write(e) => Some(e),
        }
    }
}

/// The parameters of a single generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationJob {
    target_bytes: u64,
    block_bytes: usize,
    verbose: bool,
}

impl GenerationJob {
    /// Creates a job that writes exactly `target_bytes` bytes in blocks of at most `block_bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ZeroBlockSize`] if `block_bytes` is zero.
    pub const fn new(
        target_bytes: u64,
        block_bytes: usize,
        verbose: bool,
    ) -> Result<Self, GenerateError> {
        if block_bytes == 0 {
            return Err(GenerateError::ZeroBlockSize);
        }
        Ok(Self {
            target_bytes,
            block_bytes,
            verbose,
        })
    }

    /// Total number of bytes the job writes.
    #[must_use]
    pub const fn target_bytes(&self) -> u64 {
        self.target_bytes
    }

    /// Maximum size of a single block.
    #[must_use]
    pub const fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    /// Whether progress updates are emitted.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Summary of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Total bytes handed to the sink.
    pub bytes_written: u64,
    /// Number of blocks written, including a short final block.
    pub blocks_written: u64,
}

/// Fills `sink` with random characters from [`ALPHABET`] according to `job`.
///
/// Blocks are `job.block_bytes()` long except for the last one, which holds
/// whatever remains. When the job is verbose, `on_progress` receives the
/// completed percentage after each block, but only when that percentage is a
/// whole number to two decimal places. A run that finishes always reports
/// `100.0` last.
///
/// The sink is borrowed, not closed; the caller owns its lifetime.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] on the first failed write. No further
/// writes are attempted and nothing already written is rolled back.
#[allow(clippy::cast_precision_loss)]
pub fn generate<W, R, F>(
    sink: &mut W,
    rng: &mut R,
    job: &GenerationJob,
    mut on_progress: F,
) -> Result<GenerationReport, GenerateError>
where
    W: Write + ?Sized,
    R: Rng,
    F: FnMut(f64),
{
    let mut remaining = job.target_bytes;
    let mut report = GenerationReport {
        bytes_written: 0,
        blocks_written: 0,
    };

    let mut block = Vec::new();

    while remaining > 0 {
        // Anything that does not fit in a usize is larger than one block.
        let chunk_len =
            usize::try_from(remaining).map_or(job.block_bytes, |r| r.min(job.block_bytes));

        block.clear();
        block.extend((0..chunk_len).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())]));

        sink.write_all(&block).map_err(GenerateError::Write)?;

        report.bytes_written += chunk_len as u64;
        report.blocks_written += 1;
        remaining -= chunk_len as u64;
        debug!(
            "Wrote block {} ({chunk_len} bytes), {remaining} bytes remaining.",
            report.blocks_written
        );

        if job.verbose {
            let progress = report.bytes_written as f64 / job.target_bytes as f64 * 100.0;
            if is_whole_percentage(progress) {
                on_progress(progress);
            }
        }
    }

    Ok(report)
}

/// True when `progress` has no fractional part at two-decimal precision.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn is_whole_percentage(progress: f64) -> bool {
    (progress * 100.0) as u64 == (progress as u64) * 100
}
