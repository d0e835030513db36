// File:    checksum.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: A writer adapter that hashes everything passing through it with SHA-256.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use sha2::{Digest, Sha256};
use std::io::{self, Write};

/// Forwards writes to an inner sink and hashes the bytes the sink accepted.
pub struct DigestWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> DigestWriter<W> {
    /// Wraps `inner`, starting from an empty digest.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    /// Consumes the adapter, returning the inner sink and the lowercase hex digest.
    pub fn finish(self) -> (W, String) {
        (self.inner, format!("{:x}", self.hasher.finalize()))
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        // Only the accepted prefix ends up in the sink.
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
