// File:    size_parser.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Parses human-readable size expressions such as `512K` or `2G` into byte counts.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Size expressions of the form `<digits><K|M|G>`.

use std::fmt;

/// A binary size unit accepted as the final character of a size expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeUnit {
    /// Kibibytes, 1024 bytes.
    Kilo,
    /// Mebibytes, 1024² bytes.
    Mega,
    /// Gibibytes, 1024³ bytes.
    Giga,
}

impl SizeUnit {
    /// The number of bytes represented by one unit.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::Kilo => 1024,
            Self::Mega => 1024 * 1024,
            Self::Giga => 1024 * 1024 * 1024,
        }
    }
}

impl TryFrom<char> for SizeUnit {
    type Error = SizeError;

    fn try_from(suffix: char) -> Result<Self, Self::Error> {
        match suffix.to_ascii_uppercase() {
            'K' => Ok(Self::Kilo),
            'M' => Ok(Self::Mega),
            'G' => Ok(Self::Giga),
            other => Err(SizeError::InvalidSuffix(other)),
        }
    }
}

/// Errors produced while parsing a size expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    /// The expression is too short to hold both a number and a unit.
    Format,
    /// The final character is not one of `K`, `M` or `G`.
    InvalidSuffix(char),
    /// The numeric prefix is empty, contains non-digits, or does not fit in a `u64`.
    InvalidNumber(String),
    /// The number is valid but multiplying it by the unit overflows a `u64`.
    OutOfRange,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "invalid size format"),
            Self::InvalidSuffix(suffix) => write!(f, "invalid size suffix: {suffix}"),
            Self::InvalidNumber(prefix) => write!(
                f,
                "invalid size, expected integer number. Provided: {prefix}"
            ),
            Self::OutOfRange => write!(f, "size is too large to be represented in bytes"),
        }
    }
}

impl std::error::Error for SizeError {}

/// Converts a size expression into an exact number of bytes.
///
/// The expression is case-insensitive and must not contain whitespace:
/// `"1K"` and `"1k"` both yield `1024`.
///
/// # Errors
///
/// Returns [`SizeError::Format`] for inputs shorter than two characters,
/// [`SizeError::InvalidSuffix`] for an unknown unit, [`SizeError::InvalidNumber`]
/// when the prefix is not a plain base-10 integer, and [`SizeError::OutOfRange`]
/// when the resulting byte count overflows.
pub fn parse_size(input: &str) -> Result<u64, SizeError> {
    let upper = input.to_ascii_uppercase();

    let mut chars = upper.chars();
    let suffix = match chars.next_back() {
        Some(c) if !chars.as_str().is_empty() => c,
        _ => return Err(SizeError::Format),
    };
    let unit = SizeUnit::try_from(suffix)?;

    let prefix = chars.as_str();
    // `u64::from_str` tolerates a leading '+', which is not part of the grammar.
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SizeError::InvalidNumber(prefix.to_string()));
    }
    let count: u64 = prefix
        .parse()
        .map_err(|_| SizeError::InvalidNumber(prefix.to_string()))?;

    count
        .checked_mul(unit.multiplier())
        .ok_or(SizeError::OutOfRange)
}
