// File:    lib.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: The main library crate for fillgen-core, providing size parsing and block-wise file content generation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Fillgen Core Library
//!
//! This library provides the core functionality for generating test files of an
//! exact size: parsing size expressions, and writing random alphanumeric content
//! to a sink in fixed-size blocks.

/// Block-wise generation of random content into a writer.
pub mod block_generator;
/// SHA-256 hashing of generated content as it is written.
pub mod checksum;
/// Parsing of human-readable size expressions.
pub mod size_parser;

pub use block_generator::{ALPHABET, GenerateError, GenerationJob, GenerationReport, generate};
pub use size_parser::{SizeError, SizeUnit, parse_size};
