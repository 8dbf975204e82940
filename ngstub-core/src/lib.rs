//! Core utilities and types for the ngstub scaffolder.
//!
//! This crate provides the file primitives and string utilities shared by
//! the template and pipeline crates.

mod file;
mod utils;

// File operations
pub use file::{File, GeneratedFile, WriteFailure, WriteReport, write_all};
// String utilities
pub use utils::to_upper_camel_case;
