//! Renderers for the files a scaffold produces.
//!
//! Each generated file is a pure function of the folder's base name: the
//! renderers never touch the filesystem and never fail, whatever the input
//! string looks like.

mod files;

pub use files::{ComponentTs, SpecTs};

/// Source file extension of the target ecosystem.
pub const SOURCE_EXT: &str = "ts";
