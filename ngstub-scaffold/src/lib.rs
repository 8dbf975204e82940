//! The scaffold pipeline: resolve a target, create the folder, write stubs.
//!
//! One invocation runs a strictly linear flow: base-directory resolution,
//! workspace detection, name validation, folder creation, template
//! rendering, and a batch write. Every stage fails fast; nothing is retried
//! and nothing already on disk is rolled back.

mod error;
mod resolve;
mod scaffold;

pub use error::{Error, Result};
pub use resolve::{ScaffoldRequest, ensure_workspace, find_workspace_root, resolve_base_dir};
pub use scaffold::{ScaffoldOutcome, create_folder, scaffold};
