use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scaffold operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no file open and no target location supplied")]
    #[diagnostic(
        code(ngstub::no_context),
        help("pass a target path, e.g. 'ngstub add src/app'")
    )]
    NoContext,

    #[error("no workspace found above '{path}'")]
    #[diagnostic(
        code(ngstub::no_workspace),
        help("run inside a project containing angular.json, package.json, or .git")
    )]
    NoWorkspace { path: PathBuf },

    #[error("'{name}' is not a valid folder name")]
    #[diagnostic(
        code(ngstub::invalid_name),
        help("use letters, digits, and hyphens; no whitespace or special characters")
    )]
    InvalidName { name: String },

    #[error("folder '{path}' already exists")]
    #[diagnostic(
        code(ngstub::folder_exists),
        help("pick a different name or remove the existing folder")
    )]
    FolderExists { path: PathBuf },

    #[error("{failed} file(s) could not be created in '{dir}'")]
    #[diagnostic(
        code(ngstub::partial_write),
        help("files that were written are left in place; nothing is rolled back")
    )]
    PartialWrite {
        dir: PathBuf,
        failed: usize,
        messages: Vec<String>,
    },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(ngstub::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
