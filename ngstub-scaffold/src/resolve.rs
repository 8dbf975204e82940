//! Target resolution: base directory, workspace detection, name validation.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Characters refused in a folder name, besides whitespace.
const DENYLIST: &[char] = &[
    '~', '`', '!', '#', '$', '%', '^', '&', '*', '+', '=', '[', ']', '\\', '\'', ';', ',', '/',
    '{', '}', '|', '"', ':', '<', '>', '?',
];

/// Markers that identify an enclosing workspace.
const WORKSPACE_MARKERS: &[&str] = &["angular.json", "package.json", ".git"];

/// A validated scaffold target: the parent directory plus the folder name.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    parent_dir: PathBuf,
    name: String,
}

impl ScaffoldRequest {
    /// Validate `name` and bind it to `parent_dir`.
    pub fn new(parent_dir: impl Into<PathBuf>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            parent_dir: parent_dir.into(),
            name,
        })
    }

    /// The folder's base name, used to derive file names and identifiers
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The folder to create, not yet present on disk
    pub fn target_dir(&self) -> PathBuf {
        self.parent_dir.join(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let invalid =
        name.is_empty() || name.chars().any(|c| c.is_whitespace() || DENYLIST.contains(&c));
    if invalid {
        return Err(Box::new(Error::InvalidName {
            name: name.to_string(),
        }));
    }
    Ok(())
}

/// Resolve the directory the new folder is created under.
///
/// An explicit `target` wins; otherwise the current working directory stands
/// in for the invoking context. A target that is a file resolves to its
/// parent directory. The result is canonical, so joining the folder name
/// onto it yields an absolute path.
pub fn resolve_base_dir(target: Option<PathBuf>) -> Result<PathBuf> {
    let path = match target {
        Some(path) => path,
        None => std::env::current_dir().map_err(|_| Box::new(Error::NoContext))?,
    };

    let metadata = std::fs::metadata(&path).map_err(|source| {
        Box::new(Error::Io {
            path: path.clone(),
            source,
        })
    })?;

    let base = if metadata.is_dir() {
        path
    } else {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    };

    std::fs::canonicalize(&base).map_err(|source| {
        Box::new(Error::Io {
            path: base.clone(),
            source,
        })
    })
}

/// Find the enclosing workspace root by walking up from `dir`.
pub fn find_workspace_root(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .find(|candidate| {
            WORKSPACE_MARKERS
                .iter()
                .any(|marker| candidate.join(marker).exists())
        })
        .map(Path::to_path_buf)
}

/// Fail with `NoWorkspace` when `dir` is not inside a workspace.
pub fn ensure_workspace(dir: &Path) -> Result<PathBuf> {
    find_workspace_root(dir).ok_or_else(|| {
        Box::new(Error::NoWorkspace {
            path: dir.to_path_buf(),
        })
    })
}
