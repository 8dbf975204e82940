//! Folder creation and the scaffold run itself.

use std::path::{Path, PathBuf};

use ngstub_core::{File, GeneratedFile, WriteReport, write_all};
use ngstub_templates::{ComponentTs, SpecTs};

use crate::error::{Error, Result};
use crate::resolve::ScaffoldRequest;

/// Everything a successful scaffold produced.
#[derive(Debug)]
pub struct ScaffoldOutcome {
    /// The created folder
    pub dir: PathBuf,
    /// The component implementation file, for the editor hand-off
    pub component_path: PathBuf,
    /// Per-file write results
    pub report: WriteReport,
}

/// Create `path` as a new directory, refusing to touch an existing one.
///
/// The check-then-create sequence is not atomic against concurrent external
/// mutation; the loser of such a race fails on `create_dir`.
pub fn create_folder(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Box::new(Error::FolderExists {
            path: path.to_path_buf(),
        }));
    }
    std::fs::create_dir(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Run the scaffold for `request`: create the folder, render both stubs,
/// and write them.
///
/// A failed write aborts the run with `PartialWrite`. The folder and any
/// files that did get written are left in place.
pub fn scaffold(request: &ScaffoldRequest, with_template_file: bool) -> Result<ScaffoldOutcome> {
    let dir = request.target_dir();
    create_folder(&dir)?;

    let component = ComponentTs::new(request.name(), with_template_file);
    let spec = SpecTs::new(request.name());
    let component_path = component.path(&dir);

    let files = [
        File::new(&component_path, component.render()),
        File::new(spec.path(&dir), spec.render()),
    ];
    let report = write_all(&files);

    if !report.is_clean() {
        return Err(Box::new(Error::PartialWrite {
            dir,
            failed: report.failures.len(),
            messages: report
                .failures
                .iter()
                .map(|failure| failure.message.clone())
                .collect(),
        }));
    }

    Ok(ScaffoldOutcome {
        dir,
        component_path,
        report,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_create_folder_then_refuse_second_time() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my-widget");

        create_folder(&path).unwrap();
        assert!(path.is_dir());

        let err = create_folder(&path).unwrap_err();
        assert!(matches!(*err, Error::FolderExists { .. }));
    }

    #[test]
    fn test_create_folder_refuses_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my-widget");
        fs::write(&path, "").unwrap();

        let err = create_folder(&path).unwrap_err();
        assert!(matches!(*err, Error::FolderExists { .. }));
    }
}
