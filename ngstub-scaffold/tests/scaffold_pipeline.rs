//! End-to-end tests for a full scaffold run.

use ngstub_scaffold::{Error, ScaffoldRequest, scaffold};
use tempfile::TempDir;

#[test]
fn scaffold_creates_exactly_component_and_spec() {
    let temp = TempDir::new().unwrap();
    let request = ScaffoldRequest::new(temp.path(), "my-widget").unwrap();

    let outcome = scaffold(&request, false).unwrap();

    let dir = temp.path().join("my-widget");
    assert_eq!(outcome.dir, dir);
    assert_eq!(outcome.component_path, dir.join("my-widget.component.ts"));
    assert_eq!(outcome.report.written.len(), 2);

    let mut entries: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(
        entries,
        ["my-widget.component.spec.ts", "my-widget.component.ts"]
    );

    let component = std::fs::read_to_string(&outcome.component_path).unwrap();
    assert!(component.contains("selector: 'app-my-widget'"));
    assert!(component.contains("export class MyWidgetComponent"));

    let spec = std::fs::read_to_string(dir.join("my-widget.component.spec.ts")).unwrap();
    assert!(spec.contains("MyWidgetComponent"));
}

#[test]
fn scaffold_twice_fails_with_folder_exists() {
    let temp = TempDir::new().unwrap();
    let request = ScaffoldRequest::new(temp.path(), "my-widget").unwrap();

    scaffold(&request, false).unwrap();
    let err = scaffold(&request, false).unwrap_err();

    assert!(matches!(*err, Error::FolderExists { .. }));
    // The first run's files are untouched.
    assert!(
        temp.path()
            .join("my-widget")
            .join("my-widget.component.ts")
            .exists()
    );
}

#[test]
fn scaffold_with_template_file_references_html() {
    let temp = TempDir::new().unwrap();
    let request = ScaffoldRequest::new(temp.path(), "my-widget").unwrap();

    let outcome = scaffold(&request, true).unwrap();

    let component = std::fs::read_to_string(&outcome.component_path).unwrap();
    assert!(component.contains("templateUrl: 'my-widget.component.html'"));
}
