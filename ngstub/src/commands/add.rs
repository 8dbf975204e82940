use std::path::PathBuf;

use clap::Args;
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::Result;
use ngstub_scaffold::{ScaffoldRequest, ensure_workspace, resolve_base_dir, scaffold};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct AddCommand {
    /// Where to create the new folder (defaults to the current directory;
    /// a file resolves to its parent directory)
    pub path: Option<PathBuf>,

    /// Folder name; prompts interactively when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    /// Reference an external <name>.component.html instead of an inline template
    #[arg(short, long)]
    pub template_file: bool,
}

impl AddCommand {
    pub fn run(&self) -> Result<()> {
        let base_dir = resolve_base_dir(self.path.clone()).unwrap_or_exit();
        ensure_workspace(&base_dir).unwrap_or_exit();

        let name = match &self.name {
            Some(name) => name.clone(),
            None => Self::prompt_name(),
        };

        let request = ScaffoldRequest::new(base_dir, name).unwrap_or_exit();
        let outcome = scaffold(&request, self.template_file).unwrap_or_exit();

        println!("Created {}", outcome.dir.display());
        for path in &outcome.report.written {
            if let Some(file_name) = path.file_name() {
                println!("  + {}", file_name.to_string_lossy());
            }
        }

        // Hand the component over to the editor, best effort; a missing
        // editor association is not an error.
        let _ = open::that(&outcome.component_path);

        Ok(())
    }

    fn prompt_name() -> String {
        // A cancelled or unreadable prompt takes the invalid-name path,
        // same as an empty entry.
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("What's the name of the new folder?")
            .default("folder".to_string())
            .interact_text()
            .unwrap_or_default()
    }
}
