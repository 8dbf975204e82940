//! Component stub generator.

use std::path::{Path, PathBuf};

use ngstub_core::{GeneratedFile, to_upper_camel_case};

use crate::SOURCE_EXT;

/// The component implementation stub.
pub struct ComponentTs {
    name: String,
    with_template_file: bool,
}

impl ComponentTs {
    /// A component named after `name`, with either an external template
    /// reference or an empty inline template.
    pub fn new(name: impl Into<String>, with_template_file: bool) -> Self {
        Self {
            name: name.into(),
            with_template_file,
        }
    }
}

impl GeneratedFile for ComponentTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.component.{}", self.name, SOURCE_EXT))
    }

    fn render(&self) -> String {
        let class = to_upper_camel_case(&self.name);
        let template = if self.with_template_file {
            format!("templateUrl: '{}.component.html',", self.name)
        } else {
            "template: ``,".to_string()
        };

        format!(
            r#"import {{ Component }} from '@angular/core';

@Component({{
  selector: 'app-{name}',
  {template}
}})
export class {class}Component {{
}}
"#,
            name = self.name,
            template = template,
            class = class,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_follows_naming_rule() {
        let file = ComponentTs::new("my-widget", false);
        assert_eq!(
            file.path(Path::new("/project/my-widget")),
            Path::new("/project/my-widget/my-widget.component.ts")
        );
    }

    #[test]
    fn test_inline_template() {
        let content = ComponentTs::new("my-widget", false).render();
        assert!(content.contains("selector: 'app-my-widget'"));
        assert!(content.contains("template: ``"));
        assert!(content.contains("export class MyWidgetComponent"));
        assert!(!content.contains(".component.html"));
    }

    #[test]
    fn test_template_file_reference() {
        let content = ComponentTs::new("my-widget", true).render();
        assert!(content.contains("templateUrl: 'my-widget.component.html'"));
        assert!(!content.contains("template: ``"));
    }

    #[test]
    fn test_hyphens_fold_into_class_name() {
        let content = ComponentTs::new("my-widget-list", false).render();
        assert!(content.contains("export class MyWidgetListComponent"));
    }
}
