//! Spec stub generator.

use std::path::{Path, PathBuf};

use ngstub_core::{GeneratedFile, to_upper_camel_case};

use crate::SOURCE_EXT;

/// The spec stub: a single test asserting the component can be obtained
/// through dependency injection.
pub struct SpecTs {
    name: String,
}

impl SpecTs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for SpecTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.component.spec.{}", self.name, SOURCE_EXT))
    }

    fn render(&self) -> String {
        let class = to_upper_camel_case(&self.name);

        format!(
            r#"import {{ TestBed, inject }} from '@angular/core/testing';

import {{ {class}Component }} from './{name}.component';

describe('a {name} component', () => {{
  let component: {class}Component;

  beforeEach(() => {{
    TestBed.configureTestingModule({{
      providers: [{class}Component],
    }});
  }});

  beforeEach(inject([{class}Component], (instance: {class}Component) => {{
    component = instance;
  }}));

  it('should have an instance', () => {{
    expect(component).toBeDefined();
  }});
}});
"#,
            name = self.name,
            class = class,
        )
    }
}
