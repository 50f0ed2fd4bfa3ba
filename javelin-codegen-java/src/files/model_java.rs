//! Model class and enum generator for data and enum entities.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use javelin_codegen::{CodeFragment, ImportCollector, Indent, Renderable};
use javelin_core::{FileRules, GeneratedFile, package_to_path, to_camel_case, to_pascal_case};
use javelin_model::{Entity, EntityKind, FieldType};

use super::{GENERATED_HEADER, JAVA_SOURCE_ROOT};
use crate::{JavaSource, JavaTypeMapper};

/// A plain Java class with private fields and accessors, or a Java enum.
pub struct ModelJava<'a> {
    package: String,
    name: &'a str,
    entity: &'a Entity,
    indent: Indent,
}

struct JavaField {
    name: String,
    accessor: String,
    ty: String,
    is_boolean: bool,
}

impl<'a> ModelJava<'a> {
    /// `base_package` is the project package; models live in its `model`
    /// subpackage.
    pub fn new(base_package: &str, name: &'a str, entity: &'a Entity) -> Self {
        Self {
            package: format!("{}.model", base_package),
            name,
            entity,
            indent: Indent::default(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn class_name(&self) -> String {
        JavaTypeMapper::class_name(self.name)
    }

    fn declaration(&self, kind: &str) -> String {
        match &self.entity.description {
            Some(description) => format!(
                "/** {} */\npublic {} {}",
                description,
                kind,
                self.class_name()
            ),
            None => format!("public {} {}", kind, self.class_name()),
        }
    }

    fn render_class(&self) -> Result<String> {
        let types = JavaTypeMapper::new(&self.package);

        JavaSource::new(&self.package, self.indent).render(
            &self.declaration("class"),
            |code, imports| {
                let fields = self.fields(&types, imports);
                code.each(&fields, |b, field| {
                    b.line(format!("private {} {};", field.ty, field.name));
                });
                code.each(&fields, |b, field| {
                    b.emit(field);
                });
                Ok(())
            },
        )
    }

    fn render_enum(&self) -> Result<String> {
        let last = self.entity.values.len().saturating_sub(1);

        JavaSource::new(&self.package, self.indent).render(&self.declaration("enum"), |code, _| {
            code.each(self.entity.values.iter().enumerate(), |b, (i, value)| {
                if i == last {
                    b.line(value);
                } else {
                    b.line(format!("{},", value));
                }
            });
            Ok(())
        })
    }

    fn fields(&self, types: &JavaTypeMapper, imports: &mut ImportCollector) -> Vec<JavaField> {
        self.entity
            .fields
            .iter()
            .map(|(name, ty)| JavaField {
                name: to_camel_case(name),
                accessor: to_pascal_case(name),
                ty: types.map_type(ty, imports),
                is_boolean: *ty == FieldType::Boolean,
            })
            .collect()
    }
}

/// Getter and setter, each preceded by a blank line.
impl Renderable for JavaField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let getter = if self.is_boolean { "is" } else { "get" };

        vec![
            CodeFragment::blank(),
            CodeFragment::scope(
                format!("public {} {}{}()", self.ty, getter, self.accessor),
                vec![CodeFragment::line(format!("return {};", self.name))],
            ),
            CodeFragment::blank(),
            CodeFragment::scope(
                format!("public void set{}({} {})", self.accessor, self.ty, self.name),
                vec![CodeFragment::line(format!(
                    "this.{} = {};",
                    self.name, self.name
                ))],
            ),
        ]
    }
}

impl GeneratedFile for ModelJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(JAVA_SOURCE_ROOT)
            .join(package_to_path(&self.package))
            .join(format!("{}.java", self.class_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> Result<String> {
        match self.entity.kind {
            EntityKind::Data => self.render_class(),
            EntityKind::Enum => self.render_enum(),
            EntityKind::Request => bail!("'{}' is a request, not a model", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javelin_model::Project;

    const PETS: &str = r#"
[project]
name = "petstore"

[modules.pets.entities.Pet]
kind = "data"
description = "A pet for sale"
fields = { id = "long", tags = "list<string>", status = "Status", vaccinated = "boolean" }

[modules.pets.entities.Status]
kind = "enum"
values = ["AVAILABLE", "PENDING", "SOLD"]

[modules.pets.entities.Marker]
kind = "enum"

[modules.pets.entities.GetPet]
kind = "request"
method = "GET"
response = "Pet"
"#;

    fn model(name: &str) -> Result<String> {
        let project: Project = PETS.parse().unwrap();
        let entity = &project.modules["pets"].entities[name];
        ModelJava::new("com.example.petstore", name, entity).render()
    }

    #[test]
    fn test_data_class() {
        assert_eq!(
            model("Pet").unwrap(),
            r#"package com.example.petstore.model;

import java.util.List;

/** A pet for sale */
public class Pet {
  private long id;
  private List<String> tags;
  private Status status;
  private boolean vaccinated;

  public long getId() {
    return id;
  }

  public void setId(long id) {
    this.id = id;
  }

  public List<String> getTags() {
    return tags;
  }

  public void setTags(List<String> tags) {
    this.tags = tags;
  }

  public Status getStatus() {
    return status;
  }

  public void setStatus(Status status) {
    this.status = status;
  }

  public boolean isVaccinated() {
    return vaccinated;
  }

  public void setVaccinated(boolean vaccinated) {
    this.vaccinated = vaccinated;
  }
}"#
        );
    }

    #[test]
    fn test_boolean_accessors() {
        let field = JavaField {
            name: "active".to_string(),
            accessor: "Active".to_string(),
            ty: "boolean".to_string(),
            is_boolean: true,
        };

        assert_eq!(
            field.to_fragments(),
            vec![
                CodeFragment::blank(),
                CodeFragment::scope(
                    "public boolean isActive()",
                    vec![CodeFragment::line("return active;")]
                ),
                CodeFragment::blank(),
                CodeFragment::scope(
                    "public void setActive(boolean active)",
                    vec![CodeFragment::line("this.active = active;")]
                ),
            ]
        );
    }

    #[test]
    fn test_enum() {
        assert_eq!(
            model("Status").unwrap(),
            "package com.example.petstore.model;\n\npublic enum Status {\n  AVAILABLE,\n  PENDING,\n  SOLD\n}"
        );
    }

    #[test]
    fn test_empty_enum() {
        assert_eq!(
            model("Marker").unwrap(),
            "package com.example.petstore.model;\n\npublic enum Marker {\n}"
        );
    }

    #[test]
    fn test_request_is_not_a_model() {
        assert!(model("GetPet").is_err());
    }
}
