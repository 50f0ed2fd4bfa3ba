//! Synthetic response bodies for generated controller methods.

use std::collections::{BTreeSet, HashSet};

use eyre::{Result, bail, eyre};
use javelin_codegen::CodeBuilder;
use javelin_core::{to_camel_case, to_pascal_case};
use javelin_model::{EntityKind, FieldType, Project, ResolvedEntity};

use crate::JavaTypeMapper;

/// Emits the body of a controller method that returns a response entity.
///
/// `response` is the reference as written on the request, resolved from
/// `module`. Implementations write statements at the builder's current depth
/// and must end the body with a `return`.
pub trait DemoData {
    fn emit_response(
        &self,
        project: &Project,
        module: &str,
        response: &str,
        code: &mut CodeBuilder,
    ) -> Result<()>;

    /// Model classes the emitted body mentions by simple name.
    fn referenced_models(&self, project: &Project, module: &str, response: &str) -> Vec<String> {
        let _ = (project, module, response);
        Vec::new()
    }
}

/// Builds the response object field by field with fixed example values.
///
/// ```text
/// Pet pet = new Pet();
/// pet.setId(42L);
/// pet.setName("example");
/// return pet;
/// ```
///
/// Nested data entities are built first into their own locals. A reference
/// back to an object that is still under construction is set to `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResponse;

impl DemoData for MockResponse {
    fn emit_response(
        &self,
        project: &Project,
        module: &str,
        response: &str,
        code: &mut CodeBuilder,
    ) -> Result<()> {
        let target = project
            .resolve_entity(module, response)
            .ok_or_else(|| eyre!("unknown response type '{}' in module '{}'", response, module))?;

        let mut mock = Mock::new(project);
        let var = mock.construct(code, target)?;
        code.line(format!("return {};", var));
        Ok(())
    }

    fn referenced_models(&self, project: &Project, module: &str, response: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut models = BTreeSet::new();
        if let Some(target) = project.resolve_entity(module, response) {
            collect_models(project, target, &mut seen, &mut models);
        }
        models.into_iter().collect()
    }
}

fn collect_models<'a>(
    project: &'a Project,
    target: ResolvedEntity<'a>,
    seen: &mut HashSet<(&'a str, &'a str)>,
    models: &mut BTreeSet<String>,
) {
    if !seen.insert((target.module, target.name)) {
        return;
    }
    models.insert(JavaTypeMapper::class_name(target.name));

    if target.entity.kind != EntityKind::Data {
        return;
    }
    for ty in target.entity.fields.values() {
        if let FieldType::Ref(reference) = ty {
            if let Some(next) = project.resolve_entity(target.module, reference) {
                collect_models(project, next, seen, models);
            }
        }
    }
}

struct Mock<'a> {
    project: &'a Project,
    used: HashSet<String>,
    building: Vec<(&'a str, &'a str)>,
}

impl<'a> Mock<'a> {
    fn new(project: &'a Project) -> Self {
        Self {
            project,
            used: HashSet::new(),
            building: Vec::new(),
        }
    }

    fn construct(&mut self, code: &mut CodeBuilder, target: ResolvedEntity<'a>) -> Result<String> {
        if target.entity.kind != EntityKind::Data {
            bail!(
                "cannot construct '{}': it is a {} entity, not a data entity",
                target.name,
                target.entity.kind
            );
        }

        let class = JavaTypeMapper::class_name(target.name);
        let var = self.variable(&class);
        code.line(format!("{} {} = new {}();", class, var, class));

        self.building.push((target.module, target.name));
        for (field, ty) in &target.entity.fields {
            let value = self.value(code, target.module, ty)?;
            code.line(format!("{}.set{}({});", var, to_pascal_case(field), value));
        }
        self.building.pop();

        Ok(var)
    }

    fn value(
        &mut self,
        code: &mut CodeBuilder,
        module: &'a str,
        ty: &'a FieldType,
    ) -> Result<String> {
        let value = match ty {
            FieldType::String => "\"example\"".to_string(),
            FieldType::Int => "42".to_string(),
            FieldType::Long => "42L".to_string(),
            FieldType::Double => "3.14".to_string(),
            FieldType::Float => "3.14f".to_string(),
            FieldType::Boolean => "true".to_string(),
            FieldType::List(_) => "new java.util.ArrayList<>()".to_string(),
            FieldType::Ref(reference) => {
                let target = self.project.resolve_entity(module, reference).ok_or_else(|| {
                    eyre!("unknown type '{}' referenced from module '{}'", reference, module)
                })?;
                match target.entity.kind {
                    EntityKind::Enum => match target.entity.values.first() {
                        Some(constant) => {
                            format!("{}.{}", JavaTypeMapper::class_name(target.name), constant)
                        }
                        None => "null".to_string(),
                    },
                    EntityKind::Data
                        if target.entity.is_abstract
                            || self.building.contains(&(target.module, target.name)) =>
                    {
                        "null".to_string()
                    }
                    EntityKind::Data => self.construct(code, target)?,
                    EntityKind::Request => {
                        bail!("field type '{}' refers to a request entity", reference)
                    }
                }
            }
        };
        Ok(value)
    }

    /// A local variable name not used yet in this body.
    fn variable(&mut self, class: &str) -> String {
        let base = to_camel_case(class);
        let mut candidate = base.clone();
        let mut suffix = 2;
        while !self.used.insert(candidate.clone()) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }
        candidate
    }
}
