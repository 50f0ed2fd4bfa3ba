//! Spring REST controller generator, one per module.

use std::path::{Path, PathBuf};

use eyre::Result;
use javelin_codegen::{CodeBuilder, ImportCollector, Indent};
use javelin_core::{FileRules, GeneratedFile, package_to_path, to_camel_case, to_pascal_case};
use javelin_model::{EligibleRequest, HttpMethod, Project};

use super::{GENERATED_HEADER, JAVA_SOURCE_ROOT};
use crate::{DemoData, JavaSource, JavaTypeMapper};

const SPRING_WEB: &str = "org.springframework.web.bind.annotation";

/// Placeholder body of a method without demo data.
pub const NOT_IMPLEMENTED: &str =
    "throw new UnsupportedOperationException(\"Not yet implemented\");";

/// A controller class holding one handler method per eligible request.
pub struct ControllerJava<'a> {
    project: &'a Project,
    module: &'a str,
    requests: Vec<EligibleRequest<'a>>,
    demo_data: Option<&'a dyn DemoData>,
    indent: Indent,
}

impl<'a> ControllerJava<'a> {
    pub fn new(project: &'a Project, module: &'a str, requests: Vec<EligibleRequest<'a>>) -> Self {
        Self {
            project,
            module,
            requests,
            demo_data: None,
            indent: Indent::default(),
        }
    }

    /// Fill method bodies through `demo_data` instead of the placeholder.
    pub fn with_demo_data(mut self, demo_data: &'a dyn DemoData) -> Self {
        self.demo_data = Some(demo_data);
        self
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn class_name(&self) -> String {
        format!(
            "{}{}",
            to_pascal_case(self.module),
            self.project.generate.controller_suffix
        )
    }

    fn package(&self) -> String {
        format!("{}.controller", self.project.settings.package())
    }

    fn emit_method(
        &self,
        code: &mut CodeBuilder,
        imports: &mut ImportCollector,
        types: &JavaTypeMapper,
        request: &EligibleRequest<'a>,
    ) -> Result<()> {
        let annotation = mapping_annotation(request.method);
        imports.add_from(SPRING_WEB, annotation);

        if let Some(description) = &request.entity.description {
            code.javadoc(description);
        }
        match request.path {
            Some(path) => code.line(format!("@{}(\"{}\")", annotation, path)),
            None => code.line(format!("@{}", annotation)),
        };

        let response = JavaTypeMapper::class_name(request.response.name);
        imports.add_from(types.model_package(), &response);

        let mut params = Vec::new();
        for variable in request.entity.path_variables() {
            imports.add_from(SPRING_WEB, "PathVariable");
            params.push(format!(
                "@PathVariable(\"{}\") String {}",
                variable,
                to_camel_case(variable)
            ));
        }
        if request.method.has_body() && !request.entity.fields.is_empty() {
            imports.add_from(SPRING_WEB, "RequestBody");
            imports.add("java.util.Map");
            params.push("@RequestBody Map<String, Object> body".to_string());
        }

        let header = format!(
            "public {} {}({})",
            response,
            to_camel_case(request.name),
            params.join(", ")
        );

        code.scope(header, |body| match self.demo_data {
            Some(demo_data) => {
                let (module, name) = (request.response.module, request.response.name);
                for model in demo_data.referenced_models(self.project, module, name) {
                    imports.add_from(types.model_package(), &model);
                }
                demo_data.emit_response(self.project, module, name, body)
            }
            None => {
                body.line(NOT_IMPLEMENTED);
                Ok(())
            }
        })?;

        Ok(())
    }
}

impl GeneratedFile for ControllerJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(JAVA_SOURCE_ROOT)
            .join(package_to_path(&self.package()))
            .join(format!("{}.java", self.class_name()))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> Result<String> {
        let types = JavaTypeMapper::new(format!("{}.model", self.project.settings.package()));

        let mut declaration = String::new();
        if let Some(description) = self
            .project
            .modules
            .get(self.module)
            .and_then(|m| m.description.as_deref())
        {
            declaration.push_str(&format!("/** {} */\n", description));
        }
        declaration.push_str(&format!("@RestController\npublic class {}", self.class_name()));

        JavaSource::new(self.package(), self.indent)
            .import(format!("{}.RestController", SPRING_WEB))
            .render(&declaration, |code, imports| {
                for (i, request) in self.requests.iter().enumerate() {
                    if i > 0 {
                        code.blank();
                    }
                    self.emit_method(code, imports, &types, request)?;
                }
                Ok(())
            })
    }
}

fn mapping_annotation(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "GetMapping",
        HttpMethod::Post => "PostMapping",
        HttpMethod::Put => "PutMapping",
        HttpMethod::Delete => "DeleteMapping",
        HttpMethod::Patch => "PatchMapping",
    }
}
