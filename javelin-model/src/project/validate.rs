//! Validation context and identifier rules for project parsing.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use javelin_core::{to_camel_case, to_pascal_case};
use miette::SourceSpan;

use super::Project;
use crate::{EntityKind, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Nested validation pushes path segments so diagnostics can say where a bad
/// name lives, e.g. "field in 'pets.Pet'".
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` at the current path, e.g. "field in 'pets.Pet'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Check `name` as the source of a Java identifier.
    ///
    /// `java_name` is the identifier that will actually be emitted, which is
    /// what must not collide with a keyword.
    pub fn validate_name(&self, name: &str, java_name: &str, kind: &str) -> Result<()> {
        self.validate_name_at(name, java_name, kind, self.find_span(name))
    }

    fn validate_name_at(
        &self,
        name: &str,
        java_name: &str,
        kind: &str,
        span: Option<SourceSpan>,
    ) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        if is_java_keyword(java_name) {
            return Err(self.source.reserved_keyword_error(
                java_name,
                self.context_for(kind),
                span,
            ));
        }

        Ok(())
    }

    /// `{name}` path segments become method parameters, so each must be a
    /// usable, distinct Java name.
    fn validate_path_variables(&self, variables: &[&str]) -> Result<()> {
        let mut seen = HashSet::new();
        for variable in variables {
            let java_name = to_camel_case(variable);
            let span = find_literal_span(self.source.src(), &format!("{{{}}}", variable));
            self.validate_name_at(variable, &java_name, "path variable", span)?;

            if !seen.insert(java_name) {
                return Err(self.source.validation_error(
                    format!(
                        "path variable '{}' appears more than once in '{}'",
                        variable,
                        self.path_string()
                    ),
                    span,
                ));
            }
        }
        Ok(())
    }

    /// Validate a whole project after deserialization.
    pub fn validate_project(&self, project: &'a Project) -> Result<()> {
        let settings = &project.settings;

        if settings.name.trim().is_empty() {
            return Err(self
                .source
                .missing_name_error(find_literal_span(self.source.src(), "[project]")));
        }

        let package = settings.package();
        if let Err(reason) = validate_package(&package) {
            return Err(self.source.invalid_package_error(
                &package,
                reason,
                find_literal_span(self.source.src(), &package),
            ));
        }

        let indent = project.generate.indent;
        if !(1..=8).contains(&indent) {
            return Err(self.source.validation_error(
                format!("indent must be between 1 and 8 spaces, got {}", indent),
                find_literal_span(self.source.src(), "indent"),
            ));
        }

        // Java class name -> first declaring `module.Entity`
        let mut models: HashMap<String, String> = HashMap::new();

        for (module_name, module) in &project.modules {
            self.validate_name(module_name, module_name, "module")?;
            let module_ctx = self.push(module_name);

            for (entity_name, entity) in &module.entities {
                module_ctx.validate_name(entity_name, &to_camel_case(entity_name), "entity")?;
                let entity_ctx = module_ctx.push(entity_name);

                for field_name in entity.fields.keys() {
                    entity_ctx.validate_name(field_name, &to_camel_case(field_name), "field")?;
                }

                if entity.kind == EntityKind::Enum {
                    for value in &entity.values {
                        entity_ctx.validate_name(value, value, "enum value")?;
                    }
                }

                if entity.kind == EntityKind::Request {
                    entity_ctx.validate_path_variables(&entity.path_variables())?;
                }

                let is_model = match entity.kind {
                    EntityKind::Data => !entity.is_abstract,
                    EntityKind::Enum => true,
                    EntityKind::Request => false,
                };
                if is_model {
                    let class = to_pascal_case(entity_name);
                    let declared = format!("{}.{}", module_name, entity_name);
                    if let Some(first) = models.get(&class) {
                        let span = find_literal_span(
                            self.source.src(),
                            &format!("modules.{}.entities.{}", module_name, entity_name),
                        );
                        return Err(self
                            .source
                            .duplicate_model_error(class, first, declared, span));
                    }
                    models.insert(class, declared);
                }
            }
        }

        Ok(())
    }
}

/// Java reserved keywords and literals that cannot be used as identifiers.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

pub fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Reason why `name` cannot be turned into a Java identifier, if any.
///
/// `-` is accepted because names are case-converted before emission.
pub(crate) fn validate_identifier(name: &str) -> Option<String> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty".to_string()),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Some(format!("name cannot start with '{}'", c));
        }
        _ => {}
    }

    chars
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        .map(|c| format!("'{}' is not allowed in a name", c))
}

/// Check a dotted Java package name.
pub fn validate_package(package: &str) -> std::result::Result<(), String> {
    if package.is_empty() {
        return Err("package cannot be empty".to_string());
    }
    for segment in package.split('.') {
        if segment.is_empty() {
            return Err("package segments cannot be empty".to_string());
        }
        if is_java_keyword(segment) {
            return Err(format!("'{}' is a Java keyword", segment));
        }
        let mut chars = segment.chars();
        let starts_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !starts_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!("'{}' is not a valid package segment", segment));
        }
    }
    Ok(())
}

/// Find where a table key, inline key or quoted value named `name` appears.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table headers: [modules.name] or [modules.name.entities.x]
    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some((pos + 1, name.len()).into());
        }
    }

    // Inline keys and quoted values: `name = ...` or "name"
    for pattern in [format!("{} =", name), format!("\"{}\"", name)] {
        if let Some(pos) = src.find(&pattern) {
            let offset = if pattern.starts_with('"') { 1 } else { 0 };
            return Some((pos + offset, name.len()).into());
        }
    }

    None
}

fn find_literal_span(src: &str, literal: &str) -> Option<SourceSpan> {
    src.find(literal).map(|pos| (pos, literal.len()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("getUser").is_none());
        assert!(validate_identifier("get-user").is_none());
        assert!(validate_identifier("_internal").is_none());
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1user").is_some());
        assert!(validate_identifier("user name").is_some());
    }

    #[test]
    fn test_validate_package() {
        assert!(validate_package("com.example.shop").is_ok());
        assert!(validate_package("com.example.").is_err());
        assert!(validate_package("com.new.shop").is_err());
        assert!(validate_package("com.my-shop").is_err());
        assert!(validate_package("").is_err());
    }

    #[test]
    fn test_java_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("user"));
    }

    #[test]
    fn test_find_name_span_table_header() {
        let src = "[modules.users.entities.GetUser]\nkind = \"request\"";
        let span = find_name_span(src, "GetUser").unwrap();
        assert_eq!(span.offset(), 24);
        assert_eq!(span.len(), 7);
    }

    #[test]
    fn test_find_name_span_inline_key() {
        let src = "fields = { class = \"string\" }";
        let span = find_name_span(src, "class").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "class");
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "javelin.toml");
        assert_eq!(ctx.context_for("module"), "module");
        assert_eq!(
            ctx.push("pets").push("Pet").context_for("field"),
            "field in 'pets.Pet'"
        );
    }
}
