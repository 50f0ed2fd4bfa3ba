use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for javelin-model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename used to attach diagnostics to a manifest.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn missing_name_error(&self, span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingName {
            src: self.named_source(),
            span,
        })
    }

    pub fn invalid_package_error(
        &self,
        package: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackage {
            src: self.named_source(),
            span,
            package: package.into(),
            reason: reason.into(),
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn duplicate_model_error(
        &self,
        class: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateModel {
            src: self.named_source(),
            span,
            class: class.into(),
            first: first.into(),
            second: second.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse javelin.toml")]
    #[diagnostic(code(javelin::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("project name is missing")]
    #[diagnostic(
        code(javelin::missing_name),
        help("add `name = \"my-service\"` under the [project] table")
    )]
    MissingName {
        #[source_code]
        src: NamedSource<String>,
        #[label("project declared here")]
        span: Option<SourceSpan>,
    },

    #[error("invalid package '{package}'")]
    #[diagnostic(
        code(javelin::invalid_package),
        help("{reason}. Packages are dot-separated Java identifiers, e.g. 'com.example.shop'")
    )]
    InvalidPackage {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package")]
        span: Option<SourceSpan>,
        package: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(javelin::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(
        code(javelin::reserved_keyword),
        help("rename the {context} '{name}' to something else")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("model class '{class}' is declared by both '{first}' and '{second}'")]
    #[diagnostic(
        code(javelin::duplicate_model),
        help("all models share one package; rename one of the entities")
    )]
    DuplicateModel {
        #[source_code]
        src: NamedSource<String>,
        #[label("second declaration")]
        span: Option<SourceSpan>,
        class: String,
        first: String,
        second: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(javelin::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, '_' and '-', starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}
