//! Spring Boot application entry point.

use std::path::{Path, PathBuf};

use eyre::Result;
use javelin_codegen::Indent;
use javelin_core::{FileRules, GeneratedFile, package_to_path, to_pascal_case};

use super::{GENERATED_HEADER, JAVA_SOURCE_ROOT};
use crate::JavaSource;

/// The `{Name}Application` class with `main`.
pub struct ApplicationJava {
    package: String,
    class_name: String,
    indent: Indent,
}

impl ApplicationJava {
    pub fn new(project_name: &str, package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class_name: format!("{}Application", to_pascal_case(project_name)),
            indent: Indent::default(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl GeneratedFile for ApplicationJava {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(JAVA_SOURCE_ROOT)
            .join(package_to_path(&self.package))
            .join(format!("{}.java", self.class_name))
    }

    fn rules(&self) -> FileRules {
        FileRules::generated(GENERATED_HEADER)
    }

    fn render(&self) -> Result<String> {
        JavaSource::new(&self.package, self.indent)
            .import("org.springframework.boot.SpringApplication")
            .import("org.springframework.boot.autoconfigure.SpringBootApplication")
            .render(
                &format!("@SpringBootApplication\npublic class {}", self.class_name),
                |code, _| {
                    code.block("public static void main(String[] args)", |b| {
                        b.line(format!(
                            "SpringApplication.run({}.class, args);",
                            self.class_name
                        ));
                    });
                    Ok(())
                },
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_render() {
        let app = ApplicationJava::new("pet-store", "com.example.petstore");

        assert_eq!(app.class_name(), "PetStoreApplication");
        assert_eq!(
            app.render().unwrap(),
            r#"package com.example.petstore;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class PetStoreApplication {
  public static void main(String[] args) {
    SpringApplication.run(PetStoreApplication.class, args);
  }
}"#
        );
    }

    #[test]
    fn test_application_path() {
        let app = ApplicationJava::new("shop", "io.acme.shop");
        assert_eq!(
            app.path(Path::new("")),
            Path::new("src/main/java/io/acme/shop/ShopApplication.java")
        );
    }
}
