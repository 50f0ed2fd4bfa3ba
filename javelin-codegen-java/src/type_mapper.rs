//! Java type mapper implementation.

use javelin_codegen::ImportCollector;
use javelin_core::to_pascal_case;
use javelin_model::FieldType;

/// Maps field types to Java types and records the imports they need.
#[derive(Debug, Clone)]
pub struct JavaTypeMapper {
    model_package: String,
}

impl JavaTypeMapper {
    /// `model_package` is where data and enum entities are emitted.
    pub fn new(model_package: impl Into<String>) -> Self {
        Self {
            model_package: model_package.into(),
        }
    }

    pub fn model_package(&self) -> &str {
        &self.model_package
    }

    /// Java class name for an entity reference (`Pet` or `pets.Pet`).
    pub fn class_name(reference: &str) -> String {
        let name = reference.rsplit('.').next().unwrap_or(reference);
        to_pascal_case(name)
    }

    /// Java type for a field, using primitives where Java allows them.
    pub fn map_type(&self, ty: &FieldType, imports: &mut ImportCollector) -> String {
        match ty {
            FieldType::String => "String".to_string(),
            FieldType::Int => "int".to_string(),
            FieldType::Long => "long".to_string(),
            FieldType::Double => "double".to_string(),
            FieldType::Float => "float".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::List(inner) => {
                imports.add("java.util.List");
                format!("List<{}>", self.map_boxed_type(inner, imports))
            }
            FieldType::Ref(reference) => {
                let class = Self::class_name(reference);
                imports.add_from(&self.model_package, &class);
                class
            }
        }
    }

    /// Java type for a field in a generic position.
    pub fn map_boxed_type(&self, ty: &FieldType, imports: &mut ImportCollector) -> String {
        match ty {
            FieldType::Int => "Integer".to_string(),
            FieldType::Long => "Long".to_string(),
            FieldType::Double => "Double".to_string(),
            FieldType::Float => "Float".to_string(),
            FieldType::Boolean => "Boolean".to_string(),
            other => self.map_type(other, imports),
        }
    }
}
