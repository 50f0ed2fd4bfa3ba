//! Java file generators.

mod application_java;
mod controller_java;
mod model_java;

pub use application_java::ApplicationJava;
pub use controller_java::ControllerJava;
pub use model_java::ModelJava;

/// First line of every generated Java source.
pub const GENERATED_HEADER: &str = "// Code generated by javelin. DO NOT EDIT.";

/// Root of Maven's main source set.
pub(crate) const JAVA_SOURCE_ROOT: &str = "src/main/java";
