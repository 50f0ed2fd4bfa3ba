//! Entities: requests, data types and enums declared inside a module.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

/// What an entity describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// An API call: HTTP method, path and response type.
    Request,
    /// A structured payload with named fields.
    Data,
    /// A closed set of constants.
    Enum,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Data => "data",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named entity as declared in `javelin.toml`.
///
/// `method` and `response` are kept as written; whether they resolve is
/// decided by [`Project::classify`](crate::Project::classify).
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,

    /// Abstract entities never produce output.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// HTTP verb of a request, e.g. "GET".
    pub method: Option<String>,

    /// URL path of a request; `{name}` segments are path variables.
    pub path: Option<String>,

    /// Name of the data entity a request returns.
    pub response: Option<String>,

    /// Fields of a data entity, or body fields of a request.
    #[serde(default)]
    pub fields: IndexMap<String, FieldType>,

    /// Constants of an enum entity.
    #[serde(default)]
    pub values: Vec<String>,

    pub description: Option<String>,
}

impl Entity {
    /// The HTTP method, if it is one of the recognized verbs.
    pub fn http_method(&self) -> Option<HttpMethod> {
        self.method.as_deref().and_then(|m| m.parse().ok())
    }

    /// Names of the `{name}` segments in the path, in order.
    pub fn path_variables(&self) -> Vec<&str> {
        let Some(path) = self.path.as_deref() else {
            return Vec::new();
        };
        path.split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Recognized HTTP verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }

    /// Whether requests with this verb conventionally carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            _ => Err(format!("unrecognized HTTP method '{}'", s)),
        }
    }
}

/// Type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum FieldType {
    String,
    Int,
    Long,
    Double,
    Float,
    Boolean,
    List(Box<FieldType>),
    /// Another entity, by name (optionally `module.Entity`).
    Ref(String),
}

impl TryFrom<String> for FieldType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(inner) = s
            .strip_prefix("list<")
            .or_else(|| s.strip_prefix("List<"))
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return Ok(Self::List(Box::new(inner.parse()?)));
        }

        match s {
            "string" => Ok(Self::String),
            "int" | "integer" => Ok(Self::Int),
            "long" => Ok(Self::Long),
            "double" => Ok(Self::Double),
            "float" => Ok(Self::Float),
            "bool" | "boolean" => Ok(Self::Boolean),
            "" => Err("empty field type".to_string()),
            other
                if other
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.') =>
            {
                Ok(Self::Ref(other.to_string()))
            }
            other => Err(format!(
                "invalid field type '{}', expected string, int, long, double, float, boolean, list<T> or an entity name",
                other
            )),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Int => f.write_str("int"),
            Self::Long => f.write_str("long"),
            Self::Double => f.write_str("double"),
            Self::Float => f.write_str("float"),
            Self::Boolean => f.write_str("boolean"),
            Self::List(inner) => write!(f, "list<{}>", inner),
            Self::Ref(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Option<&str>, path: Option<&str>) -> Entity {
        Entity {
            kind: EntityKind::Request,
            is_abstract: false,
            method: method.map(String::from),
            path: path.map(String::from),
            response: None,
            fields: IndexMap::new(),
            values: Vec::new(),
            description: None,
        }
    }

    #[test]
    fn test_http_method_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("Patch".parse::<HttpMethod>(), Ok(HttpMethod::Patch));
        assert!("FETCH".parse::<HttpMethod>().is_err());
        assert!("".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_entity_http_method() {
        assert_eq!(
            request(Some("delete"), None).http_method(),
            Some(HttpMethod::Delete)
        );
        assert_eq!(request(Some("OPTIONS"), None).http_method(), None);
        assert_eq!(request(None, None).http_method(), None);
    }

    #[test]
    fn test_path_variables() {
        let entity = request(Some("GET"), Some("/owners/{ownerId}/pets/{petId}"));
        assert_eq!(entity.path_variables(), vec!["ownerId", "petId"]);
        assert!(request(Some("GET"), Some("/pets")).path_variables().is_empty());
        assert!(request(Some("GET"), None).path_variables().is_empty());
    }

    #[test]
    fn test_field_type_parsing() {
        assert_eq!("string".parse::<FieldType>(), Ok(FieldType::String));
        assert_eq!("integer".parse::<FieldType>(), Ok(FieldType::Int));
        assert_eq!(
            "list<list<long>>".parse::<FieldType>(),
            Ok(FieldType::List(Box::new(FieldType::List(Box::new(
                FieldType::Long
            )))))
        );
        assert_eq!(
            "pets.Owner".parse::<FieldType>(),
            Ok(FieldType::Ref("pets.Owner".to_string()))
        );
        assert!("map<string>".parse::<FieldType>().is_err());
        assert!("".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_field_type_display() {
        let ty = FieldType::List(Box::new(FieldType::Ref("Tag".to_string())));
        assert_eq!(ty.to_string(), "list<Tag>");
    }
}
