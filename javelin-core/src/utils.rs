//! Shared naming helpers for code generation.

use std::path::PathBuf;

/// Split an identifier into words on `_`, `-`, spaces and lower-to-upper
/// case boundaries.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "get_user" -> "GetUser")
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a string to camelCase (e.g., "GetUser" -> "getUser")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "GetUser" -> "get_user")
pub fn to_snake_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Turn a dotted Java package into a relative directory path
/// (e.g., "com.example.app" -> "com/example/app").
pub fn package_to_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("get_user"), "GetUser");
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("getUser"), "GetUser");
        assert_eq!(to_pascal_case("GetUser"), "GetUser");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("GetUser"), "getUser");
        assert_eq!(to_camel_case("list_pets"), "listPets");
        assert_eq!(to_camel_case("id"), "id");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("GetUser"), "get_user");
        assert_eq!(to_snake_case("user-profile"), "user_profile");
        assert_eq!(to_snake_case("pets"), "pets");
    }

    #[test]
    fn test_package_to_path() {
        assert_eq!(
            package_to_path("com.example.petstore"),
            PathBuf::from("com").join("example").join("petstore")
        );
        assert_eq!(package_to_path(""), PathBuf::new());
    }
}
