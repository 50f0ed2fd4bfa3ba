//! Import collection for generated sources.

use std::collections::BTreeSet;

/// Tracks fully qualified type imports and deduplicates them.
///
/// Imports are kept sorted so generated files are stable across runs.
///
/// # Example
///
/// ```
/// use javelin_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util.List");
/// imports.add("com.example.model.User");
/// imports.add("java.util.List");
///
/// let all: Vec<&str> = imports.iter().collect();
/// assert_eq!(all, ["com.example.model.User", "java.util.List"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: BTreeSet<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully qualified type name.
    pub fn add(&mut self, qualified: impl Into<String>) {
        self.imports.insert(qualified.into());
    }

    /// Add `name` from `package`.
    pub fn add_from(&mut self, package: &str, name: &str) {
        self.add(format!("{}.{}", package, name));
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        self.imports.extend(other.imports.iter().cloned());
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.imports.contains(qualified)
    }

    /// Iterate over imports that actually need an import statement from
    /// `package`: anything outside `package` itself and outside `java.lang`.
    pub fn needed_from<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |qualified| {
            let owner = qualified.rsplit_once('.').map_or("", |(p, _)| p);
            owner != package && owner != "java.lang"
        })
    }

    /// Iterate over all imports in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_sort() {
        let mut imports = ImportCollector::new();
        imports.add_from("org.springframework.web.bind.annotation", "GetMapping");
        imports.add("java.util.List");
        imports.add("java.util.List");

        assert_eq!(imports.len(), 2);
        assert!(imports.contains("java.util.List"));
        assert_eq!(imports.iter().next(), Some("java.util.List"));
    }

    #[test]
    fn test_needed_from_skips_same_package_and_java_lang() {
        let mut imports = ImportCollector::new();
        imports.add("com.example.model.User");
        imports.add("com.example.model.Owner");
        imports.add("java.lang.String");
        imports.add("java.util.Map");

        let needed: Vec<_> = imports.needed_from("com.example.model").collect();
        assert_eq!(needed, vec!["java.util.Map"]);
    }

    #[test]
    fn test_merge() {
        let mut a = ImportCollector::new();
        a.add("java.util.List");
        let mut b = ImportCollector::new();
        b.add("java.util.Map");
        a.merge(&b);
        assert_eq!(a.len(), 2);
    }
}
