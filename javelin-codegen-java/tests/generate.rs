//! End-to-end generation tests against a temporary output directory.

use std::{fs, path::Path};

use eyre::eyre;
use javelin_codegen::CodeBuilder;
use javelin_codegen_java::{DemoData, Generator, LanguageCodegen, TemplateSource};
use javelin_model::Project;
use tempfile::TempDir;

const STORE: &str = r#"
[project]
name = "store"

[modules.catalog.entities.Product]
kind = "data"
fields = { sku = "string", price = "double" }

[modules.catalog.entities.GetProduct]
kind = "request"
method = "GET"
path = "/products/{sku}"
response = "Product"

[modules.catalog.entities.ListDrafts]
kind = "request"
abstract = true
method = "GET"
path = "/drafts"
response = "Product"

[modules.audit.entities.Purge]
kind = "request"
method = "PURGE"
path = "/audit"
response = "catalog.Product"

[modules.audit.entities.Export]
kind = "request"
abstract = true
method = "GET"
response = "catalog.Product"
"#;

const CATALOG_CONTROLLER: &str =
    "src/main/java/com/example/store/controller/CatalogController.java";
const AUDIT_CONTROLLER: &str = "src/main/java/com/example/store/controller/AuditController.java";

fn project(src: &str) -> Project {
    src.parse().expect("valid project")
}

fn paths(generator: &Generator<'_>) -> Vec<String> {
    generator
        .preview()
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect()
}

struct FailingDemoData;

impl DemoData for FailingDemoData {
    fn emit_response(
        &self,
        _project: &Project,
        _module: &str,
        response: &str,
        code: &mut CodeBuilder,
    ) -> eyre::Result<()> {
        code.line("int partial;");
        Err(eyre!("cannot build {}", response))
    }
}

#[test]
fn test_module_without_eligible_requests_has_no_controller() {
    let project = project(STORE);
    let generator = Generator::new(&project);

    let paths = paths(&generator);
    assert!(paths.iter().any(|p| p == CATALOG_CONTROLLER));
    assert!(!paths.iter().any(|p| p == AUDIT_CONTROLLER));
}

#[test]
fn test_one_eligible_request_gives_one_method() {
    let project = project(STORE);
    let files = Generator::new(&project).preview().unwrap();

    let controllers: Vec<_> = files
        .iter()
        .filter(|f| f.path.contains("/controller/"))
        .collect();
    assert_eq!(controllers.len(), 1);

    let content = &controllers[0].content;
    assert_eq!(content.matches("Mapping(").count(), 1);
    assert!(content.contains("public Product getProduct(@PathVariable(\"sku\") String sku) {"));
    assert!(!content.contains("listDrafts"));
}

#[test]
fn test_generated_files() {
    let project = project(STORE);
    let generator = Generator::new(&project);

    assert_eq!(
        paths(&generator),
        [
            CATALOG_CONTROLLER,
            "src/main/java/com/example/store/model/Product.java",
            "src/main/java/com/example/store/StoreApplication.java",
            "pom.xml",
            "src/main/resources/application.properties",
            "README.md",
            ".gitignore",
        ]
    );
}

#[test]
fn test_java_sources_start_with_generated_header() {
    let project = project(STORE);
    let files = Generator::new(&project).preview().unwrap();

    for file in files.iter().filter(|f| f.path.ends_with(".java")) {
        assert!(
            file.content
                .starts_with("// Code generated by javelin. DO NOT EDIT.\npackage "),
            "{}",
            file.path
        );
    }
}

#[test]
fn test_generate_writes_files() {
    let temp = TempDir::new().unwrap();
    let project = project(STORE);

    let result = Generator::new(&project).generate(temp.path()).unwrap();

    assert_eq!(result.written.len(), 7);
    assert!(result.kept.is_empty());
    assert!(temp.path().join(CATALOG_CONTROLLER).exists());
    assert!(temp.path().join(".gitignore").exists());
}

#[test]
fn test_generate_keeps_existing_templates_and_overwrites_sources() {
    let temp = TempDir::new().unwrap();
    let project = project(STORE);
    let controller = temp.path().join(CATALOG_CONTROLLER);
    fs::create_dir_all(controller.parent().unwrap()).unwrap();
    fs::write(&controller, "stale").unwrap();
    fs::write(temp.path().join("pom.xml"), "<project/>").unwrap();

    let result = Generator::new(&project).generate(temp.path()).unwrap();

    assert_eq!(result.kept, ["pom.xml"]);
    assert_eq!(
        fs::read_to_string(temp.path().join("pom.xml")).unwrap(),
        "<project/>"
    );
    assert_ne!(fs::read_to_string(&controller).unwrap(), "stale");
}

#[test]
fn test_failing_demo_data_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let project = project(STORE);

    let err = Generator::new(&project)
        .with_demo_data(FailingDemoData)
        .generate(temp.path())
        .unwrap_err();

    assert!(err.to_string().contains("cannot build Product"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_demo_data_from_settings() {
    let src = STORE.replace("name = \"store\"", "name = \"store\"\n\n[generate]\ndemo_data = true");
    let project = project(&src);
    let files = Generator::new(&project).preview().unwrap();

    let controller = files.iter().find(|f| f.path == CATALOG_CONTROLLER).unwrap();
    assert!(controller.content.contains("    Product product = new Product();\n"));
    assert!(controller.content.contains("    return product;\n  }"));
    assert!(!controller.content.contains("UnsupportedOperationException"));
}

#[test]
fn test_without_demo_data_uses_placeholder() {
    let src = STORE.replace("name = \"store\"", "name = \"store\"\n\n[generate]\ndemo_data = true");
    let project = project(&src);
    let files = Generator::new(&project)
        .without_demo_data()
        .preview()
        .unwrap();

    let controller = files.iter().find(|f| f.path == CATALOG_CONTROLLER).unwrap();
    assert!(controller.content.contains(
        "    throw new UnsupportedOperationException(\"Not yet implemented\");\n"
    ));
}

#[test]
fn test_indent_setting() {
    let src = STORE.replace("name = \"store\"", "name = \"store\"\n\n[generate]\nindent = 4");
    let project = project(&src);
    let files = Generator::new(&project).preview().unwrap();

    let controller = files.iter().find(|f| f.path == CATALOG_CONTROLLER).unwrap();
    assert!(controller.content.contains("\n    @GetMapping(\"/products/{sku}\")\n"));
}

#[test]
fn test_custom_template_directory() {
    let templates = TempDir::new().unwrap();
    fs::write(templates.path().join("build.gradle"), "// {{name}}").unwrap();
    let project = project(STORE);

    let files = Generator::new(&project)
        .with_templates(TemplateSource::Directory(templates.path().to_path_buf()))
        .preview()
        .unwrap();

    let gradle = files.iter().find(|f| f.path == "build.gradle").unwrap();
    assert_eq!(gradle.content, "// {{name}}");
    assert!(!files.iter().any(|f| Path::new(&f.path) == Path::new("pom.xml")));
}

#[test]
fn test_binary_template_is_copied() {
    let templates = TempDir::new().unwrap();
    let jar = [b'P', b'K', 3, 4, 0xff, 0xfe, 0];
    fs::create_dir_all(templates.path().join(".mvn/wrapper")).unwrap();
    fs::write(templates.path().join(".mvn/wrapper/maven-wrapper.jar"), jar).unwrap();
    let out = TempDir::new().unwrap();
    let project = project(STORE);

    let generator = Generator::new(&project)
        .with_templates(TemplateSource::Directory(templates.path().to_path_buf()));
    let preview = generator.preview().unwrap();
    let result = generator.generate(out.path()).unwrap();

    let wrapper = preview
        .iter()
        .find(|f| f.path == ".mvn/wrapper/maven-wrapper.jar")
        .unwrap();
    assert_eq!(wrapper.content, "<binary file, 7 bytes>");
    assert!(result.written.iter().any(|p| p.ends_with("maven-wrapper.jar")));
    assert_eq!(
        fs::read(out.path().join(".mvn/wrapper/maven-wrapper.jar")).unwrap(),
        jar
    );
}

#[test]
fn test_tab_indent_setting() {
    let src = STORE.replace("name = \"store\"", "name = \"store\"\n\n[generate]\nuse_tabs = true");
    let project = project(&src);
    let files = Generator::new(&project).preview().unwrap();

    let controller = files.iter().find(|f| f.path == CATALOG_CONTROLLER).unwrap();
    assert!(controller.content.contains("\n\t@GetMapping(\"/products/{sku}\")\n"));
    assert!(controller.content.contains("\n\t\tthrow new UnsupportedOperationException("));
}
