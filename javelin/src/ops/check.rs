//! Check operation - report what a project will and will not generate.

use std::path::Path;

use javelin_model::{Project, SkipReason};

use crate::reports::{CheckReport, ModuleSummary};

/// Classify every entity of every module.
///
/// Malformed requests (no usable method or response) become warnings.
/// Abstract requests and modules without a controller are listed as info.
pub fn check(project: &Project, config_path: &Path) -> CheckReport {
    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    let mut modules = Vec::new();

    for module in project.modules.keys() {
        for (entity, reason) in project.skipped_entities(module) {
            if reason == SkipReason::NotARequest {
                continue;
            }
            let msg = format!("{}.{}: {}", module, entity, reason);
            if reason.is_malformed() {
                warnings.push(msg);
            } else {
                infos.push(msg);
            }
        }

        let requests = project.eligible_requests(module).len();
        if requests == 0 {
            infos.push(format!(
                "module '{}' has no eligible requests, no controller will be generated",
                module
            ));
        }
        modules.push(ModuleSummary {
            name: module.clone(),
            requests,
        });
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        project_name: project.settings.name.clone(),
        version: project.settings.version.to_string(),
        modules,
        warnings,
        infos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r#"
[project]
name = "shop"

[modules.orders.entities.Order]
kind = "data"

[modules.orders.entities.GetOrder]
kind = "request"
method = "GET"
response = "Order"

[modules.orders.entities.BaseRequest]
kind = "request"
abstract = true

[modules.orders.entities.Cancel]
kind = "request"
method = "CANCEL"
response = "Order"

[modules.reports.entities.Summary]
kind = "request"
method = "GET"
"#;

    #[test]
    fn test_check_report() {
        let project: Project = SRC.parse().unwrap();
        let report = check(&project, Path::new("javelin.toml"));

        assert_eq!(
            report.warnings,
            [
                "orders.Cancel: unrecognized HTTP method 'CANCEL'",
                "reports.Summary: no response type",
            ]
        );
        assert_eq!(
            report.infos,
            [
                "orders.BaseRequest: abstract request",
                "module 'reports' has no eligible requests, no controller will be generated",
            ]
        );

        let counts: Vec<(&str, usize)> = report
            .modules
            .iter()
            .map(|m| (m.name.as_str(), m.requests))
            .collect();
        assert_eq!(counts, [("orders", 1), ("reports", 0)]);
    }
}
