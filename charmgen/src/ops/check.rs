//! Check operation - charmcraft.yaml validation.

use std::path::Path;

use charmgen_codegen::{
    language::TypeMapper,
    pipeline::{Pipeline, Severity, phases::ValidatePhase},
};
use charmgen_codegen_go::{DEFAULT_PACKAGE, GoTypeMapper};
use charmgen_ir::ConfigIR;
use charmgen_manifest::Charmcraft;
use eyre::{Context, Result};

use crate::reports::{CheckReport, ModelSummary};

/// Execute the check operation.
///
/// Lint errors are reported without assembling the model. Otherwise the
/// full pipeline runs and the report carries a summary of the model.
pub fn check(charmcraft: &Charmcraft, config_path: &Path) -> Result<CheckReport> {
    let lint_diagnostics = ValidatePhase::new().check(charmcraft);
    let (diagnostics, summary) = if lint_diagnostics.iter().any(|d| d.severity.is_error()) {
        (lint_diagnostics, None)
    } else {
        let mut ctx = Pipeline::new()
            .run(charmcraft.clone(), DEFAULT_PACKAGE)
            .wrap_err("Validation failed")?;
        let summary = summarize(&ctx.take_ir()?);
        (ctx.diagnostics, Some(summary))
    };

    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
        summary,
    };

    for diag in &diagnostics {
        let msg = diag.describe();
        match diag.severity {
            Severity::Error => report.errors.push(msg),
            Severity::Warning => report.warnings.push(msg),
            Severity::Info => report.infos.push(msg),
        }
    }

    Ok(report)
}

fn summarize(ir: &ConfigIR) -> ModelSummary {
    let mapper = GoTypeMapper;
    let options = ir
        .options
        .iter()
        .map(|o| format!("{} {} ({})", o.identifier, mapper.map_type(o.ty), o.env_var))
        .collect();

    let integrations = ir
        .integrations
        .values()
        .map(|i| {
            let mut traits = Vec::new();
            if let Some(prefix) = &i.database_prefix {
                traits.push(format!("database, {}", prefix));
            }
            if i.optional {
                traits.push("optional".to_string());
            }
            if traits.is_empty() {
                format!("{} -> {}", i.name, i.display_name)
            } else {
                format!("{} -> {} ({})", i.name, i.display_name, traits.join(", "))
            }
        })
        .collect();

    ModelSummary {
        options,
        integrations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Charmcraft {
        yaml.parse().expect("Failed to parse test charmcraft.yaml")
    }

    #[test]
    fn test_valid_charm_has_summary() {
        let charmcraft = parse(
            r#"
config:
  options:
    user-defined-bool:
      type: boolean
      description: A flag
    user-defined-int:
      type: int
      default: 100
      description: A number
requires:
  mysql:
    interface: mysql_client
    optional: true
  s3:
    interface: s3
"#,
        );

        let report = check(&charmcraft, Path::new("charmcraft.yaml")).unwrap();

        assert!(report.is_valid());
        let summary = report.summary.unwrap();
        assert_eq!(
            summary.options,
            [
                "UserDefinedBool *bool (APP_USER_DEFINED_BOOL)",
                "UserDefinedInt int (APP_USER_DEFINED_INT)",
            ]
        );
        assert_eq!(
            summary.integrations,
            [
                "mysql -> MySQL (database, APP_MYSQL_, optional)",
                "s3 -> S3",
            ]
        );
    }

    #[test]
    fn test_lint_errors_skip_summary() {
        let charmcraft = parse(
            "config:\n  options:\n    foo-bar:\n      type: string\n      description: a\n    foo_bar:\n      type: string\n      description: b\n",
        );

        let report = check(&charmcraft, Path::new("charmcraft.yaml")).unwrap();

        assert!(!report.is_valid());
        assert!(report.summary.is_none());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("APP_FOO_BAR"));
    }

    #[test]
    fn test_warnings_and_infos_are_collected() {
        let charmcraft = parse(
            "config:\n  options:\n    port:\n      type: int\nrequires:\n  cache:\n    interface: redis_client\n",
        );

        let report = check(&charmcraft, Path::new("charmcraft.yaml")).unwrap();

        assert!(report.is_valid());
        // Missing description plus the dropped integration
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.infos.len(), 1);
        assert!(report.infos[0].ends_with("--> requires.cache"));
    }
}
