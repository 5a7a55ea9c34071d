//! Assembly of the aggregate configuration model.

use std::collections::BTreeMap;

use charmgen_ir::{COMMON_PREFIX, ConfigIR, OptionBinding};
use charmgen_manifest::{Charmcraft, ConfigOption, Requirement};

use crate::{
    Result, Warning,
    integrations::classify,
    naming::{env_var_name, identifier},
    types::map_type,
};

/// Output of a successful assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    /// The aggregate model handed to renderers.
    pub model: ConfigIR,
    /// Non-fatal conditions, in key order.
    pub warnings: Vec<Warning>,
}

/// Assemble the model for a decoded charmcraft.yaml.
pub fn assemble_charmcraft(package_name: &str, charmcraft: &Charmcraft) -> Result<Assembly> {
    assemble(
        package_name,
        &charmcraft.config.options,
        &charmcraft.requires,
    )
}

/// Assemble the model from declared options and integrations.
///
/// Inputs are visited in key order, so the reported error (when several
/// options carry unknown types) and the warning list are deterministic
/// regardless of the iteration order of the input maps.
pub fn assemble<'a, O, R>(package_name: &str, options: O, requires: R) -> Result<Assembly>
where
    O: IntoIterator<Item = (&'a String, &'a ConfigOption)>,
    R: IntoIterator<Item = (&'a String, &'a Requirement)>,
{
    let options: BTreeMap<_, _> = options.into_iter().collect();
    let requires: BTreeMap<_, _> = requires.into_iter().collect();

    let mut bindings = options
        .into_iter()
        .map(|(key, option)| -> Result<OptionBinding> {
            Ok(OptionBinding {
                identifier: identifier(key),
                ty: map_type(key, &option.option_type, option.has_default())?,
                env_var: env_var_name(key, COMMON_PREFIX),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    // Stable: bindings sharing an identifier keep their key order
    bindings.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    let mut integrations = BTreeMap::new();
    let mut warnings = Vec::new();
    for (key, requirement) in requires {
        match classify(key, requirement) {
            Ok(integration) => {
                integrations.insert(key.clone(), integration);
            }
            Err(unrecognized) => warnings.push(Warning::UnrecognizedIntegration {
                key: unrecognized.key,
            }),
        }
    }

    let has_database_integrations = integrations.values().any(|i| i.is_database);

    Ok(Assembly {
        model: ConfigIR {
            package_name: package_name.to_string(),
            common_prefix: COMMON_PREFIX.to_string(),
            options: bindings,
            integrations,
            has_database_integrations,
        },
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use charmgen_ir::{BaseType, TypeDescriptor};

    use super::*;
    use crate::Error;

    fn parse(yaml: &str) -> Charmcraft {
        yaml.parse().expect("Failed to parse test charmcraft.yaml")
    }

    const USER_OPTIONS: &str = r#"
config:
  options:
    user-defined-str:
      type: string
      default: "hello"
    user-defined-int:
      type: int
      default: 100
    user-defined-bool:
      type: bool
requires:
  mysql:
    interface: mysql_client
    optional: true
    limit: 1
  s3:
    interface: s3
    optional: false
"#;

    #[test]
    fn test_user_options() {
        let assembly = assemble_charmcraft("charmconfig", &parse(USER_OPTIONS)).unwrap();
        let options = &assembly.model.options;

        assert_eq!(options.len(), 3);

        assert_eq!(options[0].identifier, "UserDefinedBool");
        assert_eq!(options[0].ty, TypeDescriptor::nullable(BaseType::Boolean));
        assert_eq!(options[0].env_var, "APP_USER_DEFINED_BOOL");

        assert_eq!(options[1].identifier, "UserDefinedInt");
        assert_eq!(options[1].ty, TypeDescriptor::required(BaseType::Integer));
        assert_eq!(options[1].env_var, "APP_USER_DEFINED_INT");

        assert_eq!(options[2].identifier, "UserDefinedStr");
        assert_eq!(options[2].ty, TypeDescriptor::required(BaseType::String));
        assert_eq!(options[2].env_var, "APP_USER_DEFINED_STR");
    }

    #[test]
    fn test_model_metadata() {
        let assembly = assemble_charmcraft("charmconfig", &parse(USER_OPTIONS)).unwrap();
        assert_eq!(assembly.model.package_name, "charmconfig");
        assert_eq!(assembly.model.common_prefix, "APP_");
    }

    #[test]
    fn test_integrations() {
        let assembly = assemble_charmcraft("charmconfig", &parse(USER_OPTIONS)).unwrap();
        let model = &assembly.model;

        let mysql = &model.integrations["mysql"];
        assert!(mysql.is_database);
        assert!(mysql.optional);
        assert_eq!(mysql.database_prefix.as_deref(), Some("APP_MYSQL_"));

        let s3 = &model.integrations["s3"];
        assert!(!s3.is_database);
        assert!(!s3.optional);
        assert!(s3.database_prefix.is_none());

        assert!(model.has_database_integrations);
        assert!(assembly.warnings.is_empty());
    }

    #[test]
    fn test_zero_defaults_are_present() {
        let charmcraft = parse(
            r#"
config:
  options:
    enabled:
      type: boolean
      default: false
    retries:
      type: int
      default: 0
    ratio:
      type: float
      default: 0.0
    name:
      type: string
      default: ""
    token:
      type: secret
"#,
        );

        let model = assemble_charmcraft("charmconfig", &charmcraft).unwrap().model;
        let option = |identifier: &str| {
            model
                .options
                .iter()
                .find(|o| o.identifier == identifier)
                .unwrap()
        };

        for identifier in ["Enabled", "Retries", "Ratio", "Name"] {
            assert!(!option(identifier).ty.nullable, "{identifier} should not be nullable");
        }
        assert_eq!(option("Ratio").ty.base, BaseType::Float);
        assert_eq!(
            option("Token").ty,
            TypeDescriptor::nullable(BaseType::String)
        );
    }

    #[test]
    fn test_unknown_integration_is_reported() {
        let charmcraft = parse(
            r#"
requires:
  unknown:
    interface: unknown
  s3:
    interface: s3
"#,
        );

        let assembly = assemble_charmcraft("charmconfig", &charmcraft).unwrap();

        assert!(!assembly.model.integrations.contains_key("unknown"));
        assert_eq!(assembly.model.integrations.len(), 1);
        assert!(!assembly.model.has_database_integrations);
        assert_eq!(
            assembly.warnings,
            vec![Warning::UnrecognizedIntegration {
                key: "unknown".into()
            }]
        );
    }

    #[test]
    fn test_uncatalogued_keys_of_any_shape_are_dropped() {
        let charmcraft = parse(
            r#"
requires:
  2fa:
    interface: totp
  kafka:
    interface: ""
  s3:
    interface: s3
"#,
        );

        let assembly = assemble_charmcraft("charmconfig", &charmcraft).unwrap();

        let kept: Vec<_> = assembly.model.integrations.keys().map(String::as_str).collect();
        assert_eq!(kept, ["s3"]);
        assert_eq!(
            assembly.warnings,
            vec![
                Warning::UnrecognizedIntegration { key: "2fa".into() },
                Warning::UnrecognizedIntegration {
                    key: "kafka".into()
                },
            ]
        );
    }

    #[test]
    fn test_warnings_in_key_order() {
        let charmcraft = parse(
            r#"
requires:
  zookeeper:
    interface: zookeeper
  kafka:
    interface: kafka_client
  mysql:
    interface: mysql_client
"#,
        );

        let warnings = assemble_charmcraft("charmconfig", &charmcraft)
            .unwrap()
            .warnings;
        let keys: Vec<_> = warnings.iter().map(Warning::location).collect();
        assert_eq!(keys, ["requires.kafka", "requires.zookeeper"]);
    }

    #[test]
    fn test_unknown_option_type_fails() {
        let charmcraft = parse(
            r#"
config:
  options:
    foo:
      type: unknown
    bar:
      type: string
"#,
        );

        let err = assemble_charmcraft("charmconfig", &charmcraft).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownOptionType {
                key: "foo".into(),
                declared: "unknown".into(),
            }
        );
    }

    #[test]
    fn test_first_unknown_type_in_key_order_is_reported() {
        let charmcraft = parse(
            r#"
config:
  options:
    zeta:
      type: list
    alpha:
      type: map
"#,
        );

        for _ in 0..8 {
            let err = assemble_charmcraft("charmconfig", &charmcraft).unwrap_err();
            assert!(matches!(err, Error::UnknownOptionType { ref key, .. } if key == "alpha"));
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let charmcraft = parse(USER_OPTIONS);

        let first = assemble_charmcraft("charmconfig", &charmcraft).unwrap();
        let second = assemble_charmcraft("charmconfig", &charmcraft).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_assembly_ignores_input_order() {
        let charmcraft = parse(
            r#"
config:
  options:
    zeta:
      type: list
    alpha:
      type: string
    mid-value:
      type: int
      default: 1
requires:
  redis:
    interface: redis_client
  kafka:
    interface: kafka_client
  s3:
    interface: s3
  cache:
    interface: redis_client
"#,
        );
        let mut options: Vec<_> = charmcraft.config.options.iter().collect();
        options.sort_by(|a, b| a.0.cmp(b.0));
        let mut requires: Vec<_> = charmcraft.requires.iter().collect();
        requires.sort_by(|a, b| a.0.cmp(b.0));

        fn run(
            options: &[(&String, &ConfigOption)],
            requires: &[(&String, &Requirement)],
        ) -> Result<Assembly> {
            assemble("charmconfig", options.iter().copied(), requires.iter().copied())
        }

        let known: Vec<_> = options
            .iter()
            .copied()
            .filter(|(key, _)| key.as_str() != "zeta")
            .collect();
        let reversed_known: Vec<_> = known.iter().rev().copied().collect();
        let reversed_requires: Vec<_> = requires.iter().rev().copied().collect();
        let forward = run(&known, &requires).unwrap();
        let backward = run(&reversed_known, &reversed_requires).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(
            backward.warnings,
            vec![
                Warning::UnrecognizedIntegration {
                    key: "cache".into()
                },
                Warning::UnrecognizedIntegration {
                    key: "kafka".into()
                },
            ]
        );

        // With the unknown type kept, both orders report the same option
        let reversed_options: Vec<_> = options.iter().rev().copied().collect();
        let forward_err = run(&options, &requires).unwrap_err();
        let backward_err = run(&reversed_options, &reversed_requires).unwrap_err();
        assert_eq!(forward_err, backward_err);
        assert!(matches!(forward_err, Error::UnknownOptionType { ref key, .. } if key == "zeta"));
    }

    #[test]
    fn test_options_sorted_bytewise() {
        let charmcraft = parse(
            r#"
config:
  options:
    b-option:
      type: string
    a_option:
      type: string
    a-option:
      type: string
"#,
        );

        let model = assemble_charmcraft("charmconfig", &charmcraft).unwrap().model;
        let identifiers: Vec<_> = model.options.iter().map(|o| o.identifier.as_str()).collect();
        // 'O' (0x4F) sorts before '_' (0x5F)
        assert_eq!(identifiers, ["AOption", "A_option", "BOption"]);
    }

    #[test]
    fn test_empty_schema() {
        let assembly = assemble_charmcraft("charmconfig", &Charmcraft::default()).unwrap();
        assert!(assembly.model.options.is_empty());
        assert!(assembly.model.integrations.is_empty());
        assert!(!assembly.model.has_database_integrations);
        assert!(assembly.warnings.is_empty());
    }
}
