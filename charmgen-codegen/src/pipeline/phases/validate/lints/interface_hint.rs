//! Lint explaining why an integration with a known interface is dropped.

use charmgen_ir::IntegrationKind;
use charmgen_manifest::Charmcraft;

use super::super::Lint;
use crate::{integrations::kind_for_interface, pipeline::Diagnostic};

/// Lint that notes integrations whose key is outside the catalog but whose
/// interface names a catalog service (e.g., `cache` with `redis_client`).
///
/// Classification stays key-based. The hint only tells the author which key
/// would have been recognized.
pub struct InterfaceHintLint;

impl Lint for InterfaceHintLint {
    fn name(&self) -> &'static str {
        "interface-hint"
    }

    fn description(&self) -> &'static str {
        "Point out uncatalogued integration keys that use a known interface"
    }

    fn check(&self, charmcraft: &Charmcraft, diagnostics: &mut Vec<Diagnostic>) {
        for key in charmcraft.requirement_keys() {
            if IntegrationKind::from_key(key).is_some() {
                continue;
            }
            let interface = &charmcraft.requires[key].interface;
            if let Some(kind) = kind_for_interface(interface) {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "integration '{}' uses interface '{}' but only the key '{}' is bound to {}",
                            key,
                            interface,
                            kind.as_str(),
                            kind.display_name()
                        ),
                    )
                    .at(format!("requires.{}", key)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Severity;

    fn parse(yaml: &str) -> Charmcraft {
        yaml.parse().expect("Failed to parse test charmcraft.yaml")
    }

    #[test]
    fn test_hint_for_renamed_endpoint() {
        let charmcraft = parse(
            r#"
requires:
  cache:
    interface: redis_client
  redis:
    interface: redis_client
  kafka:
    interface: kafka_client
"#,
        );

        let mut diagnostics = Vec::new();
        InterfaceHintLint.check(&charmcraft, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert_eq!(diagnostics[0].location.as_deref(), Some("requires.cache"));
        assert_eq!(
            diagnostics[0].message,
            "integration 'cache' uses interface 'redis_client' but only the key 'redis' is bound to Redis"
        );
    }
}
