//! Manifest parsing from strings.

use std::str::FromStr;

use charmgen_ir::IntegrationKind;

use super::{CHARMCRAFT_FILE_NAME, Charmcraft, validate::KeyPath};
use crate::{Error, Result, error::Document};

impl FromStr for Charmcraft {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_charmcraft(s, CHARMCRAFT_FILE_NAME)
    }
}

impl Charmcraft {
    /// Parse charmcraft.yaml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_charmcraft(content, filename)
    }
}

/// Decode and check charmcraft.yaml content. `filename` only labels errors.
pub fn parse_charmcraft(content: &str, filename: &str) -> Result<Charmcraft> {
    // An empty document decodes to unit, not a mapping
    if content.trim().is_empty() {
        return Ok(Charmcraft::default());
    }
    let doc = Document::new(content, filename);
    let charmcraft: Charmcraft =
        serde_yaml::from_str(content).map_err(|e| doc.yaml_error(e))?;
    check_keys(&charmcraft, &doc)?;
    Ok(charmcraft)
}

fn check_keys(charmcraft: &Charmcraft, doc: &Document) -> Result<()> {
    let root = KeyPath::root(doc);

    let options = root.join("config").join("options");
    for key in charmcraft.option_keys() {
        options.check_key(key, "option")?;
    }

    // Keys outside the catalog are dropped with a warning at assembly,
    // whatever their shape or interface
    let requires = root.join("requires");
    for key in charmcraft.requirement_keys() {
        let known = IntegrationKind::from_key(key).is_some();
        if known && charmcraft.requires[key].interface.trim().is_empty() {
            return Err(requires.join(key).empty_field("interface"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptionType;

    const FULL: &str = r#"
name: go-app
type: charm
base: ubuntu@24.04
platforms:
  amd64:
summary: A very short one-line summary of the Go application.
description: |
  A comprehensive overview of your Go application.
extensions:
  - go-framework
config:
  options:
    user-defined-str:
      type: string
      default: "hello"
      description: user-defined-str Description
    user-defined-int:
      type: int
      default: 100
      description: user-defined-int Description
    user-defined-bool:
      type: bool
      description: user-defined-bool Description
requires:
  mysql:
    interface: mysql_client
    optional: true
    limit: 1
  s3:
    interface: s3
    optional: false

parts: {0-git: {plugin: nil, build-packages: [git]}}
"#;

    #[test]
    fn test_parse_full_charmcraft() {
        let charmcraft: Charmcraft = FULL.parse().expect("should parse");

        assert_eq!(charmcraft.config.options.len(), 3);
        let str_opt = &charmcraft.config.options["user-defined-str"];
        assert_eq!(str_opt.option_type, OptionType::String);
        assert_eq!(
            str_opt.default,
            Some(serde_yaml::Value::String("hello".into()))
        );
        assert_eq!(
            str_opt.description.as_deref(),
            Some("user-defined-str Description")
        );

        let int_opt = &charmcraft.config.options["user-defined-int"];
        assert_eq!(int_opt.option_type, OptionType::Int);
        assert!(int_opt.has_default());

        let bool_opt = &charmcraft.config.options["user-defined-bool"];
        assert_eq!(bool_opt.option_type, OptionType::Boolean);
        assert!(!bool_opt.has_default());

        assert_eq!(charmcraft.requires.len(), 2);
        assert_eq!(charmcraft.requires["mysql"].interface, "mysql_client");
        assert!(charmcraft.requires["mysql"].optional);
        assert_eq!(charmcraft.requires["mysql"].limit, Some(1));
        assert_eq!(charmcraft.requires["s3"].interface, "s3");
        assert!(!charmcraft.requires["s3"].optional);
    }

    #[test]
    fn test_sections_are_optional() {
        let charmcraft: Charmcraft = "name: bare\ntype: charm\n".parse().unwrap();
        assert!(charmcraft.config.options.is_empty());
        assert!(charmcraft.requires.is_empty());

        let charmcraft: Charmcraft = "config: {}\n".parse().unwrap();
        assert!(charmcraft.config.options.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let charmcraft: Charmcraft = "".parse().unwrap();
        assert_eq!(charmcraft, Charmcraft::default());
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let charmcraft: Charmcraft = "config:\n  options:\n    foo:\n      type: unknown\n"
            .parse()
            .unwrap();
        assert_eq!(
            charmcraft.config.options["foo"].option_type,
            OptionType::Unrecognized("unknown".into())
        );
    }

    #[test]
    fn test_syntax_error() {
        let err = "config:\n  options: [\n".parse::<Charmcraft>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_option_key() {
        let err = "config:\n  options:\n    9lives:\n      type: int\n"
            .parse::<Charmcraft>()
            .unwrap_err();
        match *err {
            Error::InvalidKey { key, context, .. } => {
                assert_eq!(key, "9lives");
                assert_eq!(context, "option in 'config.options'");
            }
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_interface() {
        let err = "requires:\n  mysql:\n    interface: \"\"\n"
            .parse::<Charmcraft>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert!(err.to_string().contains("requires.mysql"));
    }

    #[test]
    fn test_uncatalogued_integrations_are_accepted() {
        let charmcraft: Charmcraft = r#"
requires:
  2fa:
    interface: totp
  ingress.v2:
    interface: ingress
  kafka:
    interface: ""
  s3:
    interface: s3
"#
        .parse()
        .unwrap();

        assert_eq!(
            charmcraft.requirement_keys(),
            ["2fa", "ingress.v2", "kafka", "s3"]
        );
        assert_eq!(charmcraft.requires["kafka"].interface, "");
    }
}
