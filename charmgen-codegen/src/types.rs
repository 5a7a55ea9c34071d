//! Mapping from declared option types to semantic types.

use charmgen_ir::{BaseType, TypeDescriptor};
use charmgen_manifest::OptionType;

use crate::{Error, Result};

/// Resolve the base type for a declared option type.
///
/// Returns `None` for spellings outside the supported set.
pub fn base_type(declared: &OptionType) -> Option<BaseType> {
    match declared {
        OptionType::Boolean => Some(BaseType::Boolean),
        OptionType::Float => Some(BaseType::Float),
        OptionType::Int => Some(BaseType::Integer),
        // Secrets are plain strings once injected into the environment
        OptionType::Secret | OptionType::String => Some(BaseType::String),
        OptionType::Unrecognized(_) => None,
    }
}

/// Map a declared option type to its semantic type.
///
/// Options without a default are nullable: the environment variable may be
/// absent at runtime. `key` is only used to name the option in the error.
pub fn map_type(key: &str, declared: &OptionType, has_default: bool) -> Result<TypeDescriptor> {
    let base = base_type(declared).ok_or_else(|| Error::UnknownOptionType {
        key: key.to_string(),
        declared: declared.as_str().to_string(),
    })?;

    Ok(if has_default {
        TypeDescriptor::required(base)
    } else {
        TypeDescriptor::nullable(base)
    })
}
