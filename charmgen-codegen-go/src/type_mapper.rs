//! Go type mapper implementation.

use charmgen_codegen::language::TypeMapper;
use charmgen_ir::BaseType;

/// Go type mapper implementation.
///
/// Nullable values become pointers so that an unset environment variable
/// can be told apart from a zero value.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn map_base_type(&self, base: BaseType) -> &'static str {
        match base {
            BaseType::Boolean => "bool",
            BaseType::Float => "float64",
            BaseType::Integer => "int",
            BaseType::String => "string",
        }
    }

    fn map_nullable_type(&self, base: BaseType) -> String {
        format!("*{}", self.map_base_type(base))
    }
}

#[cfg(test)]
mod tests {
    use charmgen_ir::TypeDescriptor;

    use super::*;

    #[test]
    fn test_base_types() {
        let mapper = GoTypeMapper;
        assert_eq!(mapper.map_base_type(BaseType::Boolean), "bool");
        assert_eq!(mapper.map_base_type(BaseType::Float), "float64");
        assert_eq!(mapper.map_base_type(BaseType::Integer), "int");
        assert_eq!(mapper.map_base_type(BaseType::String), "string");
    }

    #[test]
    fn test_nullable_is_pointer() {
        let mapper = GoTypeMapper;
        assert_eq!(
            mapper.map_type(TypeDescriptor::nullable(BaseType::Boolean)),
            "*bool"
        );
        assert_eq!(
            mapper.map_type(TypeDescriptor::required(BaseType::Float)),
            "float64"
        );
    }
}
