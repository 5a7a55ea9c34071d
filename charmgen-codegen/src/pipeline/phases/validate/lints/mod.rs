//! Built-in lints for charmcraft.yaml validation.

mod empty_description;
mod identifier_collision;
mod interface_hint;

pub use empty_description::EmptyDescriptionLint;
pub use identifier_collision::IdentifierCollisionLint;
pub use interface_hint::InterfaceHintLint;
