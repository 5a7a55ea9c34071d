//! Core utilities and types for the charmgen config generator.
//!
//! This crate provides the file primitives shared by the renderers.

mod file;

// File operations
pub use file::{File, GeneratedFile};

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Code generated by charmgen. DO NOT EDIT.";
