//! # Scalagen AST
//!
//! Document model for GraphQL schema definitions.
//!
//! This crate provides:
//! - Type references with nullability and list wrappers
//! - Object, enum, union, and input object type definitions
//! - Schema (root operation) definitions
//! - A queryable document holding the full set of definitions
//!
//! Parsing raw schema text into these values is the upstream parser's job;
//! this crate only defines the shapes the generator consumes.

pub mod document;
pub mod types;

pub use document::{Definition, Document};
pub use types::{
    ArgumentDefinition, EnumType, FieldDefinition, InputObjectType, ObjectType, SchemaDefinition,
    TypeRef, UnionType,
};
