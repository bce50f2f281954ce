//! # Scalagen Codegen
//!
//! Scala code generation from GraphQL schema documents.
//!
//! This crate provides:
//! - Case class generation for object and input object types
//! - Sealed trait generation for enums and unions
//! - Argument record synthesis for parameterized fields
//! - Root operation generation with effect-wrapped (or streaming) results
//!
//! The generator consumes an already-parsed, already-validated
//! [`Document`] and produces raw source text; indentation and spacing are
//! normalized by a downstream formatting pass. It performs no I/O and
//! keeps no state between calls.

pub mod error;
pub mod generator;
pub mod scala;

use scalagen_ast::{Document, FieldDefinition, InputObjectType, ObjectType, UnionType};

pub use error::CodegenError;
pub use generator::Generator;

/// Generates raw Scala source for a whole document.
///
/// `effect` names the wrapper type for query and mutation results (for
/// example `UIO` or a domain alias). Data types land in an `object Types`
/// block, root operations in an `object Operations` block; feature
/// imports are prepended only when used. An empty document yields a
/// single newline.
///
/// # Errors
/// Returns `CodegenError` if a union member or an explicit root type name
/// does not resolve.
pub fn write(document: &Document, effect: &str) -> Result<String, CodegenError> {
    Generator::new(document, effect).generate()
}

/// Generates a single object type declaration.
///
/// Args records referenced by argument-bearing fields are not included;
/// generate them with [`write_arguments`].
#[must_use]
pub fn write_object(object: &ObjectType) -> String {
    scala::write_object(object)
}

/// Generates the args record for one field, or empty text when the field
/// has no arguments.
#[must_use]
pub fn write_arguments(field: &FieldDefinition) -> String {
    scala::write_arguments(field)
}

/// Generates a single enum type declaration.
#[must_use]
pub fn write_enum(enum_type: &scalagen_ast::EnumType) -> String {
    scala::write_enum(enum_type)
}

/// Generates a single input object type declaration.
#[must_use]
pub fn write_input(input: &InputObjectType) -> String {
    scala::write_input(input)
}

/// Generates a single union type declaration with its member variants.
///
/// # Errors
/// Returns `CodegenError` if a member name does not resolve to an object
/// type in `document`.
pub fn write_union(union: &UnionType, document: &Document) -> Result<String, CodegenError> {
    scala::write_union(union, document).map(|output| output.text)
}

/// Generates a query or mutation root type declaration, wrapping field
/// results in the effect type named by `effect`.
#[must_use]
pub fn write_root_query_or_mutation(object: &ObjectType, effect: &str) -> String {
    scala::write_query_or_mutation(object, effect).0
}

/// Generates a subscription root type declaration with stream-wrapped
/// field results.
#[must_use]
pub fn write_root_subscription(object: &ObjectType) -> String {
    scala::write_subscription(object).0
}
