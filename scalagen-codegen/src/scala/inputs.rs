//! Input object type code generation.

use scalagen_ast::InputObjectType;

use crate::scala::types::{map_type, sanitize};

/// Writes an input object type as a case class.
///
/// The record shape matches object emission, but input fields never carry
/// arguments (a parser-level invariant, not re-checked here) so no args
/// records are synthesized.
#[must_use]
pub fn write_input(input: &InputObjectType) -> String {
    let fields = input
        .fields
        .iter()
        .map(|field| format!("{}: {}", sanitize(&field.name), map_type(&field.ty)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("case class {}({})\n", input.name, fields)
}
