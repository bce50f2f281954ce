//! Enum type code generation.

use scalagen_ast::EnumType;

use crate::scala::types::sanitize;

/// Writes an enum type as a sealed trait with one case object per value.
///
/// Value names are used verbatim as variant tags, escaped only when they
/// collide with a reserved word. Declaration order is preserved.
#[must_use]
pub fn write_enum(enum_type: &EnumType) -> String {
    let mut output = String::new();
    let name = &enum_type.name;

    output.push_str(&format!(
        "sealed trait {name} extends scala.Product with scala.Serializable\n\n"
    ));
    output.push_str(&format!("object {name} {{\n"));
    for value in &enum_type.values {
        output.push_str(&format!(
            "  case object {} extends {}\n",
            sanitize(value),
            name
        ));
    }
    output.push_str("}\n");

    output
}
