//! Argument record synthesis.
//!
//! A field with parameters gets a companion "Args" case class holding
//! them; the field itself then becomes a function from that record to its
//! result type. Emitters collect the synthesized records into an explicit
//! side list while walking fields.

use scalagen_ast::FieldDefinition;

use crate::scala::types::{capitalize, map_type, sanitize};

/// An argument record synthesized from a field's parameters.
///
/// The name is derived deterministically from the owning field's name, so
/// two same-named fields on one type would collide; that is a
/// schema-author responsibility and is not guarded against here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsRecord {
    /// Record name, `Capitalize(fieldName) + "Args"`.
    pub name: String,
    /// Sanitized argument names paired with mapped Scala types, in
    /// declaration order.
    pub fields: Vec<(String, String)>,
}

impl ArgsRecord {
    /// Renders the record as a standalone case class declaration.
    #[must_use]
    pub fn render(&self) -> String {
        let fields = self
            .fields
            .iter()
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("case class {}({})\n", self.name, fields)
    }
}

/// Synthesizes an argument record for a field, or `None` when the field
/// has no arguments.
///
/// Default values on arguments are ignored; they are a runtime concern.
#[must_use]
pub fn extract_args(field: &FieldDefinition) -> Option<ArgsRecord> {
    if field.arguments.is_empty() {
        return None;
    }

    Some(ArgsRecord {
        name: args_record_name(&field.name),
        fields: field
            .arguments
            .iter()
            .map(|arg| (sanitize(&arg.name), map_type(&arg.ty)))
            .collect(),
    })
}

/// Returns the argument record name for a field name.
#[must_use]
pub fn args_record_name(field_name: &str) -> String {
    format!("{}Args", capitalize(field_name))
}

/// Writes the argument record for a single field as raw text, or the
/// empty string when the field has no arguments.
#[must_use]
pub fn write_arguments(field: &FieldDefinition) -> String {
    extract_args(field).map_or_else(String::new, |args| args.render())
}
