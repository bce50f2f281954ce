//! Root operation type code generation.
//!
//! Query and mutation fields wrap their result in the configured effect
//! type; subscription fields always use `ZStream[Any, Nothing, T]`
//! instead, regardless of arguments. Descriptions are ignored here.

use scalagen_ast::{FieldDefinition, ObjectType};

use crate::scala::args::{ArgsRecord, extract_args};
use crate::scala::types::{map_type, sanitize};

/// Writes a query or mutation root type, wrapping every field result in
/// the effect type named by `effect`.
#[must_use]
pub fn write_query_or_mutation(object: &ObjectType, effect: &str) -> (String, Vec<ArgsRecord>) {
    write_root(object, |result| format!("{effect}[{result}]"))
}

/// Writes a subscription root type, wrapping every field result in a
/// stream type instead of the effect wrapper.
#[must_use]
pub fn write_subscription(object: &ObjectType) -> (String, Vec<ArgsRecord>) {
    write_root(object, |result| {
        format!("ZStream[Any, Nothing, {result}]")
    })
}

fn write_root(
    object: &ObjectType,
    wrap: impl Fn(&str) -> String,
) -> (String, Vec<ArgsRecord>) {
    let mut args_records = Vec::new();
    let fields = object
        .fields
        .iter()
        .map(|field| render_operation_field(field, &wrap, &mut args_records))
        .collect::<Vec<_>>()
        .join(",\n  ");

    let text = format!("case class {}(\n  {}\n)\n", object.name, fields);
    (text, args_records)
}

/// Renders one operation field as `name: Wrapped` or
/// `name: NameArgs => Wrapped`.
fn render_operation_field(
    field: &FieldDefinition,
    wrap: impl Fn(&str) -> String,
    args: &mut Vec<ArgsRecord>,
) -> String {
    let name = sanitize(&field.name);
    let wrapped = wrap(&map_type(&field.ty));
    match extract_args(field) {
        Some(record) => {
            let rendered = format!("{}: {} => {}", name, record.name, wrapped);
            args.push(record);
            rendered
        }
        None => format!("{name}: {wrapped}"),
    }
}
