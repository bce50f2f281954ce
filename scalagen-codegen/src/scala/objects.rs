//! Object type code generation.

use scalagen_ast::{FieldDefinition, ObjectType};

use crate::scala::args::{ArgsRecord, extract_args};
use crate::scala::types::{map_type, sanitize};

/// Writes an object type as a case class, collecting the args records
/// synthesized from its argument-bearing fields.
#[must_use]
pub fn write_object_with_args(object: &ObjectType) -> (String, Vec<ArgsRecord>) {
    let mut args_records = Vec::new();
    let fields = object
        .fields
        .iter()
        .map(|field| render_field(field, &mut args_records))
        .collect::<Vec<_>>()
        .join(", ");

    let text = format!("case class {}({})\n", object.name, fields);
    (text, args_records)
}

/// Writes an object type as a case class declaration only.
///
/// Args records for argument-bearing fields are referenced by name but
/// not emitted; use [`crate::scala::args::write_arguments`] to generate
/// them separately.
#[must_use]
pub fn write_object(object: &ObjectType) -> String {
    write_object_with_args(object).0
}

/// Renders one field as `name: Type`, or `name: NameArgs => Type` when
/// the field has arguments, appending any synthesized record to `args`.
pub(crate) fn render_field(field: &FieldDefinition, args: &mut Vec<ArgsRecord>) -> String {
    let name = sanitize(&field.name);
    let result = map_type(&field.ty);
    match extract_args(field) {
        Some(record) => {
            let rendered = format!("{}: {} => {}", name, record.name, result);
            args.push(record);
            rendered
        }
        None => format!("{name}: {result}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalagen_ast::{ArgumentDefinition, TypeRef};

    fn user_type() -> ObjectType {
        ObjectType::new(
            "User",
            vec![
                FieldDefinition::new("id", TypeRef::non_null(TypeRef::named("Int"))),
                FieldDefinition::new("name", TypeRef::named("String")),
            ],
        )
    }

    #[test]
    fn test_write_object() {
        assert_eq!(
            write_object(&user_type()),
            "case class User(id: Int, name: Option[String])\n"
        );
    }

    #[test]
    fn test_field_with_arguments_becomes_function() {
        let object = ObjectType::new(
            "Query",
            vec![
                FieldDefinition::new("user", TypeRef::named("User")).with_arguments(vec![
                    ArgumentDefinition::new("id", TypeRef::named("Int")),
                ]),
            ],
        );

        let (text, args) = write_object_with_args(&object);
        assert_eq!(text, "case class Query(user: UserArgs => Option[User])\n");
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "UserArgs");
    }

    #[test]
    fn test_no_arguments_no_args_record() {
        let (_, args) = write_object_with_args(&user_type());
        assert!(args.is_empty());
    }

    #[test]
    fn test_reserved_field_name_escaped_only_in_identifier() {
        let object = ObjectType::new(
            "Node",
            vec![FieldDefinition::new("type", TypeRef::named("String"))],
        );

        assert_eq!(
            write_object(&object),
            "case class Node(`type`: Option[String])\n"
        );
    }
}
