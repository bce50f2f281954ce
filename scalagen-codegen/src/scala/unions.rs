//! Union type code generation.
//!
//! A union becomes a sealed trait with one case class per member, each
//! built by re-resolving the member name to its object type and applying
//! the object field-emission rule. Descriptions on the union, a member, or
//! a member field become `@GQLDescription` annotations on the matching
//! declaration.

use scalagen_ast::{Document, FieldDefinition, ObjectType, UnionType};

use crate::error::CodegenError;
use crate::scala::args::{ArgsRecord, extract_args};
use crate::scala::types::{escape_description, map_type, sanitize};

/// Output of union generation.
#[derive(Debug)]
pub struct UnionOutput {
    /// Generated declarations (trait plus member case classes).
    pub text: String,
    /// Args records synthesized from member fields.
    pub args: Vec<ArgsRecord>,
    /// Whether any `@GQLDescription` annotation was emitted.
    pub uses_annotations: bool,
}

/// Writes a union type as a sealed trait with member case classes.
///
/// # Errors
/// Returns [`CodegenError::UnresolvedUnionMember`] if a member name does
/// not resolve to an object type in the document.
pub fn write_union(union: &UnionType, document: &Document) -> Result<UnionOutput, CodegenError> {
    let mut output = String::new();
    let mut args = Vec::new();
    let mut uses_annotations = false;

    if let Some(description) = &union.description {
        output.push_str(&annotation(description));
        output.push('\n');
        uses_annotations = true;
    }
    output.push_str(&format!(
        "sealed trait {} extends scala.Product with scala.Serializable\n",
        union.name
    ));

    for member in &union.members {
        let object = document.object_type(member).ok_or_else(|| {
            CodegenError::UnresolvedUnionMember {
                union: union.name.clone(),
                member: member.clone(),
            }
        })?;

        output.push('\n');
        let member_text = render_member(object, &union.name, &mut args, &mut uses_annotations);
        output.push_str(&member_text);
    }

    Ok(UnionOutput {
        text: output,
        args,
        uses_annotations,
    })
}

/// Renders one member as a case class extending the union trait.
fn render_member(
    object: &ObjectType,
    union_name: &str,
    args: &mut Vec<ArgsRecord>,
    uses_annotations: &mut bool,
) -> String {
    let mut output = String::new();

    if let Some(description) = &object.description {
        output.push_str(&annotation(description));
        output.push('\n');
        *uses_annotations = true;
    }

    let fields = object
        .fields
        .iter()
        .map(|field| render_member_field(field, args, uses_annotations))
        .collect::<Vec<_>>()
        .join(", ");

    output.push_str(&format!(
        "case class {}({}) extends {}\n",
        object.name, fields, union_name
    ));
    output
}

/// Renders one member field, prefixing an annotation when the field
/// carries a description.
fn render_member_field(
    field: &FieldDefinition,
    args: &mut Vec<ArgsRecord>,
    uses_annotations: &mut bool,
) -> String {
    let mut rendered = String::new();
    if let Some(description) = &field.description {
        rendered.push_str(&annotation(description));
        rendered.push(' ');
        *uses_annotations = true;
    }

    let name = sanitize(&field.name);
    let result = map_type(&field.ty);
    match extract_args(field) {
        Some(record) => {
            rendered.push_str(&format!("{}: {} => {}", name, record.name, result));
            args.push(record);
        }
        None => rendered.push_str(&format!("{name}: {result}")),
    }
    rendered
}

fn annotation(description: &str) -> String {
    format!("@GQLDescription(\"{}\")", escape_description(description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalagen_ast::{ArgumentDefinition, Definition, TypeRef};

    fn document_with_union(union: UnionType) -> Document {
        Document::from(vec![
            Definition::Object(ObjectType::new(
                "Human",
                vec![FieldDefinition::new("name", TypeRef::named("String"))],
            )),
            Definition::Object(ObjectType::new(
                "Droid",
                vec![FieldDefinition::new(
                    "id",
                    TypeRef::non_null(TypeRef::named("Int")),
                )],
            )),
            Definition::Union(union),
        ])
    }

    #[test]
    fn test_members_become_variants() {
        let doc = document_with_union(UnionType::new("Character", vec!["Human", "Droid"]));
        let union = doc.union_types().next().unwrap();
        let out = write_union(union, &doc).expect("union output");

        assert!(out.text.contains(
            "sealed trait Character extends scala.Product with scala.Serializable"
        ));
        assert!(out.text.contains("case class Human(name: Option[String]) extends Character"));
        assert!(out.text.contains("case class Droid(id: Int) extends Character"));
        assert!(!out.uses_annotations);
        assert!(out.args.is_empty());
    }

    #[test]
    fn test_unresolved_member_fails() {
        let doc = document_with_union(UnionType::new("Character", vec!["Human", "Alien"]));
        let union = doc.union_types().next().unwrap();
        let err = write_union(union, &doc).unwrap_err();

        assert!(matches!(
            err,
            CodegenError::UnresolvedUnionMember { union, member }
                if union == "Character" && member == "Alien"
        ));
    }

    #[test]
    fn test_union_description_annotates_trait() {
        let doc = document_with_union(
            UnionType::new("Character", vec!["Human"]).with_description("a character"),
        );
        let union = doc.union_types().next().unwrap();
        let out = write_union(union, &doc).expect("union output");

        assert!(out.text.contains("@GQLDescription(\"a character\")\nsealed trait Character"));
        assert!(out.uses_annotations);
    }

    #[test]
    fn test_field_description_annotates_only_that_field() {
        let doc = Document::from(vec![
            Definition::Object(ObjectType::new(
                "Human",
                vec![
                    FieldDefinition::new("name", TypeRef::named("String"))
                        .with_description("display name"),
                    FieldDefinition::new("age", TypeRef::named("Int")),
                ],
            )),
            Definition::Union(UnionType::new("Character", vec!["Human"])),
        ]);
        let union = doc.union_types().next().unwrap();
        let out = write_union(union, &doc).expect("union output");

        assert!(out.text.contains(
            "@GQLDescription(\"display name\") name: Option[String], age: Option[Int]"
        ));
        assert!(out.uses_annotations);
    }

    #[test]
    fn test_member_field_arguments_are_supported() {
        let doc = Document::from(vec![
            Definition::Object(ObjectType::new(
                "Human",
                vec![
                    FieldDefinition::new("friend", TypeRef::named("Human")).with_arguments(vec![
                        ArgumentDefinition::new("id", TypeRef::named("Int")),
                    ]),
                ],
            )),
            Definition::Union(UnionType::new("Character", vec!["Human"])),
        ]);
        let union = doc.union_types().next().unwrap();
        let out = write_union(union, &doc).expect("union output");

        assert!(out.text.contains("friend: FriendArgs => Option[Human]"));
        assert_eq!(out.args.len(), 1);
        assert_eq!(out.args[0].name, "FriendArgs");
    }
}
