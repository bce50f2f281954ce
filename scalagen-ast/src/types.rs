//! Schema type definitions.
//!
//! This module contains the data structures representing GraphQL schema
//! elements: type references, fields, arguments, and the five definition
//! kinds a document is built from.

/// A reference to a type, with nullability and list wrapping.
///
/// A bare `Named` or `List` reference is nullable; wrapping it in `NonNull`
/// removes the nullability. By construction `NonNull` wraps a `Named` or a
/// `List`, never another `NonNull`, so nesting is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A named type (scalar, object, enum, union, or input object).
    Named(String),
    /// A list of the inner type.
    List(Box<TypeRef>),
    /// A non-null wrapper around the inner type.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a list type reference.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a type reference in a non-null marker.
    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// Returns the innermost type name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }
}

/// A field argument: name, type, and an optional default value.
///
/// Default values are carried through for completeness but are a parser
/// and runtime concern; the generator does not emit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDefinition {
    /// Argument name.
    pub name: String,
    /// Argument type.
    pub ty: TypeRef,
    /// Optional default value, in source form.
    pub default_value: Option<String>,
}

impl ArgumentDefinition {
    /// Creates an argument with no default value.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
        }
    }
}

/// A field on an object, interface, or input object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Result type.
    pub ty: TypeRef,
    /// Arguments, in declaration order. Empty for input object fields.
    pub arguments: Vec<ArgumentDefinition>,
    /// Optional description.
    pub description: Option<String>,
}

impl FieldDefinition {
    /// Creates a field with no arguments and no description.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            arguments: Vec::new(),
            description: None,
        }
    }

    /// Sets the field's arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: Vec<ArgumentDefinition>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Sets the field's description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    /// Type name.
    pub name: String,
    /// Fields, in declaration order.
    pub fields: Vec<FieldDefinition>,
    /// Optional description.
    pub description: Option<String>,
}

impl ObjectType {
    /// Creates an object type with no description.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
            description: None,
        }
    }

    /// Sets the type's description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An enum type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// Type name.
    pub name: String,
    /// Value names, in declaration order.
    pub values: Vec<String>,
}

impl EnumType {
    /// Creates an enum type.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A union type definition.
///
/// Each member name must resolve to an [`ObjectType`] elsewhere in the
/// document; resolution happens at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    /// Type name.
    pub name: String,
    /// Member type names, in declaration order.
    pub members: Vec<String>,
    /// Optional description.
    pub description: Option<String>,
}

impl UnionType {
    /// Creates a union type with no description.
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    /// Sets the union's description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An input object type definition.
///
/// Fields never carry arguments; the parser guarantees this invariant and
/// the generator does not re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectType {
    /// Type name.
    pub name: String,
    /// Fields, in declaration order.
    pub fields: Vec<FieldDefinition>,
}

impl InputObjectType {
    /// Creates an input object type.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// Explicit root operation type names.
///
/// Absent entries fall back to the default names `Query`, `Mutation`, and
/// `Subscription` when a matching object type exists in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDefinition {
    /// Query root type name.
    pub query: Option<String>,
    /// Mutation root type name.
    pub mutation: Option<String>,
    /// Subscription root type name.
    pub subscription: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_base_name() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("User"))));
        assert_eq!(ty.base_name(), "User");
    }

    #[test]
    fn test_field_builder() {
        let field = FieldDefinition::new("user", TypeRef::named("User"))
            .with_arguments(vec![ArgumentDefinition::new(
                "id",
                TypeRef::named("Int"),
            )])
            .with_description("Look up a user");

        assert_eq!(field.name, "user");
        assert_eq!(field.arguments.len(), 1);
        assert_eq!(field.description.as_deref(), Some("Look up a user"));
    }

    #[test]
    fn test_schema_definition_default() {
        let schema = SchemaDefinition::default();
        assert!(schema.query.is_none());
        assert!(schema.mutation.is_none());
        assert!(schema.subscription.is_none());
    }
}
