//! The schema document: an ordered collection of definitions, queryable by
//! kind and by name.

use crate::types::{
    EnumType, InputObjectType, ObjectType, SchemaDefinition, UnionType,
};

/// A single top-level definition in a document.
///
/// Entity-kind dispatch is a closed sum: every emitter matches on this enum
/// rather than going through virtual dispatch, so the mapping rules stay
/// colocated and exhaustively checkable.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Object type definition.
    Object(ObjectType),
    /// Enum type definition.
    Enum(EnumType),
    /// Union type definition.
    Union(UnionType),
    /// Input object type definition.
    InputObject(InputObjectType),
    /// Schema (root operation names) definition.
    Schema(SchemaDefinition),
}

/// A parsed schema document.
///
/// Definitions keep their declaration order; lookups by kind preserve it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// All definitions, in declaration order.
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition.
    pub fn push(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    /// Returns true when the document holds no definitions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns the schema definition, if one was declared.
    #[must_use]
    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.definitions.iter().find_map(|d| match d {
            Definition::Schema(s) => Some(s),
            _ => None,
        })
    }

    /// Looks up an object type by name.
    #[must_use]
    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.object_types().find(|o| o.name == name)
    }

    /// Iterates object types in declaration order.
    pub fn object_types(&self) -> impl Iterator<Item = &ObjectType> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Object(o) => Some(o),
            _ => None,
        })
    }

    /// Iterates enum types in declaration order.
    pub fn enum_types(&self) -> impl Iterator<Item = &EnumType> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Enum(e) => Some(e),
            _ => None,
        })
    }

    /// Iterates union types in declaration order.
    pub fn union_types(&self) -> impl Iterator<Item = &UnionType> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::Union(u) => Some(u),
            _ => None,
        })
    }

    /// Iterates input object types in declaration order.
    pub fn input_object_types(&self) -> impl Iterator<Item = &InputObjectType> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::InputObject(i) => Some(i),
            _ => None,
        })
    }
}

impl From<Vec<Definition>> for Document {
    fn from(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }
}
