//! Full-document code generation.
//!
//! The generator walks the document once, emitting data types and root
//! operation types into two grouped sections, and prepends feature imports
//! only when the feature is actually used. Feature usage is tracked with
//! flags accumulated during the walk, never by scanning the output text.

use scalagen_ast::{Definition, Document, ObjectType};
use tracing::debug;

use crate::error::CodegenError;
use crate::scala::args::ArgsRecord;
use crate::scala::{
    write_enum, write_input, write_object_with_args, write_query_or_mutation, write_subscription,
    write_union,
};

const ANNOTATIONS_IMPORT: &str = "import caliban.schema.Annotations._\n";
const STREAM_IMPORT: &str = "import zio.stream.ZStream\n";

const DEFAULT_QUERY: &str = "Query";
const DEFAULT_MUTATION: &str = "Mutation";
const DEFAULT_SUBSCRIPTION: &str = "Subscription";

/// Generator for a full schema document.
pub struct Generator<'a> {
    document: &'a Document,
    effect: &'a str,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a document, with `effect` naming the
    /// wrapper type for query and mutation results.
    #[must_use]
    pub fn new(document: &'a Document, effect: &'a str) -> Self {
        Self { document, effect }
    }

    /// Generates raw Scala source for the whole document.
    ///
    /// Output is unformatted; a downstream formatting pass normalizes
    /// whitespace. Generation is deterministic: the same document and
    /// effect name always yield byte-identical text.
    ///
    /// # Errors
    /// Fails on an unresolvable union member or an explicit root type
    /// name with no matching object type.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let schema = self.document.schema_definition();
        let query = self.resolve_root(
            schema.and_then(|s| s.query.as_deref()),
            DEFAULT_QUERY,
            "query",
        )?;
        let mutation = self.resolve_root(
            schema.and_then(|s| s.mutation.as_deref()),
            DEFAULT_MUTATION,
            "mutation",
        )?;
        let subscription = self.resolve_root(
            schema.and_then(|s| s.subscription.as_deref()),
            DEFAULT_SUBSCRIPTION,
            "subscription",
        )?;

        let root_names: Vec<&str> = [query, mutation, subscription]
            .iter()
            .flatten()
            .map(|o| o.name.as_str())
            .collect();
        debug!(roots = ?root_names, "resolved root operation types");

        // Data types, in declaration order, each followed by the args
        // records its fields synthesized.
        let mut types_group: Vec<String> = Vec::new();
        let mut uses_annotations = false;
        for definition in &self.document.definitions {
            match definition {
                Definition::Object(object) if !root_names.contains(&object.name.as_str()) => {
                    let (text, args) = write_object_with_args(object);
                    types_group.push(text);
                    types_group.extend(args.iter().map(ArgsRecord::render));
                }
                Definition::Enum(enum_type) => types_group.push(write_enum(enum_type)),
                Definition::Union(union) => {
                    let output = write_union(union, self.document)?;
                    uses_annotations |= output.uses_annotations;
                    types_group.push(output.text);
                    types_group.extend(output.args.iter().map(ArgsRecord::render));
                }
                Definition::InputObject(input) => types_group.push(write_input(input)),
                Definition::Object(_) | Definition::Schema(_) => {}
            }
        }

        // Root operations, in query/mutation/subscription order. Their
        // args records land in the types group.
        let mut operations_group: Vec<String> = Vec::new();
        let mut uses_streams = false;
        for object in [query, mutation].into_iter().flatten() {
            let (text, args) = write_query_or_mutation(object, self.effect);
            operations_group.push(text);
            types_group.extend(args.iter().map(ArgsRecord::render));
        }
        if let Some(object) = subscription {
            let (text, args) = write_subscription(object);
            uses_streams = !object.fields.is_empty();
            operations_group.push(text);
            types_group.extend(args.iter().map(ArgsRecord::render));
        }

        debug!(
            types = types_group.len(),
            operations = operations_group.len(),
            uses_annotations,
            uses_streams,
            "assembled document"
        );

        let mut output = String::new();
        if uses_annotations {
            output.push_str(ANNOTATIONS_IMPORT);
        }
        if uses_streams {
            output.push_str(STREAM_IMPORT);
        }
        if !output.is_empty() {
            output.push('\n');
        }

        if !types_group.is_empty() {
            output.push_str("object Types {\n\n");
            output.push_str(&types_group.join("\n"));
            output.push_str("\n}\n");
        }
        if !operations_group.is_empty() {
            if !types_group.is_empty() {
                output.push('\n');
            }
            output.push_str("object Operations {\n\n");
            output.push_str(&operations_group.join("\n"));
            output.push_str("\n}\n");
        }

        // Nothing to declare: a bare newline, not an empty pair of blocks.
        if output.is_empty() {
            output.push('\n');
        }
        Ok(output)
    }

    /// Resolves one root operation type.
    ///
    /// An explicit schema-definition name must resolve or generation
    /// fails; without one, the default name is used when a matching
    /// object type exists and the operation is skipped otherwise.
    fn resolve_root(
        &self,
        explicit: Option<&str>,
        default: &str,
        operation: &'static str,
    ) -> Result<Option<&'a ObjectType>, CodegenError> {
        match explicit {
            Some(name) => match self.document.object_type(name) {
                Some(object) => Ok(Some(object)),
                None => Err(CodegenError::UnresolvedRootType {
                    operation: operation.to_string(),
                    type_name: name.to_string(),
                }),
            },
            None => Ok(self.document.object_type(default)),
        }
    }
}
