//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// The generator assumes an already-validated document, so these errors
/// indicate a schema-authoring mistake rather than a transient condition.
/// Generation fails loudly instead of emitting partial declarations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A union member name does not resolve to an object type.
    #[error("union '{union}' references unknown object type '{member}'")]
    UnresolvedUnionMember {
        /// Union type name.
        union: String,
        /// Member type name that failed to resolve.
        member: String,
    },

    /// An explicit root operation type name does not resolve.
    #[error("{operation} root type '{type_name}' is not defined in the document")]
    UnresolvedRootType {
        /// Operation kind (query, mutation, or subscription).
        operation: String,
        /// Type name that failed to resolve.
        type_name: String,
    },
}
