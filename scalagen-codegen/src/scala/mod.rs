//! Scala code generation modules.

pub mod args;
pub mod enums;
pub mod inputs;
pub mod objects;
pub mod operations;
pub mod types;
pub mod unions;

pub use args::{ArgsRecord, extract_args, write_arguments};
pub use enums::write_enum;
pub use inputs::write_input;
pub use objects::{write_object, write_object_with_args};
pub use operations::{write_query_or_mutation, write_subscription};
pub use types::{map_type, sanitize};
pub use unions::{UnionOutput, write_union};
