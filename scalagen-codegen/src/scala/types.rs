//! Type mapping and identifier sanitization for the Scala target.

use scalagen_ast::TypeRef;

/// Scala reserved words that must be backtick-escaped when used as
/// identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "case", "catch", "class", "def", "do", "else", "extends", "false", "final",
    "finally", "for", "forSome", "if", "implicit", "import", "lazy", "match", "new", "null",
    "object", "override", "package", "private", "protected", "return", "sealed", "super", "this",
    "throw", "trait", "true", "try", "type", "val", "var", "while", "with", "yield",
];

/// Escapes a name if it collides with a Scala reserved word.
///
/// Matching is case-sensitive and no casing normalization is applied.
#[must_use]
pub fn sanitize(name: &str) -> String {
    if RESERVED_WORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Uppercases the first character, leaving the rest unchanged.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps a type reference to a Scala type expression.
///
/// A bare named or list reference is nullable and maps to `Option[...]`;
/// a non-null wrapper strips the `Option`. Nesting composes exactly as
/// declared, so `[User!]` becomes `Option[List[User]]` while `[User]!`
/// becomes `List[Option[User]]`.
#[must_use]
pub fn map_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::NonNull(inner) => map_bare(inner),
        nullable => format!("Option[{}]", map_bare(nullable)),
    }
}

/// Maps a type reference ignoring its outermost nullability.
fn map_bare(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => map_scalar(name).to_string(),
        TypeRef::List(inner) => format!("List[{}]", map_type(inner)),
        // Unreachable for well-formed references (non-null never wraps
        // non-null), but total anyway.
        TypeRef::NonNull(inner) => map_bare(inner),
    }
}

/// Maps a built-in scalar name to its Scala equivalent; all other names
/// pass through unchanged.
fn map_scalar(name: &str) -> &str {
    match name {
        "Int" => "Int",
        "Float" => "Float",
        "String" => "String",
        "Boolean" => "Boolean",
        "ID" => "String",
        other => other,
    }
}

/// Escapes a description for use inside a Scala string literal.
#[must_use]
pub fn escape_description(description: &str) -> String {
    description.replace('\\', "\\\\").replace('"', "\\\"")
}
