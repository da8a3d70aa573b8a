//! Identifiers and type expressions used in generated code.

use std::borrow::Cow;

use graphgen_core::utils::{to_screaming_snake_case, to_snake_case};
use graphgen_core::{Field, Kind, Modifier, Object};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const RESERVED: &[&str] = &["_", "crate", "self", "Self", "super"];

/// Resolution routine of an object: `_` + snake case of its GraphQL name.
pub(crate) fn routine_name(graphql_name: &str) -> String {
    format!("_{}", to_snake_case(graphql_name))
}

pub(crate) fn satisfies_name(graphql_name: &str) -> String {
    format!("{}_SATISFIES", to_screaming_snake_case(graphql_name))
}

pub(crate) fn shim_name(graphql_name: &str) -> String {
    format!("exec_{}", to_snake_case(graphql_name))
}

/// Contract operation: `<ObjectName>_<fieldName>`, unique per object and field.
pub(crate) fn contract_op_name(object: &Object, field: &Field) -> String {
    format!("{}_{}", object.name, field.graphql_name)
}

/// JSON writer method for a basic kind.
pub(crate) fn writer_method(kind: &Kind) -> String {
    to_snake_case(&kind.name)
}

pub(crate) fn arg_var(index: usize) -> String {
    format!("arg{index}")
}

pub(crate) fn escape_ident(name: &str) -> Cow<'_, str> {
    if RESERVED.contains(&name) {
        return Cow::Owned(format!("{name}_"));
    }
    if KEYWORDS.contains(&name) {
        return Cow::Owned(format!("r#{name}"));
    }
    Cow::Borrowed(name)
}

/// Host type expression: the qualified name wrapped by the kind's modifiers.
pub(crate) fn host_type(kind: &Kind) -> String {
    kind.modifiers
        .iter()
        .rev()
        .fold(kind.qualified_name(), |inner, modifier| match modifier {
            Modifier::Optional => format!("Option<{inner}>"),
            Modifier::List => format!("Vec<{inner}>"),
        })
}

/// `use` line for an import alias. The `as` clause is dropped when redundant.
pub(crate) fn use_declaration(alias: &str, path: &str) -> String {
    if path.rsplit("::").next() == Some(alias) {
        format!("use {path};")
    } else {
        format!("use {path} as {alias};")
    }
}
