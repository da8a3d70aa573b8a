use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::selection::{self, CollectedField, Fragment, Selection};
use crate::{Error, JsonWriter};

/// Request-scoped values handed to every resolver call.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub operation_name: Option<String>,
    pub variables: IndexMap<String, Value>,
}

/// State shared by all resolution routines during one top-level traversal.
pub struct ExecutionContext<'r, R: ?Sized> {
    pub ctx: Context,
    pub resolvers: &'r R,
    pub json: JsonWriter,
    fragments: IndexMap<String, Fragment>,
    errors: Vec<Error>,
}

impl<'r, R: ?Sized> ExecutionContext<'r, R> {
    pub fn new(ctx: Context, resolvers: &'r R) -> Self {
        Self {
            ctx,
            resolvers,
            json: JsonWriter::new(),
            fragments: IndexMap::new(),
            errors: Vec::new(),
        }
    }

    /// Make named fragments available to fragment spreads.
    pub fn with_fragments(mut self, fragments: IndexMap<String, Fragment>) -> Self {
        self.fragments = fragments;
        self
    }

    /// Build the grouped field set of `sel` for an object answering to the
    /// type names in `satisfies`.
    pub fn collect_fields(
        &self,
        sel: &[Selection],
        satisfies: &[&str],
        visited: &mut HashSet<String>,
    ) -> Vec<CollectedField> {
        selection::collect_fields(sel, &self.fragments, satisfies, visited)
    }

    /// Record a field-level failure. Never unwinds the caller.
    pub fn error(&mut self, err: impl Into<Error>) {
        let err = err.into();
        tracing::debug!(error = %err, "field resolution failed");
        self.errors.push(err);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn finish(self) -> Response {
        Response {
            data: self.json.into_string(),
            errors: self.errors,
        }
    }
}

/// Serialized output of one traversal plus the failures it collected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Raw JSON text of the data tree.
    pub data: String,
    pub errors: Vec<Error>,
}

impl Response {
    /// Parse the data tree back into a JSON value.
    pub fn data_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.data)
    }
}
