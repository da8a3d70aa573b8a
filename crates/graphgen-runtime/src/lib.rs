#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime collaborators for graphgen-generated resolvers.
//!
//! Generated code glob-imports [`prelude`] and relies on:
//! - [`ExecutionContext`] - threaded through every resolution routine
//! - [`JsonWriter`] - structured output sink
//! - [`collect_fields`](ExecutionContext::collect_fields) - grouped field sets
//! - [`coerce_arg`] / [`unpack_complex_arg`] - argument materialization
//! - [`Schema`] - the embedded schema constant

mod args;
mod context;
mod error;
mod invariants;
mod json;
mod schema;
mod selection;


pub use args::{coerce_arg, unpack_complex_arg};
pub use context::{Context, ExecutionContext, Response};
pub use error::Error;
pub use json::JsonWriter;
pub use schema::{Schema, SchemaError};
pub use selection::{CollectedField, Field, Fragment, Selection};

/// Host representation of the `Int` scalar.
pub type Int = i64;
/// Host representation of the `Float` scalar.
pub type Float = f64;
/// Host representation of the `Boolean` scalar.
pub type Boolean = bool;
/// Host representation of the `ID` scalar.
#[allow(clippy::upper_case_acronyms)]
pub type ID = String;

/// Everything generated code refers to by bare name.
pub mod prelude {
    pub use crate::{
        Boolean, CollectedField, Context, Error, ExecutionContext, Float, ID, Int, Schema,
        Selection, coerce_arg, unpack_complex_arg,
    };
}
