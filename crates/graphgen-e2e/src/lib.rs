//! Code generated from `fixtures/todo.json` at build time, compiled against
//! hand-written host types.

pub mod model;

/// Output of the build script.
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/generated.rs"));
}

/// Generated from a model whose embedded schema does not parse.
pub mod broken_schema {
    include!(concat!(env!("OUT_DIR"), "/broken_schema.rs"));
}

#[cfg(test)]
mod e2e_tests;
