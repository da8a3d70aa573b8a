//! graphgen compiler: lowers a schema model into Rust resolver source.
//!
//! The generated file plugs into `graphgen-runtime`:
//! - `emit` - source emission (contract, routines, embedded schema)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;

#[cfg(test)]
pub mod test_utils;

pub use emit::{Config, EmitError, Emitter, emit};
