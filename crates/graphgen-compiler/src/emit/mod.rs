//! Rust source emission from a schema model.
//!
//! A generated file holds, in order:
//! - header and imports
//! - the resolver contract and satisfies sets
//! - one resolution routine per object
//! - the embedded schema and exec entry points

mod config;
mod contract;
mod emitter;
mod error;
mod naming;
mod object;
mod printer;
mod resolve;
mod walker;


pub use config::Config;
pub use emitter::{Emitter, emit};
pub use error::EmitError;
