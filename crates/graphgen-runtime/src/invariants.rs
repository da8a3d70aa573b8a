//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use serde_json::Value;

pub(crate) fn ensure_coerced<T>(result: Result<T, serde_json::Error>, raw: &Value) -> T {
    result.unwrap_or_else(|err| {
        panic!(
            "argument value {raw} cannot be coerced to {}: {err} \
             (selection must be validated against the schema)",
            std::any::type_name::<T>()
        )
    })
}

pub(crate) fn ensure_parsed<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|err| panic!("embedded schema failed to parse: {err}"))
}
