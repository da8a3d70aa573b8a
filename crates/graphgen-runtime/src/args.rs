//! Argument materialization for generated argument-binding blocks.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;
use crate::invariants::ensure_coerced;

/// Coerce a raw basic argument into its host representation.
///
/// The raw value comes from a selection validated against the schema, so a
/// mismatch is a fault rather than a field error.
pub fn coerce_arg<T: DeserializeOwned>(raw: &Value) -> T {
    ensure_coerced(T::deserialize(raw), raw)
}

/// Fill `target` from a raw composite argument.
///
/// A missing argument leaves `target` untouched. On failure `target` is
/// left untouched as well.
pub fn unpack_complex_arg<T: DeserializeOwned>(
    target: &mut T,
    raw: Option<&Value>,
) -> Result<(), Error> {
    let Some(raw) = raw else {
        return Ok(());
    };
    *target = T::deserialize(raw)?;
    Ok(())
}
