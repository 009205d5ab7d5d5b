//! Serde deserialization helpers for lenient option parsing

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` as the type's default
///
/// Lets `"points": null` (or an empty YAML key) behave like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
