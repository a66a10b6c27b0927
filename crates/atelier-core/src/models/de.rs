//! Deserialization helpers for loosely typed feed data.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing key.
///
/// `#[serde(default)]` only covers absent keys; REST feeds also send
/// `"field": null`, which would otherwise fail the whole document.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
