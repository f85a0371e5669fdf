//! Field-level serde helpers shared by the contract types

use serde::{Deserialize, Deserializer};

/// Decode a JSON `null` as the type's default.
///
/// The reference producer writes empty lists and maps as `null`, which
/// serde would otherwise reject for `Vec` and `Map` fields.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `skip_serializing_if` predicate for zero-valued counters
pub fn is_zero(value: &i64) -> bool {
    *value == 0
}
