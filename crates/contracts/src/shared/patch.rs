//! Helpers for partial (PATCH) payloads.

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent gives `None`, `null` gives `Some(None)`, a value gives
/// `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Assign `value` to `target` when present and different, reporting whether
/// anything changed.
pub fn apply<T: PartialEq + Clone>(target: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if target != v => {
            *target = v.clone();
            true
        }
        _ => false,
    }
}
