//! Wire model definitions.

use serde::{Deserialize, Deserializer};

pub mod group;
pub mod push;
pub mod transfer;

/// Decode an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
