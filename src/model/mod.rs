//! Request and response DTOs shared by the HTTP API.
//!
//! Response DTOs are split per nesting level so that a nested relation can never expand
//! back into the entity that contains it.

pub mod api;
pub mod mission;
pub mod planet;
pub mod scientist;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be absent, explicitly `null`, or set.
///
/// Paired with `#[serde(default)]` an absent field stays `None`, while `null` becomes
/// `Some(None)`, allowing partial updates to tell "leave unchanged" apart from "clear".
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
