//! Service layer for business logic.
//!
//! Services coordinate validation, repositories and serialization for each entity. Every
//! write runs inside a database transaction so that validation and the write it guards
//! see the same data, and a failure at any step leaves nothing persisted.

pub mod mission;
pub mod planet;
pub mod scientist;

use crate::server::{error::Error, model::db::MissionModel};

/// Pairs each mission with a related record that the foreign key guarantees exists.
///
/// A missing record would mean the foreign key constraint is not enforced, which is
/// reported as an internal error rather than silently dropping the mission.
fn require_related<R>(
    missions: Vec<(MissionModel, Option<R>)>,
    relation: &str,
) -> Result<Vec<(MissionModel, R)>, Error> {
    missions
        .into_iter()
        .map(|(mission, related)| match related {
            Some(related) => Ok((mission, related)),
            None => Err(Error::InternalError(format!(
                "Failed to find {} for mission ID {}",
                relation, mission.id
            ))),
        })
        .collect()
}
