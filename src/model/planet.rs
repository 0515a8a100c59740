use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::mission::PlanetMissionDto;

/// A planet along with the missions flown to it.
///
/// Nested missions never carry a `planet` back-reference.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: Option<String>,
    pub distance_from_earth: Option<String>,
    pub nearest_star: Option<String>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub missions: Vec<PlanetMissionDto>,
}

/// A planet nested inside another entity, without its `missions`.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetSummaryDto {
    pub id: i32,
    pub name: Option<String>,
    pub distance_from_earth: Option<String>,
    pub nearest_star: Option<String>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
