use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{planet::PlanetSummaryDto, scientist::ScientistSummaryDto};

/// A mission with both the scientist flying it and its destination planet.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MissionDto {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub scientist: ScientistSummaryDto,
    pub planet: PlanetSummaryDto,
}

/// A mission nested under its scientist, so only the planet is expanded.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScientistMissionDto {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub planet: PlanetSummaryDto,
}

/// A mission nested under its planet, so only the scientist is expanded.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetMissionDto {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub scientist: ScientistSummaryDto,
}

/// Request body for creating a mission.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateMissionDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub scientist_id: Option<i32>,
    #[serde(default)]
    pub planet_id: Option<i32>,
}
