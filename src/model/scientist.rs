use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{mission::ScientistMissionDto, present};

/// A scientist along with the missions they fly.
///
/// Nested missions never carry a `scientist` back-reference.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScientistDto {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    pub avatar: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub missions: Vec<ScientistMissionDto>,
}

/// A scientist nested inside another entity, without its `missions`.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScientistSummaryDto {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    pub avatar: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating a scientist.
///
/// Required fields are optional here so that a missing field is reported by validation
/// the same way as an empty one.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateScientistDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Request body for a partial scientist update.
///
/// Only the listed fields may be changed; any other field rejects the request.
#[derive(Clone, Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateScientistDto {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub field_of_study: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub avatar: Option<Option<String>>,
}
