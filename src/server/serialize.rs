//! Depth-limited serialization of entities into API DTOs.
//!
//! Whenever an entity is serialized with a relation expanded, the related entity omits the
//! relation pointing back. Each routine here knows exactly which one level of relations to
//! expand:
//!
//! - scientist → missions → planet (no planet missions, no mission scientist)
//! - planet → missions → scientist (no scientist missions, no mission planet)
//! - mission → scientist & planet (neither with missions)

use crate::{
    model::{
        mission::{MissionDto, PlanetMissionDto, ScientistMissionDto},
        planet::{PlanetDto, PlanetSummaryDto},
        scientist::{ScientistDto, ScientistSummaryDto},
    },
    server::model::db::{MissionModel, PlanetModel, ScientistModel},
};

/// Serializes a scientist without its missions.
pub fn scientist_summary(scientist: ScientistModel) -> ScientistSummaryDto {
    ScientistSummaryDto {
        id: scientist.id,
        name: scientist.name,
        field_of_study: scientist.field_of_study,
        avatar: scientist.avatar,
        created_at: scientist.created_at,
        updated_at: scientist.updated_at,
    }
}

/// Serializes a planet without its missions.
pub fn planet_summary(planet: PlanetModel) -> PlanetSummaryDto {
    PlanetSummaryDto {
        id: planet.id,
        name: planet.name,
        distance_from_earth: planet.distance_from_earth,
        nearest_star: planet.nearest_star,
        image: planet.image,
        created_at: planet.created_at,
        updated_at: planet.updated_at,
    }
}

/// Serializes a scientist with its missions, each mission carrying its planet.
pub fn scientist(
    scientist: ScientistModel,
    missions: Vec<(MissionModel, PlanetModel)>,
) -> ScientistDto {
    ScientistDto {
        id: scientist.id,
        name: scientist.name,
        field_of_study: scientist.field_of_study,
        avatar: scientist.avatar,
        created_at: scientist.created_at,
        updated_at: scientist.updated_at,
        missions: missions
            .into_iter()
            .map(|(mission, planet)| ScientistMissionDto {
                id: mission.id,
                name: mission.name,
                scientist_id: mission.scientist_id,
                planet_id: mission.planet_id,
                created_at: mission.created_at,
                updated_at: mission.updated_at,
                planet: planet_summary(planet),
            })
            .collect(),
    }
}

/// Serializes a planet with its missions, each mission carrying its scientist.
pub fn planet(planet: PlanetModel, missions: Vec<(MissionModel, ScientistModel)>) -> PlanetDto {
    PlanetDto {
        id: planet.id,
        name: planet.name,
        distance_from_earth: planet.distance_from_earth,
        nearest_star: planet.nearest_star,
        image: planet.image,
        created_at: planet.created_at,
        updated_at: planet.updated_at,
        missions: missions
            .into_iter()
            .map(|(mission, scientist)| PlanetMissionDto {
                id: mission.id,
                name: mission.name,
                scientist_id: mission.scientist_id,
                planet_id: mission.planet_id,
                created_at: mission.created_at,
                updated_at: mission.updated_at,
                scientist: scientist_summary(scientist),
            })
            .collect(),
    }
}

/// Serializes a mission with its scientist & planet.
pub fn mission(mission: MissionModel, scientist: ScientistModel, planet: PlanetModel) -> MissionDto {
    MissionDto {
        id: mission.id,
        name: mission.name,
        scientist_id: mission.scientist_id,
        planet_id: mission.planet_id,
        created_at: mission.created_at,
        updated_at: mission.updated_at,
        scientist: scientist_summary(scientist),
        planet: planet_summary(planet),
    }
}
