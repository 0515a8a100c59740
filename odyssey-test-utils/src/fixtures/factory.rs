//! Factory functions for in-memory database models.
//!
//! Useful for unit tests of pure functions such as serialization, where no database is needed.

use chrono::Utc;

use crate::model::{MissionModel, PlanetModel, ScientistModel};

pub fn mock_scientist_model(id: i32, name: &str) -> ScientistModel {
    let now = Utc::now().naive_utc();
    ScientistModel {
        id,
        name: name.to_string(),
        field_of_study: "Astrophysics".to_string(),
        avatar: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    let now = Utc::now().naive_utc();
    PlanetModel {
        id,
        name: Some(name.to_string()),
        distance_from_earth: Some("4.2 light years".to_string()),
        nearest_star: Some("Proxima Centauri".to_string()),
        image: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_mission_model(id: i32, name: &str, scientist_id: i32, planet_id: i32) -> MissionModel {
    let now = Utc::now().naive_utc();
    MissionModel {
        id,
        name: name.to_string(),
        scientist_id,
        planet_id,
        created_at: now,
        updated_at: now,
    }
}
