use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        mission::{CreateMissionDto, MissionDto},
        planet::PlanetDto,
    },
    server::{
        data::{mission::MissionRepository, planet::PlanetRepository},
        error::Error,
        serialize,
        service::require_related,
        validation::{
            validate_mission_name, validate_mission_planet_id, validate_mission_scientist_id,
        },
    },
};

/// Service for mission operations.
pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    /// Creates a new instance of [`MissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all missions, each with its scientist & planet.
    pub async fn get_all(&self) -> Result<Vec<MissionDto>, Error> {
        let missions = MissionRepository::new(self.db)
            .get_all_with_scientist()
            .await?;
        let missions = require_related(missions, "scientist")?;

        let mut planet_ids: Vec<i32> = missions.iter().map(|(m, _)| m.planet_id).collect();
        planet_ids.sort_unstable();
        planet_ids.dedup();

        let planets: HashMap<i32, _> = PlanetRepository::new(self.db)
            .get_many_by_ids(planet_ids)
            .await?
            .into_iter()
            .map(|planet| (planet.id, planet))
            .collect();

        missions
            .into_iter()
            .map(|(mission, scientist)| {
                let planet = planets.get(&mission.planet_id).cloned().ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find planet for mission ID {}",
                        mission.id
                    ))
                })?;

                Ok(serialize::mission(mission, scientist, planet))
            })
            .collect()
    }

    /// Creates a mission after validating its name & references.
    ///
    /// Reference checks and the insert share one transaction, so a mission is never
    /// persisted pointing at a scientist or planet that doesn't exist.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The mission's planet with all of its missions, including the new one
    /// - `Err(Error::ValidationError(_))` - Name missing/empty, or a reference is missing/dangling
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_mission(&self, payload: CreateMissionDto) -> Result<PlanetDto, Error> {
        let txn = self.db.begin().await?;

        let name = validate_mission_name(payload.name)?;
        let scientist_id = validate_mission_scientist_id(&txn, payload.scientist_id).await?;
        let planet_id = validate_mission_planet_id(&txn, payload.planet_id).await?;

        let mission_repo = MissionRepository::new(&txn);
        let mission = mission_repo.create(name, scientist_id, planet_id).await?;

        let planet = PlanetRepository::new(&txn)
            .get_by_id(planet_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Planet ID {} disappeared while creating mission ID {}",
                    planet_id, mission.id
                ))
            })?;
        let missions = mission_repo
            .get_by_planet_id_with_scientist(planet_id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            mission_id = %mission.id,
            scientist_id = %scientist_id,
            planet_id = %planet_id,
            "Created mission {:?}",
            mission.name
        );

        Ok(serialize::planet(
            planet,
            require_related(missions, "scientist")?,
        ))
    }
}
