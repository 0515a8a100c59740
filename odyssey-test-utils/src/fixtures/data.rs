use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{MissionModel, PlanetModel, ScientistModel},
    TestSetup,
};

impl TestSetup {
    pub fn fixtures<'a>(&'a self) -> DataFixtures<'a> {
        DataFixtures { setup: self }
    }
}

pub struct DataFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> DataFixtures<'a> {
    pub async fn insert_scientist(&self, name: &str) -> Result<ScientistModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Scientist::insert(entity::scientist::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                field_of_study: ActiveValue::Set("Astrophysics".to_string()),
                avatar: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(Some(name.to_string())),
                distance_from_earth: ActiveValue::Set(Some("4.2 light years".to_string())),
                nearest_star: ActiveValue::Set(Some("Proxima Centauri".to_string())),
                image: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mission(
        &self,
        name: &str,
        scientist_id: i32,
        planet_id: i32,
    ) -> Result<MissionModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Mission::insert(entity::mission::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                scientist_id: ActiveValue::Set(scientist_id),
                planet_id: ActiveValue::Set(planet_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a scientist & planet along with a mission connecting them.
    pub async fn insert_mission_with_relations(
        &self,
        mission_name: &str,
        scientist_name: &str,
        planet_name: &str,
    ) -> Result<(MissionModel, ScientistModel, PlanetModel), TestError> {
        let scientist = self.insert_scientist(scientist_name).await?;
        let planet = self.insert_planet(planet_name).await?;
        let mission = self
            .insert_mission(mission_name, scientist.id, planet.id)
            .await?;

        Ok((mission, scientist, planet))
    }
}
