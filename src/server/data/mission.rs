use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::{MissionModel, PlanetModel, ScientistModel};

/// Queries & writes for the `missions` join table.
pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new instance of [`MissionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new mission
    ///
    /// The scientist & planet IDs must already be validated to exist.
    pub async fn create(
        &self,
        name: String,
        scientist_id: i32,
        planet_id: i32,
    ) -> Result<MissionModel, DbErr> {
        let now = Utc::now().naive_utc();

        let mission = entity::mission::ActiveModel {
            name: ActiveValue::Set(name),
            scientist_id: ActiveValue::Set(scientist_id),
            planet_id: ActiveValue::Set(planet_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        mission.insert(self.db).await
    }

    /// Gets all missions ordered by ID
    pub async fn get_all(&self) -> Result<Vec<MissionModel>, DbErr> {
        entity::prelude::Mission::find()
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all missions with their scientist, ordered by mission ID
    pub async fn get_all_with_scientist(
        &self,
    ) -> Result<Vec<(MissionModel, Option<ScientistModel>)>, DbErr> {
        entity::prelude::Mission::find()
            .find_also_related(entity::prelude::Scientist)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all missions with their planet, ordered by mission ID
    pub async fn get_all_with_planet(
        &self,
    ) -> Result<Vec<(MissionModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Mission::find()
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a scientist's missions with each mission's planet, ordered by mission ID
    pub async fn get_by_scientist_id_with_planet(
        &self,
        scientist_id: i32,
    ) -> Result<Vec<(MissionModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Mission::find()
            .filter(entity::mission::Column::ScientistId.eq(scientist_id))
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet's missions with each mission's scientist, ordered by mission ID
    pub async fn get_by_planet_id_with_scientist(
        &self,
        planet_id: i32,
    ) -> Result<Vec<(MissionModel, Option<ScientistModel>)>, DbErr> {
        entity::prelude::Mission::find()
            .filter(entity::mission::Column::PlanetId.eq(planet_id))
            .find_also_related(entity::prelude::Scientist)
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every mission flown by the provided scientist
    pub async fn delete_by_scientist_id(&self, scientist_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Mission::delete_many()
            .filter(entity::mission::Column::ScientistId.eq(scientist_id))
            .exec(self.db)
            .await
    }
}
