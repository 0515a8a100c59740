use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::{PlanetModel, ScientistModel};

/// Descriptive fields for a new planet, all optional.
#[derive(Clone, Debug, Default)]
pub struct NewPlanet {
    /// Planet name
    pub name: Option<String>,
    /// Free-form distance, e.g. `12 light years`
    pub distance_from_earth: Option<String>,
    /// Name of the closest star
    pub nearest_star: Option<String>,
    /// Image URL
    pub image: Option<String>,
}

/// Queries & writes for the `planets` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts planets in order, returning the created models
    pub async fn create_many(&self, planets: Vec<NewPlanet>) -> Result<Vec<PlanetModel>, DbErr> {
        let now = Utc::now().naive_utc();
        let mut created = Vec::with_capacity(planets.len());

        for planet in planets {
            let planet = entity::planet::ActiveModel {
                name: ActiveValue::Set(planet.name),
                distance_from_earth: ActiveValue::Set(planet.distance_from_earth),
                nearest_star: ActiveValue::Set(planet.nearest_star),
                image: ActiveValue::Set(planet.image),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            };

            created.push(planet.insert(self.db).await?);
        }

        Ok(created)
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets planets matching the provided IDs, IDs without a planet are skipped
    pub async fn get_many_by_ids(&self, planet_ids: Vec<i32>) -> Result<Vec<PlanetModel>, DbErr> {
        if planet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids))
            .all(self.db)
            .await
    }

    /// Counts all planets
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Planet::find().count(self.db).await
    }

    /// Gets the distinct scientists with missions to a planet, ordered by scientist ID
    pub async fn get_scientists(&self, planet: &PlanetModel) -> Result<Vec<ScientistModel>, DbErr> {
        planet
            .find_related(entity::prelude::Scientist)
            .distinct()
            .order_by_asc(entity::scientist::Column::Id)
            .all(self.db)
            .await
    }
}
