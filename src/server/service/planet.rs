use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{planet::PlanetDto, scientist::ScientistSummaryDto},
    server::{
        data::{
            mission::MissionRepository,
            planet::{NewPlanet, PlanetRepository},
        },
        error::Error,
        serialize,
        service::require_related,
    },
};

/// Service for planet operations.
///
/// Planets are read-only through the API; they only enter the database through seeding.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all planets, each with their missions & the missions' scientists.
    pub async fn get_all(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;
        let missions = MissionRepository::new(self.db)
            .get_all_with_scientist()
            .await?;

        let mut missions_by_planet = HashMap::new();
        for (mission, scientist) in require_related(missions, "scientist")? {
            missions_by_planet
                .entry(mission.planet_id)
                .or_insert_with(Vec::new)
                .push((mission, scientist));
        }

        Ok(planets
            .into_iter()
            .map(|planet| {
                let missions = missions_by_planet.remove(&planet.id).unwrap_or_default();

                serialize::planet(planet, missions)
            })
            .collect())
    }

    /// Retrieves a planet with its missions & the missions' scientists.
    ///
    /// # Returns
    /// - `Ok(Some(PlanetDto))` - Planet found
    /// - `Ok(None)` - No planet with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let Some(planet) = PlanetRepository::new(self.db).get_by_id(planet_id).await? else {
            return Ok(None);
        };

        let missions = MissionRepository::new(self.db)
            .get_by_planet_id_with_scientist(planet_id)
            .await?;

        Ok(Some(serialize::planet(
            planet,
            require_related(missions, "scientist")?,
        )))
    }

    /// Retrieves the distinct scientists with missions to a planet.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<ScientistSummaryDto>))` - Scientists ordered by ID, empty without missions
    /// - `Ok(None)` - No planet with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet_scientists(
        &self,
        planet_id: i32,
    ) -> Result<Option<Vec<ScientistSummaryDto>>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let Some(planet) = planet_repo.get_by_id(planet_id).await? else {
            return Ok(None);
        };

        let scientists = planet_repo.get_scientists(&planet).await?;

        Ok(Some(
            scientists
                .into_iter()
                .map(serialize::scientist_summary)
                .collect(),
        ))
    }

    /// Inserts the sample planets if no planets exist yet.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of planets inserted, 0 if planets already existed
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was inserted
    pub async fn seed_planets(&self) -> Result<usize, Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        if planet_repo.count().await? > 0 {
            return Ok(0);
        }

        let created = planet_repo.create_many(sample_planets()).await?;

        txn.commit().await?;

        tracing::info!("Seeded {} planets", created.len());

        Ok(created.len())
    }
}

fn sample_planets() -> Vec<NewPlanet> {
    [
        ("TauCeti F", "12 light years", "Tau Ceti"),
        ("Maxxor", "10 light years", "Canus Minor"),
        ("Ross 128 b", "11 light years", "Ross 128"),
        ("Kepler-186f", "582 light years", "Kepler-186"),
        ("Proxima Centauri b", "4.2 light years", "Proxima Centauri"),
        ("Gliese 667 Cc", "23.6 light years", "Gliese 667 C"),
    ]
    .into_iter()
    .map(|(name, distance_from_earth, nearest_star)| NewPlanet {
        name: Some(name.to_string()),
        distance_from_earth: Some(distance_from_earth.to_string()),
        nearest_star: Some(nearest_star.to_string()),
        image: None,
    })
    .collect()
}
