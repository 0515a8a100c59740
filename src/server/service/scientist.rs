use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        planet::PlanetSummaryDto,
        scientist::{CreateScientistDto, ScientistDto, UpdateScientistDto},
    },
    server::{
        data::{
            mission::MissionRepository,
            scientist::{ScientistChanges, ScientistRepository},
        },
        error::Error,
        serialize,
        service::require_related,
        validation::{scientist_name_conflict, validate_field_of_study, validate_scientist_name},
    },
};

/// Service for scientist operations.
pub struct ScientistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScientistService<'a> {
    /// Creates a new instance of [`ScientistService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all scientists, each with their missions & the missions' planets.
    ///
    /// # Returns
    /// - `Ok(Vec<ScientistDto>)` - All scientists ordered by ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_all(&self) -> Result<Vec<ScientistDto>, Error> {
        let scientists = ScientistRepository::new(self.db).get_all().await?;
        let missions = MissionRepository::new(self.db).get_all_with_planet().await?;

        let mut missions_by_scientist = HashMap::new();
        for (mission, planet) in require_related(missions, "planet")? {
            missions_by_scientist
                .entry(mission.scientist_id)
                .or_insert_with(Vec::new)
                .push((mission, planet));
        }

        Ok(scientists
            .into_iter()
            .map(|scientist| {
                let missions = missions_by_scientist
                    .remove(&scientist.id)
                    .unwrap_or_default();

                serialize::scientist(scientist, missions)
            })
            .collect())
    }

    /// Retrieves a scientist with their missions & the missions' planets.
    ///
    /// # Returns
    /// - `Ok(Some(ScientistDto))` - Scientist found
    /// - `Ok(None)` - No scientist with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_scientist(&self, scientist_id: i32) -> Result<Option<ScientistDto>, Error> {
        let Some(scientist) = ScientistRepository::new(self.db)
            .get_by_id(scientist_id)
            .await?
        else {
            return Ok(None);
        };

        let missions = MissionRepository::new(self.db)
            .get_by_scientist_id_with_planet(scientist_id)
            .await?;

        Ok(Some(serialize::scientist(
            scientist,
            require_related(missions, "planet")?,
        )))
    }

    /// Creates a scientist after validating its fields.
    ///
    /// The name uniqueness check and the insert share one transaction; a concurrent insert
    /// of the same name that slips past the check is caught by the unique index.
    ///
    /// # Returns
    /// - `Ok(ScientistDto)` - Created scientist, with no missions
    /// - `Err(Error::ValidationError(_))` - A field was missing, empty, or the name is taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_scientist(&self, payload: CreateScientistDto) -> Result<ScientistDto, Error> {
        let txn = self.db.begin().await?;

        let name = validate_scientist_name(&txn, payload.name, None).await?;
        let field_of_study = validate_field_of_study(payload.field_of_study)?;

        let scientist = ScientistRepository::new(&txn)
            .create(name.clone(), field_of_study, payload.avatar)
            .await
            .map_err(|e| scientist_name_conflict(e, &name))?;

        txn.commit()
            .await
            .map_err(|e| scientist_name_conflict(e, &name))?;

        tracing::info!(scientist_id = %scientist.id, "Created scientist {:?}", scientist.name);

        Ok(serialize::scientist(scientist, Vec::new()))
    }

    /// Applies a partial update to a scientist.
    ///
    /// Only fields present in the payload are validated & changed; `updated_at` is always
    /// refreshed.
    ///
    /// # Returns
    /// - `Ok(Some(ScientistDto))` - Updated scientist with their missions
    /// - `Ok(None)` - No scientist with this ID
    /// - `Err(Error::ValidationError(_))` - A provided field failed validation
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_scientist(
        &self,
        scientist_id: i32,
        payload: UpdateScientistDto,
    ) -> Result<Option<ScientistDto>, Error> {
        let txn = self.db.begin().await?;
        let scientist_repo = ScientistRepository::new(&txn);

        let Some(scientist) = scientist_repo.get_by_id(scientist_id).await? else {
            return Ok(None);
        };

        let name = match payload.name {
            Some(name) => Some(validate_scientist_name(&txn, name, Some(scientist_id)).await?),
            None => None,
        };
        let field_of_study = match payload.field_of_study {
            Some(field_of_study) => Some(validate_field_of_study(field_of_study)?),
            None => None,
        };

        let conflict_name = name.clone().unwrap_or_else(|| scientist.name.clone());
        let changes = ScientistChanges {
            name,
            field_of_study,
            avatar: payload.avatar,
        };
        let scientist = scientist_repo
            .update(scientist, changes)
            .await
            .map_err(|e| scientist_name_conflict(e, &conflict_name))?;

        let missions = MissionRepository::new(&txn)
            .get_by_scientist_id_with_planet(scientist_id)
            .await?;

        txn.commit()
            .await
            .map_err(|e| scientist_name_conflict(e, &conflict_name))?;

        tracing::info!(scientist_id = %scientist_id, "Updated scientist");

        Ok(Some(serialize::scientist(
            scientist,
            require_related(missions, "planet")?,
        )))
    }

    /// Deletes a scientist along with all of their missions.
    ///
    /// Both deletes share one transaction, so readers never observe the scientist with
    /// only part of their missions removed.
    ///
    /// # Returns
    /// - `Ok(true)` - Scientist and their missions were deleted
    /// - `Ok(false)` - No scientist with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_scientist(&self, scientist_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;
        let scientist_repo = ScientistRepository::new(&txn);

        if scientist_repo.get_by_id(scientist_id).await?.is_none() {
            return Ok(false);
        }

        let missions = MissionRepository::new(&txn)
            .delete_by_scientist_id(scientist_id)
            .await?;
        scientist_repo.delete(scientist_id).await?;

        txn.commit().await?;

        tracing::info!(
            scientist_id = %scientist_id,
            missions_deleted = missions.rows_affected,
            "Deleted scientist"
        );

        Ok(true)
    }

    /// Returns whether a scientist with this ID exists.
    pub async fn scientist_exists(&self, scientist_id: i32) -> Result<bool, Error> {
        let scientist = ScientistRepository::new(self.db)
            .get_by_id(scientist_id)
            .await?;

        Ok(scientist.is_some())
    }

    /// Retrieves the distinct planets a scientist has missions to.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<PlanetSummaryDto>))` - Planets ordered by ID, empty without missions
    /// - `Ok(None)` - No scientist with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_scientist_planets(
        &self,
        scientist_id: i32,
    ) -> Result<Option<Vec<PlanetSummaryDto>>, Error> {
        let scientist_repo = ScientistRepository::new(self.db);

        let Some(scientist) = scientist_repo.get_by_id(scientist_id).await? else {
            return Ok(None);
        };

        let planets = scientist_repo.get_planets(&scientist).await?;

        Ok(Some(
            planets.into_iter().map(serialize::planet_summary).collect(),
        ))
    }
}
