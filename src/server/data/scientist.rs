use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::{PlanetModel, ScientistModel};

/// Already-validated field changes for a scientist update.
///
/// `None` leaves a field unchanged; for `avatar`, `Some(None)` clears it.
#[derive(Clone, Debug, Default)]
pub struct ScientistChanges {
    /// New name, already checked for uniqueness
    pub name: Option<String>,
    /// New field of study
    pub field_of_study: Option<String>,
    /// New avatar, `Some(None)` to clear
    pub avatar: Option<Option<String>>,
}

/// Queries & writes for the `scientists` table.
pub struct ScientistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScientistRepository<'a, C> {
    /// Creates a new instance of [`ScientistRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new scientist
    pub async fn create(
        &self,
        name: String,
        field_of_study: String,
        avatar: Option<String>,
    ) -> Result<ScientistModel, DbErr> {
        let now = Utc::now().naive_utc();

        let scientist = entity::scientist::ActiveModel {
            name: ActiveValue::Set(name),
            field_of_study: ActiveValue::Set(field_of_study),
            avatar: ActiveValue::Set(avatar),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        scientist.insert(self.db).await
    }

    /// Gets a scientist by ID
    pub async fn get_by_id(&self, scientist_id: i32) -> Result<Option<ScientistModel>, DbErr> {
        entity::prelude::Scientist::find_by_id(scientist_id)
            .one(self.db)
            .await
    }

    /// Gets all scientists ordered by ID
    pub async fn get_all(&self) -> Result<Vec<ScientistModel>, DbErr> {
        entity::prelude::Scientist::find()
            .order_by_asc(entity::scientist::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a scientist with exactly the provided name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ScientistModel>, DbErr> {
        entity::prelude::Scientist::find()
            .filter(entity::scientist::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Applies changes to a scientist, refreshing `updated_at`
    ///
    /// `created_at` is never modified.
    pub async fn update(
        &self,
        scientist: ScientistModel,
        changes: ScientistChanges,
    ) -> Result<ScientistModel, DbErr> {
        let mut scientist_am = scientist.into_active_model();

        if let Some(name) = changes.name {
            scientist_am.name = ActiveValue::Set(name);
        }
        if let Some(field_of_study) = changes.field_of_study {
            scientist_am.field_of_study = ActiveValue::Set(field_of_study);
        }
        if let Some(avatar) = changes.avatar {
            scientist_am.avatar = ActiveValue::Set(avatar);
        }
        scientist_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        scientist_am.update(self.db).await
    }

    /// Deletes a scientist
    ///
    /// Missions referencing the scientist must be deleted first, see
    /// [`MissionRepository::delete_by_scientist_id`](crate::server::data::mission::MissionRepository::delete_by_scientist_id).
    ///
    /// Returns OK regardless of scientist existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, scientist_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Scientist::delete_by_id(scientist_id)
            .exec(self.db)
            .await
    }

    /// Gets the distinct planets a scientist has missions to, ordered by planet ID
    pub async fn get_planets(&self, scientist: &ScientistModel) -> Result<Vec<PlanetModel>, DbErr> {
        scientist
            .find_related(entity::prelude::Planet)
            .distinct()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }
}
