use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000001_planet::Planet, m20261017_000002_scientist::Scientist};

static IDX_MISSIONS_SCIENTIST_ID: &str = "idx_missions_scientist_id";
static IDX_MISSIONS_PLANET_ID: &str = "idx_missions_planet_id";
static FK_MISSIONS_SCIENTIST_ID: &str = "fk_missions_scientist_id_scientists";
static FK_MISSIONS_PLANET_ID: &str = "fk_missions_planet_id_planets";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys to an existing table, so they are declared inline
        manager
            .create_table(
                Table::create()
                    .table(Mission::Table)
                    .if_not_exists()
                    .col(pk_auto(Mission::Id))
                    .col(string(Mission::Name))
                    .col(integer(Mission::ScientistId))
                    .col(integer(Mission::PlanetId))
                    .col(timestamp(Mission::CreatedAt))
                    .col(timestamp(Mission::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MISSIONS_SCIENTIST_ID)
                            .from(Mission::Table, Mission::ScientistId)
                            .to(Scientist::Table, Scientist::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MISSIONS_PLANET_ID)
                            .from(Mission::Table, Mission::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MISSIONS_SCIENTIST_ID)
                    .table(Mission::Table)
                    .col(Mission::ScientistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MISSIONS_PLANET_ID)
                    .table(Mission::Table)
                    .col(Mission::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MISSIONS_PLANET_ID)
                    .table(Mission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MISSIONS_SCIENTIST_ID)
                    .table(Mission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Mission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Mission {
    #[sea_orm(iden = "missions")]
    Table,
    Id,
    Name,
    ScientistId,
    PlanetId,
    CreatedAt,
    UpdatedAt,
}
