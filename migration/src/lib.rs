pub use sea_orm_migration::prelude::*;

mod m20261017_000001_planet;
mod m20261017_000002_scientist;
mod m20261017_000003_mission;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_planet::Migration),
            Box::new(m20261017_000002_scientist::Migration),
            Box::new(m20261017_000003_mission::Migration),
        ]
    }
}
