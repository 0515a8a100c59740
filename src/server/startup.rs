use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::Error, model::app::AppState, router, service::planet::PlanetService,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected & migrations applied");

    Ok(db)
}

/// Insert the sample planets when seeding is enabled and no planets exist yet
pub async fn seed_database(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.seed_planets {
        return Ok(());
    }

    let seeded = PlanetService::new(db).seed_planets().await?;
    if seeded == 0 {
        tracing::info!("Planets already present, skipping seeding");
    }

    Ok(())
}

/// Build the application router with state, CORS & request tracing layers
pub fn build_router(db: DatabaseConnection) -> Router {
    router::routes()
        .with_state(AppState::from(db))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
