//! Database connection setup.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    info!("Database connected, migrations applied");

    Ok(db)
}
