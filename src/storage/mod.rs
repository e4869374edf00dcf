pub mod entities;
pub mod migration;
pub mod mutation;
pub mod query;
pub mod seed;

pub use entities::{baked_good, bakery};
pub use migration::Migrator;
pub use mutation::{BakeryChanges, Mutation, NewBakedGood};
pub use query::Query;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Open the SQLite database behind `url`.
///
/// In-memory databases live only as long as their connection, so the pool is
/// pinned to a single connection for them.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);

    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Apply every pending migration.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?.len();
    Migrator::up(db, None).await?;
    info!(applied = pending, "Migrations up to date");
    Ok(())
}
