pub use sea_orm_migration::prelude::*;
pub use sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20241016_000001_casting_schema; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241016_000001_casting_schema::Migration)]
    }
}

/// Direction to move the schema in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    /// Apply every pending migration (startup path)
    Up,
    /// Roll back every applied migration
    Down,
}

/// Run a migration command against an already-open connection.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let backend = format!("{:?}", db.get_database_backend());
    tracing::info!(
        cmd = ?command,
        backend = %backend,
        defined = Migrator::migrations().len(),
        applied = count_applied_migrations(db).await?,
        "migration_start"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
    };
    if let Err(e) = result {
        tracing::error!(cmd = ?command, backend = %backend, error = %e, "migration_failed");
        return Err(e);
    }

    let applied = count_applied_migrations(db).await?;
    tracing::info!(cmd = ?command, applied, "migration_done");
    Ok(())
}

/// Number of applied migrations; 0 before the bookkeeping table exists.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}
