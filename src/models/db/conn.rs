use {
    rocket::{Rocket, Build, fairing},
    rocket_sync_db_pools::database,
    diesel::{SqliteConnection, QueryResult, connection::SimpleConnection},
    diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness},
    crate::{
        config::TriviaConfig,
        models::error::TriviaResult
    }
};

pub type Connection = SqliteConnection;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

// Writers wait for the lock instead of failing with SQLITE_BUSY
const PRAGMAS: &str = "PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;";

#[database("trivia")]
pub struct DbConn(SqliteConnection);

/// Per-connection settings; SQLite doesn't persist them in the database file.
pub fn configure(conn: &mut Connection) -> QueryResult<()> {
    conn.batch_execute(PRAGMAS)
}

impl DbConn {
    /// Runs `f` against a configured pooled connection.
    pub async fn store<F, R>(&self, f: F) -> TriviaResult<R>
    where
        F: FnOnce(&mut Connection) -> TriviaResult<R> + Send + 'static,
        R: Send + 'static
    {
        self.run(move |c| {
            configure(c)?;
            f(c)
        }).await
    }
}

/// Applies any pending migrations before the server starts accepting requests.
pub async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let enabled = rocket
        .figment()
        .extract::<TriviaConfig>()
        .map(|config| config.run_migrations)
        .unwrap_or(true);
    if !enabled {
        tracing::info!("skipping database migrations");
        return Ok(rocket);
    }

    let Some(conn) = DbConn::get_one(&rocket).await else {
        tracing::error!("no database connection available for migrations");
        return Err(rocket);
    };

    let applied = conn
        .run(|c| {
            configure(c).map_err(|e| e.to_string())?;
            c.run_pending_migrations(MIGRATIONS)
                .map(|versions| versions.len())
                .map_err(|e| e.to_string())
        }).await;

    match applied {
        Ok(count) => {
            tracing::info!(count, "database migrations applied");
            Ok(rocket)
        }
        Err(e) => {
            tracing::error!(error = %e, "database migrations failed");
            Err(rocket)
        }
    }
}
