mod config;
mod repos;

pub use config::Config;
pub use repos::{IReminderRepo, Repos};
use tracing::info;

#[derive(Clone)]
pub struct UdhaarContext {
    pub repos: Repos,
    pub config: Config,
}

/// Will setup the infrastructure context given the environment.
/// With `DATABASE_URL` set the reminders live in Postgres, otherwise
/// they are kept in process memory, which is also what the test
/// suites run against.
pub async fn setup_context() -> UdhaarContext {
    let config = Config::new();
    let repos = match config.database_url.as_deref() {
        Some(connection_string) => Repos::create_postgres(connection_string)
            .await
            .expect("Postgres credentials must be valid"),
        None => {
            info!("DATABASE_URL not set, falling back to in memory storage");
            Repos::create_inmemory()
        }
    };
    UdhaarContext { repos, config }
}
