mod jobs;
mod shared;

use jobs::{InMemoryJobRepo, PostgresJobRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

pub use jobs::IJobRepo;
pub use shared::repo::DeleteResult;

#[derive(Clone)]
pub struct Repos {
    pub jobs: Arc<dyn IJobRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            jobs: Arc::new(PostgresJobRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            jobs: Arc::new(InMemoryJobRepo::new()),
        }
    }
}
