use super::IJobRepo;
use crate::repos::shared::repo::DeleteResult;
use appeals_notifier_domain::Job;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

pub struct PostgresJobRepo {
    pool: PgPool,
}

impl PostgresJobRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobRaw {
    group_id: String,
    name: String,
    payload: String,
    trigger_at: DateTime<Utc>,
}

impl From<JobRaw> for Job {
    fn from(raw: JobRaw) -> Self {
        Self {
            group: raw.group_id,
            name: raw.name,
            payload: raw.payload,
            trigger_at: raw.trigger_at,
        }
    }
}

#[async_trait::async_trait]
impl IJobRepo for PostgresJobRepo {
    async fn schedule(&self, job: &Job) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminder_jobs
            (group_id, name, payload, trigger_at)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(&job.group)
        .bind(&job.name)
        .bind(&job.payload)
        .bind(job.trigger_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_group(&self, group: &str) -> anyhow::Result<Vec<Job>> {
        let jobs: Vec<JobRaw> = sqlx::query_as(
            r#"
            SELECT group_id, name, payload, trigger_at FROM reminder_jobs AS j
            WHERE j.group_id = $1
            ORDER BY j.trigger_at
            "#,
        )
        .bind(group)
        .fetch_all(&self.pool)
        .await?;
        Ok(jobs.into_iter().map(|j| j.into()).collect())
    }

    async fn delete_by_group(&self, group: &str) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM reminder_jobs AS j
            WHERE j.group_id = $1
            "#,
        )
        .bind(group)
        .execute(&self.pool)
        .await?;
        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
