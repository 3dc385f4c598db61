mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
use appeals_notifier_domain::Job;
pub use inmemory::InMemoryJobRepo;
pub use postgres::PostgresJobRepo;

/// Registry of scheduled jobs. The scheduler runtime that fires them is
/// not part of this service; we only register, look up and cancel.
///
/// Every operation is a self-contained statement so concurrent calls
/// for different groups never need caller-side locking.
#[async_trait::async_trait]
pub trait IJobRepo: Send + Sync {
    async fn schedule(&self, job: &Job) -> anyhow::Result<()>;
    async fn find_by_group(&self, group: &str) -> anyhow::Result<Vec<Job>>;
    /// Removes every job under `group`. A group with zero jobs deletes
    /// nothing and reports `deleted_count: 0`; only storage failures
    /// surface as `Err`.
    async fn delete_by_group(&self, group: &str) -> anyhow::Result<DeleteResult>;
}
