use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deferred unit of work registered with the job store. The scheduler
/// runtime re-emits the payload as a new inbound message at
/// `trigger_at`; until then the job can be cancelled through its group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Deterministic group key, reproducible from the case id and the
    /// event id alone. All jobs of one reminder instance share it so
    /// they can be removed as a unit without tracking job ids.
    pub group: String,
    pub name: String,
    pub payload: String,
    pub trigger_at: DateTime<Utc>,
}
