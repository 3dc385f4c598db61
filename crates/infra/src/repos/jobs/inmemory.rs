use super::IJobRepo;
use crate::repos::shared::repo::DeleteResult;
use appeals_notifier_domain::Job;
use std::sync::Mutex;

pub struct InMemoryJobRepo {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepo {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryJobRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IJobRepo for InMemoryJobRepo {
    async fn schedule(&self, job: &Job) -> anyhow::Result<()> {
        let mut jobs = self.jobs.lock().unwrap();
        jobs.push(job.clone());
        Ok(())
    }

    async fn find_by_group(&self, group: &str) -> anyhow::Result<Vec<Job>> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().filter(|j| j.group == group).cloned().collect())
    }

    async fn delete_by_group(&self, group: &str) -> anyhow::Result<DeleteResult> {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|j| j.group != group);
        Ok(DeleteResult {
            deleted_count: (before - jobs.len()) as i64,
        })
    }
}
