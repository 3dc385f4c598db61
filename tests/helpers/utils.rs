use appeals_notifier_infra::NotifierContext;
use std::time::Duration;

/// Message handling happens on background tasks, so assertions against
/// the job store have to wait for the consumer to catch up.
pub async fn wait_for_job_count(ctx: &NotifierContext, group: &str, expected: usize) {
    for _ in 0..100 {
        let jobs = ctx.repos.jobs.find_by_group(group).await.unwrap();
        if jobs.len() == expected {
            return;
        }
        actix_web::rt::time::sleep(Duration::from_millis(20)).await;
    }
    panic!(
        "Timed out waiting for {} job(s) in group: {}",
        expected, group
    );
}
