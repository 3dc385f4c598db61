use super::{ReminderError, ReminderHandler};
use appeals_notifier_domain::{job_group, CaseEvent, CaseEventType};
use appeals_notifier_infra::NotifierContext;
use tracing::info;

/// Cancels pending hearing reminders when the hearing is postponed.
/// Removing a group that was never scheduled is a successful no-op.
pub struct HearingReminderRemover;

impl HearingReminderRemover {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HearingReminderRemover {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ReminderHandler for HearingReminderRemover {
    fn can_handle(&self, event: &CaseEvent) -> bool {
        event.event_type == CaseEventType::Postponement
    }

    fn can_schedule(&self, _event: &CaseEvent) -> bool {
        true
    }

    async fn handle(&self, event: &CaseEvent, ctx: &NotifierContext) -> Result<(), ReminderError> {
        if !self.can_handle(event) {
            return Err(ReminderError::UnsupportedEvent(event.event_type));
        }

        let case_id = event.case_id();
        let group = job_group::generate(case_id, CaseEventType::HearingReminder.id());
        let removed = ctx.repos.jobs.delete_by_group(&group).await?;

        info!(
            "Removed {} hearing reminder job(s) for case: {}",
            removed.deleted_count, case_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use appeals_notifier_domain::Job;
    use chrono::{TimeZone, Utc};

    async fn schedule(ctx: &NotifierContext, group: &str) {
        ctx.repos
            .jobs
            .schedule(&Job {
                group: group.into(),
                name: "hearingReminder".into(),
                payload: "123456".into(),
                trigger_at: Utc.timestamp(1000, 0),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn removes_the_hearing_reminder_group_only() {
        let ctx = NotifierContext::create_inmemory();
        schedule(&ctx, "123456_hearingReminder").await;
        schedule(&ctx, "123456_evidenceReminder").await;

        let event = case_event(CaseEventType::Postponement, oral_case("123456"));
        HearingReminderRemover::new().handle(&event, &ctx).await.unwrap();

        assert!(ctx
            .repos
            .jobs
            .find_by_group("123456_hearingReminder")
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            ctx.repos
                .jobs
                .find_by_group("123456_evidenceReminder")
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn nothing_scheduled_is_still_a_success() {
        let ctx = NotifierContext::create_inmemory();
        let event = case_event(CaseEventType::Postponement, oral_case("123456"));

        assert!(HearingReminderRemover::new()
            .handle(&event, &ctx)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn rejects_events_it_does_not_own() {
        let ctx = NotifierContext::create_inmemory();
        let event = case_event(CaseEventType::HearingBooked, oral_case("123456"));

        assert!(!HearingReminderRemover::new().can_handle(&event));
        let err = HearingReminderRemover::new()
            .handle(&event, &ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, ReminderError::UnsupportedEvent(_)));
    }
}
