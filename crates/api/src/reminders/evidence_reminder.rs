use super::{ReminderError, ReminderHandler};
use appeals_notifier_domain::{job_group, CaseEvent, CaseEventType, Job};
use appeals_notifier_infra::NotifierContext;
use chrono::Duration;
use tracing::info;

const HANDLED_EVENTS: [CaseEventType; 2] = [
    CaseEventType::DwpResponseReceived,
    CaseEventType::DwpUploadResponse,
];

/// Reminds the appellant to submit further evidence a fixed delay after
/// the DWP response arrived.
pub struct EvidenceReminder {
    delay_seconds: i64,
}

impl EvidenceReminder {
    pub fn new(delay_seconds: i64) -> Self {
        Self { delay_seconds }
    }
}

#[async_trait::async_trait]
impl ReminderHandler for EvidenceReminder {
    fn can_handle(&self, event: &CaseEvent) -> bool {
        HANDLED_EVENTS.contains(&event.event_type)
    }

    fn can_schedule(&self, event: &CaseEvent) -> bool {
        event.new_case.dwp_response_date.is_some()
    }

    async fn handle(&self, event: &CaseEvent, ctx: &NotifierContext) -> Result<(), ReminderError> {
        if !self.can_handle(event) {
            return Err(ReminderError::UnsupportedEvent(event.event_type));
        }

        let response_date = match event.new_case.dwp_response_date {
            Some(date) => date,
            None => return Ok(()),
        };

        let case_id = event.case_id();
        let reminder_id = CaseEventType::EvidenceReminder.id();
        let job = Job {
            group: job_group::generate(case_id, reminder_id),
            name: reminder_id.to_string(),
            payload: case_id.to_string(),
            trigger_at: response_date + Duration::seconds(self.delay_seconds),
        };
        ctx.repos.jobs.schedule(&job).await?;

        info!(
            "Scheduled evidence reminder for case: {} at {}",
            case_id, job.trigger_at
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use chrono::{TimeZone, Utc};

    fn handler() -> EvidenceReminder {
        EvidenceReminder::new(60 * 60 * 24 * 2)
    }

    #[tokio::test]
    async fn schedules_one_job_after_the_response_date() {
        let ctx = NotifierContext::create_inmemory();
        let mut case = oral_case("123456");
        case.dwp_response_date = Some(Utc.ymd(2018, 1, 1).and_hms(12, 0, 0));
        let event = case_event(CaseEventType::DwpResponseReceived, case);

        assert!(handler().can_handle(&event));
        assert!(handler().can_schedule(&event));
        handler().handle(&event, &ctx).await.unwrap();

        let jobs = ctx
            .repos
            .jobs
            .find_by_group("123456_evidenceReminder")
            .await
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].name, "evidenceReminder");
        assert_eq!(jobs[0].payload, "123456");
        assert_eq!(jobs[0].trigger_at, Utc.ymd(2018, 1, 3).and_hms(12, 0, 0));
    }

    #[tokio::test]
    async fn missing_response_date_schedules_nothing_and_does_not_error() {
        let ctx = NotifierContext::create_inmemory();
        let event = case_event(CaseEventType::DwpUploadResponse, oral_case("123456"));

        assert!(handler().can_handle(&event));
        assert!(!handler().can_schedule(&event));
        handler().handle(&event, &ctx).await.unwrap();

        assert!(ctx
            .repos
            .jobs
            .find_by_group("123456_evidenceReminder")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn rejects_events_it_does_not_own() {
        let ctx = NotifierContext::create_inmemory();
        let event = case_event(CaseEventType::HearingBooked, oral_case("123456"));

        assert!(!handler().can_handle(&event));
        let err = handler().handle(&event, &ctx).await.unwrap_err();
        assert!(matches!(err, ReminderError::UnsupportedEvent(_)));
    }
}
