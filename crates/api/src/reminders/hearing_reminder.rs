use super::{ReminderError, ReminderHandler};
use appeals_notifier_domain::{job_group, CaseEvent, CaseEventType, HearingType, Job};
use appeals_notifier_infra::NotifierContext;
use chrono::Duration;
use tracing::info;

/// Schedules the two nudges ahead of an oral hearing. Paper cases are
/// decided without the appellant attending and never get these.
pub struct HearingReminder {
    before_first_seconds: i64,
    before_second_seconds: i64,
}

impl HearingReminder {
    pub fn new(before_first_seconds: i64, before_second_seconds: i64) -> Self {
        Self {
            before_first_seconds,
            before_second_seconds,
        }
    }
}

#[async_trait::async_trait]
impl ReminderHandler for HearingReminder {
    fn can_handle(&self, event: &CaseEvent) -> bool {
        event.event_type == CaseEventType::HearingBooked
    }

    fn can_schedule(&self, event: &CaseEvent) -> bool {
        event.new_case.hearing_type == HearingType::Oral
            && event.new_case.latest_hearing().is_some()
    }

    async fn handle(&self, event: &CaseEvent, ctx: &NotifierContext) -> Result<(), ReminderError> {
        if !self.can_handle(event) {
            return Err(ReminderError::UnsupportedEvent(event.event_type));
        }
        if event.new_case.hearing_type != HearingType::Oral {
            return Ok(());
        }

        let hearing_date = match event.new_case.latest_hearing() {
            Some(hearing) => hearing.hearing_date_time,
            None => return Ok(()),
        };

        let case_id = event.case_id();
        let reminder_id = CaseEventType::HearingReminder.id();
        let group = job_group::generate(case_id, reminder_id);

        // Two independent jobs, nearest offset first, sharing one group
        // so a postponement cancels both.
        for offset in [self.before_first_seconds, self.before_second_seconds] {
            let job = Job {
                group: group.clone(),
                name: reminder_id.to_string(),
                payload: case_id.to_string(),
                trigger_at: hearing_date - Duration::seconds(offset),
            };
            ctx.repos.jobs.schedule(&job).await?;
        }

        info!(
            "Scheduled hearing reminders for case: {} ahead of hearing at {}",
            case_id, hearing_date
        );
        Ok(())
    }
}
