use super::{ReminderError, ReminderHandler};
use appeals_notifier_domain::{job_group, CaseEvent, CaseEventType};
use appeals_notifier_infra::NotifierContext;
use tracing::info;

const TERMINAL_EVENTS: [CaseEventType; 6] = [
    CaseEventType::AppealLapsed,
    CaseEventType::AppealWithdrawn,
    CaseEventType::AdminAppealWithdrawn,
    CaseEventType::AppealDormant,
    CaseEventType::DecisionIssued,
    CaseEventType::StruckOut,
];

// These terminal events get their reminder cleanup through other paths
// and must stay out of this handler.
const EXCLUDED_EVENTS: [CaseEventType; 5] = [
    CaseEventType::AppealLapsed,
    CaseEventType::AppealWithdrawn,
    CaseEventType::AdminAppealWithdrawn,
    CaseEventType::AppealDormant,
    CaseEventType::DecisionIssued,
];

/// Drops every outstanding reminder once a case reaches a terminal
/// state that no longer needs any of them.
pub struct RemindersRemover;

impl RemindersRemover {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RemindersRemover {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ReminderHandler for RemindersRemover {
    fn can_handle(&self, event: &CaseEvent) -> bool {
        TERMINAL_EVENTS.contains(&event.event_type)
            && !EXCLUDED_EVENTS.contains(&event.event_type)
    }

    fn can_schedule(&self, _event: &CaseEvent) -> bool {
        true
    }

    async fn handle(&self, event: &CaseEvent, ctx: &NotifierContext) -> Result<(), ReminderError> {
        if !self.can_handle(event) {
            return Err(ReminderError::UnsupportedEvent(event.event_type));
        }

        let case_id = event.case_id();
        for reminder in [CaseEventType::HearingReminder, CaseEventType::EvidenceReminder] {
            let group = job_group::generate(case_id, reminder.id());
            ctx.repos.jobs.delete_by_group(&group).await?;
        }

        info!(
            "Removed all reminders for case: {} on {} event",
            case_id, event.event_type
        );
        Ok(())
    }
}
