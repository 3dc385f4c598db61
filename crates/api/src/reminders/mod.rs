mod evidence_reminder;
mod hearing_reminder;
mod hearing_reminder_remover;
mod reminders_remover;

use appeals_notifier_domain::{CaseEvent, CaseEventType};
use appeals_notifier_infra::{Config, NotifierContext};
pub use evidence_reminder::EvidenceReminder;
pub use hearing_reminder::HearingReminder;
pub use hearing_reminder_remover::HearingReminderRemover;
pub use reminders_remover::RemindersRemover;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ReminderError {
    /// The handler was invoked for an event it does not own. This is a
    /// caller bug, not a runtime condition, and is raised immediately.
    #[error("handler cannot handle event: {0}")]
    UnsupportedEvent(CaseEventType),
    #[error("job store failure: {0}")]
    Store(#[from] anyhow::Error),
}

/// One reminder strategy. `can_handle` is about event ownership,
/// `can_schedule` about data availability; both must be side-effect
/// free. Only `handle` touches the job store.
#[async_trait::async_trait]
pub trait ReminderHandler: Send + Sync {
    fn can_handle(&self, event: &CaseEvent) -> bool;
    /// False, never an error, when the data needed to compute a trigger
    /// time is simply absent.
    fn can_schedule(&self, event: &CaseEvent) -> bool;
    async fn handle(&self, event: &CaseEvent, ctx: &NotifierContext) -> Result<(), ReminderError>;
}

/// Evaluates the registered handlers against one lifecycle event and
/// invokes every owner that is also able to schedule. A handler that
/// owns the event but cannot schedule is skipped silently; a handler
/// fault propagates unchanged to the caller.
pub struct ReminderService {
    schedulers: Vec<Box<dyn ReminderHandler>>,
    removers: Vec<Box<dyn ReminderHandler>>,
}

impl ReminderService {
    pub fn new(config: &Config) -> Self {
        Self {
            schedulers: vec![
                Box::new(EvidenceReminder::new(config.evidence_reminder_delay)),
                Box::new(HearingReminder::new(
                    config.hearing_reminder_before_first,
                    config.hearing_reminder_before_second,
                )),
            ],
            removers: vec![
                Box::new(HearingReminderRemover::new()),
                Box::new(RemindersRemover::new()),
            ],
        }
    }

    pub async fn schedule_reminders(
        &self,
        event: &CaseEvent,
        ctx: &NotifierContext,
    ) -> Result<(), ReminderError> {
        Self::dispatch(&self.schedulers, event, ctx).await
    }

    pub async fn remove_reminders(
        &self,
        event: &CaseEvent,
        ctx: &NotifierContext,
    ) -> Result<(), ReminderError> {
        Self::dispatch(&self.removers, event, ctx).await
    }

    async fn dispatch(
        handlers: &[Box<dyn ReminderHandler>],
        event: &CaseEvent,
        ctx: &NotifierContext,
    ) -> Result<(), ReminderError> {
        for handler in handlers {
            if !handler.can_handle(event) {
                continue;
            }
            if !handler.can_schedule(event) {
                debug!(
                    "Handler owns {} event for case: {} but has nothing to schedule",
                    event.event_type,
                    event.case_id()
                );
                continue;
            }
            handler.handle(event, ctx).await?;
        }
        Ok(())
    }
}
