use super::ProcessingError;
use crate::reminders::ReminderService;
use crate::shared::usecase::{Subscriber, UseCase};
use appeals_notifier_domain::{CaseEvent, CaseEventType, HearingRequest, HearingState};
use appeals_notifier_infra::{
    ICasePipeline, MessagingServiceFactory, NotifierContext, SecondaryNotificationClient,
};
use std::sync::Arc;

/// One processing attempt for one lifecycle event: the downstream case
/// pipeline, the reminder dispatch and, for cases entering listing, the
/// hearing request. The retry envelope re-runs the whole use case, so
/// every step here must stay safe to repeat.
pub struct ProcessCaseEventUseCase {
    pub event: CaseEvent,
    pub pipeline: Arc<dyn ICasePipeline>,
    pub messaging: Arc<MessagingServiceFactory>,
    pub reminders: Arc<ReminderService>,
}

impl std::fmt::Debug for ProcessCaseEventUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessCaseEventUseCase")
            .field("event_type", &self.event.event_type)
            .field("case_id", &self.event.case_id())
            .finish()
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ProcessCaseEventUseCase {
    type Response = CaseEvent;

    type Errors = ProcessingError;

    async fn execute(&mut self, ctx: &NotifierContext) -> Result<Self::Response, Self::Errors> {
        self.pipeline.handle(&self.event).await?;

        self.reminders.schedule_reminders(&self.event, ctx).await?;
        self.reminders.remove_reminders(&self.event, ctx).await?;

        if self.event.event_type == CaseEventType::ReadyToList {
            let route = self.event.new_case.hearing_route;
            let request =
                HearingRequest::new(self.event.case_id(), route, HearingState::CreateHearing);
            let sent = self.messaging.for_route(route).send_message(request).await;
            if !sent {
                return Err(ProcessingError::HearingRequestFailed(
                    self.event.case_id().to_string(),
                ));
            }
        }

        Ok(self.event.clone())
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SecondaryNotificationSubscriber)]
    }
}

/// Mirrors successfully processed events to the secondary notification
/// path. Best effort only; a failure here is logged inside the client
/// and never rolls back the primary outcome.
pub struct SecondaryNotificationSubscriber;

#[async_trait::async_trait(?Send)]
impl Subscriber<ProcessCaseEventUseCase> for SecondaryNotificationSubscriber {
    async fn notify(&self, event: &CaseEvent, ctx: &NotifierContext) {
        SecondaryNotificationClient::new(ctx.config.secondary_notify_url.clone())
            .publish(event)
            .await;
    }
}
