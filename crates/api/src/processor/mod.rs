mod process_case_event;

use crate::reminders::{ReminderError, ReminderService};
use crate::shared::usecase::execute;
use appeals_notifier_domain::{CaseEvent, PipelineError};
use appeals_notifier_infra::{ICasePipeline, MessagingServiceFactory, NotifierContext};
pub use process_case_event::ProcessCaseEventUseCase;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("unable to deserialize case event payload: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Reminder(#[from] ReminderError),
    #[error("hearing request emission failed for case: {0}")]
    HearingRequestFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryClass {
    /// Another attempt cannot change the outcome; log once and drop.
    NoRetry,
    /// Transient fault; attempt again up to the configured maximum.
    Retry,
}

/// Single classification point for the retry policy. Business faults
/// and contract violations are final; everything else is assumed
/// transient.
pub fn classify(err: &ProcessingError) -> RetryClass {
    match err {
        ProcessingError::Pipeline(PipelineError::AlreadyIssued(_))
        | ProcessingError::Pipeline(PipelineError::PostProcessingFailed(_))
        | ProcessingError::Reminder(ReminderError::UnsupportedEvent(_)) => RetryClass::NoRetry,
        _ => RetryClass::Retry,
    }
}

/// Envelope around one inbound message: deserialize, run the case
/// pipeline and the reminder dispatch, classify failures and retry
/// where that can help. Terminal on the first of success, a
/// non-retryable fault or exhausted attempts.
pub struct CallbackProcessor {
    ctx: NotifierContext,
    pipeline: Arc<dyn ICasePipeline>,
    messaging: Arc<MessagingServiceFactory>,
    reminders: Arc<ReminderService>,
}

impl CallbackProcessor {
    pub fn new(
        ctx: NotifierContext,
        pipeline: Arc<dyn ICasePipeline>,
        messaging: Arc<MessagingServiceFactory>,
    ) -> Self {
        let reminders = Arc::new(ReminderService::new(&ctx.config));
        Self {
            ctx,
            pipeline,
            messaging,
            reminders,
        }
    }

    pub async fn on_message(
        &self,
        raw_payload: &str,
        partition_key: &str,
    ) -> Result<(), ProcessingError> {
        let event: CaseEvent = match serde_json::from_str(raw_payload) {
            Ok(event) => event,
            Err(e) => {
                error!(
                    "Unable to deserialize inbound message for partition: {}. Err: {:?}",
                    partition_key, e
                );
                return Err(e.into());
            }
        };

        let max_attempts = self.ctx.config.max_retry_attempts.max(1);
        let mut attempts = 0;
        loop {
            attempts += 1;

            let usecase = ProcessCaseEventUseCase {
                event: event.clone(),
                pipeline: self.pipeline.clone(),
                messaging: self.messaging.clone(),
                reminders: self.reminders.clone(),
            };

            let err = match execute(usecase, &self.ctx).await {
                Ok(_) => return Ok(()),
                Err(err) => err,
            };

            match classify(&err) {
                RetryClass::NoRetry => {
                    warn!(
                        "Dropping {} event for case: {} after non-retryable fault: {:?}",
                        event.event_type,
                        event.case_id(),
                        err
                    );
                    return Ok(());
                }
                RetryClass::Retry if attempts < max_attempts => {
                    warn!(
                        "Attempt {}/{} failed for {} event, case: {}. Retrying. Err: {:?}",
                        attempts,
                        max_attempts,
                        event.event_type,
                        event.case_id(),
                        err
                    );
                }
                RetryClass::Retry => {
                    error!(
                        "Unable to process {} event for case: {} after {} attempts. Err: {:?}",
                        event.event_type,
                        event.case_id(),
                        attempts,
                        err
                    );
                    return Err(err);
                }
            }
        }
    }
}
