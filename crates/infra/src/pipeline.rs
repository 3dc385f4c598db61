use appeals_notifier_domain::{CaseEvent, PipelineError};
use reqwest::StatusCode;

/// The downstream case-processing pipeline. The casework itself lives
/// in another service; the notifier only needs to invoke it and to
/// classify whatever it throws.
#[async_trait::async_trait]
pub trait ICasePipeline: Send + Sync {
    async fn handle(&self, event: &CaseEvent) -> Result<(), PipelineError>;
}

/// Forwards events to the casework service over HTTP and maps its
/// responses onto the pipeline fault taxonomy.
pub struct RestCasePipeline {
    base_url: String,
    client: reqwest::Client,
}

impl RestCasePipeline {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ICasePipeline for RestCasePipeline {
    async fn handle(&self, event: &CaseEvent) -> Result<(), PipelineError> {
        let url = format!("{}/case-events", self.base_url);
        let res = self
            .client
            .post(&url)
            .json(event)
            .send()
            .await
            .map_err(|e| PipelineError::ThirdParty(e.to_string()))?;

        match res.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(PipelineError::AlreadyIssued(event.case_id().to_string())),
            StatusCode::UNPROCESSABLE_ENTITY => Err(PipelineError::PostProcessingFailed(
                event.case_id().to_string(),
            )),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(PipelineError::Auth(format!("status {}", res.status())))
            }
            status if status.is_server_error() => {
                Err(PipelineError::Store(format!("status {}", status)))
            }
            status => Err(PipelineError::Unexpected(format!("status {}", status))),
        }
    }
}
