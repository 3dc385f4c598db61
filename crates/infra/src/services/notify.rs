use appeals_notifier_domain::CaseEvent;
use tracing::error;

/// Best-effort secondary notification path. Successfully processed
/// events are mirrored to a webhook for downstream listeners; a failure
/// here must never affect the primary processing outcome, so it is only
/// logged.
pub struct SecondaryNotificationClient {
    url: Option<String>,
    client: reqwest::Client,
}

impl SecondaryNotificationClient {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn publish(&self, event: &CaseEvent) {
        let url = match &self.url {
            Some(url) => url,
            None => return,
        };

        if let Err(e) = self.client.post(url).json(event).send().await {
            error!(
                "Unable to publish {} event for case: {} to secondary path: {:?}",
                event.event_type,
                event.case_id(),
                e
            );
        }
    }
}
