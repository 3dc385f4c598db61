use appeals_notifier_domain::{HearingRequest, HearingRoute};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// A request wrapped for the transport. Same-session messages end up on
/// one ordered lane; the transport keys that lane off `session_id` and
/// routes off `partition_key`. Both carry the case id here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMessage {
    pub session_id: String,
    pub partition_key: String,
    pub body: String,
}

/// The ordered channel the messaging service emits onto. The real
/// transport lives outside this service; in tests and local runs an
/// in-process channel stands in for it.
#[async_trait::async_trait]
pub trait ISessionSink: Send + Sync {
    async fn emit(&self, message: SessionMessage) -> anyhow::Result<()>;
}

/// In-process session sink over an unbounded channel. A single channel
/// is already an ordered lane, which is all the ordering contract
/// requires from the producer side.
pub struct ChannelSessionSink {
    tx: mpsc::UnboundedSender<SessionMessage>,
}

impl ChannelSessionSink {
    pub fn create() -> (Self, mpsc::UnboundedReceiver<SessionMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait::async_trait]
impl ISessionSink for ChannelSessionSink {
    async fn emit(&self, message: SessionMessage) -> anyhow::Result<()> {
        self.tx
            .send(message)
            .map_err(|e| anyhow::anyhow!("session channel closed: {}", e))
    }
}

/// Emits hearing requests for the listing system. Emission failure is
/// reported as `false`, never as a panic or error, so callers can treat
/// it like any other recoverable fault.
#[async_trait::async_trait]
pub trait IHearingMessagingService: Send + Sync {
    async fn send_message(&self, request: HearingRequest) -> bool;
}

pub struct SessionAwareMessagingService {
    sink: Arc<dyn ISessionSink>,
}

impl SessionAwareMessagingService {
    pub fn new(sink: Arc<dyn ISessionSink>) -> Self {
        Self { sink }
    }
}

#[async_trait::async_trait]
impl IHearingMessagingService for SessionAwareMessagingService {
    async fn send_message(&self, request: HearingRequest) -> bool {
        let body = match serde_json::to_string(&request) {
            Ok(body) => body,
            Err(e) => {
                error!(
                    "Unable to serialize hearing request for case: {}. Err: {:?}",
                    request.ccd_case_id, e
                );
                return false;
            }
        };

        let message = SessionMessage {
            session_id: request.session_id().to_string(),
            partition_key: request.partition_key().to_string(),
            body,
        };

        match self.sink.emit(message).await {
            Ok(()) => {
                info!(
                    "Sent {:?} hearing request for case: {}",
                    request.hearing_state, request.ccd_case_id
                );
                true
            }
            Err(e) => {
                error!(
                    "Unable to emit hearing request for case: {}. Err: {:?}",
                    request.ccd_case_id, e
                );
                false
            }
        }
    }
}

/// Substituted when the route does not consume hearing requests.
pub struct NoOpMessagingService;

#[async_trait::async_trait]
impl IHearingMessagingService for NoOpMessagingService {
    async fn send_message(&self, _request: HearingRequest) -> bool {
        true
    }
}

/// Picks the messaging service for a scheduling route. Only list-assist
/// cases flow through the session-aware channel.
pub struct MessagingServiceFactory {
    session_aware: Arc<dyn IHearingMessagingService>,
    noop: Arc<dyn IHearingMessagingService>,
}

impl MessagingServiceFactory {
    pub fn new(sink: Arc<dyn ISessionSink>) -> Self {
        Self {
            session_aware: Arc::new(SessionAwareMessagingService::new(sink)),
            noop: Arc::new(NoOpMessagingService),
        }
    }

    pub fn for_route(&self, route: HearingRoute) -> Arc<dyn IHearingMessagingService> {
        match route {
            HearingRoute::ListAssist => self.session_aware.clone(),
            HearingRoute::Gaps => self.noop.clone(),
        }
    }
}
