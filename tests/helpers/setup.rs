use appeals_notifier_api::{Application, InboundMessage};
use appeals_notifier_domain::{CaseEvent, PipelineError};
use appeals_notifier_infra::{ChannelSessionSink, ICasePipeline, NotifierContext, SessionMessage};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct TestApp {
    pub ctx: NotifierContext,
    pub address: String,
    pub inbound: mpsc::UnboundedSender<InboundMessage>,
    pub outbound: mpsc::UnboundedReceiver<SessionMessage>,
}

/// Stands in for the out-of-process casework service.
struct AcceptAllPipeline;

#[async_trait::async_trait]
impl ICasePipeline for AcceptAllPipeline {
    async fn handle(&self, _event: &CaseEvent) -> Result<(), PipelineError> {
        Ok(())
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> TestApp {
    let mut ctx = NotifierContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let (session_sink, outbound) = ChannelSessionSink::create();
    let application = Application::new(
        ctx.clone(),
        Arc::new(AcceptAllPipeline),
        Arc::new(session_sink),
    )
    .await
    .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let inbound = application.inbound_sender();
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        ctx,
        address,
        inbound,
        outbound,
    }
}
