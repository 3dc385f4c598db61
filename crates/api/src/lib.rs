mod consumer;
mod processor;
mod reminders;
mod shared;
mod status;

use actix_web::{dev::Server, middleware, web, App, HttpServer};
use appeals_notifier_infra::{ICasePipeline, ISessionSink, MessagingServiceFactory, NotifierContext};
pub use consumer::{start_event_consumer, InboundMessage};
pub use processor::{classify, CallbackProcessor, ProcessingError, RetryClass};
pub use reminders::{
    EvidenceReminder, HearingReminder, HearingReminderRemover, ReminderError, ReminderHandler,
    ReminderService, RemindersRemover,
};
use std::net::TcpListener;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
    inbound: mpsc::UnboundedSender<InboundMessage>,
}

impl Application {
    pub async fn new(
        context: NotifierContext,
        pipeline: Arc<dyn ICasePipeline>,
        session_sink: Arc<dyn ISessionSink>,
    ) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;

        let messaging = Arc::new(MessagingServiceFactory::new(session_sink));
        let processor = Arc::new(CallbackProcessor::new(context, pipeline, messaging));
        let (inbound, inbound_rx) = mpsc::unbounded_channel();
        start_event_consumer(processor, inbound_rx);

        Ok(Self {
            server,
            port,
            inbound,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Queue-runtime side of the consumer. Everything pushed here goes
    /// through the retry envelope.
    pub fn inbound_sender(&self) -> mpsc::UnboundedSender<InboundMessage> {
        self.inbound.clone()
    }

    async fn configure_server(context: NotifierContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr().unwrap().port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
