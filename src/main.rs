mod telemetry;

use appeals_notifier_api::Application;
use appeals_notifier_infra::{setup_context, ChannelSessionSink, RestCasePipeline};
use std::sync::Arc;
use telemetry::{get_subscriber, init_subscriber};
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("appeals_notifier_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    let pipeline = Arc::new(RestCasePipeline::new(context.config.casework_url.clone()));
    let (session_sink, mut outbound) = ChannelSessionSink::create();

    // Stand-in consumer until the deployment wires the real transport
    // onto the session channel.
    actix_web::rt::spawn(async move {
        while let Some(message) = outbound.recv().await {
            info!(
                "Outbound hearing request for session: {}",
                message.session_id
            );
        }
    });

    let app = Application::new(context, pipeline, Arc::new(session_sink)).await?;
    app.start().await
}
