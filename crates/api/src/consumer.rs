use crate::processor::CallbackProcessor;
use std::sync::Arc;
use tokio::sync::mpsc;

/// One raw message handed over by the queue runtime.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub payload: String,
    pub partition_key: String,
}

/// Drains the inbound queue and hands every message to the callback
/// processor. Each message is an independent unit of work, so each one
/// gets its own task; a failed case never blocks the next one.
pub fn start_event_consumer(
    processor: Arc<CallbackProcessor>,
    mut inbound: mpsc::UnboundedReceiver<InboundMessage>,
) {
    actix_web::rt::spawn(async move {
        while let Some(message) = inbound.recv().await {
            let processor = processor.clone();
            actix_web::rt::spawn(async move {
                // Terminal failures are already logged by the processor.
                let _ = processor
                    .on_message(&message.payload, &message.partition_key)
                    .await;
            });
        }
    });
}
