use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Seconds after the DWP response date at which the evidence
    /// reminder fires
    pub evidence_reminder_delay: i64,
    /// Seconds before the hearing at which the first hearing reminder
    /// fires
    pub hearing_reminder_before_first: i64,
    /// Seconds before the hearing at which the second hearing reminder
    /// fires. Always the larger offset, so the second job triggers
    /// earlier in wall-clock time.
    pub hearing_reminder_before_second: i64,
    /// How many times one inbound message is attempted before it is
    /// surfaced as a terminal failure
    pub max_retry_attempts: usize,
    /// Webhook for the best-effort secondary notification path
    pub secondary_notify_url: Option<String>,
    /// Base url of the casework service the processor forwards events to
    pub casework_url: String,
}

fn env_i64(name: &str, default: i64) -> i64 {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    match raw.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                name, raw, default
            );
            default
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let secondary_notify_url = match std::env::var("SECONDARY_NOTIFY_URL") {
            Ok(url) => Some(url),
            Err(_) => {
                info!("Did not find SECONDARY_NOTIFY_URL environment variable. Secondary notifications are disabled.");
                None
            }
        };

        let default_casework_url = "http://localhost:8080";
        let casework_url = match std::env::var("CASEWORK_URL") {
            Ok(url) => url,
            Err(_) => {
                info!(
                    "Did not find CASEWORK_URL environment variable. Falling back to: {}.",
                    default_casework_url
                );
                default_casework_url.to_string()
            }
        };

        Self {
            port,
            casework_url,
            evidence_reminder_delay: env_i64("EVIDENCE_REMINDER_DELAY", 60 * 60 * 24 * 2),
            hearing_reminder_before_first: env_i64("HEARING_REMINDER_BEFORE_FIRST", 60 * 60 * 24 * 2),
            hearing_reminder_before_second: env_i64(
                "HEARING_REMINDER_BEFORE_SECOND",
                60 * 60 * 24 * 4,
            ),
            max_retry_attempts: env_i64("MAX_RETRY_ATTEMPTS", 3) as usize,
            secondary_notify_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
