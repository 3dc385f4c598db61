use thiserror::Error;

/// Faults the downstream case-processing pipeline can raise. The retry
/// envelope classifies these; the split between business faults and
/// infrastructure faults is what decides whether an attempt repeats.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("notification already issued for case: {0}")]
    AlreadyIssued(String),
    #[error("post-processing task failed for case: {0}")]
    PostProcessingFailed(String),
    #[error("case store unavailable: {0}")]
    Store(String),
    #[error("auth token fault: {0}")]
    Auth(String),
    #[error("third party contact fault: {0}")]
    ThirdParty(String),
    #[error("unexpected runtime fault: {0}")]
    Unexpected(String),
}
