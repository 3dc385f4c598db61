mod case_details;
mod case_event;
mod error;
mod hearing_request;
mod job;
pub mod job_group;

pub use case_details::{CaseDetails, Hearing, HearingRoute, HearingType};
pub use case_event::{CaseEvent, CaseEventType};
pub use error::PipelineError;
pub use hearing_request::{HearingRequest, HearingState};
pub use job::Job;
