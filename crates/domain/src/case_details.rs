use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the appeal is going to be decided. Paper cases are decided on
/// the written evidence alone and never get hearing reminders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HearingType {
    Oral,
    Paper,
}

/// Which listing system the case is routed through. `Gaps` cases are
/// listed by the legacy system which does not consume hearing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HearingRoute {
    ListAssist,
    Gaps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub hearing_id: String,
    pub hearing_date_time: DateTime<Utc>,
}

/// Immutable snapshot of the case data relevant to reminder decisions.
/// Supplied by the case platform on every lifecycle event and never
/// mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetails {
    pub ccd_case_id: String,
    pub hearing_type: HearingType,
    pub hearing_route: HearingRoute,
    #[serde(default)]
    pub hearings: Vec<Hearing>,
    pub dwp_response_date: Option<DateTime<Utc>>,
}

impl CaseDetails {
    /// The most recently listed hearing, if any. Reminder offsets are
    /// always computed against this one.
    pub fn latest_hearing(&self) -> Option<&Hearing> {
        self.hearings.iter().max_by_key(|h| h.hearing_date_time)
    }
}
