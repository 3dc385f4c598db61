use crate::CaseDetails;
use serde::{Deserialize, Serialize};

/// Tag for everything that can happen to an appeal during its lifetime
/// and that the notifier reacts to. The `id` values are the stable wire
/// identifiers used in payloads and job names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseEventType {
    AppealReceived,
    DwpResponseReceived,
    DwpUploadResponse,
    EvidenceReceived,
    HearingBooked,
    Postponement,
    ReadyToList,
    AppealLapsed,
    AppealWithdrawn,
    AdminAppealWithdrawn,
    AppealDormant,
    DecisionIssued,
    StruckOut,
    EvidenceReminder,
    HearingReminder,
}

impl CaseEventType {
    pub fn id(&self) -> &'static str {
        match self {
            Self::AppealReceived => "appealReceived",
            Self::DwpResponseReceived => "dwpResponseReceived",
            Self::DwpUploadResponse => "dwpUploadResponse",
            Self::EvidenceReceived => "evidenceReceived",
            Self::HearingBooked => "hearingBooked",
            Self::Postponement => "postponement",
            Self::ReadyToList => "readyToList",
            Self::AppealLapsed => "appealLapsed",
            Self::AppealWithdrawn => "appealWithdrawn",
            Self::AdminAppealWithdrawn => "adminAppealWithdrawn",
            Self::AppealDormant => "appealDormant",
            Self::DecisionIssued => "decisionIssued",
            Self::StruckOut => "struckOut",
            Self::EvidenceReminder => "evidenceReminder",
            Self::HearingReminder => "hearingReminder",
        }
    }
}

impl std::fmt::Display for CaseEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// One lifecycle event for one case: what happened, the case data as it
/// is now and, when the platform supplies it, as it was before.
/// Consumed read-only by every handler in a single dispatch pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseEvent {
    pub event_type: CaseEventType,
    pub new_case: CaseDetails,
    pub old_case: Option<CaseDetails>,
}

impl CaseEvent {
    pub fn case_id(&self) -> &str {
        &self.new_case.ccd_case_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ids_match_wire_format() {
        assert_eq!(CaseEventType::HearingBooked.id(), "hearingBooked");
        assert_eq!(CaseEventType::EvidenceReminder.id(), "evidenceReminder");
        assert_eq!(
            serde_json::to_string(&CaseEventType::DwpUploadResponse).unwrap(),
            "\"dwpUploadResponse\""
        );
    }

    #[test]
    fn event_ids_round_trip_through_serde() {
        let t: CaseEventType = serde_json::from_str("\"adminAppealWithdrawn\"").unwrap();
        assert_eq!(t, CaseEventType::AdminAppealWithdrawn);
    }
}
