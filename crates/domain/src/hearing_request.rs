use crate::HearingRoute;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HearingState {
    CreateHearing,
    UpdateHearing,
    CancelHearing,
}

/// Outbound request for the listing system. The case id doubles as the
/// session and partition key so that the transport serializes requests
/// for one case while different cases flow in parallel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HearingRequest {
    pub ccd_case_id: String,
    pub hearing_route: HearingRoute,
    pub hearing_state: HearingState,
}

impl HearingRequest {
    pub fn new(ccd_case_id: impl Into<String>, route: HearingRoute, state: HearingState) -> Self {
        Self {
            ccd_case_id: ccd_case_id.into(),
            hearing_route: route,
            hearing_state: state,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.ccd_case_id
    }

    pub fn partition_key(&self) -> &str {
        &self.ccd_case_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_case_requests_share_session_and_partition_keys() {
        let first = HearingRequest::new("1001", HearingRoute::ListAssist, HearingState::CreateHearing);
        let second = HearingRequest::new("1001", HearingRoute::ListAssist, HearingState::UpdateHearing);

        assert_eq!(first.session_id(), second.session_id());
        assert_eq!(first.partition_key(), second.partition_key());
        assert_eq!(first.session_id(), first.partition_key());
    }

    #[test]
    fn different_cases_get_independent_keys() {
        let a = HearingRequest::new("1001", HearingRoute::ListAssist, HearingState::CreateHearing);
        let b = HearingRequest::new("2002", HearingRoute::ListAssist, HearingState::CreateHearing);
        assert_ne!(a.session_id(), b.session_id());
    }
}
