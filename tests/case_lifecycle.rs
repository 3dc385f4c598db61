mod helpers;

use appeals_notifier_api::InboundMessage;
use appeals_notifier_domain::{
    CaseDetails, CaseEvent, CaseEventType, Hearing, HearingRoute, HearingType,
};
use chrono::{TimeZone, Utc};
use chrono_tz::Europe::London;
use helpers::setup::spawn_app;
use helpers::utils::wait_for_job_count;

fn oral_case(case_id: &str) -> CaseDetails {
    CaseDetails {
        ccd_case_id: case_id.into(),
        hearing_type: HearingType::Oral,
        hearing_route: HearingRoute::ListAssist,
        hearings: Vec::new(),
        dwp_response_date: None,
    }
}

fn message(event_type: CaseEventType, case: CaseDetails) -> InboundMessage {
    let partition_key = case.ccd_case_id.clone();
    let event = CaseEvent {
        event_type,
        new_case: case,
        old_case: None,
    };
    InboundMessage {
        payload: serde_json::to_string(&event).unwrap(),
        partition_key,
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let app = spawn_app().await;
    let res = reqwest::get(&format!("{}/api/v1/", app.address))
        .await
        .expect("Expected status response");
    assert!(res.status().is_success());
}

#[actix_web::main]
#[test]
async fn hearing_booked_schedules_and_postponement_cancels() {
    let app = spawn_app().await;

    let mut case = oral_case("123456");
    case.hearings.push(Hearing {
        hearing_id: "h1".into(),
        hearing_date_time: London
            .ymd(2018, 1, 1)
            .and_hms(14, 1, 18)
            .with_timezone(&Utc),
    });

    app.inbound
        .send(message(CaseEventType::HearingBooked, case.clone()))
        .unwrap();
    wait_for_job_count(&app.ctx, "123456_hearingReminder", 2).await;

    let jobs = app
        .ctx
        .repos
        .jobs
        .find_by_group("123456_hearingReminder")
        .await
        .unwrap();
    assert_eq!(
        jobs[0].trigger_at,
        London.ymd(2017, 12, 30).and_hms(14, 1, 18).with_timezone(&Utc)
    );
    assert_eq!(
        jobs[1].trigger_at,
        London.ymd(2017, 12, 28).and_hms(14, 1, 18).with_timezone(&Utc)
    );

    app.inbound
        .send(message(CaseEventType::Postponement, case))
        .unwrap();
    wait_for_job_count(&app.ctx, "123456_hearingReminder", 0).await;
}

#[actix_web::main]
#[test]
async fn dwp_response_schedules_an_evidence_reminder() {
    let app = spawn_app().await;

    let mut case = oral_case("654321");
    case.dwp_response_date = Some(Utc.ymd(2018, 1, 1).and_hms(12, 0, 0));

    app.inbound
        .send(message(CaseEventType::DwpResponseReceived, case))
        .unwrap();
    wait_for_job_count(&app.ctx, "654321_evidenceReminder", 1).await;
}

#[actix_web::main]
#[test]
async fn ready_to_list_emits_session_ordered_hearing_requests() {
    let mut app = spawn_app().await;

    app.inbound
        .send(message(CaseEventType::ReadyToList, oral_case("777777")))
        .unwrap();

    let emitted = app.outbound.recv().await.expect("Expected hearing request");
    assert_eq!(emitted.session_id, "777777");
    assert_eq!(emitted.partition_key, "777777");
    assert!(emitted.body.contains("createHearing"));
}
