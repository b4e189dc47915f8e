use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tutorhub_core::models::{class::ClassListing, schedule::WeeklySlot};
use tutorhub_db::store::RegisteredTutor;
use uuid::Uuid;

use crate::test_utils::{TestContext, listing, registration_body, search_classes};

#[rstest]
#[case::no_filters(&[])]
#[case::no_subject(&[("week_day", "1"), ("time", "09:00")])]
#[case::no_week_day(&[("subject", "Math"), ("time", "09:00")])]
#[case::no_time(&[("subject", "Math"), ("week_day", "1")])]
#[case::empty_subject(&[("subject", ""), ("week_day", "1"), ("time", "09:00")])]
#[case::blank_subject(&[("subject", "   "), ("week_day", "1"), ("time", "09:00")])]
#[case::blank_week_day(&[("subject", "Math"), ("week_day", " "), ("time", "09:00")])]
#[tokio::test]
async fn test_list_classes_missing_filters(#[case] params: &[(&str, &str)]) {
    let mut ctx = TestContext::new();
    ctx.class_store.expect_list_classes().times(0);
    let server = ctx.into_server();

    let response = search_classes(&server, params).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "error": "Missing filters" }));
}

#[rstest]
#[case::week_day_out_of_range("9", "09:00")]
#[case::week_day_not_a_number("monday", "09:00")]
#[case::malformed_time("1", "nine")]
#[tokio::test]
async fn test_list_classes_malformed_filters(#[case] week_day: &str, #[case] time: &str) {
    let mut ctx = TestContext::new();
    ctx.class_store.expect_list_classes().times(0);
    let server = ctx.into_server();

    let response = search_classes(
        &server,
        &[("subject", "Math"), ("week_day", week_day), ("time", time)],
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].is_string());
    assert_ne!(body["error"], "Missing filters");
}

#[test_log::test(tokio::test)]
async fn test_list_classes_passes_normalized_filters() {
    let mut ctx = TestContext::new();
    let row = listing("Math");
    let expected = ClassListing::from(row.clone());

    ctx.class_store
        .expect_list_classes()
        .withf(|filters| filters.subject == "Math" && filters.week_day == 1 && filters.time == 540)
        .times(1)
        .returning(move |_| Ok(vec![row.clone()]));
    let server = ctx.into_server();

    let response = search_classes(
        &server,
        &[("subject", "Math"), ("week_day", "1"), ("time", "09:00")],
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<ClassListing>>(), vec![expected]);
}

#[tokio::test]
async fn test_list_classes_response_shape() {
    let mut ctx = TestContext::new();
    let row = listing("Physics");
    let class_id = row.id;
    let user_id = row.user_id;

    ctx.class_store
        .expect_list_classes()
        .returning(move |_| Ok(vec![row.clone()]));
    let server = ctx.into_server();

    let response = search_classes(
        &server,
        &[("subject", "Physics"), ("week_day", "3"), ("time", "14:15")],
    )
    .await;
    let body = response.json::<Value>();

    assert_eq!(body[0]["id"], json!(class_id));
    assert_eq!(body[0]["user_id"], json!(user_id));
    assert_eq!(body[0]["subject"], "Physics");
    assert_eq!(body[0]["cost"], 80.0);
    for field in ["name", "avatar", "whatsapp", "bio"] {
        assert!(body[0][field].is_string(), "missing {}", field);
    }
}

#[tokio::test]
async fn test_list_classes_empty_result() {
    let mut ctx = TestContext::new();
    ctx.class_store
        .expect_list_classes()
        .returning(|_| Ok(vec![]));
    let server = ctx.into_server();

    let response = search_classes(
        &server,
        &[("subject", "Chemistry"), ("week_day", "0"), ("time", "23:59")],
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_classes_storage_failure() {
    let mut ctx = TestContext::new();
    ctx.class_store
        .expect_list_classes()
        .returning(|_| Err(eyre::eyre!("connection refused").wrap_err("Failed to list classes")));
    let server = ctx.into_server();

    let response = search_classes(
        &server,
        &[("subject", "Math"), ("week_day", "1"), ("time", "09:00")],
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("Failed to list classes"));
    assert!(error.contains("connection refused"));
}

#[test_log::test(tokio::test)]
async fn test_create_class_success() {
    let mut ctx = TestContext::new();
    ctx.class_store
        .expect_register_tutor()
        .withf(|registration| {
            registration.subject == "Math"
                && registration.cost == 80.0
                && registration.schedule
                    == vec![WeeklySlot {
                        week_day: 1,
                        from: 480,
                        to: 600,
                    }]
        })
        .times(1)
        .returning(|registration| {
            Ok(RegisteredTutor {
                user_id: Uuid::new_v4(),
                class_id: Uuid::new_v4(),
                slot_count: registration.schedule.len(),
            })
        });
    let server = ctx.into_server();

    let response = server.post("/classes").json(&registration_body()).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_create_class_keeps_profile_fields() {
    let mut ctx = TestContext::new();
    let body = registration_body();
    let name = body["name"].as_str().unwrap().to_string();
    let whatsapp = body["whatsapp"].as_str().unwrap().to_string();

    ctx.class_store
        .expect_register_tutor()
        .withf(move |registration| {
            registration.profile.name == name && registration.profile.whatsapp == whatsapp
        })
        .times(1)
        .returning(|_| {
            Ok(RegisteredTutor {
                user_id: Uuid::new_v4(),
                class_id: Uuid::new_v4(),
                slot_count: 1,
            })
        });
    let server = ctx.into_server();

    let response = server.post("/classes").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_class_storage_failure_surfaces_cause() {
    let mut ctx = TestContext::new();
    ctx.class_store
        .expect_register_tutor()
        .times(1)
        .returning(|_| {
            Err(eyre::eyre!("violates check constraint \"valid_time_range\"")
                .wrap_err("Failed to insert schedule slot"))
        });
    let server = ctx.into_server();

    let response = server.post("/classes").json(&registration_body()).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("valid_time_range"));
}

#[rstest]
#[case::empty_schedule(json!([]))]
#[case::bad_week_day(json!([{ "week_day": 7, "from": "08:00", "to": "10:00" }]))]
#[case::inverted_window(json!([{ "week_day": 1, "from": "10:00", "to": "08:00" }]))]
#[case::malformed_time(json!([{ "week_day": 1, "from": "8h", "to": "10:00" }]))]
#[tokio::test]
async fn test_create_class_invalid_schedule(#[case] schedule: Value) {
    let mut ctx = TestContext::new();
    ctx.class_store.expect_register_tutor().times(0);
    let server = ctx.into_server();

    let mut body = registration_body();
    body["schedule"] = schedule;
    let response = server.post("/classes").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[rstest]
#[case::missing_schedule("schedule")]
#[case::missing_name("name")]
#[case::missing_cost("cost")]
#[tokio::test]
async fn test_create_class_missing_field(#[case] field: &str) {
    let mut ctx = TestContext::new();
    ctx.class_store.expect_register_tutor().times(0);
    let server = ctx.into_server();

    let mut body = registration_body();
    body.as_object_mut().unwrap().remove(field);
    let response = server.post("/classes").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains(field), "error {:?} should name {}", error, field);
}

#[tokio::test]
async fn test_create_class_rejects_non_json_body() {
    let mut ctx = TestContext::new();
    ctx.class_store.expect_register_tutor().times(0);
    let server = ctx.into_server();

    let response = server.post("/classes").text("name=Ada").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}
