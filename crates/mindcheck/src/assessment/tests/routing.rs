use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::{
    assess_handler, questions_handler, AssessQuery, QuestionsQuery,
};
use crate::assessment::{assessment_router, AssessmentService, QUOTES};

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn questions_route_defaults_to_ten() {
    let response = standard_router()
        .oneshot(Request::get("/questions/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let questions = body.as_array().expect("array of questions");
    assert_eq!(questions.len(), 10);

    let ids: HashSet<_> = questions.iter().map(|q| q["id"].as_i64().unwrap()).collect();
    assert_eq!(ids.len(), 10);
    assert!(questions[0]["question"].is_string());
    assert!(questions[0]["options"][0]["depressionWeight"].is_u64());
}

#[tokio::test]
async fn questions_route_honours_count() {
    let response = standard_router()
        .oneshot(Request::get("/questions?count=3").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn questions_handler_rejects_count_above_catalog_size() {
    let response = questions_handler(
        State(standard_service()),
        Query(QuestionsQuery { count: Some(12) }),
    )
    .await;

    let detail = assert_bad_request(response).await;
    assert_eq!(detail, "Requested count exceeds available questions");
}

#[tokio::test]
async fn questions_route_rejects_non_numeric_count() {
    let response = standard_router()
        .oneshot(Request::get("/questions/?count=many").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assess_route_scores_submission() {
    let response = standard_router()
        .oneshot(post_json(
            "/assess/",
            json!({ "responses": [
                { "questionId": 1, "selectedOptionIndex": 3 },
                { "questionId": 3, "selectedOptionIndex": 2 },
                { "questionId": 8, "selectedOptionIndex": 3 }
            ]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["depression"], 3 + 1 + 3);
    assert_eq!(body["anxiety"], 3 + 2 + 1);
    assert_eq!(
        body["recommendations"]["depression"][0],
        "Consider speaking with a mental health professional"
    );
    assert_eq!(
        body["recommendations"]["anxiety"][0],
        "Try progressive muscle relaxation techniques"
    );

    let timestamp = body["timestamp"].as_str().expect("timestamp string");
    assert!(timestamp.parse::<chrono::NaiveDateTime>().is_ok());
}

#[tokio::test]
async fn assess_route_ignores_unknown_questions_by_default() {
    let response = standard_router()
        .oneshot(post_json(
            "/assess",
            json!({ "responses": [{ "questionId": 500, "selectedOptionIndex": 0 }] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["depression"], 0);
    assert_eq!(body["anxiety"], 0);
    assert_eq!(
        body["recommendations"]["depression"][2],
        "Keep a gratitude journal"
    );
}

#[tokio::test]
async fn assess_route_strict_query_rejects_unknown_questions() {
    let response = standard_router()
        .oneshot(post_json(
            "/assess/?strict=true",
            json!({ "responses": [{ "questionId": 500, "selectedOptionIndex": 0 }] }),
        ))
        .await
        .unwrap();

    let detail = assert_bad_request(response).await;
    assert!(detail.contains("500"));
}

#[tokio::test]
async fn assess_handler_uses_configured_strict_mode() {
    let service = Arc::new(AssessmentService::standard(strict_settings()));
    let response = assess_handler(
        State(service),
        Query(AssessQuery::default()),
        axum::Json(submission(&[(1, 0), (77, 1)])),
    )
    .await;

    let detail = assert_bad_request(response).await;
    assert_eq!(detail, "question 77 does not exist");
}

#[tokio::test]
async fn assess_route_rejects_out_of_range_option() {
    let response = standard_router()
        .oneshot(post_json(
            "/assess/",
            json!({ "responses": [{ "questionId": 2, "selectedOptionIndex": 4 }] }),
        ))
        .await
        .unwrap();

    let detail = assert_bad_request(response).await;
    assert!(detail.contains("selectedOptionIndex 4"));
}

#[tokio::test]
async fn quote_route_returns_known_quote() {
    let router = assessment_router(standard_service());
    let response = router
        .oneshot(Request::get("/quote/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let quote = body["quote"].as_str().expect("quote string");
    assert!(QUOTES.contains(&quote));
}
