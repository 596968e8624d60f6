use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentError, AssessmentSubmission, UnresolvedAnswerPolicy};
use super::service::AssessmentService;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    pub(crate) count: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssessQuery {
    pub(crate) strict: Option<bool>,
}

/// Router exposing the questionnaire, scoring, and quote endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/questions/", get(questions_handler))
        .route("/questions", get(questions_handler))
        .route("/assess/", post(assess_handler))
        .route("/assess", post(assess_handler))
        .route("/quote/", get(quote_handler))
        .route("/quote", get(quote_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler(
    State(service): State<Arc<AssessmentService>>,
    Query(query): Query<QuestionsQuery>,
) -> Response {
    match service.questions(query.count, &mut rand::thread_rng()) {
        Ok(questions) => (StatusCode::OK, Json(questions)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    Query(query): Query<AssessQuery>,
    Json(submission): Json<AssessmentSubmission>,
) -> Response {
    let policy = query.strict.map(|strict| {
        if strict {
            UnresolvedAnswerPolicy::Reject
        } else {
            UnresolvedAnswerPolicy::Skip
        }
    });

    match service.assess(&submission, policy) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => rejection(error),
    }
}

pub(crate) async fn quote_handler(State(service): State<Arc<AssessmentService>>) -> Response {
    let quote = service.quote(&mut rand::thread_rng());
    (StatusCode::OK, Json(json!({ "quote": quote }))).into_response()
}

fn rejection(error: AssessmentError) -> Response {
    let payload = json!({ "detail": error.to_string() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}
