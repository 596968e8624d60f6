use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::assessment::{
    assessment_router, Answer, AnswerOption, AssessmentService, AssessmentSettings,
    AssessmentSubmission, Catalog, Question, UnresolvedAnswerPolicy,
};

pub(super) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn question(id: i64, weights: &[(u32, u32)]) -> Question {
    Question {
        id,
        text: format!("Question {id}"),
        options: weights
            .iter()
            .enumerate()
            .map(|(position, &(depression, anxiety))| {
                AnswerOption::new(format!("Option {position}"), depression, anxiety)
            })
            .collect(),
    }
}

/// Small catalog with distinct weights per dimension so totals reveal which options were read.
pub(super) fn small_catalog() -> Catalog {
    Catalog::new(vec![
        question(1, &[(0, 0), (1, 2), (2, 4), (3, 6)]),
        question(2, &[(0, 0), (5, 1)]),
        question(7, &[(0, 1), (1, 0), (4, 4)]),
    ])
    .expect("fixture catalog is valid")
}

pub(super) fn submission(answers: &[(i64, i64)]) -> AssessmentSubmission {
    answers
        .iter()
        .map(|&(question_id, index)| Answer::new(question_id, index))
        .collect()
}

pub(super) fn strict_settings() -> AssessmentSettings {
    AssessmentSettings {
        unresolved_answers: UnresolvedAnswerPolicy::Reject,
        ..AssessmentSettings::default()
    }
}

pub(super) fn standard_service() -> Arc<AssessmentService> {
    Arc::new(AssessmentService::standard(AssessmentSettings::default()))
}

pub(super) fn standard_router() -> axum::Router {
    assessment_router(standard_service())
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

pub(super) async fn assert_bad_request(response: Response) -> String {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    body["detail"]
        .as_str()
        .expect("detail message present")
        .to_string()
}
