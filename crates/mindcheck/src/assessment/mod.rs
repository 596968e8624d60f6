//! Questionnaire catalog, sampling, scoring, and recommendation lookup.
//!
//! Every table here is immutable once the process starts, so the service can be
//! shared across request handlers without synchronization. Randomness is always
//! passed in by the caller.

pub mod catalog;
pub mod domain;
pub mod quotes;
pub mod recommendations;
pub mod router;
pub mod sampler;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError};
pub use domain::{
    Answer, AnswerOption, AssessmentError, AssessmentSettings, AssessmentSubmission, Question,
    QuestionId, Recommendations, ScoreResult, ScoreTotals, UnresolvedAnswerPolicy,
};
pub use quotes::{random_quote, QUOTES};
pub use recommendations::{recommend, ScoreBand};
pub use router::assessment_router;
pub use sampler::{sample, DEFAULT_SAMPLE_COUNT};
pub use scoring::score;
pub use service::AssessmentService;
