use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier assigned to each catalog question.
pub type QuestionId = i64;

/// A selectable answer carrying its contribution to each score dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub depression_weight: u32,
    pub anxiety_weight: u32,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, depression_weight: u32, anxiety_weight: u32) -> Self {
        Self {
            text: text.into(),
            depression_weight,
            anxiety_weight,
        }
    }
}

/// Questionnaire item. Callers pick an option by its position in `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// One caller-selected option. Both fields are signed so that negative input
/// reaches the scorer and fails with a range error instead of a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_option_index: i64,
}

impl Answer {
    pub fn new(question_id: QuestionId, selected_option_index: i64) -> Self {
        Self {
            question_id,
            selected_option_index,
        }
    }
}

/// Request body accepted by the scoring endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub responses: Vec<Answer>,
}

impl AssessmentSubmission {
    pub fn new(responses: Vec<Answer>) -> Self {
        Self { responses }
    }
}

impl FromIterator<Answer> for AssessmentSubmission {
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        Self {
            responses: iter.into_iter().collect(),
        }
    }
}

/// Summed weights for a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreTotals {
    pub depression: u32,
    pub anxiety: u32,
}

impl ScoreTotals {
    pub(crate) fn add(&mut self, option: &AnswerOption) {
        self.depression = self.depression.saturating_add(option.depression_weight);
        self.anxiety = self.anxiety.saturating_add(option.anxiety_weight);
    }
}

/// Suggestions for each score dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub depression: Vec<String>,
    pub anxiety: Vec<String>,
}

/// Response returned for a scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub depression: u32,
    pub anxiety: u32,
    pub timestamp: NaiveDateTime,
    pub recommendations: Recommendations,
}

/// How answers referencing unknown question ids are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedAnswerPolicy {
    /// Ignore the answer; it contributes nothing to either total.
    #[default]
    Skip,
    /// Fail the whole submission.
    Reject,
}

/// Tunables for the assessment endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentSettings {
    pub default_question_count: usize,
    pub unresolved_answers: UnresolvedAnswerPolicy,
}

impl Default for AssessmentSettings {
    fn default() -> Self {
        Self {
            default_question_count: super::DEFAULT_SAMPLE_COUNT,
            unresolved_answers: UnresolvedAnswerPolicy::Skip,
        }
    }
}

/// Failures surfaced to the caller of a single request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("Requested count exceeds available questions")]
    InvalidArgument { requested: usize, available: usize },
    #[error("question {question_id} does not exist")]
    UnresolvedReference { question_id: QuestionId },
    #[error(
        "selectedOptionIndex {index} is out of range for question {question_id} ({option_count} options)"
    )]
    IndexOutOfRange {
        question_id: QuestionId,
        index: i64,
        option_count: usize,
    },
}
