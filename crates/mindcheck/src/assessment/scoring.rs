use tracing::debug;

use super::catalog::Catalog;
use super::domain::{
    Answer, AnswerOption, AssessmentError, AssessmentSubmission, ScoreTotals,
    UnresolvedAnswerPolicy,
};

/// Sums the weights of every selected option.
///
/// Answers for unknown questions are handled per `policy`. An option index that
/// does not address one of the question's options always fails the submission.
pub fn score(
    catalog: &Catalog,
    submission: &AssessmentSubmission,
    policy: UnresolvedAnswerPolicy,
) -> Result<ScoreTotals, AssessmentError> {
    let mut totals = ScoreTotals::default();

    for answer in &submission.responses {
        if let Some(option) = resolve(catalog, answer, policy)? {
            totals.add(option);
        }
    }

    Ok(totals)
}

fn resolve<'c>(
    catalog: &'c Catalog,
    answer: &Answer,
    policy: UnresolvedAnswerPolicy,
) -> Result<Option<&'c AnswerOption>, AssessmentError> {
    let Some(question) = catalog.find_by_id(answer.question_id) else {
        return match policy {
            UnresolvedAnswerPolicy::Skip => {
                debug!(
                    question_id = answer.question_id,
                    "skipping answer for unknown question"
                );
                Ok(None)
            }
            UnresolvedAnswerPolicy::Reject => Err(AssessmentError::UnresolvedReference {
                question_id: answer.question_id,
            }),
        };
    };

    usize::try_from(answer.selected_option_index)
        .ok()
        .and_then(|index| question.options.get(index))
        .map(Some)
        .ok_or(AssessmentError::IndexOutOfRange {
            question_id: question.id,
            index: answer.selected_option_index,
            option_count: question.options.len(),
        })
}
