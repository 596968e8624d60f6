use chrono::Local;
use rand::Rng;
use tracing::{info, warn};

use super::catalog::Catalog;
use super::domain::{
    AssessmentError, AssessmentSettings, AssessmentSubmission, Question, ScoreResult,
    UnresolvedAnswerPolicy,
};
use super::{quotes, recommendations, sampler, scoring};

/// Facade composing the catalog, sampler, scorer, and recommendation tables.
#[derive(Debug, Clone)]
pub struct AssessmentService {
    catalog: &'static Catalog,
    settings: AssessmentSettings,
}

impl AssessmentService {
    pub fn new(catalog: &'static Catalog, settings: AssessmentSettings) -> Self {
        Self { catalog, settings }
    }

    /// Service over the built-in question bank.
    pub fn standard(settings: AssessmentSettings) -> Self {
        Self::new(Catalog::standard(), settings)
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn settings(&self) -> AssessmentSettings {
        self.settings
    }

    /// Random questionnaire; `None` falls back to the configured default count.
    pub fn questions<R>(
        &self,
        count: Option<usize>,
        rng: &mut R,
    ) -> Result<Vec<Question>, AssessmentError>
    where
        R: Rng + ?Sized,
    {
        let count = count.unwrap_or(self.settings.default_question_count);
        sampler::sample(self.catalog, count, rng).inspect_err(|err| {
            warn!(
                requested = count,
                available = self.catalog.len(),
                %err,
                "question sample rejected"
            );
        })
    }

    /// Scores a submission. `policy` overrides the configured unresolved-answer policy.
    pub fn assess(
        &self,
        submission: &AssessmentSubmission,
        policy: Option<UnresolvedAnswerPolicy>,
    ) -> Result<ScoreResult, AssessmentError> {
        let policy = policy.unwrap_or(self.settings.unresolved_answers);
        let totals = scoring::score(self.catalog, submission, policy).inspect_err(|err| {
            warn!(?policy, %err, "assessment rejected");
        })?;

        info!(
            answers = submission.responses.len(),
            depression = totals.depression,
            anxiety = totals.anxiety,
            "assessment scored"
        );

        Ok(ScoreResult {
            depression: totals.depression,
            anxiety: totals.anxiety,
            timestamp: Local::now().naive_local(),
            recommendations: recommendations::recommend(totals.depression, totals.anxiety),
        })
    }

    pub fn quote<R>(&self, rng: &mut R) -> &'static str
    where
        R: Rng + ?Sized,
    {
        quotes::random_quote(rng)
    }
}
