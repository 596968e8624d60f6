use clap::Args;
use mindcheck::assessment::{AssessmentService, AssessmentSubmission, UnresolvedAnswerPolicy};
use mindcheck::config::AppConfig;
use mindcheck::error::AppError;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Number of questions to draw (defaults to the configured count)
    #[arg(long)]
    pub(crate) count: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file shaped like `{"responses": [{"questionId": 1, "selectedOptionIndex": 0}]}`
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Fail when an answer references an unknown question
    #[arg(long)]
    pub(crate) strict: bool,
}

fn service() -> Result<AssessmentService, AppError> {
    let config = AppConfig::load()?;
    Ok(AssessmentService::standard(config.assessment))
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let questions = service()?.questions(args.count, &mut rand::thread_rng())?;
    println!("{}", serde_json::to_string_pretty(&questions)?);
    Ok(())
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { responses, strict } = args;
    let raw = fs::read_to_string(&responses)?;
    let submission: AssessmentSubmission = serde_json::from_str(&raw)?;
    let policy = strict.then_some(UnresolvedAnswerPolicy::Reject);

    let result = service()?.assess(&submission, policy)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_quote() -> Result<(), AppError> {
    println!("{}", service()?.quote(&mut rand::thread_rng()));
    Ok(())
}
