use crate::commands::{run_assess, run_questions, run_quote, AssessArgs, QuestionsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindcheck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "mindcheck",
    about = "Serve and exercise the mental health self-assessment questionnaire",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a random questionnaire as JSON
    Questions(QuestionsArgs),
    /// Score a JSON submission file and print the result
    Assess(AssessArgs),
    /// Print a random motivational quote
    Quote,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Questions(args) => run_questions(args),
        Command::Assess(args) => run_assess(args),
        Command::Quote => run_quote(),
    }
}
