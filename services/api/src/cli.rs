use crate::demo::{run_assessment_report, run_demo, AssessmentReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use readiness_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "AI Readiness Finder",
    about = "Score AI readiness surveys and recommend automation initiatives from the command line",
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
    /// Work with the stored assessment snapshot
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Run an end-to-end CLI demo covering scoring and report submission
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Generate a readiness report with optional CSV exports
    Report(AssessmentReportArgs),
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
        Command::Assessment {
            command: AssessmentCommand::Report(args),
        } => run_assessment_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
