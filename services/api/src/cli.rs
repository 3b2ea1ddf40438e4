use crate::console::{run_extract, run_generate, ExtractArgs, GenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use interview_prep::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Interview Prep",
    about = "Extract requirements from job descriptions and request tailored interview questions",
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
    /// Extract requirements from a job description file or stdin
    Extract(ExtractArgs),
    /// Extract requirements and ask the question service for interview questions
    Generate(GenerateArgs),
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
        Command::Extract(args) => run_extract(args),
        Command::Generate(args) => run_generate(args).await,
    }
}
