use crate::commands::{
    run_analyze, run_fee, run_grades, run_upgrade, run_urgency_fee, AnalyzeArgs, FeeArgs,
    UpgradeArgs, UrgencyFeeArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use curtain_market::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Curtain Market Pricing",
    about = "Grade curtain installation contractors and price jobs from the command line",
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
    /// Grade a contractor from their performance metrics
    Analyze(AnalyzeArgs),
    /// Price a job from a base fee percent and contractor grade
    Fee(FeeArgs),
    /// Price a job from an urgency tier and contractor grade
    UrgencyFee(UrgencyFeeArgs),
    /// Compare fees before and after a grade upgrade
    Upgrade(UpgradeArgs),
    /// Print the discount granted at every grade
    Grades,
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
        Command::Analyze(args) => run_analyze(args),
        Command::Fee(args) => run_fee(args),
        Command::UrgencyFee(args) => run_urgency_fee(args),
        Command::Upgrade(args) => run_upgrade(args),
        Command::Grades => run_grades(),
    }
}
