use crate::demo::{run_classify, run_dashboard, run_demo, ClassifyArgs, DashboardArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use telecom_pm::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Telecom Project Manager",
    about = "Serve and preview the role dashboards for telecom site installations",
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
    /// Render one role's dashboard to stdout
    Dashboard(DashboardArgs),
    /// Walk through every role dashboard in picker order
    Demo(DemoArgs),
    /// Classify a status label into Normal / Risk / Overdue
    Classify(ClassifyArgs),
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
        Command::Dashboard(args) => run_dashboard(args),
        Command::Demo(args) => run_demo(args),
        Command::Classify(args) => run_classify(args),
    }
}
