use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use flight_planner::planner::PlannerConfig;
use flight_planner::run::{Invocation, Outcome, USAGE, run};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Check arguments before touching the filesystem
    let Some(invocation) = Invocation::from_args(std::env::args().skip(1)) else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    let config = match PlannerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load planner config");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&invocation, &config).await {
        Ok(Outcome::NoViablePlan) => ExitCode::SUCCESS,
        Ok(Outcome::Planned { requests }) => {
            tracing::debug!(requests, "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Flight planning failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
