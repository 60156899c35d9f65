//! The batch driver.
//!
//! Reads the route table, builds the graph, plans every request in order
//! and writes the report once at the end.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::FlightRequest;
use crate::error::RunError;
use crate::graph::RouteGraph;
use crate::planner::{Planner, PlannerConfig};
use crate::report::Report;
use crate::tables::{load_requests, load_routes};

/// Usage line printed when arguments are missing.
pub const USAGE: &str = "Usage: <flightDataFile> <requestedFlightPlanFile> <outputFile>";

/// The three files a run works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub routes: PathBuf,
    pub requests: PathBuf,
    pub output: PathBuf,
}

impl Invocation {
    /// Build from positional arguments (program name excluded).
    ///
    /// Returns `None` if fewer than three are given. Extra arguments are
    /// ignored.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Option<Self> {
        let mut args = args.into_iter();
        Some(Self {
            routes: args.next()?.into(),
            requests: args.next()?.into(),
            output: args.next()?.into(),
        })
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No routes or no requests: the fixed "no viable plan" report was written.
    NoViablePlan,

    /// Every request was planned.
    Planned { requests: usize },
}

/// Plan every request against the graph.
pub fn plan_all(graph: &RouteGraph, requests: &[FlightRequest], config: &PlannerConfig) -> Report {
    let planner = Planner::new(graph, config);
    let mut report = Report::new();

    for (idx, request) in requests.iter().enumerate() {
        let result = planner.plan(request);
        if result.truncated {
            warn!(
                flight = idx + 1,
                source = %request.source,
                destination = %request.destination,
                "Search stopped early, results may be incomplete"
            );
        }
        report.push_request(idx + 1, request, &result.paths);
    }

    report
}

/// Run the whole batch.
///
/// The request file is not read at all when the route table is empty.
pub async fn run(invocation: &Invocation, config: &PlannerConfig) -> Result<Outcome, RunError> {
    let routes = load_routes(&invocation.routes).await?;
    let graph = RouteGraph::from_routes(&routes);

    if graph.is_empty() {
        info!(path = %invocation.routes.display(), "Route table is empty");
        write_report(&invocation.output, &Report::no_viable_plan()).await?;
        return Ok(Outcome::NoViablePlan);
    }

    info!(
        cities = graph.city_count(),
        flights = graph.flight_count(),
        "Built route graph"
    );

    let requests = load_requests(&invocation.requests).await?;
    if requests.is_empty() {
        info!(path = %invocation.requests.display(), "Request file is empty");
        write_report(&invocation.output, &Report::no_viable_plan()).await?;
        return Ok(Outcome::NoViablePlan);
    }

    let report = plan_all(&graph, &requests, config);
    write_report(&invocation.output, &report).await?;

    info!(
        requests = requests.len(),
        output = %invocation.output.display(),
        "Wrote flight plans"
    );

    Ok(Outcome::Planned {
        requests: requests.len(),
    })
}

async fn write_report(path: &Path, report: &Report) -> Result<(), RunError> {
    tokio::fs::write(path, report.render())
        .await
        .map_err(|source| RunError::Write {
            path: path.to_path_buf(),
            source,
        })
}
