//! Flight path planner using exhaustive depth-first search.
//!
//! This module answers: "what are the best ways to fly from here to
//! there?" Every simple path through the route graph is enumerated, then
//! the paths are ranked by cost or by flight time and the best few kept.

mod config;
mod explore;
mod rank;

pub use config::{CONFIG_ENV, ConfigError, PlannerConfig};
pub use explore::{Chain, Exploration, PathId, PathState, explore};
pub use rank::{RankedPath, compare, rank_paths};

use tracing::debug;

use crate::domain::FlightRequest;
use crate::graph::RouteGraph;

/// Result of planning one request.
#[derive(Debug, Clone)]
pub struct PlanResult<'g> {
    /// Best paths, ranked best-first.
    pub paths: Vec<RankedPath<'g>>,

    /// Number of paths that reached the destination before ranking.
    pub paths_found: usize,

    /// Number of search states explored.
    pub states_explored: usize,

    /// True if the time budget cut the search short.
    pub truncated: bool,
}

/// Plans requests against a fixed route graph.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Explore and rank the paths for one request.
    pub fn plan(&self, request: &FlightRequest) -> PlanResult<'a> {
        let exploration = explore(
            self.graph,
            request.source.as_str(),
            request.destination.as_str(),
            self.config,
        );
        let paths = rank_paths(&exploration, request.preference, self.config.max_results);

        debug!(
            source = %request.source,
            destination = %request.destination,
            preference = %request.preference,
            found = exploration.found().len(),
            kept = paths.len(),
            "Planned request"
        );

        PlanResult {
            paths,
            paths_found: exploration.found().len(),
            states_explored: exploration.explored(),
            truncated: exploration.is_truncated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Route;

    fn graph(rows: &[&str]) -> RouteGraph {
        let routes: Vec<Route> = rows.iter().map(|r| Route::parse_row(r).unwrap()).collect();
        RouteGraph::from_routes(&routes)
    }

    #[test]
    fn plan_truncates_to_max_results() {
        let graph = graph(&[
            "A|B|1|1", "A|C|2|2", "A|D|9|9", "B|C|3|3", "B|D|4|4", "C|D|5|5",
        ]);
        let config = PlannerConfig::default();
        let planner = Planner::new(&graph, &config);

        let request = FlightRequest::parse_row("A|D|C").unwrap();
        let result = planner.plan(&request);

        assert_eq!(result.paths_found, 5);
        assert_eq!(result.paths.len(), 3);
        assert!(!result.truncated);
        assert!(result.states_explored >= result.paths_found);
    }

    #[test]
    fn plan_respects_custom_max_results() {
        let graph = graph(&["A|B|1|1", "A|B|2|2", "A|B|3|3"]);
        let config = PlannerConfig::new(1, None, None);
        let planner = Planner::new(&graph, &config);

        let request = FlightRequest::parse_row("A|B|T").unwrap();
        let result = planner.plan(&request);

        assert_eq!(result.paths.len(), 1);
        assert_eq!(result.paths[0].duration, 1);
    }

    #[test]
    fn plan_unknown_city() {
        let graph = graph(&["A|B|100|60"]);
        let config = PlannerConfig::default();
        let planner = Planner::new(&graph, &config);

        let request = FlightRequest::parse_row("A|Z|C").unwrap();
        let result = planner.plan(&request);

        assert!(result.paths.is_empty());
        assert_eq!(result.paths_found, 0);
    }
}
