//! Depth-first enumeration of simple paths.
//!
//! Every path from the source to the destination that never visits a city
//! twice is found. The search uses an explicit stack rather than recursion,
//! so path length is bounded by memory and not by call-stack depth.
//!
//! Partial paths live in an arena owned by the [`Exploration`]. Each
//! [`PathState`] records the handle of the state it was extended from, so
//! a path is a chain of handles back to the origin and extending a path
//! never copies it.

use std::time::Instant;

use tracing::{debug, trace, warn};

use super::config::PlannerConfig;
use crate::domain::{City, Flight};
use crate::graph::RouteGraph;

/// How many states to pop between checks of the time budget.
const BUDGET_CHECK_INTERVAL: usize = 1024;

/// Handle to a [`PathState`] in an [`Exploration`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathId(usize);

/// One node of the search tree: a path ending at `city`.
#[derive(Debug, Clone)]
pub struct PathState<'g> {
    /// City this path currently ends at.
    pub city: &'g City,

    /// Sum of flight costs along the path.
    pub cost: f64,

    /// Sum of flight durations along the path.
    pub duration: u64,

    /// Number of flights taken.
    pub stops: usize,

    /// The flight that reached `city` (`None` at the origin).
    pub via: Option<&'g Flight>,

    /// The state this one extends (`None` at the origin).
    pub prev: Option<PathId>,
}

/// Result of exploring from one city to another.
#[derive(Debug, Clone)]
pub struct Exploration<'g> {
    /// Arena of every state pushed during the search.
    states: Vec<PathState<'g>>,

    /// States that reached the destination, in discovery order.
    found: Vec<PathId>,

    /// Number of states popped from the stack.
    explored: usize,

    /// True if a time budget stopped the search early.
    truncated: bool,
}

impl<'g> Exploration<'g> {
    fn empty() -> Self {
        Self {
            states: Vec::new(),
            found: Vec::new(),
            explored: 0,
            truncated: false,
        }
    }

    fn push(&mut self, state: PathState<'g>) -> PathId {
        let id = PathId(self.states.len());
        self.states.push(state);
        id
    }

    /// Completed paths, in the order they were discovered.
    pub fn found(&self) -> &[PathId] {
        &self.found
    }

    /// Look up a state by handle.
    pub fn get(&self, id: PathId) -> &PathState<'g> {
        &self.states[id.0]
    }

    /// Walk from a state back to the origin.
    pub fn chain(&self, id: PathId) -> Chain<'_, 'g> {
        Chain {
            exploration: self,
            next: Some(id),
        }
    }

    /// Cities on a path, origin first.
    pub fn cities(&self, id: PathId) -> Vec<&'g City> {
        let mut cities: Vec<&'g City> = self.chain(id).map(|s| s.city).collect();
        cities.reverse();
        cities
    }

    /// Flights on a path, in travel order.
    pub fn flights(&self, id: PathId) -> Vec<&'g Flight> {
        let mut flights: Vec<&'g Flight> = self.chain(id).filter_map(|s| s.via).collect();
        flights.reverse();
        flights
    }

    /// Check whether `city` already appears on the path ending at `id`.
    fn is_visited(&self, id: PathId, city: &City) -> bool {
        self.chain(id).any(|s| s.city == city)
    }

    /// Number of states popped from the stack.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Returns true if the time budget ran out before the search finished.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Iterator from a state back to its origin.
pub struct Chain<'e, 'g> {
    exploration: &'e Exploration<'g>,
    next: Option<PathId>,
}

impl<'e, 'g> Iterator for Chain<'e, 'g> {
    type Item = &'e PathState<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let state = self.exploration.get(id);
        self.next = state.prev;
        Some(state)
    }
}

/// Enumerate every simple path from `source` to `destination`.
///
/// An unknown source gives an empty exploration. A path stops at the
/// destination: it is recorded and never extended further.
///
/// States are popped last-in first-out, so the neighbours of a city are
/// tried in reverse adjacency order. That order is what ranking falls back
/// on when two paths tie.
pub fn explore<'g>(
    graph: &'g RouteGraph,
    source: &str,
    destination: &str,
    config: &PlannerConfig,
) -> Exploration<'g> {
    let mut exploration = Exploration::empty();

    let origin = match graph.city(source) {
        Some(city) => city,
        None => {
            debug!(source, "Source city not in route table");
            return exploration;
        }
    };

    let deadline = config
        .time_budget()
        .map(|budget| Instant::now() + budget.to_std().unwrap_or_default());

    let root = exploration.push(PathState {
        city: origin,
        cost: 0.0,
        duration: 0,
        stops: 0,
        via: None,
        prev: None,
    });
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        exploration.explored += 1;

        if exploration.explored % BUDGET_CHECK_INTERVAL == 0
            && let Some(deadline) = deadline
            && Instant::now() >= deadline
        {
            warn!(
                source,
                destination,
                found = exploration.found.len(),
                explored = exploration.explored,
                "Exploration time budget exhausted, ranking partial results"
            );
            exploration.truncated = true;
            break;
        }

        let state = exploration.get(current).clone();

        if state.city == destination {
            exploration.found.push(current);
            continue;
        }

        if config.max_stops.is_some_and(|max| state.stops >= max) {
            continue;
        }

        // Unknown city is a dead end
        let Some(flights) = graph.lookup(state.city.as_str()) else {
            continue;
        };

        for flight in flights {
            if exploration.is_visited(current, &flight.destination) {
                continue;
            }

            // Costs are finite on their own but their sum may not be
            let cost = state.cost + flight.cost;
            if !cost.is_finite() {
                trace!(city = %flight.destination, "Pruned path with unbounded cost");
                continue;
            }

            let next = exploration.push(PathState {
                city: &flight.destination,
                cost,
                duration: state.duration + u64::from(flight.duration),
                stops: state.stops + 1,
                via: Some(flight),
                prev: Some(current),
            });
            stack.push(next);
        }

        trace!(
            city = %state.city,
            depth = state.stops,
            stack = stack.len(),
            "Expanded city"
        );
    }

    debug!(
        source,
        destination,
        found = exploration.found.len(),
        explored = exploration.explored,
        "Exploration complete"
    );

    exploration
}
