//! The flight network.
//!
//! Cities are nodes and flights are edges. The network is undirected: a
//! single row of the route table becomes one edge in each direction with the
//! same cost and duration. Parallel edges between the same pair of cities
//! are kept, and every city's flights stay in the order they were added,
//! since that order decides which of two equally good paths is found first.

use std::collections::HashMap;

use crate::domain::{City, Flight, Route};

/// Adjacency-list graph of cities and flights.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Map from city to its slot in `cities` / `flights`.
    index: HashMap<City, usize>,
    /// Cities in the order they were first seen.
    cities: Vec<City>,
    /// Outgoing flights per city, in insertion order.
    flights: Vec<Vec<Flight>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from route table rows, in table order.
    pub fn from_routes<'r>(routes: impl IntoIterator<Item = &'r Route>) -> Self {
        let mut graph = Self::new();
        for route in routes {
            graph.add_route(route);
        }
        graph
    }

    /// Add one route table row.
    pub fn add_route(&mut self, route: &Route) {
        self.insert_edge(
            &route.source,
            &route.destination,
            route.cost,
            route.duration,
        );
    }

    /// Add a flight between two cities.
    ///
    /// Both cities are registered if this is their first appearance. The
    /// flight is stored symmetrically (both A→B and B→A).
    pub fn insert_edge(&mut self, from: &City, to: &City, cost: f64, duration: u32) {
        let a = self.node(from);
        let b = self.node(to);

        self.flights[a].push(Flight {
            destination: to.clone(),
            cost,
            duration,
        });
        self.flights[b].push(Flight {
            destination: from.clone(),
            cost,
            duration,
        });
    }

    /// Slot for a city, registering it on first reference.
    fn node(&mut self, city: &City) -> usize {
        if let Some(&idx) = self.index.get(city) {
            return idx;
        }
        let idx = self.cities.len();
        self.index.insert(city.clone(), idx);
        self.cities.push(city.clone());
        self.flights.push(Vec::new());
        idx
    }

    /// Get the flights leaving a city.
    ///
    /// Returns `None` if the city never appeared in the route table.
    pub fn lookup(&self, city: &str) -> Option<&[Flight]> {
        self.index.get(city).map(|&idx| self.flights[idx].as_slice())
    }

    /// Get the graph's own copy of a city by name.
    pub fn city(&self, name: &str) -> Option<&City> {
        self.index.get(name).map(|&idx| &self.cities[idx])
    }

    /// Check if a city is part of the network.
    pub fn contains(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    /// All cities, in the order they were first seen.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Returns the number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the number of flights (counting A→B and B→A as one).
    pub fn flight_count(&self) -> usize {
        self.flights.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(s: &str) -> City {
        City::parse(s).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.city_count(), 0);
        assert_eq!(graph.flight_count(), 0);
        assert!(graph.lookup("Dallas").is_none());
    }

    #[test]
    fn insert_is_symmetric() {
        let mut graph = RouteGraph::new();
        graph.insert_edge(&city("Dallas"), &city("Austin"), 98.0, 47);

        let from_dallas = graph.lookup("Dallas").unwrap();
        assert_eq!(from_dallas.len(), 1);
        assert_eq!(from_dallas[0].destination, city("Austin"));
        assert_eq!(from_dallas[0].cost, 98.0);
        assert_eq!(from_dallas[0].duration, 47);

        let from_austin = graph.lookup("Austin").unwrap();
        assert_eq!(from_austin.len(), 1);
        assert_eq!(from_austin[0].destination, city("Dallas"));
        assert_eq!(from_austin[0].cost, 98.0);
        assert_eq!(from_austin[0].duration, 47);

        assert_eq!(graph.flight_count(), 1);
    }

    #[test]
    fn cities_in_first_seen_order() {
        let mut graph = RouteGraph::new();
        graph.insert_edge(&city("Dallas"), &city("Austin"), 98.0, 47);
        graph.insert_edge(&city("Houston"), &city("Dallas"), 101.0, 51);
        graph.insert_edge(&city("Austin"), &city("Chicago"), 144.0, 192);

        let names: Vec<&str> = graph.cities().map(City::as_str).collect();
        assert_eq!(names, vec!["Dallas", "Austin", "Houston", "Chicago"]);
    }

    #[test]
    fn flights_keep_insertion_order() {
        let mut graph = RouteGraph::new();
        graph.insert_edge(&city("A"), &city("B"), 1.0, 1);
        graph.insert_edge(&city("A"), &city("C"), 2.0, 2);
        graph.insert_edge(&city("D"), &city("A"), 3.0, 3);

        let dests: Vec<&str> = graph
            .lookup("A")
            .unwrap()
            .iter()
            .map(|f| f.destination.as_str())
            .collect();
        assert_eq!(dests, vec!["B", "C", "D"]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = RouteGraph::new();
        graph.insert_edge(&city("A"), &city("B"), 100.0, 60);
        graph.insert_edge(&city("B"), &city("A"), 80.0, 90);

        assert_eq!(graph.lookup("A").unwrap().len(), 2);
        assert_eq!(graph.lookup("B").unwrap().len(), 2);
        assert_eq!(graph.flight_count(), 2);
    }

    #[test]
    fn from_routes_matches_insert() {
        let routes = vec![
            Route::parse_row("A|B|100|60").unwrap(),
            Route::parse_row("B|C|50|30").unwrap(),
        ];
        let graph = RouteGraph::from_routes(&routes);

        assert_eq!(graph.city_count(), 3);
        assert!(graph.contains("C"));
        assert_eq!(graph.lookup("B").unwrap().len(), 2);
        assert_eq!(graph.city("C"), Some(&city("C")));
        assert!(graph.city("Z").is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Rows over a small alphabet so that cities repeat and parallel edges occur.
    fn routes_strategy() -> impl Strategy<Value = Vec<Route>> {
        prop::collection::vec(
            ("[A-E]", "[A-E]", 0u32..1000, 0u32..600),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(from, to, cents, duration)| {
                    Route::new(
                        City::parse(&from).unwrap(),
                        City::parse(&to).unwrap(),
                        f64::from(cents) / 4.0,
                        duration,
                    )
                    .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        /// Every row is visible from both ends with identical cost and duration
        #[test]
        fn every_route_is_mirrored(routes in routes_strategy()) {
            let graph = RouteGraph::from_routes(&routes);

            for route in &routes {
                let forward = graph.lookup(route.source.as_str()).unwrap();
                prop_assert!(forward.iter().any(|f| f.destination == route.destination
                    && f.cost == route.cost
                    && f.duration == route.duration));

                let backward = graph.lookup(route.destination.as_str()).unwrap();
                prop_assert!(backward.iter().any(|f| f.destination == route.source
                    && f.cost == route.cost
                    && f.duration == route.duration));
            }
        }

        /// Each row contributes exactly two directed edges
        #[test]
        fn edge_count_is_twice_rows(routes in routes_strategy()) {
            let graph = RouteGraph::from_routes(&routes);
            let directed: usize = graph.cities().map(|c| graph.lookup(c.as_str()).unwrap().len()).sum();
            prop_assert_eq!(directed, routes.len() * 2);
            prop_assert_eq!(graph.flight_count(), routes.len());
        }
    }
}
