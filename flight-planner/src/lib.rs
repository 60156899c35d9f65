//! Flight itinerary planner.
//!
//! A batch tool that reads a table of flights between cities and, for each
//! requested pair of cities, reports the three cheapest or quickest ways to
//! fly between them.

pub mod domain;
pub mod error;
pub mod graph;
pub mod planner;
pub mod report;
pub mod run;
pub mod tables;
