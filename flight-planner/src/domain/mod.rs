//! Domain types for the flight planner.
//!
//! These are the validated values parsed out of the route table and the
//! request file. Every type checks its invariants at construction time, so
//! the graph and the planner never see an empty city name or a negative
//! cost.

mod city;
mod error;
mod flight;
mod preference;
mod request;

pub use city::City;
pub use error::ParseError;
pub use flight::{Flight, Route};
pub use preference::Preference;
pub use request::FlightRequest;

/// Split a pipe-delimited row into its non-empty, trimmed fields.
///
/// Runs of delimiters collapse into one, so `A||B` yields two fields.
pub(crate) fn split_fields(row: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let fields: Vec<&str> = row
        .split('|')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    if fields.len() != expected {
        return Err(ParseError::FieldCount {
            expected,
            found: fields.len(),
        });
    }

    Ok(fields)
}
