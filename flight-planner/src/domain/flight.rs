//! Flights and route table rows.

use super::{City, ParseError, split_fields};

/// One directed edge in the route graph.
///
/// Every flight read from the route table is stored twice, once per
/// direction, with the same cost and duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    /// City this flight lands in.
    pub destination: City,

    /// Ticket cost. Non-negative, may be fractional.
    pub cost: f64,

    /// Flight time in minutes.
    pub duration: u32,
}

/// A row of the route table: `source|destination|cost|duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub source: City,
    pub destination: City,
    pub cost: f64,
    pub duration: u32,
}

impl Route {
    /// Number of fields in a route row.
    pub const FIELDS: usize = 4;

    /// Create a route, rejecting costs that are negative or not finite.
    pub fn new(
        source: City,
        destination: City,
        cost: f64,
        duration: u32,
    ) -> Result<Self, ParseError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(ParseError::InvalidCost(cost.to_string()));
        }
        Ok(Self {
            source,
            destination,
            cost,
            duration,
        })
    }

    /// Parse one data row of the route table.
    pub fn parse_row(row: &str) -> Result<Self, ParseError> {
        let fields = split_fields(row, Self::FIELDS)?;

        let source = City::parse(fields[0])?;
        let destination = City::parse(fields[1])?;
        let cost = parse_cost(fields[2])?;
        let duration = fields[3]
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidDuration(fields[3].to_string()))?;

        Ok(Self {
            source,
            destination,
            cost,
            duration,
        })
    }
}

fn parse_cost(s: &str) -> Result<f64, ParseError> {
    match s.parse::<f64>() {
        Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(cost),
        _ => Err(ParseError::InvalidCost(s.to_string())),
    }
}
