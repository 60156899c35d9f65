//! Flight plan requests.

use super::{City, ParseError, Preference, split_fields};

/// A row of the request file: `source|destination|preference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRequest {
    pub source: City,
    pub destination: City,
    pub preference: Preference,
}

impl FlightRequest {
    /// Number of fields in a request row.
    pub const FIELDS: usize = 3;

    /// Parse one data row of the request file.
    pub fn parse_row(row: &str) -> Result<Self, ParseError> {
        let fields = split_fields(row, Self::FIELDS)?;

        Ok(Self {
            source: City::parse(fields[0])?,
            destination: City::parse(fields[1])?,
            preference: Preference::parse(fields[2])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request() {
        let req = FlightRequest::parse_row("Dallas|Houston|T").unwrap();
        assert_eq!(req.source.as_str(), "Dallas");
        assert_eq!(req.destination.as_str(), "Houston");
        assert_eq!(req.preference, Preference::Duration);

        let req = FlightRequest::parse_row("Chicago|Austin|C").unwrap();
        assert_eq!(req.preference, Preference::Cost);
    }

    #[test]
    fn reject_missing_preference() {
        assert!(matches!(
            FlightRequest::parse_row("Dallas|Houston"),
            Err(ParseError::FieldCount {
                expected: 3,
                found: 2
            })
        ));
    }
}
