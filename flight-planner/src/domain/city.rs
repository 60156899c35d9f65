//! City names.

use std::borrow::Borrow;
use std::fmt;

use super::ParseError;

/// A city, identified solely by its name.
///
/// Names are case-sensitive and compared exactly; surrounding whitespace is
/// stripped on parse and an empty name is rejected.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::City;
///
/// let dallas = City::parse(" Dallas ").unwrap();
/// assert_eq!(dallas.as_str(), "Dallas");
///
/// assert!(City::parse("   ").is_err());
/// assert_ne!(City::parse("dallas").unwrap(), dallas);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct City(String);

impl City {
    /// Parse a city name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseError::EmptyCity);
        }
        Ok(City(name.to_string()))
    }

    /// Returns the city name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for City {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for City {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.0)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
