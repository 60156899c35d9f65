//! Sort preference for ranking paths.

use std::fmt;

use super::ParseError;

/// Which accumulated metric a request ranks its paths by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    /// Cheapest first.
    Cost,
    /// Shortest total flight time first.
    Duration,
}

impl Preference {
    /// Parse a preference field.
    ///
    /// Only the first character matters: `T` selects [`Preference::Duration`],
    /// anything else selects [`Preference::Cost`].
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s.trim().chars().next() {
            Some('T') => Ok(Preference::Duration),
            Some(_) => Ok(Preference::Cost),
            None => Err(ParseError::EmptyPreference),
        }
    }

    /// Human-readable label used in the output header.
    pub fn label(&self) -> &'static str {
        match self {
            Preference::Cost => "Cost",
            Preference::Duration => "Time",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_character_decides() {
        assert_eq!(Preference::parse("T"), Ok(Preference::Duration));
        assert_eq!(Preference::parse("Time"), Ok(Preference::Duration));
        assert_eq!(Preference::parse("C"), Ok(Preference::Cost));
        assert_eq!(Preference::parse("Cost"), Ok(Preference::Cost));
        assert_eq!(Preference::parse("x"), Ok(Preference::Cost));
        // Lowercase t is not a time preference
        assert_eq!(Preference::parse("t"), Ok(Preference::Cost));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Preference::parse(""), Err(ParseError::EmptyPreference));
        assert_eq!(Preference::parse("  "), Err(ParseError::EmptyPreference));
    }

    #[test]
    fn labels() {
        assert_eq!(Preference::Duration.label(), "Time");
        assert_eq!(Preference::Cost.to_string(), "Cost");
    }
}
