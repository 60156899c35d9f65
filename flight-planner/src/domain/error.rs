//! Row parse errors.
//!
//! These describe why a single line of the route table or request file
//! could not be turned into a domain value. Line numbers and file names are
//! attached one layer up, in `tables`.

/// A malformed field in a route or request row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The row does not have the expected number of `|`-separated fields
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A city field is empty
    #[error("city name must not be empty")]
    EmptyCity,

    /// Cost is not a finite, non-negative number
    #[error("invalid cost {0:?}: expected a non-negative number")]
    InvalidCost(String),

    /// Duration is not a non-negative integer
    #[error("invalid duration {0:?}: expected a non-negative integer")]
    InvalidDuration(String),

    /// The sort preference field is empty
    #[error("sort preference must not be empty")]
    EmptyPreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::FieldCount {
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "expected 4 fields, found 2");

        let err = ParseError::InvalidCost("abc".into());
        assert_eq!(
            err.to_string(),
            "invalid cost \"abc\": expected a non-negative number"
        );

        let err = ParseError::InvalidDuration("1.5".into());
        assert_eq!(
            err.to_string(),
            "invalid duration \"1.5\": expected a non-negative integer"
        );

        assert_eq!(
            ParseError::EmptyCity.to_string(),
            "city name must not be empty"
        );
        assert_eq!(
            ParseError::EmptyPreference.to_string(),
            "sort preference must not be empty"
        );
    }
}
