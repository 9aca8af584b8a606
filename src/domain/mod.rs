//! Domain layer - business-level error taxonomy and identifier handling.
//!
//! Nothing in here depends on Axum; handlers translate these errors into
//! HTTP responses at the boundary.

pub mod errors;

pub use errors::DomainError;

/// Parse an opaque identifier token handed in by a caller.
///
/// Identifiers are store-assigned and rendered as decimal text tokens. A
/// token that does not parse back to a store key is a caller error, not a
/// routing failure.
pub fn parse_id(token: &str) -> Result<i32, DomainError> {
    token
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| DomainError::InvalidIdentifier(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_tokens() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(parse_id("").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("0").is_err());
        assert!(parse_id("64f1c0ffee").is_err());
    }
}
