//! Path tokenization.
//!
//! # Responsibilities
//! - Split request paths into `/`-delimited segments
//! - Classify route pattern segments as literal or parameter tokens
//!
//! # Design Decisions
//! - One leading and one trailing `/` are ignored; `/` yields no tokens
//! - Empty segments in the middle of a path are kept (`/a//b` has three)
//! - Parameter detection happens once per route, at registration

/// Character wrapping a parameter name in a route pattern (`%id%`).
pub const PARAMETER_DELIMITER: char = '%';

/// A single segment of a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Binds whatever the request has at this position.
    Parameter(String),
}

impl Token {
    /// Classify a raw pattern segment.
    ///
    /// Only `%<name>%` with a non-empty name is a parameter. Anything else,
    /// including `%%` and unbalanced delimiters, stays a literal.
    pub fn parse(raw: &str) -> Self {
        let name = raw
            .strip_prefix(PARAMETER_DELIMITER)
            .and_then(|rest| rest.strip_suffix(PARAMETER_DELIMITER))
            .filter(|name| !name.is_empty());

        match name {
            Some(name) => Token::Parameter(name.to_string()),
            None => Token::Literal(raw.to_string()),
        }
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Token::Parameter(_))
    }

    /// Parameter name, if this is a parameter token.
    pub fn parameter_name(&self) -> Option<&str> {
        match self {
            Token::Parameter(name) => Some(name),
            Token::Literal(_) => None,
        }
    }
}

/// Split a path into its segments.
pub fn tokenize(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

/// Tokenize a route pattern into classified tokens.
pub fn tokenize_pattern(pattern: &str) -> Vec<Token> {
    tokenize(pattern).into_iter().map(Token::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_root() {
        assert!(tokenize("/").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_segments() {
        assert_eq!(tokenize("/users/5"), vec!["users", "5"]);
        assert_eq!(tokenize("/users/5/"), vec!["users", "5"]);
        assert_eq!(tokenize("users/5"), vec!["users", "5"]);
        assert_eq!(tokenize("/a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parameter_token() {
        assert_eq!(Token::parse("%id%"), Token::Parameter("id".into()));
        assert_eq!(Token::parse("users"), Token::Literal("users".into()));
    }

    #[test]
    fn test_malformed_parameter_is_literal() {
        assert_eq!(Token::parse("%%"), Token::Literal("%%".into()));
        assert_eq!(Token::parse("%"), Token::Literal("%".into()));
        assert_eq!(Token::parse("%id"), Token::Literal("%id".into()));
        assert_eq!(Token::parse("id%"), Token::Literal("id%".into()));
    }

    #[test]
    fn test_tokenize_pattern() {
        let tokens = tokenize_pattern("/users/%id%/edit");
        assert_eq!(
            tokens,
            vec![
                Token::Literal("users".into()),
                Token::Parameter("id".into()),
                Token::Literal("edit".into()),
            ]
        );
        assert_eq!(tokens[1].parameter_name(), Some("id"));
        assert!(!tokens[0].is_parameter());
    }
}
