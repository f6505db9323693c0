//! Token matching.
//!
//! # Responsibilities
//! - Match request path tokens against a route's tokens
//! - Bind parameter tokens to request segments
//! - Capture trailing segments of dynamic routes
//!
//! # Design Decisions
//! - Literal comparison is exact and case-sensitive
//! - Parameters accept any segment value, including empty ones
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

use serde::Serialize;

use crate::routing::token::Token;

/// Arguments bound while matching a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Arguments {
    /// Parameter name → request segment.
    pub named: BTreeMap<String, String>,
    /// Segments beyond the route's tokens (dynamic routes only), in order.
    pub tail: Vec<String>,
}

impl Arguments {
    /// Number of bound arguments, named and trailing.
    ///
    /// Used as the specificity measure: fewer means more literal.
    pub fn len(&self) -> usize {
        self.named.len() + self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }
}

/// Match `path_tokens` against `route_tokens`.
///
/// Returns `None` when the route does not match, otherwise the bound
/// arguments. A non-dynamic route needs exactly as many path tokens as it
/// has tokens; a dynamic route takes any surplus as the tail.
pub fn match_tokens(
    path_tokens: &[&str],
    route_tokens: &[Token],
    is_dynamic: bool,
) -> Option<Arguments> {
    if path_tokens.len() < route_tokens.len() {
        return None;
    }

    let mut arguments = Arguments::default();

    for (route_token, path_token) in route_tokens.iter().zip(path_tokens) {
        match route_token {
            Token::Parameter(name) => {
                arguments.named.insert(name.clone(), (*path_token).to_string());
            }
            Token::Literal(literal) => {
                if literal != path_token {
                    return None;
                }
            }
        }
    }

    if !is_dynamic {
        return (path_tokens.len() == route_tokens.len()).then_some(arguments);
    }

    arguments.tail = path_tokens[route_tokens.len()..]
        .iter()
        .map(|token| (*token).to_string())
        .collect();

    Some(arguments)
}
