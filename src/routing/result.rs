//! Resolution results.
//!
//! A resolution ends in exactly one of three shapes: a matched route with
//! its bound arguments, the methods allowed on a route whose path matched
//! (405), or nothing (404).

use std::sync::Arc;

use serde_json::{json, Value};

use crate::routing::matcher::Arguments;
use crate::routing::route::RouteDefinition;

/// A route definition paired with the arguments bound for one request.
///
/// The definition is shared; only the arguments belong to the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundRoute {
    definition: Arc<RouteDefinition>,
    arguments: Arguments,
}

impl BoundRoute {
    pub fn new(definition: Arc<RouteDefinition>, arguments: Arguments) -> Self {
        Self { definition, arguments }
    }

    pub fn definition(&self) -> &RouteDefinition {
        &self.definition
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Bound value of a named parameter.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name)
    }

    /// Trailing segments captured by a dynamic route.
    pub fn tail(&self) -> &[String] {
        &self.arguments.tail
    }
}

/// Outcome of resolving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    Matched(BoundRoute),
    /// The path matched but the method did not; carries what is allowed.
    MethodNotAllowed(Vec<String>),
    NotFound,
}

impl ResolutionResult {
    pub fn has_route(&self) -> bool {
        matches!(self, ResolutionResult::Matched(_))
    }

    pub fn route(&self) -> Option<&BoundRoute> {
        match self {
            ResolutionResult::Matched(route) => Some(route),
            _ => None,
        }
    }

    pub fn into_route(self) -> Option<BoundRoute> {
        match self {
            ResolutionResult::Matched(route) => Some(route),
            _ => None,
        }
    }

    /// Methods allowed on the matched path; empty unless method not allowed.
    pub fn allowed_methods(&self) -> &[String] {
        match self {
            ResolutionResult::MethodNotAllowed(methods) => methods,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ResolutionResult::NotFound)
    }

    /// HTTP status a caller would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ResolutionResult::Matched(_) => 200,
            ResolutionResult::MethodNotAllowed(_) => 405,
            ResolutionResult::NotFound => 404,
        }
    }

    /// Metric label for this outcome.
    pub fn outcome(&self) -> &'static str {
        match self {
            ResolutionResult::Matched(_) => "matched",
            ResolutionResult::MethodNotAllowed(_) => "method_not_allowed",
            ResolutionResult::NotFound => "not_found",
        }
    }

    /// JSON report used by the CLI.
    pub fn to_json(&self) -> Value {
        match self {
            ResolutionResult::Matched(route) => json!({
                "status": self.status_code(),
                "route": route.definition(),
                "arguments": route.arguments().named,
                "tail": route.tail(),
                "allowed_methods": [],
            }),
            ResolutionResult::MethodNotAllowed(methods) => json!({
                "status": self.status_code(),
                "route": null,
                "arguments": {},
                "tail": [],
                "allowed_methods": methods,
            }),
            ResolutionResult::NotFound => json!({
                "status": self.status_code(),
                "route": null,
                "arguments": {},
                "tail": [],
                "allowed_methods": [],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_are_exclusive() {
        let route = Arc::new(RouteDefinition::new("/", "home"));
        let matched = ResolutionResult::Matched(BoundRoute::new(route, Arguments::default()));
        assert!(matched.has_route());
        assert!(matched.allowed_methods().is_empty());
        assert!(!matched.is_empty());

        let rejected = ResolutionResult::MethodNotAllowed(vec!["POST".into()]);
        assert!(!rejected.has_route());
        assert_eq!(rejected.allowed_methods(), &["POST".to_string()]);
        assert!(!rejected.is_empty());

        let missing = ResolutionResult::NotFound;
        assert!(missing.route().is_none());
        assert!(missing.is_empty());
    }

    #[test]
    fn test_json_report() {
        let route = Arc::new(RouteDefinition::new("/users/%id%", "user").with_id("user"));
        let mut arguments = Arguments::default();
        arguments.named.insert("id".into(), "7".into());

        let report = ResolutionResult::Matched(BoundRoute::new(route, arguments)).to_json();
        assert_eq!(report["status"], 200);
        assert_eq!(report["route"]["id"], "user");
        assert_eq!(report["arguments"]["id"], "7");

        let report = ResolutionResult::MethodNotAllowed(vec!["POST".into()]).to_json();
        assert_eq!(report["status"], 405);
        assert_eq!(report["allowed_methods"][0], "POST");

        assert_eq!(ResolutionResult::NotFound.to_json()["status"], 404);
    }
}
