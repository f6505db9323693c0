//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route patterns, methods and base URLs
//! - Detect duplicate route ids, aliases and parameters
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{AliasConfig, RouteConfig, RouterConfig};
use crate::routing::token::tokenize_pattern;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route {route}: path must start with '/', got {path:?}")]
    InvalidPath { route: usize, path: String },

    #[error("route {route}: invalid method {method:?}")]
    InvalidMethod { route: usize, method: String },

    #[error("route {route}: base URL must not be empty")]
    InvalidBaseUrl { route: usize },

    #[error("route {route}: parameter {name:?} appears more than once")]
    DuplicateParameter { route: usize, name: String },

    #[error("duplicate route id {0:?}")]
    DuplicateRouteId(String),

    #[error("alias {alias:?}: alias and target must start with '/', target is {path:?}")]
    InvalidAlias { alias: String, path: String },

    #[error("duplicate alias {0:?}")]
    DuplicateAlias(String),

    #[error("alias {0:?} points to itself")]
    AliasLoop(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        validate_route(index, route, &mut errors);

        if let Some(id) = &route.id {
            if !ids.insert(id.as_str()) {
                errors.push(ValidationError::DuplicateRouteId(id.clone()));
            }
        }
    }

    let mut aliases = HashSet::new();
    for alias in &config.aliases {
        validate_alias(alias, &mut errors);

        if !aliases.insert(alias.alias.as_str()) {
            errors.push(ValidationError::DuplicateAlias(alias.alias.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_route(index: usize, route: &RouteConfig, errors: &mut Vec<ValidationError>) {
    if !route.path.starts_with('/') {
        errors.push(ValidationError::InvalidPath {
            route: index,
            path: route.path.clone(),
        });
    }

    for method in &route.methods {
        if method.is_empty() || !method.chars().all(|c| c.is_ascii_alphabetic()) {
            errors.push(ValidationError::InvalidMethod {
                route: index,
                method: method.clone(),
            });
        }
    }

    if route.base_url.as_deref() == Some("") {
        errors.push(ValidationError::InvalidBaseUrl { route: index });
    }

    let mut seen = HashSet::new();
    for token in tokenize_pattern(&route.path) {
        if let Some(name) = token.parameter_name() {
            if !seen.insert(name.to_string()) {
                errors.push(ValidationError::DuplicateParameter {
                    route: index,
                    name: name.to_string(),
                });
            }
        }
    }
}

fn validate_alias(alias: &AliasConfig, errors: &mut Vec<ValidationError>) {
    if !alias.alias.starts_with('/') || !alias.path.starts_with('/') {
        errors.push(ValidationError::InvalidAlias {
            alias: alias.alias.clone(),
            path: alias.path.clone(),
        });
    }

    if alias.alias == alias.path {
        errors.push(ValidationError::AliasLoop(alias.alias.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let mut route = RouteConfig::new("/users/%id%", "user");
        route.methods = vec!["GET".into(), "post".into()];
        route.id = Some("user".into());

        let config = RouterConfig {
            routes: vec![route, RouteConfig::new("/", "home")],
            aliases: vec![AliasConfig {
                alias: "/u".into(),
                path: "/users".into(),
            }],
            ..Default::default()
        };

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_all_errors_reported() {
        let mut bad_method = RouteConfig::new("/a", "a");
        bad_method.methods = vec!["G3T".into(), "".into()];
        bad_method.id = Some("dup".into());

        let mut bad_base = RouteConfig::new("/%x%/%x%", "b");
        bad_base.base_url = Some(String::new());
        bad_base.id = Some("dup".into());

        let config = RouterConfig {
            routes: vec![RouteConfig::new("relative", "r"), bad_method, bad_base],
            aliases: vec![
                AliasConfig {
                    alias: "/same".into(),
                    path: "/same".into(),
                },
                AliasConfig {
                    alias: "/same".into(),
                    path: "target".into(),
                },
            ],
            ..Default::default()
        };

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidPath {
            route: 0,
            path: "relative".into()
        }));
        assert!(errors.contains(&ValidationError::InvalidMethod {
            route: 1,
            method: "G3T".into()
        }));
        assert!(errors.contains(&ValidationError::InvalidMethod {
            route: 1,
            method: "".into()
        }));
        assert!(errors.contains(&ValidationError::InvalidBaseUrl { route: 2 }));
        assert!(errors.contains(&ValidationError::DuplicateParameter {
            route: 2,
            name: "x".into()
        }));
        assert!(errors.contains(&ValidationError::DuplicateRouteId("dup".into())));
        assert!(errors.contains(&ValidationError::AliasLoop("/same".into())));
        assert!(errors.contains(&ValidationError::DuplicateAlias("/same".into())));
        assert!(errors.contains(&ValidationError::InvalidAlias {
            alias: "/same".into(),
            path: "target".into()
        }));
        assert_eq!(errors.len(), 9);
    }
}
