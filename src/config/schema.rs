//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the resolver.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration: routes, aliases and ambient settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions, in priority order.
    pub routes: Vec<RouteConfig>,

    /// Exact path rewrites applied before matching.
    pub aliases: Vec<AliasConfig>,

    /// Route answering `/` when no route matches it.
    pub default_route: Option<DefaultRouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single route definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Optional identifier, unique across routes.
    #[serde(default)]
    pub id: Option<String>,

    /// Path pattern, e.g. `/users/%id%`.
    pub path: String,

    /// Handler name passed through to the caller.
    pub callback: String,

    /// Allowed methods. Empty allows every method.
    #[serde(default)]
    pub methods: Vec<String>,

    /// Base URL the route is restricted to.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Accept trailing segments beyond the pattern.
    #[serde(default)]
    pub dynamic: bool,

    /// Static arguments passed along with the match.
    #[serde(default)]
    pub arguments: BTreeMap<String, String>,
}

impl RouteConfig {
    /// Route for `path` with every optional field unset.
    pub fn new(path: impl Into<String>, callback: impl Into<String>) -> Self {
        Self {
            id: None,
            path: path.into(),
            callback: callback.into(),
            methods: Vec::new(),
            base_url: None,
            dynamic: false,
            arguments: BTreeMap::new(),
        }
    }
}

/// Alias from one request path to another.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AliasConfig {
    pub alias: String,
    pub path: String,
}

/// Default route configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultRouteConfig {
    pub callback: String,

    #[serde(default)]
    pub id: Option<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Record resolution counters.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: true,
        }
    }
}
