//! Route lookup front.
//!
//! # Responsibilities
//! - Normalize the incoming method and path
//! - Delegate to the resolver
//! - Fall back to the default route for `/`
//! - Record resolution metrics
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) route scan (acceptable for typical route counts)
//! - Explicit NotFound rather than silent default, except for `/`

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

use crate::config::schema::RouterConfig;
use crate::observability::metrics;
use crate::routing::container::RouteContainer;
use crate::routing::matcher::Arguments;
use crate::routing::resolver::Resolver;
use crate::routing::result::{BoundRoute, ResolutionResult};
use crate::routing::route::RouteDefinition;

/// Immutable router over a route container.
#[derive(Debug, Clone, Default)]
pub struct Router {
    container: RouteContainer,
    default_route: Option<Arc<RouteDefinition>>,
    metrics_enabled: bool,
}

impl Router {
    pub fn new(container: RouteContainer) -> Self {
        Self {
            container,
            default_route: None,
            metrics_enabled: false,
        }
    }

    /// Route answering `/` when nothing else matches it.
    pub fn with_default_route(mut self, route: RouteDefinition) -> Self {
        self.default_route = Some(Arc::new(route));
        self
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    /// Build a router from a validated configuration.
    pub fn from_config(config: &RouterConfig) -> Self {
        let mut router = Self::new(RouteContainer::from_config(config))
            .with_metrics(config.observability.metrics_enabled);

        if let Some(default) = &config.default_route {
            let mut route = RouteDefinition::new("/", default.callback.clone());
            if let Some(id) = &default.id {
                route = route.with_id(id.clone());
            }
            router = router.with_default_route(route);
        }
        router
    }

    pub fn container(&self) -> &RouteContainer {
        &self.container
    }

    pub fn default_route(&self) -> Option<&RouteDefinition> {
        self.default_route.as_deref()
    }

    /// Resolve without normalization or fallback.
    pub fn resolve(&self, method: &str, path: &str, base_url: Option<&str>) -> ResolutionResult {
        Resolver::new(&self.container, &self.container).resolve(method, path, base_url)
    }

    /// Route an incoming request.
    ///
    /// The method is uppercased and the path stripped of its query string,
    /// fragment and trailing slash before resolving.
    pub fn route(&self, method: &str, path: &str, base_url: Option<&str>) -> ResolutionResult {
        let started = Instant::now();
        let method = method.to_ascii_uppercase();
        let path = normalize_path(path);

        let result = self.resolve(&method, &path, base_url);

        let (result, outcome) = match (result, &self.default_route) {
            (ResolutionResult::NotFound, Some(default)) if path == "/" => {
                tracing::debug!(callback = %default.callback(), "Default route used");
                let bound = BoundRoute::new(Arc::clone(default), Arguments::default());
                (ResolutionResult::Matched(bound), "default")
            }
            (result, _) => {
                let outcome = result.outcome();
                (result, outcome)
            }
        };

        if self.metrics_enabled {
            metrics::record_resolution(outcome, started);
        }
        result
    }
}

/// Strip query string, fragment and trailing slashes from a request path.
///
/// Returns the input unchanged (no allocation) when it is already clean.
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_end_matches('/');

    if path.is_empty() {
        Cow::Borrowed("/")
    } else if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{}", path))
    }
}
