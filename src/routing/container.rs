//! Route and alias storage.
//!
//! # Responsibilities
//! - Hold route definitions in registration order
//! - Index aliases by their alias path
//! - Expose both through the `RouteSet` / `AliasTable` seams the resolver
//!   consumes
//!
//! # Design Decisions
//! - Definitions are stored behind `Arc` so matches can share them
//! - Registration order is never changed (it breaks ties between
//!   equally specific routes)

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::schema::RouterConfig;
use crate::routing::route::{Alias, RouteDefinition};

/// Ordered collection of route definitions.
pub trait RouteSet {
    /// All routes, in registration order.
    fn routes(&self) -> &[Arc<RouteDefinition>];
}

/// Exact-match lookup of path aliases.
pub trait AliasTable {
    fn alias_by_alias(&self, alias: &str) -> Option<&Alias>;
}

/// In-memory route set and alias table.
#[derive(Debug, Clone, Default)]
pub struct RouteContainer {
    routes: Vec<Arc<RouteDefinition>>,
    aliases: HashMap<String, Alias>,
}

impl RouteContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a container from configuration, keeping file order.
    pub fn from_config(config: &RouterConfig) -> Self {
        let mut container = Self::new();
        for route in &config.routes {
            container.add_route(RouteDefinition::from_config(route));
        }
        for alias in &config.aliases {
            container.add_alias(Alias::from_config(alias));
        }

        tracing::debug!(
            routes = container.routes.len(),
            aliases = container.aliases.len(),
            "Route container built"
        );
        container
    }

    /// Register a route after all previously registered ones.
    pub fn add_route(&mut self, route: RouteDefinition) -> &mut Self {
        self.routes.push(Arc::new(route));
        self
    }

    /// Register an alias, replacing any alias with the same path.
    pub fn add_alias(&mut self, alias: Alias) -> &mut Self {
        self.aliases.insert(alias.alias().to_string(), alias);
        self
    }

    pub fn route_by_id(&self, id: &str) -> Option<&Arc<RouteDefinition>> {
        self.routes.iter().find(|route| route.id() == Some(id))
    }

    /// Route definitions, in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter().map(|route| &**route)
    }

    /// All aliases, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.values()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteSet for RouteContainer {
    fn routes(&self) -> &[Arc<RouteDefinition>] {
        &self.routes
    }
}

impl AliasTable for RouteContainer {
    fn alias_by_alias(&self, alias: &str) -> Option<&Alias> {
        self.aliases.get(alias)
    }
}
