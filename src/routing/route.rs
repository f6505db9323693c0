//! Route definitions.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::schema::{AliasConfig, RouteConfig};
use crate::routing::token::{tokenize_pattern, Token};

/// An immutable route template.
///
/// The path pattern is tokenized once on construction. Matching never
/// touches a definition; bound arguments live on a
/// [`BoundRoute`](crate::routing::result::BoundRoute).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDefinition {
    id: Option<String>,
    path: String,
    callback: String,
    /// Uppercased, de-duplicated. Empty allows every method.
    methods: Vec<String>,
    base_url: Option<String>,
    dynamic: bool,
    #[serde(rename = "arguments", skip_serializing_if = "BTreeMap::is_empty")]
    predefined_arguments: BTreeMap<String, String>,
    #[serde(skip)]
    tokens: Vec<Token>,
}

impl RouteDefinition {
    /// Create a route for `path` handled by `callback`, allowing all methods.
    pub fn new(path: impl Into<String>, callback: impl Into<String>) -> Self {
        let path = path.into();
        let tokens = tokenize_pattern(&path);
        Self {
            id: None,
            path,
            callback: callback.into(),
            methods: Vec::new(),
            base_url: None,
            dynamic: false,
            predefined_arguments: BTreeMap::new(),
            tokens,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Restrict the route to the given methods.
    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.methods.clear();
        for method in methods {
            let method = method.as_ref().to_ascii_uppercase();
            if !self.methods.contains(&method) {
                self.methods.push(method);
            }
        }
        self
    }

    /// Restrict the route to a base URL. An empty base URL means none.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = (!base_url.is_empty()).then_some(base_url);
        self
    }

    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// Attach a static argument passed along to the handler unchanged.
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.predefined_arguments.insert(name.into(), value.into());
        self
    }

    /// Build a definition from its configuration entry.
    pub fn from_config(config: &RouteConfig) -> Self {
        let mut route = Self::new(config.path.clone(), config.callback.clone())
            .with_methods(&config.methods)
            .with_dynamic(config.dynamic);

        if let Some(id) = &config.id {
            route = route.with_id(id.clone());
        }
        if let Some(base_url) = &config.base_url {
            route = route.with_base_url(base_url.clone());
        }
        for (name, value) in &config.arguments {
            route = route.with_argument(name.clone(), value.clone());
        }
        route
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn callback(&self) -> &str {
        &self.callback
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether trailing segments beyond the pattern are accepted.
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.methods.is_empty() || self.methods.iter().any(|m| m.eq_ignore_ascii_case(method))
    }

    /// Explicitly allowed methods; empty when every method is allowed.
    pub fn allowed_methods(&self) -> &[String] {
        &self.methods
    }

    pub fn predefined_arguments(&self) -> &BTreeMap<String, String> {
        &self.predefined_arguments
    }
}

/// A static rewrite from one request path to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alias {
    alias: String,
    path: String,
}

impl Alias {
    pub fn new(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
        }
    }

    pub fn from_config(config: &AliasConfig) -> Self {
        Self::new(config.alias.clone(), config.path.clone())
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// The canonical path the alias resolves to.
    pub fn path(&self) -> &str {
        &self.path
    }
}
