//! Request resolution.
//!
//! # Responsibilities
//! - Substitute an exact alias before matching
//! - Fold over every registered route, keeping the best candidate
//! - Collect methods of path-matching routes that reject the method
//!
//! # Candidate Rules
//! Applied in order to each route whose tokens match the request:
//! ```text
//! 1. Specificity:   more bound arguments than the best → skip
//! 2. Method:        method rejected (once a best exists) → record its
//!                   allowed methods, skip
//! 3. Base URL:      both sides set and different → skip
//! 4. Duplicate:     same path + base URL as a best that allows the
//!                   method → skip
//! 5. Otherwise:     candidate replaces the best
//! ```
//!
//! # Design Decisions
//! - Later routes that pass every rule replace earlier ones, so
//!   registration order is priority among equals
//! - The first path match is taken even if its method is rejected; a
//!   later route allowing the method replaces it

use std::sync::Arc;

use crate::routing::container::{AliasTable, RouteSet};
use crate::routing::matcher::{match_tokens, Arguments};
use crate::routing::result::{BoundRoute, ResolutionResult};
use crate::routing::route::RouteDefinition;
use crate::routing::token::tokenize;

/// Resolves requests against a route set and alias table.
#[derive(Debug)]
pub struct Resolver<'a, S: ?Sized, A: ?Sized> {
    routes: &'a S,
    aliases: &'a A,
}

impl<'a, S, A> Resolver<'a, S, A>
where
    S: RouteSet + ?Sized,
    A: AliasTable + ?Sized,
{
    pub fn new(routes: &'a S, aliases: &'a A) -> Self {
        Self { routes, aliases }
    }

    /// Resolve `method` + `path`, optionally restricted to `base_url`.
    pub fn resolve(&self, method: &str, path: &str, base_url: Option<&str>) -> ResolutionResult {
        let path = match self.aliases.alias_by_alias(path) {
            Some(alias) => {
                tracing::trace!(alias = %path, path = %alias.path(), "Alias substituted");
                alias.path()
            }
            None => path,
        };

        let request = Request {
            method,
            path_tokens: tokenize(path),
            base_url: base_url.filter(|url| !url.is_empty()),
        };

        let result = self
            .routes
            .routes()
            .iter()
            .fold(Selection::default(), |selection, route| selection.consider(&request, route))
            .finish(method);

        tracing::debug!(
            method = %method,
            path = %path,
            outcome = result.outcome(),
            "Request resolved"
        );
        result
    }
}

struct Request<'r> {
    method: &'r str,
    path_tokens: Vec<&'r str>,
    base_url: Option<&'r str>,
}

/// Fold accumulator: the best candidate so far and the methods collected
/// from rejected ones.
#[derive(Default)]
struct Selection<'r> {
    best: Option<(&'r Arc<RouteDefinition>, Arguments)>,
    allowed_methods: Vec<String>,
}

impl<'r> Selection<'r> {
    fn consider(mut self, request: &Request<'_>, route: &'r Arc<RouteDefinition>) -> Self {
        let matched = match_tokens(&request.path_tokens, route.tokens(), route.is_dynamic());
        let Some(arguments) = matched else {
            return self;
        };

        if let Some((_, best_arguments)) = &self.best {
            if arguments.len() > best_arguments.len() {
                tracing::trace!(route = %route.path(), "Less specific than current best");
                return self;
            }

            if !route.is_method_allowed(request.method) {
                tracing::trace!(
                    route = %route.path(),
                    method = %request.method,
                    "Method not allowed"
                );
                self.merge_allowed(route);
                return self;
            }
        }

        if let (Some(expected), Some(actual)) = (request.base_url, route.base_url()) {
            if expected != actual {
                tracing::trace!(route = %route.path(), base_url = %actual, "Base URL mismatch");
                return self;
            }
        }

        if let Some((best, _)) = &self.best {
            if best.path() == route.path()
                && best.base_url() == route.base_url()
                && best.is_method_allowed(request.method)
            {
                tracing::trace!(route = %route.path(), "Already matched with this method");
                return self;
            }
        }

        self.best = Some((route, arguments));
        self
    }

    fn merge_allowed(&mut self, route: &RouteDefinition) {
        for method in route.allowed_methods() {
            if !self.allowed_methods.contains(method) {
                self.allowed_methods.push(method.clone());
            }
        }
    }

    fn finish(mut self, method: &str) -> ResolutionResult {
        match self.best.take() {
            None => ResolutionResult::NotFound,
            Some((route, arguments)) if route.is_method_allowed(method) => {
                ResolutionResult::Matched(BoundRoute::new(Arc::clone(route), arguments))
            }
            Some((route, _)) => {
                self.merge_allowed(route);
                ResolutionResult::MethodNotAllowed(self.allowed_methods)
            }
        }
    }
}
