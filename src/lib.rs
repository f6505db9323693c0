//! Route resolution library.
//!
//! Resolves a request (method, path, optional base URL) against an ordered
//! set of route definitions, selecting the single best match and binding
//! its path parameters.
//!
//! ```
//! use route_resolver::{RouteContainer, RouteDefinition, Router};
//!
//! let mut routes = RouteContainer::new();
//! routes
//!     .add_route(RouteDefinition::new("/users/%id%", "show").with_methods(["GET"]))
//!     .add_route(RouteDefinition::new("/users/me", "me").with_methods(["GET"]));
//!
//! let router = Router::new(routes);
//! let result = router.route("GET", "/users/42", None);
//! assert_eq!(result.route().unwrap().argument("id"), Some("42"));
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::{
    Alias, Arguments, BoundRoute, ResolutionResult, Resolver, RouteContainer, RouteDefinition,
    Router, SharedRouter,
};
