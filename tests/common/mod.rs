//! Shared fixtures for integration tests.

use std::io::Write;

use route_resolver::{RouteContainer, RouteDefinition, Router};

/// A sample route file covering literals, parameters, dynamic routes,
/// base URLs, aliases and the default route.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"
[[routes]]
id = "users.list"
path = "/users"
callback = "users::list"
methods = ["GET"]

[[routes]]
id = "users.create"
path = "/users"
callback = "users::create"
methods = ["POST"]

[[routes]]
id = "users.show"
path = "/users/%id%"
callback = "users::show"
methods = ["GET"]

[[routes]]
id = "users.me"
path = "/users/me"
callback = "users::me"
methods = ["GET"]

[[routes]]
id = "assets"
path = "/assets"
callback = "assets::serve"
dynamic = true

[[routes]]
id = "admin.dashboard"
path = "/dashboard"
callback = "admin::dashboard"
base_url = "/admin"

[[aliases]]
alias = "/me"
path = "/users/me"

[default_route]
callback = "home::index"

[observability]
metrics_enabled = false
"#;

/// Write `content` to a temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Build a router from route definitions, in the given order.
#[allow(dead_code)]
pub fn router(routes: Vec<RouteDefinition>) -> Router {
    let mut container = RouteContainer::new();
    for route in routes {
        container.add_route(route);
    }
    Router::new(container)
}

/// Callback of the matched route, if any.
#[allow(dead_code)]
pub fn matched_callback(
    router: &Router,
    method: &str,
    path: &str,
    base_url: Option<&str>,
) -> Option<String> {
    router
        .route(method, path, base_url)
        .route()
        .map(|route| route.definition().callback().to_string())
}
