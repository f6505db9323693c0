//! Hot-swappable router snapshot.
//!
//! Readers load the current `Arc<Router>` and resolve against it without
//! locking. A reload builds a complete new router and swaps it in; readers
//! already holding the old snapshot finish against it.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::RouterConfig;
use crate::routing::result::ResolutionResult;
use crate::routing::router::Router;

#[derive(Debug)]
pub struct SharedRouter {
    current: ArcSwap<Router>,
}

impl SharedRouter {
    pub fn new(router: Router) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// Current snapshot.
    pub fn load(&self) -> Arc<Router> {
        self.current.load_full()
    }

    /// Replace the snapshot.
    pub fn store(&self, router: Router) {
        self.current.store(Arc::new(router));
    }

    /// Rebuild from a validated configuration and swap it in.
    pub fn apply_config(&self, config: &RouterConfig) {
        let router = Router::from_config(config);
        tracing::info!(routes = router.container().len(), "Route table swapped");
        self.store(router);
    }

    /// Route against the current snapshot.
    pub fn route(&self, method: &str, path: &str, base_url: Option<&str>) -> ResolutionResult {
        self.current.load().route(method, path, base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use crate::routing::container::RouteContainer;

    #[test]
    fn test_swap_is_visible_to_new_readers() {
        let shared = SharedRouter::new(Router::new(RouteContainer::new()));
        assert!(shared.route("GET", "/status", None).is_empty());

        let old = shared.load();

        let config = RouterConfig {
            routes: vec![RouteConfig::new("/status", "status")],
            ..Default::default()
        };
        shared.apply_config(&config);

        assert!(shared.route("GET", "/status", None).has_route());
        // Snapshot taken before the swap is unchanged.
        assert!(old.route("GET", "/status", None).is_empty());
    }

    #[test]
    fn test_concurrent_readers() {
        let config = RouterConfig {
            routes: vec![RouteConfig::new("/items/%id%", "item")],
            ..Default::default()
        };
        let shared = Arc::new(SharedRouter::new(Router::from_config(&config)));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let path = format!("/items/{}", i);
                    let result = shared.route("GET", &path, None);
                    result.route().and_then(|r| r.argument("id")).map(str::to_string)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(i.to_string()));
        }
    }
}
