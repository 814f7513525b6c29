//! Navigator: a router wired to an in-memory history
//!
//! The navigator is the dispatch orchestrator. Navigation calls (`push`,
//! `submit`, `trans`, ...) only assign requests to the history; nothing runs
//! until [`Navigator::process`] drains the queue, mirroring a browser that
//! fires its navigation events on a later turn of the event loop.

use crate::dispatch::dispatch;
use crate::error::DispatchOutcome;
use crate::history::{History, Location, NavigationEvent};
use crate::method::Method;
use crate::params::QueryParams;
use crate::request::Request;
use crate::router::Router;
use crate::transition;
use crate::{debug_log, trace_log};

// ============================================================================
// NavigatorConfig
// ============================================================================

/// Runtime configuration for a [`Navigator`]
///
/// # Example
///
/// ```
/// use spa_router::NavigatorConfig;
///
/// let config = NavigatorConfig::default()
///     .initial_path("/home")
///     .history_limit(50);
/// assert_eq!(config.initial_path, "/home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Location the history starts at
    pub initial_path: String,
    /// Maximum history entries (0 = unlimited)
    pub history_limit: usize,
    /// Route lookup cache capacity
    #[cfg(feature = "cache")]
    pub cache_capacity: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            history_limit: History::DEFAULT_MAX_SIZE,
            #[cfg(feature = "cache")]
            cache_capacity: crate::cache::RouteCache::DEFAULT_CAPACITY,
        }
    }
}

impl NavigatorConfig {
    pub fn initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[cfg(feature = "cache")]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Router plus history, with deferred dispatch
///
/// # Example
///
/// ```
/// use spa_router::Navigator;
///
/// let mut nav = Navigator::new();
/// nav.router_mut().get("/users/:id", |_| ()).unwrap();
/// nav.router_mut().state("/panel", |_| ()).unwrap();
///
/// nav.push("/users/1");
/// nav.trans_with("/panel", [("open", "1")]);
///
/// let outcomes = nav.process();
/// assert!(outcomes.iter().all(|o| o.is_handled()));
/// assert_eq!(nav.current_path(), "/users/1");
/// ```
#[derive(Debug, Clone)]
pub struct Navigator {
    router: Router,
    history: History,
}

impl Navigator {
    /// Create a navigator with an empty router and default configuration
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    pub fn with_config(config: NavigatorConfig) -> Self {
        #[cfg(feature = "cache")]
        let router = Router::with_cache_capacity(config.cache_capacity);
        #[cfg(not(feature = "cache"))]
        let router = Router::new();

        Self::with_router(router, config)
    }

    /// Wrap an already populated router
    pub fn with_router(router: Router, config: NavigatorConfig) -> Self {
        Self {
            router,
            history: History::with_max_size(config.initial_path, config.history_limit),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_path(&self) -> &str {
        self.history.current_path()
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Navigate to `path` with a `get` request
    pub fn push(&mut self, path: &str) {
        self.navigate(Method::Get, path, "");
    }

    /// Assign a navigational request with an explicit method and title
    pub fn navigate(&mut self, method: impl Into<Method>, path: &str, title: &str) {
        self.assign(Request::new(method.into(), path, title));
    }

    /// Submit form data: the fields travel in the query string
    pub fn submit<I, K, V>(&mut self, method: impl Into<Method>, path: &str, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let full_path = QueryParams::from_pairs(fields).append_to(path);
        self.assign(Request::new(method.into(), full_path, ""));
    }

    /// Replace the current history entry and dispatch a `get` for it
    pub fn replace(&mut self, path: &str) -> NavigationEvent {
        let event = self.history.replace(path, "");
        self.history.enqueue(Request::new(Method::Get, path, ""));
        event
    }

    /// State transition to `path`
    pub fn trans(&mut self, path: &str) {
        transition::trans(&mut self.history, path);
    }

    /// State transition to `path` carrying `data`
    pub fn trans_with<I, K, V>(&mut self, path: &str, data: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        transition::trans_with(&mut self.history, path, data);
    }

    /// Step back in history and re-dispatch the entry with its recorded method
    pub fn back(&mut self) -> Option<NavigationEvent> {
        let event = self.history.back()?;
        self.revisit(&event);
        Some(event)
    }

    /// Step forward in history and re-dispatch the entry with its recorded method
    pub fn forward(&mut self) -> Option<NavigationEvent> {
        let event = self.history.forward()?;
        self.revisit(&event);
        Some(event)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn revisit(&mut self, event: &NavigationEvent) {
        let entry = self.history.current_entry();
        let request = Request::new(entry.method.clone(), event.to.as_str(), entry.title.as_str());
        self.history.enqueue(request);
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Dispatch every queued request, oldest first
    pub fn process(&mut self) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::with_capacity(self.history.pending_len());
        while let Some(request) = self.history.next_pending() {
            outcomes.push(dispatch(&mut self.router, request));
        }
        if !outcomes.is_empty() {
            debug_log!("Processed {} queued requests", outcomes.len());
        }
        outcomes
    }

    /// Number of requests waiting for [`Navigator::process`]
    pub fn pending(&self) -> usize {
        self.history.pending_len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Location for Navigator {
    fn assign(&mut self, request: Request) {
        trace_log!("Navigator assigned {} '{}'", request.method(), request.full_path());
        self.history.assign(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_nothing_runs_until_processed() {
        let hits = Arc::new(Mutex::new(0));
        let counter = hits.clone();

        let mut nav = Navigator::new();
        nav.router_mut()
            .get("/a", move |_: &Request| *counter.lock().unwrap() += 1)
            .unwrap();

        nav.push("/a");
        assert_eq!(*hits.lock().unwrap(), 0);
        assert_eq!(nav.pending(), 1);

        nav.process();
        assert_eq!(*hits.lock().unwrap(), 1);
        assert_eq!(nav.pending(), 0);
    }

    #[test]
    fn test_push_moves_location_and_trans_does_not() {
        let mut nav = Navigator::new();
        nav.router_mut().get("/page", |_| ()).unwrap();
        nav.router_mut().state("/page/edit", |_| ()).unwrap();

        nav.push("/page");
        nav.trans("/page/edit");

        assert_eq!(nav.current_path(), "/page");
        assert_eq!(nav.history().len(), 2);

        let outcomes = nav.process();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(DispatchOutcome::is_handled));
    }

    #[test]
    fn test_submit_encodes_fields() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();

        let mut nav = Navigator::new();
        nav.router_mut()
            .post("/login", move |req: &Request| {
                *sink.lock().unwrap() = req.query().get("user").cloned();
            })
            .unwrap();

        nav.submit("post", "/login", [("user", "ada lovelace")]);
        nav.process();

        assert_eq!(nav.current_path(), "/login?user=ada+lovelace");
        assert_eq!(*seen.lock().unwrap(), Some("ada lovelace".to_string()));
    }

    #[test]
    fn test_submit_onto_existing_query() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let mut nav = Navigator::new();
        nav.router_mut()
            .get("/search", move |req: &Request| {
                let query = req.query();
                sink.lock()
                    .unwrap()
                    .push((query.get("x").cloned(), query.get("q").cloned()));
            })
            .unwrap();

        nav.submit("get", "/search?x=1", [("q", "a")]);
        nav.process();

        assert_eq!(nav.current_path(), "/search?x=1&q=a");
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(Some("1".to_string()), Some("a".to_string()))]
        );
    }

    #[test]
    fn test_back_and_forward_replay_method() {
        let mut nav = Navigator::new();
        nav.router_mut().get("/", |_| ()).unwrap();
        nav.router_mut().post("/login", |_| ()).unwrap();

        nav.submit("post", "/login", [("user", "ada")]);
        assert!(nav.process()[0].is_handled());

        nav.back().unwrap();
        nav.forward().unwrap();
        let outcomes = nav.process();

        assert_eq!(
            outcomes,
            vec![
                DispatchOutcome::Handled {
                    path: "/".to_string(),
                    route: "/".to_string(),
                },
                DispatchOutcome::Handled {
                    path: "/login".to_string(),
                    route: "/login".to_string(),
                },
            ]
        );
        assert_eq!(nav.history().current_entry().method, Method::Post);
    }

    #[test]
    fn test_back_and_forward_redispatch() {
        let mut nav = Navigator::new();
        nav.router_mut().get("/", |_| ()).unwrap();
        nav.router_mut().get("/next", |_| ()).unwrap();

        nav.push("/next");
        nav.process();

        let event = nav.back().unwrap();
        assert_eq!(event.to, "/");
        assert!(nav.can_go_forward());

        nav.forward().unwrap();
        let outcomes = nav.process();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].path(), "/");
        assert_eq!(outcomes[1].path(), "/next");
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let mut nav = Navigator::new();
        nav.push("/login");
        nav.replace("/dashboard");

        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.current_path(), "/dashboard");

        let outcomes = nav.process();
        assert!(outcomes.iter().all(DispatchOutcome::is_not_found));
    }

    #[test]
    fn test_config() {
        let nav = Navigator::with_config(
            NavigatorConfig::default()
                .initial_path("/start")
                .history_limit(2),
        );
        assert_eq!(nav.current_path(), "/start");
        assert!(!nav.can_go_back());
    }
}
