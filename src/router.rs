//! Route and filter tables
//!
//! A [`Router`] owns three ordered, append-only tables: routes, before
//! filters and after filters. Registration appends; [`Router::remove_all_routes`]
//! empties all three at once. Nothing else mutates them.
//!
//! Lookups scan in registration order. Routes are first-match (an earlier
//! registration shadows a later overlapping one); filters are all-match.

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, RouteCache};
use crate::error::RouterError;
use crate::matcher::PathPattern;
use crate::method::{Method, MethodMatcher};
use crate::request::Request;
use crate::route::{IntoFlow, RouteEntry, RouteRef};
use crate::{debug_log, trace_log};
use std::fmt;
use std::sync::Arc;

/// Which filter table a filter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Runs before the matched route; may halt the chain
    Before,
    /// Runs after the matched route
    After,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Before => f.write_str("before"),
            FilterKind::After => f.write_str("after"),
        }
    }
}

/// Registry of routes and filters
///
/// # Example
///
/// ```
/// use spa_router::{Method, Router};
///
/// let mut router = Router::new();
/// router.get("/foo/:id", |req| println!("first {:?}", req.params.get("id"))).unwrap();
/// router.get("/foo/:id", |_| println!("never reached")).unwrap();
/// router.before(|_| true);
///
/// let route = router.lookup_route(&Method::Get, "/foo/5").unwrap();
/// assert_eq!(route.pattern().to_string(), "/foo/:id");
/// assert_eq!(router.lookup_before_filters(&Method::Post, "/anything").len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Router {
    routes: Vec<RouteRef>,
    before: Vec<RouteRef>,
    after: Vec<RouteRef>,
    #[cfg(feature = "cache")]
    cache: RouteCache,
}

impl Router {
    /// Create a router with empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router whose lookup cache holds `capacity` entries
    #[cfg(feature = "cache")]
    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            cache: RouteCache::with_capacity(capacity),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------------
    // Route factory
    // ------------------------------------------------------------------------

    /// Register a route for `method` and `path`
    pub fn route<F, R>(
        &mut self,
        method: impl Into<Method>,
        path: &str,
        handler: F,
    ) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        let pattern = PathPattern::parse(path)?;
        let entry = Arc::new(RouteEntry::new(
            MethodMatcher::Exact(method.into()),
            pattern,
            handler,
        ));
        debug_log!("Registered route {}", entry);

        self.routes.push(entry.clone());
        #[cfg(feature = "cache")]
        self.cache.clear();
        Ok(entry)
    }

    /// Bind a method, producing a two-argument route constructor
    ///
    /// Entries registered through the binding are indistinguishable from
    /// ones registered with [`Router::route`].
    ///
    /// ```
    /// use spa_router::{Method, Router};
    ///
    /// let mut router = Router::new();
    /// let mut patch = router.bind("patch");
    /// patch.add("/users/:id", |_| ()).unwrap();
    /// patch.add("/posts/:id", |_| ()).unwrap();
    ///
    /// assert_eq!(router.routes().len(), 2);
    /// assert!(router.lookup_route(&Method::from("PATCH"), "/posts/1").is_some());
    /// ```
    pub fn bind(&mut self, method: impl Into<Method>) -> MethodBinding<'_> {
        MethodBinding {
            router: self,
            method: method.into(),
        }
    }

    /// Register a `get` route
    pub fn get<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.bind(Method::Get).add(path, handler)
    }

    /// Register a `post` route
    pub fn post<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.bind(Method::Post).add(path, handler)
    }

    /// Register a `put` route
    pub fn put<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.bind(Method::Put).add(path, handler)
    }

    /// Register a `delete` route
    pub fn delete<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.bind(Method::Delete).add(path, handler)
    }

    /// Register a route for state transitions (see [`crate::trans`])
    pub fn state<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.bind(Method::State).add(path, handler)
    }

    // ------------------------------------------------------------------------
    // Filter factory
    // ------------------------------------------------------------------------

    /// Bind one of the filter tables
    pub fn filter(&mut self, kind: FilterKind) -> FilterBinding<'_> {
        FilterBinding { router: self, kind }
    }

    /// Register a before filter applying to every request
    ///
    /// Returning `false` (or [`crate::Flow::Halt`]) from the handler stops
    /// the chain when dispatched.
    pub fn before<F, R>(&mut self, handler: F) -> RouteRef
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.filter(FilterKind::Before).all(handler)
    }

    /// Register a before filter for requests matching `path`, any method
    pub fn before_path<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.filter(FilterKind::Before).scoped(path, handler)
    }

    /// Register an after filter applying to every request
    pub fn after<F, R>(&mut self, handler: F) -> RouteRef
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.filter(FilterKind::After).all(handler)
    }

    /// Register an after filter for requests matching `path`, any method
    pub fn after_path<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.filter(FilterKind::After).scoped(path, handler)
    }

    fn push_filter(&mut self, kind: FilterKind, entry: RouteRef) -> RouteRef {
        debug_log!("Registered {} filter {}", kind, entry);
        match kind {
            FilterKind::Before => self.before.push(entry.clone()),
            FilterKind::After => self.after.push(entry.clone()),
        }
        entry
    }

    // ------------------------------------------------------------------------
    // Lookup engine
    // ------------------------------------------------------------------------

    /// First route, in registration order, accepting `(method, path)`
    pub fn lookup_route(&self, method: &Method, path: &str) -> Option<RouteRef> {
        let found = self.route_slot(method, path).map(|i| self.routes[i].clone());
        trace_log!(
            "lookup_route {} '{}' -> {}",
            method,
            path,
            found.as_ref().map_or_else(|| "none".to_string(), |r| r.to_string())
        );
        found
    }

    /// Every before filter accepting `(method, path)`, in table order
    pub fn lookup_before_filters(&self, method: &Method, path: &str) -> Vec<RouteRef> {
        Self::matching(&self.before, method, path)
    }

    /// Every after filter accepting `(method, path)`, in table order
    pub fn lookup_after_filters(&self, method: &Method, path: &str) -> Vec<RouteRef> {
        Self::matching(&self.after, method, path)
    }

    /// Look up the first matching route, consulting the lookup cache
    ///
    /// Same answer as [`Router::lookup_route`]; with the `cache` feature the
    /// scan is skipped for repeated `(method, path)` pairs.
    pub fn resolve(&mut self, method: &Method, path: &str) -> Option<RouteRef> {
        #[cfg(feature = "cache")]
        let slot = match self.cache.get(method, path) {
            Some(slot) => slot,
            None => {
                let slot = self.route_slot(method, path);
                self.cache.insert(method, path, slot);
                slot
            }
        };
        #[cfg(not(feature = "cache"))]
        let slot = self.route_slot(method, path);

        slot.map(|i| self.routes[i].clone())
    }

    fn route_slot(&self, method: &Method, path: &str) -> Option<usize> {
        self.routes
            .iter()
            .position(|entry| entry.matches(method, path))
    }

    fn matching(table: &[RouteRef], method: &Method, path: &str) -> Vec<RouteRef> {
        let found: Vec<RouteRef> = table
            .iter()
            .filter(|entry| entry.matches(method, path))
            .cloned()
            .collect();
        trace_log!(
            "{} of {} filters match {} '{}'",
            found.len(),
            table.len(),
            method,
            path
        );
        found
    }

    // ------------------------------------------------------------------------
    // Table lifecycle
    // ------------------------------------------------------------------------

    /// Empty the route table and both filter tables
    pub fn remove_all_routes(&mut self) {
        debug_log!(
            "Removing {} routes, {} before filters, {} after filters",
            self.routes.len(),
            self.before.len(),
            self.after.len()
        );
        self.routes = Vec::new();
        self.before = Vec::new();
        self.after = Vec::new();
        #[cfg(feature = "cache")]
        self.cache.clear();
    }

    /// Registered routes, in registration order
    pub fn routes(&self) -> &[RouteRef] {
        &self.routes
    }

    /// Registered filters of one kind, in registration order
    pub fn filters(&self, kind: FilterKind) -> &[RouteRef] {
        match kind {
            FilterKind::Before => &self.before,
            FilterKind::After => &self.after,
        }
    }

    /// Whether all three tables are empty
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.before.is_empty() && self.after.is_empty()
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &CacheStats {
        self.cache.stats()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("before", &self.before)
            .field("after", &self.after)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Bindings
// ============================================================================

/// Route constructor with its method already bound
///
/// Obtained from [`Router::bind`].
pub struct MethodBinding<'a> {
    router: &'a mut Router,
    method: Method,
}

impl MethodBinding<'_> {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Register a route for the bound method
    pub fn add<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        self.router.route(self.method.clone(), path, handler)
    }
}

/// Filter constructor bound to one filter table
///
/// Obtained from [`Router::filter`].
pub struct FilterBinding<'a> {
    router: &'a mut Router,
    kind: FilterKind,
}

impl FilterBinding<'_> {
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Register a filter for every method and every path
    pub fn all<F, R>(&mut self, handler: F) -> RouteRef
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        let entry = Arc::new(RouteEntry::new(MethodMatcher::Any, PathPattern::Any, handler));
        self.router.push_filter(self.kind, entry)
    }

    /// Register a filter for every method, scoped to `path`
    pub fn scoped<F, R>(&mut self, path: &str, handler: F) -> Result<RouteRef, RouterError>
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        let pattern = PathPattern::parse(path)?;
        let entry = Arc::new(RouteEntry::new(MethodMatcher::Any, pattern, handler));
        Ok(self.router.push_filter(self.kind, entry))
    }
}

// ============================================================================
// Tests
// ============================================================================
