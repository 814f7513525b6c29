//! Requests handed to filters and routes

use crate::method::Method;
use crate::params::{QueryParams, RouteParams};

/// A request to be routed
///
/// Built from a method, a full path (which may carry a query string) and a
/// title. The dispatcher fills in [`Request::params`] with the values captured
/// by whichever entry is about to run.
///
/// # Example
///
/// ```
/// use spa_router::{Method, Request};
///
/// let request = Request::new(Method::Get, "/search?q=rust", "Search");
/// assert_eq!(request.path(), "/search");
/// assert_eq!(request.query().get("q"), Some(&"rust".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    full_path: String,
    path: String,
    title: String,
    query: QueryParams,
    /// Parameters captured by the entry currently handling this request
    pub params: RouteParams,
}

impl Request {
    /// Create a request from its method, full path and title
    pub fn new(method: Method, full_path: impl Into<String>, title: impl Into<String>) -> Self {
        let full_path = full_path.into();
        let (path, query) = match full_path.split_once('?') {
            Some((path, query)) => (path.to_string(), QueryParams::from_query_string(query)),
            None => (full_path.clone(), QueryParams::new()),
        };

        Self {
            method,
            full_path,
            path,
            title: title.into(),
            query,
            params: RouteParams::new(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path including the query string
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Path without the query string
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Decoded query string data
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Whether this request represents a state transition
    pub fn is_state(&self) -> bool {
        self.method == Method::State
    }

    /// Look up a value, preferring captured path params over query data
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .or_else(|| self.query.get(key))
            .map(String::as_str)
    }
}
