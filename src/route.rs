//! Route entries
//!
//! Routes and filters share one shape: a method matcher, a path pattern and a
//! handler. A filter is simply an entry whose method matcher is
//! [`MethodMatcher::Any`] (and, for global filters, whose pattern is
//! [`PathPattern::Any`]).

use crate::matcher::PathPattern;
use crate::method::{Method, MethodMatcher};
use crate::params::RouteParams;
use crate::request::Request;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Flow
// ============================================================================

/// Whether the filter/route chain continues after a handler ran
///
/// Only before filters can stop the chain; the value returned by routes and
/// after filters is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Conversion of handler return values into [`Flow`]
///
/// Lets handlers return `()` (always continue), `bool` (`false` halts) or
/// a `Flow` directly.
pub trait IntoFlow {
    fn into_flow(self) -> Flow;
}

impl IntoFlow for Flow {
    fn into_flow(self) -> Flow {
        self
    }
}

impl IntoFlow for () {
    fn into_flow(self) -> Flow {
        Flow::Continue
    }
}

impl IntoFlow for bool {
    fn into_flow(self) -> Flow {
        if self {
            Flow::Continue
        } else {
            Flow::Halt
        }
    }
}

/// Type-erased handler stored in an entry
pub type Handler = Arc<dyn Fn(&Request) -> Flow + Send + Sync>;

/// Shared route handle.
///
/// Lookups hand out clones of these, so a lookup result stays valid even if
/// the tables are reset afterwards.
pub type RouteRef = Arc<RouteEntry>;

// ============================================================================
// RouteEntry
// ============================================================================

/// A registered route or filter
pub struct RouteEntry {
    method: MethodMatcher,
    pattern: PathPattern,
    handler: Handler,
}

impl RouteEntry {
    /// Create an entry from its matchers and a handler
    ///
    /// Handlers may return anything implementing [`IntoFlow`]:
    ///
    /// ```
    /// use spa_router::{Method, MethodMatcher, PathPattern, RouteEntry};
    ///
    /// let entry = RouteEntry::new(
    ///     MethodMatcher::Exact(Method::Get),
    ///     PathPattern::parse("/foo/:id").unwrap(),
    ///     |request| println!("foo {:?}", request.params.get("id")),
    /// );
    ///
    /// assert!(entry.matches(&Method::Get, "/foo/5"));
    /// assert!(!entry.matches(&Method::Post, "/foo/5"));
    /// ```
    pub fn new<F, R>(method: MethodMatcher, pattern: PathPattern, handler: F) -> Self
    where
        F: Fn(&Request) -> R + Send + Sync + 'static,
        R: IntoFlow,
    {
        Self {
            method,
            pattern,
            handler: Arc::new(move |request: &Request| handler(request).into_flow()),
        }
    }

    /// The entry's predicate: method AND path must both be accepted
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.method.matches(method) && self.pattern.matches(path)
    }

    /// Parameters this entry captures from a path, if the path matches
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        self.pattern.captures(path)
    }

    /// Invoke the handler
    pub fn run(&self, request: &Request) -> Flow {
        (self.handler)(request)
    }

    pub fn method(&self) -> &MethodMatcher {
        &self.method
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.pattern)
    }
}

// ============================================================================
// Tests
// ============================================================================
