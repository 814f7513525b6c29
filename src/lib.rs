//! # SPA Router
//!
//! A client-side request router for single-page applications:
//!
//! - **Routes** - `(method, path pattern, handler)` entries, first match wins
//! - **Filters** - before/after hooks, every match runs, optionally path-scoped
//! - **State transitions** - `state` requests that run handlers without
//!   changing the visible location
//! - **Deferred dispatch** - requests are assigned to a [`Location`] and run
//!   later by the [`Navigator`]
//!
//! # Quick Start
//!
//! ```
//! use spa_router::*;
//!
//! let mut router = Router::new();
//! router.before(|req: &Request| req.path() != "/forbidden");
//! router.get("/users/:id", |req: &Request| {
//!     println!("user {}", req.params.get("id").unwrap());
//! }).unwrap();
//! router.state("/users/:id/edit", |_| ()).unwrap();
//! router.after(|req: &Request| println!("done with {}", req.full_path()));
//!
//! let route = router.lookup_route(&Method::Get, "/users/42").unwrap();
//! assert_eq!(route.pattern().to_string(), "/users/:id");
//!
//! let mut nav = Navigator::with_router(router, NavigatorConfig::default());
//! nav.push("/users/42");
//! nav.trans_with("/users/42/edit", [("field", "name")]);
//!
//! for outcome in nav.process() {
//!     assert!(outcome.is_handled());
//! }
//! ```
//!
//! # Matching
//!
//! Routes are scanned in registration order and the first entry whose method
//! and path both match is returned; later overlapping registrations are
//! shadowed. Filters are scanned the same way but every match is returned.
//! Global filters (`before`/`after`) match any method and any path; scoped
//! filters (`before_path`/`after_path`) match any method on their path.
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the `log` crate for logging
//! - `tracing` - Uses the `tracing` crate (mutually exclusive with `log`)
//! - `cache` (default) - LRU cache for repeated route lookups during dispatch

#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Cache (optional)
#[cfg(feature = "cache")]
pub mod cache;

// Core routing modules
pub mod matcher;
pub mod method;
pub mod params;
pub mod request;
pub mod route;
pub mod router;

// Error handling
pub mod error;

// Dispatch and navigation
pub mod dispatch;
pub mod history;
pub mod navigator;
pub mod transition;

#[cfg(feature = "cache")]
pub use cache::{CacheStats, RouteCache};
pub use dispatch::dispatch;
pub use error::{DispatchOutcome, RouterError};
pub use history::{History, HistoryEntry, Location, NavigationEvent};
pub use matcher::{Constraint, PathPattern, RoutePattern, Segment};
pub use method::{Method, MethodMatcher};
pub use navigator::{Navigator, NavigatorConfig};
pub use params::{QueryParams, RouteParams};
pub use request::Request;
pub use route::{Flow, Handler, IntoFlow, RouteEntry, RouteRef};
pub use router::{FilterBinding, FilterKind, MethodBinding, Router};
pub use transition::{state_request, trans, trans_with};

/// Navigation direction indicator.
///
/// Reported by history moves so callers can tell pushes from back/forward
/// steps and replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// Navigating forward to a new or next entry
    Forward,
    /// Navigating back in history
    Back,
    /// Replacing the current entry
    Replace,
}
