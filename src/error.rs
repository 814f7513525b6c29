//! Error and outcome types
//!
//! Failing to find a route is not an error: lookups return `None` or an empty
//! list. The only failure the router reports is a path pattern it cannot
//! compile. The result of running a request through the filter/route chain is
//! described by [`DispatchOutcome`].

use std::fmt;

// ============================================================================
// RouterError
// ============================================================================

/// Errors raised while registering routes or filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The path pattern could not be compiled
    InvalidPath {
        /// The offending pattern as given by the caller
        path: String,
        /// Why it was rejected
        reason: String,
    },
}

impl RouterError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        RouterError::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidPath { path, reason } => {
                write!(f, "Invalid route path '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for RouterError {}

// ============================================================================
// DispatchOutcome
// ============================================================================

/// Result of dispatching one request through the filter/route chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A route matched and ran, followed by the matching after filters
    Handled {
        /// Path of the dispatched request
        path: String,
        /// Pattern of the route that handled it
        route: String,
    },
    /// No route matched the request
    NotFound { path: String },
    /// A before filter returned `Flow::Halt`
    Halted {
        /// Path of the dispatched request
        path: String,
        /// Pattern of the filter that stopped the chain
        filter: String,
    },
}

impl DispatchOutcome {
    /// Check if a route handled the request
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchOutcome::Handled { .. })
    }

    /// Check if no route matched
    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchOutcome::NotFound { .. })
    }

    /// Check if a before filter stopped the chain
    pub fn is_halted(&self) -> bool {
        matches!(self, DispatchOutcome::Halted { .. })
    }

    /// Path of the request this outcome belongs to
    pub fn path(&self) -> &str {
        match self {
            DispatchOutcome::Handled { path, .. }
            | DispatchOutcome::NotFound { path }
            | DispatchOutcome::Halted { path, .. } => path,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
