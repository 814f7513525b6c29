//! Running a request through filters and routes
//!
//! Order of execution:
//!
//! 1. every matching before filter, in registration order; the first one
//!    returning [`Flow::Halt`] stops the chain
//! 2. the first matching route
//! 3. every matching after filter, in registration order
//!
//! When no route matches, after filters are skipped. Each entry sees the
//! parameters captured by its own pattern in [`Request::params`].

use crate::error::DispatchOutcome;
use crate::request::Request;
use crate::route::{Flow, RouteRef};
use crate::router::Router;
use crate::{debug_log, trace_log, warn_log};

/// Dispatch a request against a router
///
/// # Example
///
/// ```
/// use spa_router::{dispatch, Method, Request, Router};
///
/// let mut router = Router::new();
/// router.before_path("/admin/*", |_| false).unwrap();
/// router.get("/admin/users", |_| ()).unwrap();
/// router.get("/home", |_| ()).unwrap();
///
/// assert!(dispatch(&mut router, Request::new(Method::Get, "/home", "")).is_handled());
/// assert!(dispatch(&mut router, Request::new(Method::Get, "/admin/users", "")).is_halted());
/// assert!(dispatch(&mut router, Request::new(Method::Get, "/nowhere", "")).is_not_found());
/// ```
pub fn dispatch(router: &mut Router, mut request: Request) -> DispatchOutcome {
    let method = request.method().clone();
    let path = request.path().to_string();
    trace_log!("Dispatching {} '{}'", method, request.full_path());

    for filter in router.lookup_before_filters(&method, &path) {
        if run_entry(&filter, &mut request) == Flow::Halt {
            debug_log!("Request {} '{}' halted by before filter {}", method, path, filter);
            return DispatchOutcome::Halted {
                path,
                filter: filter.pattern().to_string(),
            };
        }
    }

    let Some(route) = router.resolve(&method, &path) else {
        warn_log!("No route for {} '{}'", method, path);
        return DispatchOutcome::NotFound { path };
    };
    run_entry(&route, &mut request);

    for filter in router.lookup_after_filters(&method, &path) {
        run_entry(&filter, &mut request);
    }

    debug_log!("Handled {} '{}' with {}", method, path, route);
    DispatchOutcome::Handled {
        path,
        route: route.pattern().to_string(),
    }
}

fn run_entry(entry: &RouteRef, request: &mut Request) -> Flow {
    request.params = entry.captures(request.path()).unwrap_or_default();
    entry.run(request)
}
