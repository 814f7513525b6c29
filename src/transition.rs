//! State transitions
//!
//! A state transition is a request with method `state`: it runs the matching
//! filters and `state` route like any other request, but does not change the
//! visible location. The request is built here and handed to a
//! [`Location`]; dispatch happens whenever that location decides.

use crate::debug_log;
use crate::history::Location;
use crate::method::Method;
use crate::params::QueryParams;
use crate::request::Request;

/// Build the request for a state transition
///
/// With data, the pairs are form-urlencoded and joined to `path` with `?`
/// (or `&` if `path` already has a query string). The title is always empty.
///
/// # Example
///
/// ```
/// use spa_router::{state_request, Method};
///
/// let request = state_request("/foo/1", Some([("bar", "baz")]));
/// assert_eq!(request.full_path(), "/foo/1?bar=baz");
/// assert_eq!(request.method(), &Method::State);
///
/// let request = state_request("/foo/1", None::<[(&str, &str); 0]>);
/// assert_eq!(request.full_path(), "/foo/1");
/// ```
pub fn state_request<I, K, V>(path: &str, data: Option<I>) -> Request
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let full_path = match data {
        Some(data) => QueryParams::from_pairs(data).append_to(path),
        None => path.to_string(),
    };

    Request::new(Method::State, full_path, "")
}

/// Transition to `path` without data
pub fn trans<L>(location: &mut L, path: &str)
where
    L: Location + ?Sized,
{
    assign_state(location, state_request(path, None::<[(String, String); 0]>));
}

/// Transition to `path`, carrying `data` in the query string
///
/// ```
/// use spa_router::{trans_with, Request};
///
/// let mut sink: Vec<Request> = Vec::new();
/// trans_with(&mut sink, "/foo/1", [("bar", "baz")]);
/// assert_eq!(sink[0].full_path(), "/foo/1?bar=baz");
/// ```
pub fn trans_with<L, I, K, V>(location: &mut L, path: &str, data: I)
where
    L: Location + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    assign_state(location, state_request(path, Some(data)));
}

fn assign_state<L: Location + ?Sized>(location: &mut L, request: Request) {
    debug_log!("State transition to '{}'", request.full_path());
    location.assign(request);
}
