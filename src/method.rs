//! Request methods and method matchers
//!
//! Methods are plain tokens. Besides the HTTP-style verbs the router knows
//! about `state`, used for transitions that change application state without
//! touching the visible location. Applications may use their own tokens via
//! [`Method::Other`].

use std::fmt;
use std::str::FromStr;

/// Method of a request
///
/// Tokens are case-insensitive: `"GET"`, `"Get"` and `"get"` all parse to
/// [`Method::Get`], and custom tokens are stored lowercased.
///
/// # Example
///
/// ```
/// use spa_router::Method;
///
/// assert_eq!(Method::from("POST"), Method::Post);
/// assert_eq!(Method::from("Refresh"), Method::Other("refresh".to_string()));
/// assert_eq!(Method::State.as_str(), "state");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    /// Non-navigational state transition
    State,
    /// Application-defined token (always lowercase)
    Other(String),
}

impl Method {
    /// The lowercase token for this method
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::State => "state",
            Method::Other(token) => token,
        }
    }

    /// Whether requests with this method change the visible location
    pub fn is_navigational(&self) -> bool {
        !matches!(self, Method::State)
    }
}

impl From<&str> for Method {
    fn from(token: &str) -> Self {
        let token = token.to_ascii_lowercase();
        match token.as_str() {
            "get" => Method::Get,
            "post" => Method::Post,
            "put" => Method::Put,
            "delete" => Method::Delete,
            "state" => Method::State,
            _ => Method::Other(token),
        }
    }
}

impl From<String> for Method {
    fn from(token: String) -> Self {
        Method::from(token.as_str())
    }
}

impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Method::from(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method side of a route entry's predicate
///
/// Routes always carry an exact method; filters registered through the
/// filter factory accept any method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodMatcher {
    /// Accepts every method
    Any,
    /// Accepts only this method
    Exact(Method),
}

impl MethodMatcher {
    /// Check a request method against this matcher
    pub fn matches(&self, method: &Method) -> bool {
        match self {
            MethodMatcher::Any => true,
            MethodMatcher::Exact(expected) => expected == method,
        }
    }
}

impl From<Method> for MethodMatcher {
    fn from(method: Method) -> Self {
        MethodMatcher::Exact(method)
    }
}

impl fmt::Display for MethodMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodMatcher::Any => f.write_str("*"),
            MethodMatcher::Exact(method) => method.fmt(f),
        }
    }
}
