//! Path pattern compilation and matching
//!
//! Patterns are split into segments:
//!
//! - `users` - static text, must match exactly
//! - `:id` - captures one path segment
//! - `:id<\d+>` / `:id<uuid>` - captures one segment that passes a constraint
//! - `:tab?` - optional capture
//! - `*` - matches the rest of the path (last segment only)
//!
//! Matching ignores the query string and empty segments, so `/users/` and
//! `/users` are equivalent.

use crate::error::RouterError;
use crate::params::RouteParams;
use std::collections::HashSet;
use std::fmt;

/// Path side of a route entry's predicate
#[derive(Debug, Clone, PartialEq)]
pub enum PathPattern {
    /// Accepts every path (global filters)
    Any,
    /// Accepts paths matching the compiled pattern
    Pattern(RoutePattern),
}

impl PathPattern {
    /// Compile a path pattern
    pub fn parse(path: &str) -> Result<Self, RouterError> {
        RoutePattern::parse(path).map(PathPattern::Pattern)
    }

    /// Match a path, returning the captured parameters on success
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        match self {
            PathPattern::Any => Some(RouteParams::new()),
            PathPattern::Pattern(pattern) => pattern.captures(path),
        }
    }

    /// Check whether a path matches
    pub fn matches(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Any => f.write_str("*"),
            PathPattern::Pattern(pattern) => f.write_str(&pattern.source),
        }
    }
}

/// A compiled route pattern
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePattern {
    /// The pattern as registered
    source: String,
    /// Pattern segments
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Compile a pattern, rejecting malformed input
    ///
    /// # Example
    ///
    /// ```
    /// use spa_router::RoutePattern;
    ///
    /// let pattern = RoutePattern::parse("/foo/:id").unwrap();
    /// let params = pattern.captures("/foo/5").unwrap();
    /// assert_eq!(params.get("id"), Some(&"5".to_string()));
    ///
    /// assert!(RoutePattern::parse("/foo/:").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self, RouterError> {
        if path.contains("//") {
            return Err(RouterError::invalid_path(
                path,
                "consecutive slashes are not allowed",
            ));
        }

        let raw: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(raw.len());
        let mut names = HashSet::new();

        for (index, part) in raw.iter().enumerate() {
            let segment =
                Segment::parse(part).map_err(|reason| RouterError::invalid_path(path, reason))?;

            if matches!(segment, Segment::Wildcard) && index + 1 != raw.len() {
                return Err(RouterError::invalid_path(
                    path,
                    "wildcard must be the last segment",
                ));
            }
            if let Some(name) = segment.param_name() {
                if !names.insert(name.to_string()) {
                    return Err(RouterError::invalid_path(
                        path,
                        format!("duplicate parameter '{}'", name),
                    ));
                }
            }

            segments.push(segment);
        }

        Ok(Self {
            source: path.to_string(),
            segments,
        })
    }

    /// The pattern as it was registered
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled segments
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match a path and extract parameters
    ///
    /// Anything after `?` is ignored. An optional parameter is skipped when
    /// consuming a segment would make the rest of the pattern fail.
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let mut params = RouteParams::new();
        match_segments(&self.segments, &parts, &mut params).then_some(params)
    }

    /// Check whether a path matches
    pub fn matches(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }
}

fn match_segments(segments: &[Segment], parts: &[&str], params: &mut RouteParams) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        return parts.is_empty();
    };

    match segment {
        Segment::Static(expected) => match parts.split_first() {
            Some((part, remaining)) if part == expected => match_segments(rest, remaining, params),
            _ => false,
        },
        Segment::Param {
            name,
            constraint,
            optional,
        } => {
            if let Some((value, remaining)) = parts.split_first() {
                if constraint.iter().all(|c| c.validate(value))
                    && match_segments(rest, remaining, params)
                {
                    params.insert(name.clone(), (*value).to_string());
                    return true;
                }
            }
            *optional && match_segments(rest, parts, params)
        }
        Segment::Wildcard => true,
    }
}

/// A single segment in a route pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Static text that must match exactly
    Static(String),
    /// Captured segment
    Param {
        name: String,
        constraint: Option<Constraint>,
        optional: bool,
    },
    /// Matches the remainder of the path
    Wildcard,
}

impl Segment {
    /// Parse one segment
    ///
    /// - `"users"` -> `Static("users")`
    /// - `":id"` -> required param
    /// - `":id?"` -> optional param
    /// - `":id<\d+>"` -> constrained param
    /// - `"*"` -> `Wildcard`
    pub fn parse(s: &str) -> Result<Self, String> {
        if s == "*" {
            return Ok(Segment::Wildcard);
        }

        let Some(rest) = s.strip_prefix(':') else {
            return Ok(Segment::Static(s.to_string()));
        };

        let (rest, optional) = match rest.strip_suffix('?') {
            Some(rest) => (rest, true),
            None => (rest, false),
        };

        let (name, constraint) = match rest.find('<') {
            Some(pos) => {
                let Some(body) = rest[pos + 1..].strip_suffix('>') else {
                    return Err(format!("unterminated constraint in '{}'", s));
                };
                (&rest[..pos], Some(Constraint::parse(body)?))
            }
            None => (rest, None),
        };

        if name.is_empty() {
            return Err("parameter name cannot be empty".to_string());
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(format!(
                "parameter '{}' must contain only alphanumeric characters and underscores",
                name
            ));
        }

        Ok(Segment::Param {
            name: name.to_string(),
            constraint,
            optional,
        })
    }

    fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Param { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Constraint for validating captured values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// ASCII digits only (`\d+`, `int`)
    Numeric,
    /// Hyphenated 8-4-4-4-12 hex UUID (`uuid`)
    Uuid,
    /// ASCII letters only (`alpha`)
    Alpha,
}

impl Constraint {
    fn parse(s: &str) -> Result<Self, String> {
        match s {
            "\\d+" | "int" => Ok(Constraint::Numeric),
            "uuid" => Ok(Constraint::Uuid),
            "alpha" => Ok(Constraint::Alpha),
            other => Err(format!("unknown constraint '{}'", other)),
        }
    }

    /// Validate a value against this constraint
    pub fn validate(&self, value: &str) -> bool {
        match self {
            Constraint::Numeric => {
                !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
            }
            Constraint::Alpha => {
                !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
            }
            Constraint::Uuid => {
                let parts: Vec<&str> = value.split('-').collect();
                parts.len() == 5
                    && [8, 4, 4, 4, 12]
                        .iter()
                        .zip(&parts)
                        .all(|(len, part)| part.len() == *len)
                    && parts
                        .iter()
                        .all(|p| p.chars().all(|c| c.is_ascii_hexdigit()))
            }
        }
    }
}
