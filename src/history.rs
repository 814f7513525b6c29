//! Location and navigation history
//!
//! [`Location`] is the seam through which requests leave the router's
//! hands: whoever implements it decides when (and whether) a request gets
//! dispatched. [`History`] is the in-memory implementation used by
//! [`crate::Navigator`]:
//!
//! - navigational requests (anything but `state`) are pushed onto a bounded
//!   back/forward stack
//! - `state` requests leave the visible location untouched
//! - every assigned request is queued until the owner drains it

use crate::method::Method;
use crate::request::Request;
use crate::{trace_log, NavigationDirection};
use std::collections::VecDeque;

/// Receiver of requests built by the router
pub trait Location {
    /// Accept a request for eventual dispatch
    fn assign(&mut self, request: Request);
}

impl Location for Vec<Request> {
    fn assign(&mut self, request: Request) {
        self.push(request);
    }
}

/// Navigation history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Method the entry was reached with, replayed on back/forward
    pub method: Method,
    /// Full path, including any query string
    pub path: String,
    /// Page title recorded with the entry
    pub title: String,
}

impl HistoryEntry {
    /// Entry reached with a `get`
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_method(Method::Get, path, title)
    }

    pub fn with_method(
        method: Method,
        path: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            title: title.into(),
        }
    }

    fn from_request(request: &Request) -> Self {
        Self::with_method(
            request.method().clone(),
            request.full_path(),
            request.title(),
        )
    }
}

/// Event produced by moving through history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Previous path
    pub from: Option<String>,
    /// New path
    pub to: String,
    /// Navigation direction
    pub direction: NavigationDirection,
}

/// Navigation history stack with a queue of requests awaiting dispatch
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    current: usize,
    /// Maximum number of entries (0 = unlimited)
    max_size: usize,
    pending: VecDeque<Request>,
}

impl History {
    pub const DEFAULT_MAX_SIZE: usize = 1000;

    /// Create a history positioned at `initial_path`
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self::with_max_size(initial_path, Self::DEFAULT_MAX_SIZE)
    }

    /// Create with a custom entry limit (0 = unlimited)
    pub fn with_max_size(initial_path: impl Into<String>, max_size: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial_path, "")],
            current: 0,
            max_size,
            pending: VecDeque::new(),
        }
    }

    /// Current visible path
    pub fn current_path(&self) -> &str {
        &self.entries[self.current].path
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    /// Push a new `get` entry, dropping any forward history
    pub fn push(&mut self, path: impl Into<String>, title: impl Into<String>) -> NavigationEvent {
        self.push_entry(HistoryEntry::new(path, title))
    }

    /// Push a prepared entry, dropping any forward history
    pub fn push_entry(&mut self, entry: HistoryEntry) -> NavigationEvent {
        let from = Some(self.current_path().to_string());
        let to = entry.path.clone();

        self.entries.truncate(self.current + 1);
        self.entries.push(entry);
        self.current += 1;
        self.enforce_size_limit();

        NavigationEvent {
            from,
            to,
            direction: NavigationDirection::Forward,
        }
    }

    /// Replace the current entry
    pub fn replace(
        &mut self,
        path: impl Into<String>,
        title: impl Into<String>,
    ) -> NavigationEvent {
        let from = Some(self.current_path().to_string());
        let path = path.into();

        self.entries[self.current] = HistoryEntry::new(path.clone(), title);

        NavigationEvent {
            from,
            to: path,
            direction: NavigationDirection::Replace,
        }
    }

    /// Go back one entry
    pub fn back(&mut self) -> Option<NavigationEvent> {
        if !self.can_go_back() {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current -= 1;

        Some(NavigationEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Back,
        })
    }

    /// Go forward one entry
    pub fn forward(&mut self) -> Option<NavigationEvent> {
        if !self.can_go_forward() {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current += 1;

        Some(NavigationEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Forward,
        })
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Reset to a single entry; pending requests are discarded
    pub fn clear(&mut self, initial_path: impl Into<String>) {
        self.entries = vec![HistoryEntry::new(initial_path, "")];
        self.current = 0;
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least its initial entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Queue a request without touching the entries
    pub fn enqueue(&mut self, request: Request) {
        self.pending.push_back(request);
    }

    /// Take the oldest request awaiting dispatch
    pub fn next_pending(&mut self) -> Option<Request> {
        self.pending.pop_front()
    }

    /// Number of requests awaiting dispatch
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn enforce_size_limit(&mut self) {
        if self.max_size > 0 && self.entries.len() > self.max_size {
            // Oldest entries go first; the current one stays reachable
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(0..excess);
            self.current = self.current.saturating_sub(excess);
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location for History {
    fn assign(&mut self, request: Request) {
        if request.method().is_navigational() {
            self.push_entry(HistoryEntry::from_request(&request));
        }
        trace_log!(
            "Queued {} '{}' for dispatch",
            request.method(),
            request.full_path()
        );
        self.enqueue(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_creation() {
        let history = History::new("/");
        assert_eq!(history.current_path(), "/");
        assert_eq!(history.len(), 1);
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_history_back_forward() {
        let mut history = History::new("/");
        history.push("/page1", "One");
        history.push("/page2", "Two");

        history.back();
        assert_eq!(history.current_path(), "/page1");
        assert_eq!(history.current_entry().title, "One");
        assert!(history.can_go_forward());

        history.forward();
        assert_eq!(history.current_path(), "/page2");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_history_truncation_on_push() {
        let mut history = History::new("/");
        history.push("/page1", "");
        history.push("/page2", "");
        history.back();

        history.push("/page3", "");
        assert_eq!(history.current_path(), "/page3");
        assert_eq!(history.len(), 3); // /, /page1, /page3
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_history_replace() {
        let mut history = History::new("/");
        history.push("/page1", "");

        let event = history.replace("/page2", "");
        assert_eq!(event.direction, NavigationDirection::Replace);
        assert_eq!(history.len(), 2);

        history.back();
        assert_eq!(history.current_path(), "/");
    }

    #[test]
    fn test_history_max_size() {
        let mut history = History::with_max_size("/", 3);
        for page in ["/page1", "/page2", "/page3", "/page4"] {
            history.push(page, "");
        }

        assert_eq!(history.len(), 3);
        history.back();
        history.back();
        assert_eq!(history.current_path(), "/page2");
        assert!(history.back().is_none());
    }

    #[test]
    fn test_navigation_event() {
        let mut history = History::new("/");

        let event = history.push("/users", "");
        assert_eq!(event.from, Some("/".to_string()));
        assert_eq!(event.to, "/users");
        assert_eq!(event.direction, NavigationDirection::Forward);

        let event = history.back().unwrap();
        assert_eq!(event.to, "/");
        assert_eq!(event.direction, NavigationDirection::Back);
    }

    #[test]
    fn test_assign_navigational_request_pushes_entry() {
        let mut history = History::new("/");
        history.assign(Request::new(Method::Get, "/foo?x=1", "Foo"));

        assert_eq!(history.current_path(), "/foo?x=1");
        assert_eq!(history.current_entry().title, "Foo");
        assert_eq!(history.current_entry().method, Method::Get);
        assert_eq!(history.pending_len(), 1);
    }

    #[test]
    fn test_assign_records_request_method() {
        let mut history = History::new("/");
        history.assign(Request::new(Method::Post, "/login?user=ada", ""));
        history.push("/home", "");

        assert_eq!(history.current_entry().method, Method::Get);
        history.back().unwrap();
        assert_eq!(
            history.current_entry(),
            &HistoryEntry::with_method(Method::Post, "/login?user=ada", "")
        );
    }

    #[test]
    fn test_assign_state_request_keeps_location() {
        let mut history = History::new("/home");
        history.assign(Request::new(Method::State, "/panel/open", ""));

        assert_eq!(history.current_path(), "/home");
        assert_eq!(history.len(), 1);

        let pending = history.next_pending().unwrap();
        assert_eq!(pending.full_path(), "/panel/open");
        assert!(history.next_pending().is_none());
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut history = History::new("/");
        history.assign(Request::new(Method::Get, "/a", ""));
        history.clear("/start");

        assert_eq!(history.current_path(), "/start");
        assert_eq!(history.pending_len(), 0);
    }

    #[test]
    fn test_vec_location_collects_requests() {
        let mut sink: Vec<Request> = Vec::new();
        sink.assign(Request::new(Method::State, "/x", ""));
        assert_eq!(sink.len(), 1);
    }
}
