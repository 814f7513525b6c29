//! Integration tests for spa_router
//!
//! These tests exercise the public surface end to end: registration, lookup,
//! reset, state transitions and dispatch through the navigator.

use spa_router::*;
use std::sync::{Arc, Mutex};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn noop(_: &Request) {}

type Log = Arc<Mutex<Vec<String>>>;

fn record(log: &Log, label: &'static str) -> impl Fn(&Request) + Send + Sync + 'static {
    let log = log.clone();
    move |req: &Request| {
        log.lock()
            .unwrap()
            .push(format!("{}:{}", label, req.full_path()));
    }
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_lookup_route_returns_lowest_matching_index() {
    init_logging();
    let mut router = Router::new();
    let entries = [
        router.post("/foo/:id", noop).unwrap(),
        router.get("/bar", noop).unwrap(),
        router.get("/foo/:id<int>", noop).unwrap(),
        router.get("/foo/*", noop).unwrap(),
    ];

    let found = router.lookup_route(&Method::Get, "/foo/12").unwrap();
    assert!(Arc::ptr_eq(&found, &entries[2]));

    let found = router.lookup_route(&Method::Get, "/foo/abc").unwrap();
    assert!(Arc::ptr_eq(&found, &entries[3]));

    let found = router.lookup_route(&Method::Post, "/foo/abc").unwrap();
    assert!(Arc::ptr_eq(&found, &entries[0]));

    assert!(router.lookup_route(&Method::Put, "/foo/1").is_none());
}

#[test]
fn test_duplicate_registration_first_wins() {
    let mut router = Router::new();
    let h1 = router.get("/foo/:id", noop).unwrap();
    router.get("/foo/:id", noop).unwrap();

    let found = router.lookup_route(&Method::Get, "/foo/5").unwrap();
    assert!(Arc::ptr_eq(&found, &h1));
}

#[test]
fn test_filter_lookup_is_ordered_subsequence() {
    let mut router = Router::new();
    let all = [
        router.after_path("/a/*", noop).unwrap(),
        router.after(noop),
        router.after_path("/b", noop).unwrap(),
        router.after_path("/a/:x", noop).unwrap(),
    ];

    let found = router.lookup_after_filters(&Method::Delete, "/a/1");
    let expected = [&all[0], &all[1], &all[3]];
    assert_eq!(found.len(), expected.len());
    for (got, want) in found.iter().zip(expected) {
        assert!(Arc::ptr_eq(got, want));
    }

    assert_eq!(router.lookup_after_filters(&Method::Get, "/b").len(), 2);
    assert!(router.lookup_before_filters(&Method::Get, "/a/1").is_empty());
}

#[test]
fn test_global_before_filter_matches_every_pair() {
    let mut router = Router::new();
    router.before(noop);

    let methods = ["get", "post", "put", "delete", "state", "custom"];
    let paths = ["/", "/foo", "/foo/1?x=y", "/deep/a/b/c", ""];
    for method in methods {
        for path in paths {
            assert_eq!(
                router
                    .lookup_before_filters(&Method::from(method), path)
                    .len(),
                1,
                "{} {}",
                method,
                path
            );
        }
    }
}

#[test]
fn test_curried_and_direct_registration_behave_alike() {
    let mut curried = Router::new();
    {
        let mut get = curried.bind("get");
        get.add("/foo/:id", noop).unwrap();
        get.add("/bar", noop).unwrap();
    }

    let mut direct = Router::new();
    direct.route("get", "/foo/:id", noop).unwrap();
    direct.route("get", "/bar", noop).unwrap();

    for (method, path) in [
        ("get", "/foo/1"),
        ("get", "/bar"),
        ("post", "/bar"),
        ("get", "/baz"),
    ] {
        let method = Method::from(method);
        let a = curried.lookup_route(&method, path).map(|r| r.to_string());
        let b = direct.lookup_route(&method, path).map(|r| r.to_string());
        assert_eq!(a, b);
    }
}

// ============================================================================
// Reset Tests
// ============================================================================

#[test]
fn test_remove_all_routes_empties_every_lookup() {
    let mut router = Router::new();
    router.get("/", noop).unwrap();
    router.state("/s", noop).unwrap();
    router.before(noop);
    router.after_path("/s", noop).unwrap();

    router.remove_all_routes();

    for method in [Method::Get, Method::State, Method::Post] {
        for path in ["/", "/s", "/anything"] {
            assert!(router.lookup_route(&method, path).is_none());
            assert!(router.lookup_before_filters(&method, path).is_empty());
            assert!(router.lookup_after_filters(&method, path).is_empty());
        }
    }

    // Tables accept new registrations after a reset
    router.get("/again", noop).unwrap();
    assert!(router.lookup_route(&Method::Get, "/again").is_some());
}

#[test]
fn test_independent_routers_do_not_share_tables() {
    let mut first = Router::new();
    let second = Router::new();
    first.get("/only-here", noop).unwrap();

    assert!(first.lookup_route(&Method::Get, "/only-here").is_some());
    assert!(second.lookup_route(&Method::Get, "/only-here").is_none());
}

// ============================================================================
// State Transition Tests
// ============================================================================

#[test]
fn test_trans_without_data() {
    let mut sink: Vec<Request> = Vec::new();
    trans(&mut sink, "/foo/1");

    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].full_path(), "/foo/1");
    assert_eq!(sink[0].method(), &Method::State);
    assert_eq!(sink[0].title(), "");
}

#[test]
fn test_trans_with_data() {
    let mut sink: Vec<Request> = Vec::new();
    trans_with(&mut sink, "/foo/1", [("bar", "baz")]);

    assert_eq!(sink[0].full_path(), "/foo/1?bar=baz");
    assert_eq!(sink[0].method(), &Method::State);
}

#[test]
fn test_trans_leaves_router_tables_alone() {
    let router = Router::new();
    let mut sink: Vec<Request> = Vec::new();
    trans_with(&mut sink, "/x", [("a", "1")]);

    assert!(router.is_empty());
}

// ============================================================================
// Navigator Tests
// ============================================================================

#[test]
fn test_full_request_cycle() {
    init_logging();
    let log: Log = Arc::new(Mutex::new(Vec::new()));

    let mut nav = Navigator::new();
    {
        let router = nav.router_mut();
        router.before(record(&log, "before"));
        router.get("/items/:id", record(&log, "show")).unwrap();
        router.state("/items/:id", record(&log, "select")).unwrap();
        router.after_path("/items/*", record(&log, "after")).unwrap();
    }

    nav.push("/items/3");
    nav.trans_with("/items/3", [("tab", "specs")]);
    let outcomes = nav.process();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(DispatchOutcome::is_handled));
    assert_eq!(nav.current_path(), "/items/3");
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "before:/items/3",
            "show:/items/3",
            "after:/items/3",
            "before:/items/3?tab=specs",
            "select:/items/3?tab=specs",
            "after:/items/3?tab=specs",
        ]
    );
}

#[test]
fn test_halting_filter_guards_a_section() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let signed_in = Arc::new(Mutex::new(false));

    let mut nav = Navigator::new();
    {
        let signed_in = signed_in.clone();
        let router = nav.router_mut();
        router
            .before_path("/admin/*", move |_: &Request| *signed_in.lock().unwrap())
            .unwrap();
        router.get("/admin/users", record(&log, "admin")).unwrap();
    }

    nav.push("/admin/users");
    let outcome = nav.process().remove(0);
    assert_eq!(
        outcome,
        DispatchOutcome::Halted {
            path: "/admin/users".to_string(),
            filter: "/admin/*".to_string(),
        }
    );
    assert!(log.lock().unwrap().is_empty());

    *signed_in.lock().unwrap() = true;
    nav.push("/admin/users");
    assert!(nav.process()[0].is_handled());
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_unmatched_request_reports_not_found() {
    let mut nav = Navigator::new();
    nav.router_mut().get("/", noop).unwrap();

    nav.push("/nope");
    let outcomes = nav.process();
    assert_eq!(
        outcomes,
        vec![DispatchOutcome::NotFound {
            path: "/nope".to_string()
        }]
    );
}

#[test]
fn test_query_data_reaches_handlers() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let mut nav = Navigator::new();
    nav.router_mut()
        .state("/search", move |req: &Request| {
            let terms: Vec<String> = req
                .query()
                .get_all("q")
                .into_iter()
                .map(str::to_string)
                .collect();
            sink.lock().unwrap().extend(terms);
        })
        .unwrap();

    nav.trans_with("/search", [("q", "rust"), ("q", "spa router")]);
    nav.process();

    assert_eq!(*seen.lock().unwrap(), vec!["rust", "spa router"]);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_invalid_patterns_are_reported() {
    let mut router = Router::new();

    let err = router.get("/users/:id/:id", noop).unwrap_err();
    assert_eq!(
        err,
        RouterError::InvalidPath {
            path: "/users/:id/:id".to_string(),
            reason: "duplicate parameter 'id'".to_string(),
        }
    );
    assert!(router.after_path("/x/:id<bogus>", noop).is_err());
    assert!(router.is_empty());
}
