mod common;

use common::logs::capture;
use routeboard::router::{RouteMatch, Router};
use tracing::Level;

fn movie_store() -> Router<&'static str> {
    let mut router = Router::new();
    router.get("/", "root_handler");
    router.get("/movies", "list_movies");
    router.post("/movies", "create_movie");
    router.get("/movies/{id:number}", "get_movie");
    router.get("/movies/{title:string}", "find_movie");
    router.put("/movies/{id}", "update_movie");
    router.delete("/movies/{id:number}", "delete_movie");
    router.get(["/health", "/healthz"], "health_check");
    router.get("/movies/{id}/cast", "movie_cast");
    router
}

fn assert_route_match(
    router: &Router<&'static str>,
    method: &str,
    path: &str,
    expected_handler: &str,
) {
    let result = router.route(method, path);
    match result {
        Some(RouteMatch { route, .. }) => {
            println!("✅ {} {} → {}", method, path, route.handler());
            assert_eq!(
                *route.handler(),
                expected_handler,
                "Handler mismatch for {} {}: expected '{}', got '{}'",
                method,
                path,
                expected_handler,
                route.handler()
            );
        }
        None => {
            println!("❌ {} {} → no match", method, path);
            assert_eq!(
                expected_handler, "<none>",
                "Expected route to match for {} {}",
                method, path
            );
        }
    }
}

#[test]
fn test_router_root_path() {
    assert_route_match(&movie_store(), "GET", "/", "root_handler");
}

#[test]
fn test_router_list_movies() {
    let router = movie_store();
    assert_route_match(&router, "GET", "/movies", "list_movies");
    assert_route_match(&router, "GET", "/movies/", "list_movies");
}

#[test]
fn test_router_create_movie() {
    assert_route_match(&movie_store(), "POST", "/movies", "create_movie");
}

#[test]
fn test_router_get_movie_by_id() {
    assert_route_match(&movie_store(), "GET", "/movies/123", "get_movie");
}

#[test]
fn test_router_find_movie_by_title() {
    assert_route_match(&movie_store(), "GET", "/movies/alien", "find_movie");
}

#[test]
fn test_router_update_movie_single_candidate() {
    // The only PUT candidate wins even though it is untyped.
    assert_route_match(&movie_store(), "PUT", "/movies/alien", "update_movie");
}

#[test]
fn test_router_delete_movie() {
    assert_route_match(&movie_store(), "DELETE", "/movies/7", "delete_movie");
}

#[test]
fn test_router_multi_path_health() {
    let router = movie_store();
    assert_route_match(&router, "GET", "/health", "health_check");
    assert_route_match(&router, "GET", "/healthz", "health_check");
}

#[test]
fn test_router_nested_wildcard_never_matches() {
    assert_route_match(&movie_store(), "GET", "/movies/7/cast", "<none>");
}

#[test]
fn test_router_unknown_path() {
    assert_route_match(&movie_store(), "GET", "/unknown", "<none>");
}

#[test]
fn test_router_unsupported_method() {
    assert_route_match(&movie_store(), "PATCH", "/movies", "<none>");
}

#[test]
fn test_router_params_for_title() {
    let router = movie_store();
    let matched = router.route("GET", "/movies/alien").unwrap();
    assert_eq!(matched.get_path_param("title"), Some("alien"));
    assert_eq!(
        matched.path_params.to_map().get("title").map(String::as_str),
        Some("alien")
    );
}

#[test]
fn test_router_dump_routes_in_table_order() {
    let mut router = movie_store();
    // Re-registering moves the route to the back.
    router.get("/movies", "list_movies_v2");

    let logs = capture("routeboard::router", || router.dump_routes());
    let events: Vec<_> = logs
        .events()
        .into_iter()
        .filter(|e| e.level == Level::INFO)
        .collect();

    assert_eq!(events[0].message, "routing table");
    assert_eq!(events[0].fields["routes_count"], router.len().to_string());

    let dumped: Vec<(String, String)> = events[1..]
        .iter()
        .map(|e| (e.fields["method"].clone(), e.fields["path"].clone()))
        .collect();
    let expected: Vec<(String, String)> = router
        .routes()
        .map(|r| (r.method().to_string(), r.path().to_string()))
        .collect();
    assert_eq!(dumped, expected);
    assert_eq!(
        dumped.last().map(|(m, p)| (m.as_str(), p.as_str())),
        Some(("GET", "/movies"))
    );
}
