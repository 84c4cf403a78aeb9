//! Router-level tests for every endpoint.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! port is bound and tests run in parallel.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use k8s_demo::config::REQUEST_ID_HEADER;
use k8s_demo::introspection;
use k8s_demo::templates::init_templates;
use k8s_demo::{create_router, AppState, StartTime};

fn app_started(started: StartTime) -> Router {
    let tera = init_templates().expect("templates");
    create_router(AppState::new(tera, started))
}

fn app() -> Router {
    app_started(StartTime::now())
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router response")
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_string(response).await).expect("json body")
}

fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Parse an `XhYmZs` uptime string back into whole seconds.
fn parse_uptime(uptime: &str) -> Option<u64> {
    let mut total = 0;
    let mut digits = String::new();
    for c in uptime.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value: u64 = digits.parse().ok()?;
        digits.clear();
        total += match c {
            'h' => value * 3600,
            'm' => value * 60,
            's' => value,
            _ => return None,
        };
    }
    digits.is_empty().then_some(total)
}

#[tokio::test]
async fn health_reports_healthy() {
    let response = get(app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("application/json"));

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["hostname"], introspection::hostname());
    assert!(body["timestamp"].as_str().is_some());

    let uptime = body["uptime"].as_str().expect("uptime string");
    assert!(parse_uptime(uptime).is_some(), "bad uptime {uptime}");
}

#[tokio::test]
async fn health_uptime_after_five_seconds() {
    let app = app_started(StartTime::elapsed_ago(Duration::from_secs(5)));

    let body = body_json(get(app, "/health").await).await;
    assert_eq!(body["uptime"], "5s");
}

#[tokio::test]
async fn home_page_shows_uptime_and_hostname() {
    let app = app_started(StartTime::elapsed_ago(Duration::from_secs(5)));

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let html = body_string(response).await;
    assert!(html.contains("<strong>Uptime:</strong> 5s"));
    assert!(html.contains(&introspection::hostname()));
    assert!(html.contains(introspection::RUNTIME_VERSION));
    for path in ["/health", "/ready", "/info", "/metrics"] {
        assert!(html.contains(&format!("href=\"{path}\"")));
    }
}

#[tokio::test]
async fn ready_is_always_ready() {
    let response = get(app(), "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("application/json"));

    let body = body_json(response).await;
    assert_eq!(body["ready"], true);
    assert_eq!(body["message"], "Application is ready to serve traffic");
    assert!(body["hostname"].is_string());
}

#[tokio::test]
async fn info_identity_is_constant() {
    let app = app();
    let first = body_json(get(app.clone(), "/info").await).await;
    let second = body_json(get(app, "/info").await).await;

    for body in [&first, &second] {
        assert_eq!(body["app_name"], "go-k8s-demo");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["os"], std::env::consts::OS);
        assert_eq!(body["architecture"], std::env::consts::ARCH);
        assert_eq!(body["runtime_version"], introspection::RUNTIME_VERSION);
    }
}

#[tokio::test]
async fn metrics_schema_and_monotonic_uptime() {
    let app = app();
    let mut last = 0.0;

    for _ in 0..3 {
        let response = get(app.clone(), "/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["goroutine_count"].is_u64());
        assert!(body["memory_allocated_mb"].is_u64());
        assert!(body["memory_system_mb"].is_u64());

        let uptime = body["uptime_seconds"].as_f64().expect("uptime_seconds");
        assert!(uptime >= last);
        last = uptime;

        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn probes_are_not_cacheable() {
    for path in ["/health", "/ready", "/info", "/metrics"] {
        let response = get(app(), path).await;
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store",
            "{path}"
        );
    }

    let home = get(app(), "/").await;
    assert!(home
        .headers()
        .get(header::CACHE_CONTROL)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("public"));
}

#[tokio::test]
async fn every_route_gets_a_request_id() {
    for path in ["/", "/health", "/ready", "/info", "/metrics"] {
        let response = get(app(), path).await;
        assert!(response.headers().contains_key(REQUEST_ID_HEADER), "{path}");
    }
}

#[tokio::test]
async fn unknown_path_is_not_found_and_logged() {
    let response = get(app(), "/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn post_to_probe_is_method_not_allowed() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router response");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_health_checks_all_succeed() {
    let app = app();

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = get(app, "/health").await;
                let status = response.status();
                (status, body_json(response).await)
            })
        })
        .collect();

    for handle in handles {
        let (status, body) = handle.await.expect("task");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        let object = body.as_object().expect("object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["hostname", "status", "timestamp", "uptime"]);
    }
}

#[test]
fn parse_uptime_helper() {
    assert_eq!(parse_uptime("0s"), Some(0));
    assert_eq!(parse_uptime("1h2m3s"), Some(3723));
    assert_eq!(parse_uptime("5"), None);
}
