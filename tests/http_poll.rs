//! HTTP poll endpoint tests, driven through the router without a socket.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use livepoll::domain::entities::SessionState;
use livepoll::domain::ports::{SessionStore, SessionStoreError};
use livepoll::domain::services::PathFilter;
use livepoll::infrastructure::{InMemorySessionStore, LocalFs};
use livepoll::presentation::server;
use livepoll::{PollUseCase, SessionId, WatchRoot};

const ROUTE: &str = "/livereload";
const COOKIE: &str = "livepoll_session";

fn set_mtime(path: &Path, secs: u64) {
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

fn site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<p>").unwrap();
    set_mtime(&dir.path().join("index.html"), 1_000);
    dir
}

fn app_with_store<S: SessionStore + 'static>(site: &Path, store: S) -> Router {
    let root = WatchRoot::resolve(site, Path::new("/"));
    let use_case = PollUseCase::new(root, PathFilter::allow_all(), LocalFs::new(), store);
    server::router(use_case, ROUTE, COOKIE)
}

fn app(site: &Path) -> Router {
    app_with_store(site, InMemorySessionStore::new())
}

async fn get(app: &Router, cookie: Option<&str>) -> (StatusCode, Option<String>, String) {
    let mut request = Request::builder().uri(ROUTE);
    if let Some(value) = cookie {
        request = request.header(header::COOKIE, format!("{}={}", COOKIE, value));
    }
    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .and_then(|pair| pair.strip_prefix(&format!("{}=", COOKIE)))
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, set_cookie, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn first_request_sets_cookie_and_answers_zero() {
    let site = site();
    let app = app(site.path());

    let (status, cookie, body) = get(&app, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "0");
    let cookie = cookie.expect("session cookie");
    assert!(cookie.parse::<SessionId>().is_ok());
}

#[tokio::test]
async fn change_is_reported_once_per_session() {
    let site = site();
    let app = app(site.path());
    let (_, cookie, _) = get(&app, None).await;
    let cookie = cookie.unwrap();

    let (_, again, body) = get(&app, Some(&cookie)).await;
    assert_eq!(body, "0");
    assert_eq!(again, None);

    set_mtime(&site.path().join("index.html"), 2_000);
    assert_eq!(get(&app, Some(&cookie)).await.2, "1");
    assert_eq!(get(&app, Some(&cookie)).await.2, "0");
    assert_eq!(get(&app, Some(&cookie)).await.2, "0");
}

#[tokio::test]
async fn response_is_uncacheable_text() {
    let site = site();
    let app = app(site.path());

    let response = app
        .oneshot(Request::builder().uri(ROUTE).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn invalid_cookie_is_replaced() {
    let site = site();
    let app = app(site.path());

    let (status, cookie, body) = get(&app, Some("not%20valid")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "0");
    let cookie = cookie.expect("replacement cookie");
    assert_ne!(cookie, "not%20valid");
}

#[tokio::test]
async fn missing_root_answers_zero() {
    let site = site();
    let app = app(&site.path().join("gone"));

    let (status, _, body) = get(&app, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "0");
}

struct BrokenStore;

impl SessionStore for BrokenStore {
    fn get(&self, _id: &SessionId) -> Result<Option<SessionState>, SessionStoreError> {
        Err(SessionStoreError::Unavailable {
            message: "disk on fire".to_string(),
        })
    }

    fn save(&self, _id: &SessionId, _state: &SessionState) -> Result<(), SessionStoreError> {
        Ok(())
    }

    fn delete(&self, _id: &SessionId) -> Result<(), SessionStoreError> {
        Ok(())
    }
}

#[tokio::test]
async fn store_failure_is_server_error() {
    let site = site();
    let app = app_with_store(site.path(), BrokenStore);

    let (status, _, _) = get(&app, None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_route_answers_ok() {
    let site = site();
    let app = app(site.path());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn route_without_leading_slash_is_normalized() {
    let site = site();
    let root = WatchRoot::resolve(site.path(), Path::new("/"));
    let use_case = PollUseCase::new(
        root,
        PathFilter::allow_all(),
        LocalFs::new(),
        InMemorySessionStore::new(),
    );
    let app = server::router(use_case, "reload", COOKIE);

    let response = app
        .oneshot(Request::builder().uri("/reload").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
