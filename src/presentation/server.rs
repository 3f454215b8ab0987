//! HTTP poll endpoint
//!
//! `GET <route>` answers `1` or `0` for the caller's session, identified by
//! a cookie. Callers without a usable cookie get a fresh session id set on
//! the response; their first poll only builds the baseline.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::PollUseCase;
use crate::domain::ports::{DirectoryLister, SessionStore};
use crate::domain::value_objects::SessionId;
use crate::error::LivepollResult;

/// Liveness probe path
pub const HEALTH_ROUTE: &str = "/health";

/// Shared handler state
pub struct ServerState<L: DirectoryLister, S: SessionStore> {
    poll: Arc<PollUseCase<L, S>>,
    cookie_name: Arc<str>,
}

impl<L: DirectoryLister, S: SessionStore> Clone for ServerState<L, S> {
    fn clone(&self) -> Self {
        Self {
            poll: Arc::clone(&self.poll),
            cookie_name: Arc::clone(&self.cookie_name),
        }
    }
}

/// Build the router serving the poll endpoint at `route`.
///
/// A route without a leading slash gets one.
pub fn router<L, S>(poll: PollUseCase<L, S>, route: &str, cookie_name: &str) -> Router
where
    L: DirectoryLister + 'static,
    S: SessionStore + 'static,
{
    let route = if route.starts_with('/') {
        route.to_string()
    } else {
        format!("/{}", route)
    };

    let state = ServerState {
        poll: Arc::new(poll),
        cookie_name: Arc::from(cookie_name),
    };

    let mut app = Router::new().route(&route, get(poll_handler::<L, S>));
    if route != HEALTH_ROUTE {
        app = app.route(HEALTH_ROUTE, get(|| async { "OK" }));
    }
    app.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn poll_handler<L, S>(State(state): State<ServerState<L, S>>, jar: CookieJar) -> Response
where
    L: DirectoryLister + 'static,
    S: SessionStore + 'static,
{
    let existing = jar
        .get(&state.cookie_name)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let (session, jar) = match existing {
        Some(session) => (session, jar),
        None => {
            let session = SessionId::generate();
            let cookie = Cookie::build((state.cookie_name.to_string(), session.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax);
            (session, jar.add(cookie))
        }
    };

    let poll = Arc::clone(&state.poll);
    let answer = tokio::task::spawn_blocking(move || poll.poll(&session)).await;

    match answer {
        Ok(Ok(outcome)) => (
            jar,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            outcome.as_body(),
        )
            .into_response(),
        Ok(Err(e)) => {
            error!(error = %e, "poll failed");
            (StatusCode::INTERNAL_SERVER_ERROR, jar, "session store unavailable").into_response()
        }
        Err(e) => {
            error!(error = %e, "poll task panicked");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Bind `bind:port` and serve `app` until Ctrl+C.
pub async fn serve(app: Router, bind: &str, port: u16) -> LivepollResult<()> {
    let listener = tokio::net::TcpListener::bind((bind, port)).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
