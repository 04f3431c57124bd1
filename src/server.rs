//! HTTP transport.
//!
//! `POST /api/scrape` takes `{"url": "..."}` and answers with the profile
//! record, or `{"error": "..."}` with 400 for input problems (including a body
//! that is not a JSON scrape request) and 500 for upstream failures.
//! `GET /health` is a liveness probe.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::fetch::{Fetch, HttpFetcher};
use crate::result::ExtractionRecord;
use crate::{profile_url, Error, Options, Result};

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub addr: SocketAddr,

    /// Fetch options applied to every request.
    pub options: Options,
}

impl ServerConfig {
    /// Read `SITEPROFILE_ADDR` plus the fetch variables understood by [`Options::from_env`].
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if `SITEPROFILE_ADDR` is set but is not a socket address.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let raw = std::env::var("SITEPROFILE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid SITEPROFILE_ADDR {raw:?}: {e}"))?;

        Ok(Self {
            addr,
            options: Options::from_env(),
        })
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetch>,
    pub options: Options,
}

impl AppState {
    /// State backed by a real HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the HTTP client cannot be built.
    pub fn from_options(options: Options) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options)?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            options,
        })
    }
}

/// Body of `POST /api/scrape`.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/scrape", post(scrape_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn scrape_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ScrapeRequest>, JsonRejection>,
) -> std::result::Result<Json<ExtractionRecord>, Error> {
    let Json(request) = payload.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;
    let url = request.url.unwrap_or_default();
    info!(url = %url, "profile requested");

    let record = profile_url(state.fetcher.as_ref(), &url, &state.options).await?;
    Ok(Json(record))
}

async fn health_handler() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_input_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        if status.is_server_error() {
            warn!(error = %self, "profile request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Bind `config.addr` and serve until the process exits.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the address cannot be bound,
/// or the server stops with an I/O error.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_options(config.options)?;
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    info!(addr = %config.addr, "siteprofile server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
