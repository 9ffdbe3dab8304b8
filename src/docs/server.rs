//! HTTP surface of the documentation site.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::render::LegendVariant;

use super::build_info::BUILD_INFO;
use super::demos::{DemoName, demo_chart, legend_showcase_markup, palette_table};
use super::loading::select_demo_options;
use super::registry::COMPONENT_REGISTRY_JSON;

/// State shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub select_delay: Duration,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeQuery {
    #[serde(default)]
    pub dark: bool,
}

/// Creates the docs router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/component-registry", get(component_registry_handler))
        .route("/api/build-info", get(build_info_handler))
        .route("/api/palette", get(palette_handler))
        .route("/api/demos/:name", get(demo_handler))
        .route("/api/legend/:variant", get(legend_handler))
        .route("/api/select-options", get(select_options_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Serves the bundled registry verbatim.
async fn component_registry_handler() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        COMPONENT_REGISTRY_JSON,
    )
        .into_response()
}

async fn build_info_handler() -> Response {
    Json(BUILD_INFO).into_response()
}

async fn palette_handler() -> Response {
    Json(palette_table()).into_response()
}

async fn demo_handler(Path(name): Path<String>, Query(theme): Query<ThemeQuery>) -> Response {
    let demo = match name.parse::<DemoName>() {
        Ok(demo) => demo,
        Err(err) => return not_found(err.to_string()),
    };
    let end_ms = chrono::Utc::now().timestamp_millis() as f64;
    Json(demo_chart(demo, theme.dark, end_ms)).into_response()
}

async fn legend_handler(Path(variant): Path<String>, Query(theme): Query<ThemeQuery>) -> Response {
    let variant = match variant.as_str() {
        "small" => LegendVariant::Small,
        "large" => LegendVariant::Large,
        other => return not_found(format!("unknown legend variant `{other}`")),
    };
    Html(legend_showcase_markup(variant, theme.dark)).into_response()
}

/// Resolves after the simulated delay. A dropped request cancels the timer.
async fn select_options_handler(State(state): State<AppState>) -> Response {
    let mut load = select_demo_options(state.select_delay);
    match load.wait().await {
        Some(options) => Json(options).into_response(),
        None => {
            warn!("select options load was cancelled");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

/// Docs HTTP server.
pub struct DocsServer {
    state: AppState,
    listen_addr: SocketAddr,
}

impl DocsServer {
    #[must_use]
    pub fn new(state: AppState, listen_addr: SocketAddr) -> Self {
        Self { state, listen_addr }
    }

    /// Runs until the shutdown signal flips to `true` or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
        let router = create_router(self.state);

        let listener = tokio::net::TcpListener::bind(self.listen_addr)
            .await
            .map_err(|e| anyhow::anyhow!("failed to bind to {}: {}", self.listen_addr, e))?;

        info!(
            addr = %self.listen_addr,
            commit = BUILD_INFO.commit_hash,
            version = BUILD_INFO.docs_version,
            "docs server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                loop {
                    if shutdown.changed().await.is_err() {
                        break;
                    }
                    if *shutdown.borrow() {
                        break;
                    }
                }
                info!("docs server shutting down");
            })
            .await
            .map_err(|e| anyhow::anyhow!("docs server error: {}", e))?;

        info!("docs server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(AppState {
            select_delay: Duration::from_millis(5),
        })
    }

    async fn get_body(uri: &str) -> (StatusCode, Option<String>, String) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (
            status,
            content_type,
            String::from_utf8(body.to_vec()).unwrap(),
        )
    }

    #[tokio::test]
    async fn component_registry_is_served_verbatim() {
        let (status, content_type, body) = get_body("/api/component-registry").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, COMPONENT_REGISTRY_JSON);
    }

    #[tokio::test]
    async fn build_info_uses_camel_case_keys() {
        let (status, _, body) = get_body("/api/build-info").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["libraryVersion"], env!("CARGO_PKG_VERSION"));
        assert!(json["commitHash"].is_string());
    }

    #[tokio::test]
    async fn unknown_demo_is_not_found() {
        let (status, _, body) = get_body("/api/demos/no-such-demo").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("no-such-demo"));
    }

    #[tokio::test]
    async fn dark_demo_uses_dark_palette() {
        let (status, _, body) = get_body("/api/demos/basic-line?dark=true").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["name"], "basic-line");
        assert_eq!(json["option"]["series"][0]["color"], "#82B6FFE6");
        assert_eq!(json["option"]["series"][1]["color"], "#FC574AE6");
    }

    #[tokio::test]
    async fn legend_variants_render_html() {
        let (status, content_type, body) = get_body("/api/legend/small").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(body.contains("Inactive State"));

        let (status, _, _) = get_body("/api/legend/medium").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn select_options_resolve_after_delay() {
        let (status, _, body) = get_body("/api/select-options").await;
        assert_eq!(status, StatusCode::OK);
        let options: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(options, ["Visal", "John", "Alice", "Michael", "Sok"]);
    }
}
