//! HTTP server for the map, timeline, and event pages and their JSON APIs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Path as AxumPath, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Map, Value};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use atlas_data::{Dataset, TimelineEvent};

use crate::config::AtlasConfig;
use crate::error::WebError;
use crate::views::{Page, Views};

/// Read-only state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    dataset: Arc<Dataset>,
    views: Arc<Views>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, views: Arc<Views>) -> Self {
        Self { dataset, views }
    }
}

pub struct WebServer {
    bind_addr: String,
    static_dir: PathBuf,
    state: AppState,
}

impl WebServer {
    /// Load the datasets and templates named by `config`.
    ///
    /// Any missing or malformed startup file is an error; the server never
    /// starts with partial data.
    pub fn new(config: &AtlasConfig) -> Result<Self, anyhow::Error> {
        let dataset = Dataset::load(&config.paths.data_dir)?;
        let views = Views::load(&config.paths.templates_dir)?;
        Ok(Self {
            bind_addr: config.server.bind_addr.clone(),
            static_dir: config.paths.static_dir.clone(),
            state: AppState::new(Arc::new(dataset), Arc::new(views)),
        })
    }

    pub async fn run(self) -> Result<(), anyhow::Error> {
        let app = router(self.state, &self.static_dir);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;
        tracing::info!(
            addr = %self.bind_addr,
            static_dir = %self.static_dir.display(),
            "HTTP server listening"
        );
        axum::serve(listener, app).await?;
        Ok(())
    }
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/map", get(map_view))
        .route("/timeline", get(timeline_view))
        .route("/country/:name", get(country_view))
        .route("/event/:event_id", get(event_view))
        .route("/api/country/:name", get(api_country))
        .route("/api/country-codes", get(api_country_codes))
        .route("/api/health", get(api_health))
        .route("/data/timeline.json", get(timeline_data))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(web): State<AppState>) -> Html<String> {
    Html(web.views.render(Page::Index, &Map::new()))
}

async fn map_view(State(web): State<AppState>) -> Html<String> {
    Html(web.views.render(Page::WorldMap, &Map::new()))
}

async fn timeline_view(State(web): State<AppState>) -> Html<String> {
    Html(web.views.render(Page::Timeline, &Map::new()))
}

async fn country_view(
    State(web): State<AppState>,
    AxumPath(name): AxumPath<String>,
) -> Html<String> {
    let country = web.dataset.country(&name);
    let related = web.dataset.related_events(&name);

    let mut context = country.fields().clone();
    context.insert("country".into(), Value::Object(country.into_fields()));
    context.insert("related_events".into(), events_to_value(related));
    Html(web.views.render(Page::CountryDetail, &context))
}

async fn event_view(
    State(web): State<AppState>,
    AxumPath(event_id): AxumPath<String>,
) -> Result<Html<String>, WebError> {
    let detail = web.dataset.event_detail(&event_id).await?;
    Ok(Html(web.views.render(Page::EventDetail, detail.fields())))
}

async fn api_country(
    State(web): State<AppState>,
    AxumPath(name): AxumPath<String>,
) -> Response {
    Json(web.dataset.country(&name)).into_response()
}

async fn api_country_codes(State(web): State<AppState>) -> Json<Map<String, Value>> {
    Json(web.dataset.country_codes().clone())
}

async fn timeline_data(State(web): State<AppState>) -> Json<Vec<TimelineEvent>> {
    Json(web.dataset.timeline().to_vec())
}

async fn api_health() -> Json<Value> {
    Json(serde_json::json!({"ok": true, "service": "atlas-web"}))
}

fn events_to_value(events: Vec<TimelineEvent>) -> Value {
    Value::Array(
        events
            .into_iter()
            .map(|event| Value::Object(event.into()))
            .collect(),
    )
}
