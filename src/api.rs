use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use crate::dashboard::{Dashboard, Trigger, View};
use crate::extract::{extract, NormalizedRecord};
use crate::summary::{summarize, SummaryRow};

pub fn router(state: Dashboard) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/", get(index))
        .route("/view", get(current_view))
        .route("/trigger/{event}", post(trigger))
        .route("/trigger/mag-type/{code}", post(trigger_mag_type))
        .route("/api/records", get(api_records))
        .route("/api/summary", get(api_summary))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
struct ViewOut {
    kind: &'static str,
    html: String,
}

impl From<&View> for ViewOut {
    fn from(v: &View) -> Self {
        Self {
            kind: v.kind(),
            html: v.html(),
        }
    }
}

async fn trigger(State(state): State<Dashboard>, Path(event): Path<String>) -> Response {
    let trigger: Trigger = match event.parse() {
        Ok(t) => t,
        Err(e) => return (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    };
    let view = state.dispatch(trigger).await;
    Json(ViewOut::from(&view)).into_response()
}

async fn trigger_mag_type(
    State(state): State<Dashboard>,
    Path(code): Path<String>,
) -> Json<ViewOut> {
    let view = state.dispatch(Trigger::ShowMagType(code)).await;
    Json(ViewOut::from(&view))
}

async fn current_view(State(state): State<Dashboard>) -> Json<ViewOut> {
    Json(ViewOut::from(&state.current_view()))
}

async fn api_records(State(state): State<Dashboard>) -> Json<Vec<NormalizedRecord>> {
    Json(extract(&state.store().load()))
}

async fn api_summary(State(state): State<Dashboard>) -> Json<Vec<SummaryRow>> {
    Json(summarize(&state.store().load()).rows().to_vec())
}

async fn index(State(state): State<Dashboard>) -> Html<String> {
    Html(INDEX_HTML.replace("{{VIEW}}", &state.current_view().html()))
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Earthquake Dashboard</title>
<style>
  body { font-family: sans-serif; margin: 2rem; }
  table { border-collapse: collapse; margin-top: 1rem; }
  td, th { border: 1px solid #ccc; padding: 4px 8px; }
  #summary-table tr[data-mag-type] { cursor: pointer; }
</style>
</head>
<body>
<button data-trigger="fetch">Fetch Data</button>
<button data-trigger="summary">Show Summary Table</button>
<button data-trigger="raw">Show Original Data</button>
<button data-trigger="clear">Clear Cache</button>
<div id="data-container">{{VIEW}}</div>
<script>
  const container = document.getElementById("data-container");
  async function send(path) {
    const resp = await fetch(path, { method: "POST" });
    const view = await resp.json();
    container.innerHTML = view.html;
  }
  document.querySelectorAll("button[data-trigger]").forEach(b =>
    b.addEventListener("click", () => send("/trigger/" + b.dataset.trigger)));
  container.addEventListener("click", e => {
    const row = e.target.closest("tr[data-mag-type]");
    if (row) send("/trigger/mag-type/" + encodeURIComponent(row.dataset.magType));
  });
</script>
</body>
</html>
"#;
