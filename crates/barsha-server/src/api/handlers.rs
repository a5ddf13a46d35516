//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::ingest;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use barsha_core::engine::Engine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub engine: Engine,
    pub http: reqwest::Client,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

/// Minimal browser console for manual ask/ingest testing.
const CONSOLE_PAGE: &str = r#"<!doctype html><html><head><meta charset="utf-8"><title>Barsha</title>
<style>body{font-family:system-ui,Arial;margin:24px;max-width:860px} input,textarea,button{font-size:16px;padding:8px} textarea{width:100%;height:120px}</style>
</head><body>
<h1>Barsha</h1>
<p>Health: <a href="/health">/health</a></p>
<h2>Ask</h2>
<textarea id="prompt" placeholder="اكتب سؤالك هنا..."></textarea><br/>
<button onclick="ask()">Send</button>
<pre id="out"></pre>
<h2>Learn from a URL</h2>
<input id="url" placeholder="https://example.com/article" size="60" />
<button onclick="ingest()">Ingest URL</button>
<pre id="ing"></pre>
<script>
async function ask(){
  const r = await fetch("/ask",{method:"POST",headers:{"Content-Type":"application/json"},body:JSON.stringify({prompt:document.getElementById("prompt").value})});
  const j = await r.json();
  document.getElementById("out").textContent = JSON.stringify(j,null,2);
}
async function ingest(){
  const u = document.getElementById("url").value;
  const r = await fetch("/ingest_url",{method:"POST",headers:{"Content-Type":"application/json"},body:JSON.stringify({url:u})});
  const j = await r.json();
  document.getElementById("ing").textContent = JSON.stringify(j,null,2);
}
</script>
</body></html>
"#;

/// `GET /`
pub async fn console() -> Html<&'static str> {
    Html(CONSOLE_PAGE)
}

/// `POST /ask`
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(ApiError::BadRequest("prompt required".into()));
    }

    let answer = state.engine.ask(prompt);
    metrics::record_ask(answer.fallback);

    Ok(Json(AskResponse {
        assistant: answer.reply,
        sources: answer.sources,
    }))
}

/// `POST /ingest_url`
pub async fn ingest_url(
    State(state): State<AppState>,
    payload: Result<Json<IngestRequest>, JsonRejection>,
) -> Result<Json<IngestResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let url = request.url.trim().to_string();
    if url.is_empty() {
        return Err(ApiError::BadRequest("url required".into()));
    }

    let html = ingest::fetch_page(&state.http, &url).await.map_err(|e| {
        tracing::warn!(url = %url, "Page fetch failed: {}", e);
        ApiError::BadGateway("failed to fetch or parse".into())
    })?;
    let extracted = ingest::extract_text(&html);
    if extracted.text.is_empty() {
        return Err(ApiError::BadGateway("failed to fetch or parse".into()));
    }

    // Append and rebuild are file-bound; keep them off the async runtime.
    let engine = state.engine.clone();
    let record_url = url.clone();
    let (extracted, stats) = tokio::task::spawn_blocking(move || {
        engine.append_record(&extracted.title, &extracted.text, &record_url)?;
        let stats = engine.rebuild()?;
        Ok::<_, std::io::Error>((extracted, stats))
    })
    .await
    .map_err(|e| {
        tracing::error!("Ingestion task failed to run: {}", e);
        ApiError::Internal("ingestion failed".into())
    })?
    .map_err(|e| {
        tracing::error!(url = %url, "Ingestion failed: {}", e);
        ApiError::Internal("ingestion failed".into())
    })?;

    metrics::record_ingest();
    metrics::update_index_metrics(&state.engine.snapshot());
    tracing::info!(url = %url, chunks = stats.chunks, "URL ingested");

    Ok(Json(IngestResponse {
        status: "ok".to_string(),
        title: extracted.title,
        chars: extracted.text.chars().count(),
    }))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let index = state.engine.snapshot();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        chunks: index.chunk_count(),
        terms: index.term_count(),
    })
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}
