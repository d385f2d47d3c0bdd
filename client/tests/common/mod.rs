//! In-process stand-in for the REST backend.
//!
//! Every `api/<resource>` is an in-memory table of JSON records. Requests
//! are recorded so tests can check what the client sent.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use client::Services;
use shared::Config;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    tables: HashMap<String, BTreeMap<i64, Value>>,
    requests: Vec<Recorded>,
    failure: Option<StatusCode>,
}

#[derive(Clone, Default)]
pub struct Backend {
    inner: Arc<Mutex<Inner>>,
}

impl Backend {
    /// Stores `record` under its own `id`.
    pub fn seed(&self, resource: &str, record: Value) {
        let id = record["id"].as_i64().expect("seeded record needs an id");
        let mut inner = self.inner.lock().unwrap();
        inner.tables.entry(resource.to_string()).or_default().insert(id, record);
    }

    pub fn record(&self, resource: &str, id: i64) -> Option<Value> {
        let inner = self.inner.lock().unwrap();
        inner.tables.get(resource).and_then(|t| t.get(&id)).cloned()
    }

    pub fn count(&self, resource: &str) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.tables.get(resource).map_or(0, BTreeMap::len)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }

    /// Makes every following request fail with `status`.
    pub fn fail_with(&self, status: u16) {
        self.inner.lock().unwrap().failure = Some(StatusCode::from_u16(status).unwrap());
    }

    fn log(&self, method: &'static str, path: String, query: Option<String>, headers: &HeaderMap, body: Option<Value>) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.inner.lock().unwrap().requests.push(Recorded {
            method,
            path,
            query,
            content_type,
            body,
        });
    }

    fn failure(&self) -> Option<Response> {
        self.inner.lock().unwrap().failure.map(|status| {
            (status, Json(json!({ "title": "injected failure" }))).into_response()
        })
    }
}

/// Starts a backend on an ephemeral port and returns services pointing at it.
pub async fn spawn() -> (Backend, Services, Config) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/api/:resource", get(list).post(create))
        .route("/api/:resource/:id", get(find).put(update).patch(patch).delete(remove))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config::with_base_url(format!("http://{}", addr));
    let services = Services::new(&config);
    (backend, services, config)
}

fn query_pairs(query: &Option<String>) -> Vec<(String, String)> {
    query
        .as_deref()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.to_string(), value.replace("%2C", ","))
        })
        .collect()
}

async fn list(
    State(backend): State<Backend>,
    Path(resource): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    backend.log("GET", format!("/api/{}", resource), query.clone(), &headers, None);
    if let Some(failure) = backend.failure() {
        return failure;
    }

    // Criteria such as `chartId.equals` are ignored, like the real backend does.
    let params = query_pairs(&query);
    let mut records: Vec<Value> = {
        let inner = backend.inner.lock().unwrap();
        inner
            .tables
            .get(&resource)
            .map(|t| t.values().cloned().collect())
            .unwrap_or_default()
    };

    let total = records.len();
    let param = |name: &str| params.iter().find(|(k, _)| k == name).map(|(_, v)| v.parse::<usize>().unwrap());
    if let Some(size) = param("size") {
        let page = param("page").unwrap_or(0);
        records = records.into_iter().skip(page * size).take(size).collect();
    }

    ([("X-Total-Count", total.to_string())], Json(records)).into_response()
}

async fn create(
    State(backend): State<Backend>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(mut record): Json<Value>,
) -> Response {
    backend.log("POST", format!("/api/{}", resource), None, &headers, Some(record.clone()));
    if let Some(failure) = backend.failure() {
        return failure;
    }
    if !record["id"].is_null() {
        return (StatusCode::BAD_REQUEST, "A new entity cannot already have an ID").into_response();
    }

    let mut inner = backend.inner.lock().unwrap();
    let table = inner.tables.entry(resource).or_default();
    let id = table.keys().next_back().map_or(1, |last| last + 1);
    record["id"] = json!(id);
    table.insert(id, record.clone());

    (StatusCode::CREATED, Json(record)).into_response()
}

async fn find(
    State(backend): State<Backend>,
    Path((resource, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    backend.log("GET", format!("/api/{}/{}", resource, id), None, &headers, None);
    if let Some(failure) = backend.failure() {
        return failure;
    }

    match backend.record(&resource, id) {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update(
    State(backend): State<Backend>,
    Path((resource, id)): Path<(String, i64)>,
    headers: HeaderMap,
    Json(record): Json<Value>,
) -> Response {
    backend.log("PUT", format!("/api/{}/{}", resource, id), None, &headers, Some(record.clone()));
    if let Some(failure) = backend.failure() {
        return failure;
    }
    if record["id"].as_i64() != Some(id) {
        return (StatusCode::BAD_REQUEST, "Invalid ID").into_response();
    }

    let mut inner = backend.inner.lock().unwrap();
    match inner.tables.get_mut(&resource).and_then(|t| t.get_mut(&id)) {
        Some(stored) => {
            *stored = record.clone();
            Json(record).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn patch(
    State(backend): State<Backend>,
    Path((resource, id)): Path<(String, i64)>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let changes: Value = serde_json::from_slice(&body).unwrap();
    backend.log("PATCH", format!("/api/{}/{}", resource, id), None, &headers, Some(changes.clone()));
    if let Some(failure) = backend.failure() {
        return failure;
    }

    let mut inner = backend.inner.lock().unwrap();
    let Some(stored) = inner.tables.get_mut(&resource).and_then(|t| t.get_mut(&id)) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if let (Some(stored), Some(changes)) = (stored.as_object_mut(), changes.as_object()) {
        for (key, value) in changes {
            if value.is_null() {
                stored.remove(key);
            } else {
                stored.insert(key.clone(), value.clone());
            }
        }
    }

    Json(stored.clone()).into_response()
}

async fn remove(
    State(backend): State<Backend>,
    Path((resource, id)): Path<(String, i64)>,
    headers: HeaderMap,
) -> Response {
    backend.log("DELETE", format!("/api/{}/{}", resource, id), None, &headers, None);
    if let Some(failure) = backend.failure() {
        return failure;
    }

    let mut inner = backend.inner.lock().unwrap();
    match inner.tables.get_mut(&resource).and_then(|t| t.remove(&id)) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
