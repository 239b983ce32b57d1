use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode as AxumStatus};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use formfilter::config::Config;

pub const TEST_API_KEY: &str = "test-api-key";

/// Form id the mock forms API answers with a 503.
pub const FAILING_FORM: &str = "unavailable";

/// One call received by the mock forms API.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub form_id: String,
    pub authorization: Option<String>,
    pub query: HashMap<String, String>,
}

#[derive(Default)]
struct MockState {
    pages: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<RecordedCall>>,
}

/// A stand-in for the upstream forms API, bound to a random port.
pub struct MockForms {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockForms {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn set_page(&self, form_id: &str, page: Value) {
        self.state
            .pages
            .lock()
            .unwrap()
            .insert(form_id.to_string(), page);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }
}

async fn mock_submissions(
    State(state): State<Arc<MockState>>,
    Path(form_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.calls.lock().unwrap().push(RecordedCall {
        form_id: form_id.clone(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        query,
    });

    if form_id == FAILING_FORM {
        return (AxumStatus::SERVICE_UNAVAILABLE, "upstream down").into_response();
    }

    match state.pages.lock().unwrap().get(&form_id) {
        Some(page) => Json(page.clone()).into_response(),
        None => (AxumStatus::NOT_FOUND, Json(json!({ "message": "Form not found" }))).into_response(),
    }
}

pub async fn spawn_mock_forms() -> MockForms {
    let state = Arc::new(MockState::default());

    let app = Router::new()
        .route("/v1/api/forms/{form_id}/submissions", get(mock_submissions))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock forms API");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock forms API failed");
    });

    MockForms { addr, state }
}

/// A running proxy wired to its own mock forms API.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub forms: MockForms,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET `/{form_id}/filteredResponses` with the given query pairs.
    pub async fn filtered(&self, form_id: &str, query: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(&format!("/{form_id}/filteredResponses")))
            .query(query)
            .send()
            .await
            .expect("filteredResponses request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config(forms_api_base_url: String) -> Config {
    Config {
        api_key: TEST_API_KEY.to_string(),
        forms_api_base_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        upstream_timeout: Duration::from_secs(5),
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    let forms = spawn_mock_forms().await;
    let app = formfilter::build_app(&test_config(forms.base_url())).expect("Failed to build app");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        forms,
    }
}

/// A submission whose only question is `q1` with the given value.
#[allow(dead_code)]
pub fn submission(id: &str, q1: Value) -> Value {
    json!({
        "submissionId": id,
        "submissionTime": "2024-02-01T10:00:00.000Z",
        "lastUpdatedAt": "2024-02-01T10:00:00.000Z",
        "questions": [
            { "id": "q1", "name": "Score", "type": "NumberInput", "value": q1 }
        ],
        "calculations": [],
        "urlParameters": [{ "id": "src", "name": "src", "value": "newsletter" }],
        "quiz": {},
        "documents": []
    })
}

#[allow(dead_code)]
pub fn page(responses: Vec<Value>, total: i64, page_count: i64) -> Value {
    json!({
        "responses": responses,
        "totalResponses": total,
        "pageCount": page_count,
    })
}
