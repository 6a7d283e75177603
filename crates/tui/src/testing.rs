//! In-process stand-in for the expense backend, used by the tests.
//!
//! Every request is recorded so tests can assert on the exact sequence of
//! calls a sync or a command produced.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

impl Recorded {
    pub fn route(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

struct Inner {
    expenses: Value,
    statistics: Value,
    read_status: StatusCode,
    add_status: StatusCode,
    delete_status: StatusCode,
    requests: Vec<Recorded>,
}

#[derive(Clone)]
pub struct StubBackend {
    inner: Arc<Mutex<Inner>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                expenses: json!([]),
                statistics: json!({"total": 0, "monthly_total": 0, "categories": {}}),
                read_status: StatusCode::OK,
                add_status: StatusCode::OK,
                delete_status: StatusCode::OK,
                requests: Vec::new(),
            })),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let mut inner = self.inner.lock().unwrap();
        f(&mut inner)
    }

    pub fn set_expenses(&self, expenses: Value) {
        self.with(|inner| inner.expenses = expenses);
    }

    pub fn set_statistics(&self, statistics: Value) {
        self.with(|inner| inner.statistics = statistics);
    }

    pub fn set_read_status(&self, status: StatusCode) {
        self.with(|inner| inner.read_status = status);
    }

    pub fn set_add_status(&self, status: StatusCode) {
        self.with(|inner| inner.add_status = status);
    }

    pub fn set_delete_status(&self, status: StatusCode) {
        self.with(|inner| inner.delete_status = status);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.with(|inner| inner.requests.clone())
    }

    pub fn routes(&self) -> Vec<String> {
        self.requests().iter().map(Recorded::route).collect()
    }

    pub fn clear_requests(&self) {
        self.with(|inner| inner.requests.clear());
    }

    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.with(|inner| inner.requests.push(Recorded { method, path, body }));
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/get_expenses", get(get_expenses))
            .route("/add_expense", post(add_expense))
            .route("/delete_expense/{id}", delete(delete_expense))
            .route("/get_statistics", get(get_statistics))
            .with_state(self.clone())
    }

    /// Serves the stub and returns its base URL.
    pub async fn start(&self) -> String {
        serve(self.router()).await
    }
}

async fn get_expenses(State(backend): State<StubBackend>) -> (StatusCode, Json<Value>) {
    backend.record("GET", "/get_expenses".to_string(), None);
    backend.with(|inner| (inner.read_status, Json(inner.expenses.clone())))
}

async fn add_expense(
    State(backend): State<StubBackend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    backend.record("POST", "/add_expense".to_string(), Some(body));
    let status = backend.with(|inner| inner.add_status);
    (status, Json(json!({"success": status.is_success()})))
}

async fn delete_expense(
    State(backend): State<StubBackend>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    backend.record("DELETE", format!("/delete_expense/{id}"), None);
    let status = backend.with(|inner| inner.delete_status);
    (status, Json(json!({"success": status.is_success()})))
}

async fn get_statistics(State(backend): State<StubBackend>) -> (StatusCode, Json<Value>) {
    backend.record("GET", "/get_statistics".to_string(), None);
    backend.with(|inner| (inner.read_status, Json(inner.statistics.clone())))
}

/// Binds `router` to an ephemeral local port and returns the base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            tracing::error!("stub backend failed: {err}");
        }
    });
    format!("http://{addr}/")
}
