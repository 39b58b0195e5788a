//! In-process mock of the blood-donation backend

#![allow(dead_code)]

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{IntoResponse, Response};
use hemo_client::{ApiClient, ClientConfig, MemoryStore, SessionStore};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// A request as the backend saw it
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    seen: Arc<Mutex<Vec<Seen>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Seen {
        self.requests().last().cloned().expect("no request recorded")
    }

    pub fn push_body(&self, body: Value) {
        self.bodies.lock().unwrap().push(body);
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

async fn record(State(recorder): State<Recorder>, req: Request, next: Next) -> Response {
    let seen = Seen {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        authorization: req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    recorder.seen.lock().unwrap().push(seen);
    next.run(req).await
}

/// Serve `routes` under `/api/v1` on an ephemeral port; returns the base URL
pub async fn spawn_backend(routes: Router, recorder: Recorder) -> String {
    let app = Router::new()
        .nest("/api/v1", routes)
        .layer(from_fn_with_state(recorder, record));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

pub fn client(base_url: &str, store: Arc<MemoryStore>) -> ApiClient {
    let store: Arc<dyn SessionStore> = store;
    ApiClient::new(&ClientConfig::new(base_url), store).unwrap()
}

pub fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

pub fn not_authenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({ "detail": "Not authenticated" })),
    )
        .into_response()
}

pub fn user_json(id: &str, email: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "role": role,
        "created_at": "2024-03-01T09:15:00",
        "updated_at": null
    })
}

pub fn donor_json(id: &str, blood_type: &str) -> Value {
    json!({
        "id": id,
        "user_id": format!("user-{id}"),
        "name": "Ada Donor",
        "email": "ada@x.com",
        "phone": "555-0100",
        "blood_type": blood_type,
        "age": 34,
        "weight": 70,
        "address": "1 Main St",
        "medical_history": null,
        "donation_units": 1,
        "last_donation_date": null,
        "is_eligible": true,
        "created_at": "2024-03-01T09:15:00",
        "updated_at": null
    })
}

pub fn inventory_json(id: &str, blood_type: &str, units: u32) -> Value {
    json!({
        "id": id,
        "blood_type": blood_type,
        "units_available": units,
        "expiry_date": "2030-01-01T00:00:00",
        "last_updated": "2024-03-01T09:15:00",
        "created_at": "2024-03-01T09:15:00",
        "updated_at": null
    })
}

pub fn event_json(id: &str, donors: &[&str]) -> Value {
    json!({
        "id": id,
        "title": "Spring drive",
        "description": "Community blood drive",
        "date": "2025-04-12T00:00:00",
        "time": "09:00 - 15:00",
        "location": "Town hall",
        "address": "2 Market Sq",
        "capacity": 50,
        "organizer": "City Hospital",
        "registered_donors": donors,
        "status": "upcoming",
        "created_at": "2025-01-10T12:00:00",
        "updated_at": null
    })
}
