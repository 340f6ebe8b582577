#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Duration,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Local HTTP endpoint answering every POST to `/` with a canned reply.
pub struct StubServer {
    pub url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl StubServer {
    pub async fn json(status: u16, body: Value) -> Self {
        Self::spawn(status, body.to_string(), Duration::ZERO).await
    }

    pub async fn raw(status: u16, body: &str) -> Self {
        Self::spawn(status, body.to_string(), Duration::ZERO).await
    }

    pub async fn slow(delay: Duration, body: Value) -> Self {
        Self::spawn(200, body.to_string(), delay).await
    }

    async fn spawn(status: u16, body: String, delay: Duration) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let reply = Reply {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            delay,
            received: received.clone(),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/", post(answer)).with_state(reply);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/", addr),
            received,
        }
    }

    pub fn hits(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn answer(
    State(reply): State<Reply>,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let parsed = serde_json::from_str(&body).unwrap_or(Value::Null);
    reply.received.lock().unwrap().push(parsed);
    tokio::time::sleep(reply.delay).await;
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body.clone(),
    )
}

/// A URL nothing listens on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}
