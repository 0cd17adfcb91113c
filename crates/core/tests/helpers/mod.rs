//! Test harness for search client integration tests.
//!
//! Spawns a throwaway axum server on an ephemeral port that answers
//! `/api/search` with a canned status and body, and records every query it saw.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use laulik_core::types::WidgetConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SeenQuery {
    pub q: String,
    pub category: Option<String>,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: &'static str,
    seen: Arc<Mutex<Vec<SeenQuery>>>,
}

pub struct MockSite {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenQuery>>>,
}

impl MockSite {
    /// Start a server answering every search with `status` and `body`.
    pub async fn start(status: u16, body: &'static str) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let canned = Canned {
            status: StatusCode::from_u16(status).expect("valid status"),
            body,
            seen: seen.clone(),
        };
        let app = Router::new().route("/api/search", get(search)).with_state(canned);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        MockSite { addr, seen }
    }

    pub fn config(&self) -> WidgetConfig {
        WidgetConfig { base_url: format!("http://{}", self.addr), ..WidgetConfig::default() }
    }

    pub fn seen(&self) -> Vec<SeenQuery> {
        self.seen.lock().unwrap().clone()
    }
}

async fn search(
    State(canned): State<Canned>,
    Query(query): Query<SeenQuery>,
) -> (StatusCode, [(&'static str, &'static str); 1], &'static str) {
    canned.seen.lock().unwrap().push(query);
    (canned.status, [("content-type", "application/json")], canned.body)
}
