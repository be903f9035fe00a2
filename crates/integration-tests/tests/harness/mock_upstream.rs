//! Mock upstream provider servers for integration tests
//!
//! Each mock speaks its provider's streaming wire format and deliberately
//! splits the response body at awkward byte boundaries, including
//! mid-JSON-token, to exercise reassembly in the gateway.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use bytes::Bytes;
use futures_util::stream;
use tokio_util::sync::CancellationToken;

struct MockState {
    request_count: AtomicU32,
    requests: Mutex<Vec<serde_json::Value>>,
    /// When set, every request fails with this status and body
    failure: Option<(StatusCode, String)>,
    /// Response body, pre-split into transport chunks
    chunks: Vec<Bytes>,
}

async fn spawn(router: Router, shutdown: CancellationToken) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
            })
            .await
            .ok();
    });

    Ok(addr)
}

async fn handle(state: Arc<MockState>, body: serde_json::Value) -> axum::response::Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    state.requests.lock().expect("requests lock").push(body);

    if let Some((status, body)) = &state.failure {
        return (*status, Json(serde_json::json!({"message": body}))).into_response();
    }

    let chunks = state.chunks.clone();
    Body::from_stream(stream::iter(chunks.into_iter().map(Ok::<_, Infallible>))).into_response()
}

fn chunked(parts: &[&str]) -> Vec<Bytes> {
    parts.iter().map(|part| Bytes::from((*part).to_owned())).collect()
}

// -- Solar mock (line-delimited `data:` framing) --

/// Mock Upstage Solar backend
pub struct MockSolar {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockSolar {
    /// Start a mock that streams "Hello world" split mid-event
    pub async fn start() -> anyhow::Result<Self> {
        let chunks = chunked(&[
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"},\"finish_reason\":null}]}\ndata: {\"choices\":[{\"delta\":{\"con",
            "tent\":\"Hello\"}}]}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\" world\"}}]}\ndata: [DONE]\n",
        ]);
        Self::start_inner(chunks, None).await
    }

    /// Start a mock where every request fails with the given status
    pub async fn start_failing(status: StatusCode, body: &str) -> anyhow::Result<Self> {
        Self::start_inner(Vec::new(), Some((status, body.to_owned()))).await
    }

    async fn start_inner(chunks: Vec<Bytes>, failure: Option<(StatusCode, String)>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
            failure,
            chunks,
        });

        let router = Router::new()
            .route(
                "/chat/completions",
                routing::post(|State(state): State<Arc<MockState>>, Json(body): Json<serde_json::Value>| async move {
                    handle(state, body).await
                }),
            )
            .with_state(Arc::clone(&state));

        let shutdown = CancellationToken::new();
        let addr = spawn(router, shutdown.clone()).await?;

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the Solar provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of completion requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent request
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.requests.lock().expect("requests lock").last().cloned()
    }
}

impl Drop for MockSolar {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Gemini mock (concatenated-object framing) --

/// Mock Google Generative Language backend
pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockGemini {
    /// Start a mock that streams "Hello world" split mid-object
    pub async fn start() -> anyhow::Result<Self> {
        let chunks = chunked(&[
            "{\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hel",
            "lo\"}]}}]}{\"candidates\":[{\"content\":{\"parts\":[{\"text\":\" world\"}]}}]}",
            "{\"candidates\":[{\"finishReason\":\"STOP\"}]}",
        ]);
        Self::start_inner(chunks).await
    }

    async fn start_inner(chunks: Vec<Bytes>) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            request_count: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
            failure: None,
            chunks,
        });

        // The gateway posts to `/models/{model}:streamGenerateContent`; the
        // whole `{model}:{action}` pair lands in one path segment.
        let router = Router::new()
            .route(
                "/models/{action}",
                routing::post(|State(state): State<Arc<MockState>>, Json(body): Json<serde_json::Value>| async move {
                    handle(state, body).await
                }),
            )
            .with_state(Arc::clone(&state));

        let shutdown = CancellationToken::new();
        let addr = spawn(router, shutdown.clone()).await?;

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the Gemini provider
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of generation requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent request
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.requests.lock().expect("requests lock").last().cloned()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
