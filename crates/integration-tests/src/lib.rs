//! Integration test support for the Sundial checkout flow.
//!
//! Provides [`MockOrderApi`], an in-process stand-in for the order API.
//! It serves the four endpoints the checkout sequence calls and records
//! every request so tests can assert exactly what went over the wire:
//!
//! - `DELETE /api/cart`
//! - `POST /api/cart/items`
//! - `POST /api/orders`
//! - `PATCH /api/orders/{id}/confirm-payment`
//!
//! # Example
//!
//! ```rust,ignore
//! let api = MockOrderApi::spawn().await;
//! let flow = CheckoutFlow::new(OrderApiClient::new(api.base_url()), Pages::default());
//! // ... run the flow, then inspect api.recorded()
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test-support crate: panicking on a broken mock is the correct failure mode
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::routing::{delete, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

/// Everything the mock saw, in arrival order.
#[derive(Debug, Default)]
pub struct Recorded {
    /// Number of `DELETE /cart` calls.
    pub cart_clears: usize,
    /// Bodies of `POST /cart/items` calls.
    pub sync_requests: Vec<Value>,
    /// Bodies of `POST /orders` calls.
    pub order_requests: Vec<Value>,
    /// Order IDs of `PATCH /orders/{id}/confirm-payment` calls.
    pub confirmations: Vec<String>,
    /// Bearer credential of each request, in arrival order.
    pub bearer_tokens: Vec<Option<String>>,
}

impl Recorded {
    /// Total number of requests the mock received.
    #[must_use]
    pub fn total_requests(&self) -> usize {
        self.bearer_tokens.len()
    }
}

/// Scripted server behavior for a test.
#[derive(Debug, Clone)]
pub struct Behavior {
    /// `_id` returned for a created order.
    pub order_id: String,
    /// Reject order creation with this message (`None` message omitted).
    pub fail_order: bool,
    pub order_error_message: Option<String>,
    /// Reject payment confirmation with this message.
    pub fail_confirm: bool,
    pub confirm_error_message: Option<String>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            order_id: "68a1f0b2c3d4e5f6a7b8c9d0".to_string(),
            fail_order: false,
            order_error_message: None,
            fail_confirm: false,
            confirm_error_message: None,
        }
    }
}

#[derive(Clone)]
struct MockState {
    recorded: Arc<Mutex<Recorded>>,
    behavior: Arc<Behavior>,
}

/// In-process mock of the order API.
pub struct MockOrderApi {
    addr: SocketAddr,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockOrderApi {
    /// Spawn a mock with default behavior (everything succeeds).
    pub async fn spawn() -> Self {
        Self::spawn_with(Behavior::default()).await
    }

    /// Spawn a mock with scripted behavior.
    pub async fn spawn_with(behavior: Behavior) -> Self {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = MockState {
            recorded: Arc::clone(&recorded),
            behavior: Arc::new(behavior),
        };

        let app = Router::new()
            .route("/api/cart", delete(clear_cart))
            .route("/api/cart/items", post(add_item))
            .route("/api/orders", post(create_order))
            .route("/api/orders/{id}/confirm-payment", patch(confirm_payment))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock API");
        });

        Self { addr, recorded }
    }

    /// API root to hand to `OrderApiClient::new`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Inspect everything recorded so far.
    #[must_use]
    pub fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.recorded.lock().expect("recorded lock")
    }
}

fn bearer_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn record_request<'a>(state: &'a MockState, headers: &HeaderMap) -> MutexGuard<'a, Recorded> {
    let mut recorded = state.recorded.lock().expect("recorded lock");
    recorded.bearer_tokens.push(bearer_of(headers));
    recorded
}

async fn clear_cart(State(state): State<MockState>, headers: HeaderMap) -> Json<Value> {
    let mut recorded = record_request(&state, &headers);
    recorded.cart_clears += 1;
    Json(json!({"status": "success"}))
}

async fn add_item(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut recorded = record_request(&state, &headers);
    recorded.sync_requests.push(body);
    Json(json!({"status": "success"}))
}

async fn create_order(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut recorded = record_request(&state, &headers);
    recorded.order_requests.push(body);
    drop(recorded);

    if state.behavior.fail_order {
        let mut response = json!({"status": "error"});
        if let Some(message) = &state.behavior.order_error_message {
            response["message"] = json!(message);
        }
        return Json(response);
    }
    Json(json!({
        "status": "success",
        "data": { "order": { "_id": state.behavior.order_id } }
    }))
}

async fn confirm_payment(
    State(state): State<MockState>,
    Path(order_id): Path<String>,
    headers: HeaderMap,
) -> Json<Value> {
    let mut recorded = record_request(&state, &headers);
    recorded.confirmations.push(order_id);
    drop(recorded);

    if state.behavior.fail_confirm {
        let mut response = json!({"status": "error"});
        if let Some(message) = &state.behavior.confirm_error_message {
            response["message"] = json!(message);
        }
        return Json(response);
    }
    Json(json!({"status": "success"}))
}
