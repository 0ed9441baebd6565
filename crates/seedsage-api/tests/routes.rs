//! Router-level tests driving the API through tower's oneshot

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower::ServiceExt;

use seedsage_api::{create_app, AppState};
use seedsage_core::{
    Balance, BadgeConfig, ClaimError, LedgerError, MicroStx, Network, StxAddress, Transaction,
    TxId, TxKind, TxStatus,
};
use seedsage_session::{
    BadgeClaim, ClaimOutcome, ContractCallRequest, ContractSigner, InMemoryProfileStore,
    LedgerQuery, NetworkAddresses, Reconciler, SessionProvider, SessionState,
};

const ADDRESS: &str = "ST1PQEEMQ3ZGQ0B1P9P22A2VTK2C9404090ET002P";
const TX_ID: &str = "0xaaa111";

struct MockProvider {
    state: Mutex<SessionState>,
}

impl MockProvider {
    fn signed_out() -> Self {
        Self {
            state: Mutex::new(SessionState::NoSession),
        }
    }

    fn signed_in() -> Self {
        Self {
            state: Mutex::new(SessionState::SignedIn),
        }
    }
}

#[async_trait]
impl SessionProvider for MockProvider {
    async fn state(&self) -> SessionState {
        *self.state.lock().await
    }

    async fn complete_pending_sign_in(&self) -> Result<(), seedsage_core::SessionError> {
        *self.state.lock().await = SessionState::SignedIn;
        Ok(())
    }

    async fn load_addresses(&self) -> NetworkAddresses {
        NetworkAddresses {
            testnet: Some(StxAddress::new(ADDRESS)),
            mainnet: None,
        }
    }

    async fn sign_out(&self) {
        *self.state.lock().await = SessionState::NoSession;
    }
}

struct MockLedger;

#[async_trait]
impl LedgerQuery for MockLedger {
    async fn detect_network(
        &self,
        _address: &StxAddress,
    ) -> Result<(Network, Balance), LedgerError> {
        Ok((
            Network::Testnet,
            Balance {
                spendable: MicroStx::new("124580000"),
                locked: MicroStx::zero(),
            },
        ))
    }

    async fn recent_transactions(
        &self,
        _address: &StxAddress,
        _network: Network,
    ) -> Result<Vec<Transaction>, LedgerError> {
        Ok(vec![Transaction {
            tx_id: TxId::new(TX_ID),
            status: TxStatus::Success,
            sender: StxAddress::new(ADDRESS),
            fee: MicroStx::new("180000"),
            timestamp: Some(1_700_000_000),
            kind: TxKind::TokenTransfer {
                recipient: StxAddress::new("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"),
                amount: MicroStx::new("10000000"),
                memo: Some("gm".to_string()),
            },
        }])
    }
}

struct MockSigner {
    outcome: Mutex<Option<Result<ClaimOutcome, ClaimError>>>,
}

impl MockSigner {
    fn submitting(tx_id: &str) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(ClaimOutcome::Submitted {
                tx_id: TxId::new(tx_id),
            }))),
        }
    }

    fn cancelling() -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(ClaimOutcome::Cancelled))),
        }
    }
}

#[async_trait]
impl ContractSigner for MockSigner {
    async fn open_contract_call(
        &self,
        _request: ContractCallRequest,
    ) -> Result<ClaimOutcome, ClaimError> {
        self.outcome
            .lock()
            .await
            .take()
            .unwrap_or(Ok(ClaimOutcome::Cancelled))
    }
}

fn app_with(provider: MockProvider, signer: MockSigner) -> axum::Router {
    let reconciler = Reconciler::new(Arc::new(provider), Arc::new(MockLedger));
    let badge = BadgeClaim::new(
        reconciler.clone(),
        Arc::new(signer),
        BadgeConfig::default(),
    );
    let state = AppState::new(reconciler, badge, Arc::new(InMemoryProfileStore::new()));
    create_app(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app_with(MockProvider::signed_out(), MockSigner::cancelling());

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_session_starts_signed_out() {
    let app = app_with(MockProvider::signed_out(), MockSigner::cancelling());

    let response = app.oneshot(get("/session")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "signed_out");
    assert!(body["address"].is_null());
}

#[tokio::test]
async fn test_resolve_reaches_ready() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    let response = app.oneshot(post("/session/resolve")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["address"], ADDRESS);
    assert_eq!(body["network"], "testnet");
}

#[tokio::test]
async fn test_disconnect_clears_session() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app.oneshot(post("/session/disconnect")).await.unwrap();

    let body = body_json(response).await;
    assert_eq!(body["status"], "signed_out");
}

#[tokio::test]
async fn test_balance_requires_connection() {
    let app = app_with(MockProvider::signed_out(), MockSigner::cancelling());

    let response = app.oneshot(get("/wallet/balance")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["code"], "not_connected");
}

#[tokio::test]
async fn test_balance_after_resolve() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app.oneshot(get("/wallet/balance")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["spendable"], "124580000");
    assert_eq!(body["locked"], "0");
    assert_eq!(body["spendable_stx"], "124.58");
    assert_eq!(body["locked_stx"], "0");
}

#[tokio::test]
async fn test_transactions_after_resolve() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app.oneshot(get("/wallet/transactions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["transactions"][0]["tx_id"], TX_ID);
    assert_eq!(body["transactions"][0]["kind"], "token_transfer");
}

#[tokio::test]
async fn test_missions_default_when_signed_out() {
    let app = app_with(MockProvider::signed_out(), MockSigner::cancelling());

    let response = app.oneshot(get("/missions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["completed"], 0);
    assert_eq!(body["all_complete"], false);
    assert_eq!(
        body["missions"].as_array().unwrap().len(),
        body["total"].as_u64().unwrap() as usize
    );
}

#[tokio::test]
async fn test_missions_evaluated_after_resolve() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app.oneshot(get("/missions")).await.unwrap();

    // The mock history holds one successful outbound transfer
    let body = body_json(response).await;
    let first = body["missions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"] == "first-transaction")
        .cloned()
        .unwrap();
    assert_eq!(first["completed"], true);
    assert_eq!(body["completed"], 1);
}

#[tokio::test]
async fn test_claim_requires_connection() {
    let app = app_with(MockProvider::signed_out(), MockSigner::cancelling());

    let response = app.oneshot(post("/badge/claim")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_claim_submitted() {
    let app = app_with(MockProvider::signed_in(), MockSigner::submitting("0xbadge"));

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app.oneshot(post("/badge/claim")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["submitted"], true);
    assert_eq!(body["tx_id"], "0xbadge");
}

#[tokio::test]
async fn test_claim_cancelled() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app.oneshot(post("/badge/claim")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["submitted"], false);
    assert_eq!(body["cancelled"], true);
    assert!(body["tx_id"].is_null());
}

#[tokio::test]
async fn test_profile_roundtrip() {
    let app = app_with(MockProvider::signed_out(), MockSigner::cancelling());

    let response = app
        .clone()
        .oneshot(put_json("/profile/alice", json!({"username": "Alice"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/profile/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["username"], "Alice");
}

#[tokio::test]
async fn test_profile_missing_is_404() {
    let app = app_with(MockProvider::signed_out(), MockSigner::cancelling());

    let response = app.oneshot(get("/profile/nobody")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_explain_context() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app
        .oneshot(post_json(
            "/assistant/context",
            json!({"tx_id": TX_ID, "intent": "explain_tx"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["address"], ADDRESS);
    assert_eq!(body["balance_before"], "124.58");
    assert_eq!(body["balance_after"], "114.4");
    assert_eq!(body["last_tx"]["amount"], "10");
    assert_eq!(body["last_tx"]["memo"], "gm");
}

#[tokio::test]
async fn test_explain_defaults_to_latest_tx() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app
        .oneshot(post_json(
            "/assistant/context",
            json!({"intent": "ask_question", "message": "what was that?"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["last_tx"]["txid"], TX_ID);
    assert_eq!(body["intent"], "ask_question");
}

#[tokio::test]
async fn test_explain_unknown_tx_is_404() {
    let app = app_with(MockProvider::signed_in(), MockSigner::cancelling());

    app.clone().oneshot(post("/session/resolve")).await.unwrap();
    let response = app
        .oneshot(post_json(
            "/assistant/context",
            json!({"tx_id": "0xmissing", "intent": "explain_tx"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
