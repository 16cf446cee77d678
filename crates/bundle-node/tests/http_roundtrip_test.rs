//! End-to-end tests over a real socket.

use std::net::SocketAddr;
use std::time::Duration;

use bundle_node::{BundleNode, NodeConfig};
use bundle_store::StoreConfig;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct TestNode {
    addr: SocketAddr,
    client: Client,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<anyhow::Result<()>>,
}

impl TestNode {
    async fn start(store: StoreConfig) -> Self {
        let config = NodeConfig {
            store,
            ..NodeConfig::default()
        };
        let node = BundleNode::new(config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(node.run_on(listener, async {
            let _ = rx.await;
        }));

        Self {
            addr,
            client: Client::new(),
            shutdown,
            task,
        }
    }

    fn url(&self, query: &str) -> String {
        format!("http://{}/bundle{query}", self.addr)
    }

    async fn post(&self, id: &str, body: Value) -> reqwest::Response {
        self.client
            .post(self.url(&format!("?id={id}")))
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    async fn txs(&self, id: &str) -> Vec<String> {
        let response = self
            .client
            .get(self.url(&format!("?id={id}")))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["bundleId"], id);
        serde_json::from_value(body["rawTxs"].clone()).unwrap()
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("node did not stop")
            .unwrap();
        assert!(result.is_ok());
    }
}

#[tokio::test]
async fn test_bundle_lifecycle() {
    let node = TestNode::start(StoreConfig::default()).await;

    assert!(node.txs("b1").await.is_empty());

    for raw in ["0x1", "0x2", "0x1"] {
        let response = node.post("b1", json!({ "rawTx": raw })).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "");
    }
    assert_eq!(node.txs("b1").await, vec!["0x1", "0x2"]);
    assert!(node.txs("b2").await.is_empty());

    let response = node
        .client
        .delete(node.url("?id=b1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(node.txs("b1").await.is_empty());

    node.stop().await;
}

#[tokio::test]
async fn test_capacity_evicts_oldest() {
    let store = StoreConfig {
        max_records: 3,
        ..StoreConfig::default()
    };
    let node = TestNode::start(store).await;

    for i in 0..5 {
        node.post("b1", json!({ "rawTx": format!("0x{i}") })).await;
    }
    assert_eq!(node.txs("b1").await, vec!["0x2", "0x3", "0x4"]);

    node.stop().await;
}

#[tokio::test]
async fn test_errors_are_plain_text_with_cors() {
    let node = TestNode::start(StoreConfig::default()).await;

    let response = node.client.get(node.url("")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.text().await.unwrap().trim(), "no bundle id");

    let response = node.post("b1", json!({ "rawTx": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap().trim(), "rawTx is required");

    let response = node
        .client
        .post(node.url("?id=b1"))
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap().trim(), "invalid request body");

    let response = node.client.put(node.url("?id=b1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    node.stop().await;
}

#[tokio::test]
async fn test_preflight() {
    let node = TestNode::start(StoreConfig::default()).await;

    let response = node
        .client
        .request(reqwest::Method::OPTIONS, node.url(""))
        .header("origin", "https://wallet.example")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, DELETE, OPTIONS"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Accept, Content-Type, Content-Length, Accept-Encoding"
    );

    node.stop().await;
}

#[tokio::test]
async fn test_expired_bundles_are_swept() {
    let store = StoreConfig {
        max_age: Duration::from_millis(150),
        max_records: 15,
        sweep_interval: Duration::from_millis(25),
    };
    let node = TestNode::start(store).await;

    node.post("old", json!({ "rawTx": "0x1" })).await;
    assert_eq!(node.txs("old").await, vec!["0x1"]);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(node.txs("old").await.is_empty());

    // a fresh append after expiry starts a new bundle
    node.post("old", json!({ "rawTx": "0x2" })).await;
    assert_eq!(node.txs("old").await, vec!["0x2"]);

    node.stop().await;
}

#[tokio::test]
async fn test_health_endpoint() {
    let node = TestNode::start(StoreConfig::default()).await;
    node.post("b1", json!({ "rawTx": "0x1" })).await;

    let body: Value = node
        .client
        .get(format!("http://{}/health", node.addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["bundles"], 1);

    node.stop().await;
}
