use std::sync::Arc;

use ukfast_api::testing::MockTransport;
use ukfast_ecloud::{Client, ECloudClient};

/// Routes `tracing` output through the test harness. Honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn mock_ecloud() -> (Arc<MockTransport>, ECloudClient) {
    init_tracing();
    let transport = Arc::new(MockTransport::new());
    let ecloud = ECloudClient::with_client(Client::from_shared(transport.clone()));
    (transport, ecloud)
}

#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}
