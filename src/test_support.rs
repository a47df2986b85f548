// src/test_support.rs
//
// Shared fixtures for the in-module tests.

use tokio::runtime::Runtime;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PAGE_PATH: &str = "/database_w_REF.html";

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,focscraper=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// A mock HTTP server answering `GET /database_w_REF.html` with a fixed
/// response. The blocking client must not run inside a tokio context, so the
/// server is set up on its own runtime and the test thread stays plain.
pub struct MockPage {
    // dropped before the runtime
    server: MockServer,
    _rt: Runtime,
}

impl MockPage {
    pub fn serve(status: u16, body: Vec<u8>) -> Self {
        let rt = Runtime::new().expect("test runtime");
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path(PAGE_PATH))
                .respond_with(
                    ResponseTemplate::new(status)
                        .insert_header("content-type", "text/html")
                        .set_body_bytes(body),
                )
                .mount(&server)
                .await;
            server
        });
        Self { server, _rt: rt }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), PAGE_PATH)
    }
}
