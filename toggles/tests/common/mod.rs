use std::net::SocketAddr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use toggles::router::router;
use toggles::sheet::MockRowSource;
use toggles::test_utils::demo_rows;
use toggles::time::FixedTime;
use toggles::toggle_definitions::Row;

pub const FETCHED_AT_MILLIS: i64 = 1_700_000_000_000;

pub static DEMO_SHEET: Lazy<Vec<Row>> = Lazy::new(demo_rows);

pub struct ServerHandle {
    pub addr: SocketAddr,
    shutdown: Arc<Notify>,
}

impl ServerHandle {
    /// Spins up the full router against a mock row source, so tests
    /// exercise the real HTTP surface without a live sheet.
    pub async fn for_rows(rows: Vec<Row>) -> ServerHandle {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let notify = Arc::new(Notify::new());
        let shutdown = notify.clone();

        let app = router(
            FixedTime {
                millis: FETCHED_AT_MILLIS,
            },
            MockRowSource::new().rows_ret(rows),
        );

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { notify.notified().await })
                .await
                .unwrap()
        });
        ServerHandle { addr, shutdown }
    }

    pub async fn send_toggles_request(&self, query: &str) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .get(format!("http://{:?}/toggles?{}", self.addr, query))
            .send()
            .await
            .expect("failed to send request")
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown.notify_one()
    }
}
