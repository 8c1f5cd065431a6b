use std::future::Future;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::router;
use crate::sheet::SheetsClient;
use crate::time;

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let sheets_client = SheetsClient::new(
        config.sheets_api_url,
        config.sheets_api_key,
        config.sheet_timeout_ms,
    )
    .expect("failed to create sheets client");

    let app = router::router(time::SystemTime {}, sheets_client);

    tracing::info!("listening on {:?}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .unwrap()
}
