use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{endpoint, sheet, time::TimeSource};

#[derive(Clone)]
pub struct State {
    pub row_source: Arc<dyn sheet::RowSource + Send + Sync>,
    pub timesource: Arc<dyn TimeSource + Send + Sync>,
}

async fn index() -> &'static str {
    "toggles"
}

pub fn router<
    TZ: TimeSource + Send + Sync + 'static,
    S: sheet::RowSource + Send + Sync + 'static,
>(
    timesource: TZ,
    row_source: S,
) -> Router {
    let state = State {
        row_source: Arc::new(row_source),
        timesource: Arc::new(timesource),
    };

    Router::new()
        .route("/", get(index))
        .route("/toggles", get(endpoint::toggles))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
