use axum::extract::{Query, State};
use axum::Json;
use tracing::instrument;

use crate::api::{ToggleError, TogglesResponse};
use crate::router;
use crate::toggle_matching::ToggleMatcher;
use crate::toggle_request::{ToggleQueryParams, ToggleRequest};

/// Toggle resolution endpoint. Fetches the sheet's rows, resolves every
/// requested name against them and returns the matched toggles; names
/// with no matching row are simply absent from the response.
#[instrument(skip_all, fields(sheet_id, toggle_count))]
pub async fn toggles(
    state: State<router::State>,
    meta: Query<ToggleQueryParams>,
) -> Result<Json<TogglesResponse>, ToggleError> {
    let request = ToggleRequest::from_query(meta.0)?;

    tracing::Span::current().record("sheet_id", request.sheet_id.as_str());
    tracing::Span::current().record("toggle_count", request.toggle_names.len());

    let rows = state.row_source.fetch_rows(&request.sheet_id).await?;

    let matcher = ToggleMatcher::new(&rows);
    let toggles = matcher.resolve(&request.toggle_names)?;

    tracing::debug!(
        "resolved {} of {} requested toggles",
        toggles.len(),
        request.toggle_names.len()
    );

    Ok(Json(TogglesResponse {
        toggles,
        fetched_at: state.timesource.current_millis(),
    }))
}
