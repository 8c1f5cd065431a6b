use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sheet::CustomSheetError;
use crate::toggle_definitions::Toggle;

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TogglesResponse {
    pub toggles: Vec<Toggle>,
    /// Unix milliseconds at which resolution happened.
    pub fetched_at: i64,
}

#[derive(Error, Debug)]
pub enum ToggleError {
    #[error("no sheet id provided in request")]
    NoSheetId,
    #[error("no toggle names provided in request")]
    NoToggleNames,
    #[error("empty toggle name in request")]
    EmptyToggleName,

    #[error("row '{0}' has no rollout groups")]
    NoRolloutGroups(String),

    #[error("sheet not found")]
    SheetNotFound,
    #[error("failed to parse sheet data")]
    DataParsingError,
    #[error("sheet source unavailable")]
    SheetUnavailable,
    #[error("timed out while fetching rows")]
    TimeoutError,
}

impl IntoResponse for ToggleError {
    fn into_response(self) -> Response {
        // Clients only ever see success or a single server-error surface
        // with the error's description, the shell does not distinguish
        // further. NoRolloutGroups never reaches here on the request path,
        // the resolver drops that toggle instead.
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl From<CustomSheetError> for ToggleError {
    fn from(e: CustomSheetError) -> Self {
        match e {
            CustomSheetError::NotFound => ToggleError::SheetNotFound,
            CustomSheetError::ParseError(e) => {
                tracing::error!("failed to parse sheet data: {}", e);
                ToggleError::DataParsingError
            }
            CustomSheetError::Timeout(_) => ToggleError::TimeoutError,
            CustomSheetError::Upstream(status) => {
                tracing::error!("sheet source returned an error: {}", status);
                ToggleError::SheetUnavailable
            }
            CustomSheetError::Request(e) => {
                if e.is_timeout() {
                    return ToggleError::TimeoutError;
                }
                tracing::error!("failed to reach sheet source: {}", e);
                ToggleError::SheetUnavailable
            }
        }
    }
}
