use serde::Deserialize;

use crate::api::ToggleError;

/// Raw query string of a resolution request, e.g.
/// `?sheet={DOCUMENT_ID}&toggles={COMMA_SEPARATED_NAMES}`.
#[derive(Deserialize, Default)]
pub struct ToggleQueryParams {
    pub sheet: Option<String>,
    pub toggles: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    pub sheet_id: String,
    pub toggle_names: Vec<String>,
}

impl ToggleRequest {
    /// Validates the query parameters up front; anything missing or empty
    /// fails the whole request before any row is fetched.
    pub fn from_query(params: ToggleQueryParams) -> Result<ToggleRequest, ToggleError> {
        let sheet_id = params
            .sheet
            .filter(|s| !s.is_empty())
            .ok_or(ToggleError::NoSheetId)?;

        let raw_names = params
            .toggles
            .filter(|t| !t.is_empty())
            .ok_or(ToggleError::NoToggleNames)?;

        let toggle_names: Vec<String> = raw_names.split(',').map(str::to_string).collect();
        if toggle_names.iter().any(|name| name.is_empty()) {
            return Err(ToggleError::EmptyToggleName);
        }

        Ok(ToggleRequest {
            sheet_id,
            toggle_names,
        })
    }
}
