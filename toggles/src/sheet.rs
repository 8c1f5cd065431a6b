use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tokio::time::timeout;

use crate::toggle_definitions::Row;

const KEY_COLUMN: &str = "Key";
const VALUE_COLUMN: &str = "Value";
const GROUP_COLUMN: &str = "Group";

/// One header row, then at most this many data rows are read per fetch.
pub const ROW_LIMIT: usize = 100;

#[derive(Error, Debug)]
pub enum CustomSheetError {
    #[error("sheet not found")]
    NotFound,
    #[error("sheet source returned status {0}")]
    Upstream(reqwest::StatusCode),
    #[error("request to sheet source failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("timed out while fetching rows")]
    Timeout(#[from] tokio::time::error::Elapsed),
    #[error("{0}")]
    ParseError(String),
}

/// Response shape of the Sheets v4 values endpoint. Cells arrive as JSON
/// values and are coerced to strings on read.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

/// Supplies the raw row set for a resolution request. The core never
/// fetches anything itself, it only consumes what this trait hands it.
#[async_trait]
pub trait RowSource {
    async fn fetch_rows(&self, sheet_id: &str) -> Result<Vec<Row>, CustomSheetError>;
}

/// Reads the first worksheet of a Google Sheets document through the
/// public v4 values endpoint, authenticated with an API key.
pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl SheetsClient {
    pub fn new(base_url: String, api_key: String, timeout_ms: u64) -> Result<SheetsClient> {
        let timeout = Duration::from_millis(timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(SheetsClient {
            client,
            base_url,
            api_key,
            timeout,
        })
    }
}

#[async_trait]
impl RowSource for SheetsClient {
    async fn fetch_rows(&self, sheet_id: &str) -> Result<Vec<Row>, CustomSheetError> {
        let url = format!("{}/v4/spreadsheets/{}/values/A:C", self.base_url, sheet_id);

        let request = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send();
        let response = timeout(self.timeout, request).await??;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CustomSheetError::NotFound);
        }
        if !status.is_success() {
            return Err(CustomSheetError::Upstream(status));
        }

        let value_range: ValueRange = response.json().await.map_err(|e| {
            if e.is_decode() {
                CustomSheetError::ParseError(format!("invalid sheet payload: {}", e))
            } else {
                CustomSheetError::Request(e)
            }
        })?;
        rows_from_values(value_range.values)
    }
}

/// Map a raw cell grid into rows. The first row is the header and must
/// name the `Key`, `Value` and `Group` columns (in any order); data rows
/// are capped at [`ROW_LIMIT`]. Missing trailing cells become empty
/// strings, which the toggle builder rejects later, per row.
pub fn rows_from_values(values: Vec<Vec<serde_json::Value>>) -> Result<Vec<Row>, CustomSheetError> {
    let mut grid = values.into_iter();
    let header: Vec<String> = grid
        .next()
        .ok_or_else(|| CustomSheetError::ParseError("sheet has no header row".to_string()))?
        .iter()
        .map(cell_to_string)
        .collect();

    let key_index = column_index(&header, KEY_COLUMN)?;
    let value_index = column_index(&header, VALUE_COLUMN)?;
    let group_index = column_index(&header, GROUP_COLUMN)?;

    Ok(grid
        .take(ROW_LIMIT)
        .map(|cells| Row {
            key: cell_at(&cells, key_index),
            value: cell_at(&cells, value_index),
            group: cell_at(&cells, group_index),
        })
        .collect())
}

fn column_index(header: &[String], name: &str) -> Result<usize, CustomSheetError> {
    header.iter().position(|h| h == name).ok_or_else(|| {
        CustomSheetError::ParseError(format!("sheet is missing the '{}' column", name))
    })
}

fn cell_at(cells: &[serde_json::Value], index: usize) -> String {
    cells.get(index).map(cell_to_string).unwrap_or_default()
}

fn cell_to_string(cell: &serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct MockRowSource {
    rows_ret: Vec<Row>,
}

impl MockRowSource {
    pub fn new() -> MockRowSource {
        MockRowSource {
            rows_ret: Vec::new(),
        }
    }

    pub fn rows_ret(&mut self, ret: Vec<Row>) -> Self {
        self.rows_ret = ret;

        self.clone()
    }
}

impl Default for MockRowSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowSource for MockRowSource {
    async fn fetch_rows(&self, _sheet_id: &str) -> Result<Vec<Row>, CustomSheetError> {
        Ok(self.rows_ret.clone())
    }
}
