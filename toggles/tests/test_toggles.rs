use anyhow::Result;
use assert_json_diff::assert_json_include;

use reqwest::StatusCode;
use serde_json::{json, Value};

use toggles::test_utils::random_string;

use crate::common::*;
mod common;

#[tokio::test]
async fn it_resolves_requested_toggles() -> Result<()> {
    let server = ServerHandle::for_rows(DEMO_SHEET.clone()).await;

    let sheet = random_string("doc-", 12);
    let res = server
        .send_toggles_request(&format!("sheet={}&toggles=dark_mode,new_onboarding", sheet))
        .await;
    assert_eq!(StatusCode::OK, res.status());

    // We don't want to deserialize the data into a TogglesResponse struct here,
    // because we want to assert the shape of the raw json data.
    let json_data = res.json::<Value>().await?;

    assert_json_include!(
        actual: json_data,
        expected: json!({
            "toggles": [
                {
                    "name": "dark_mode",
                    "value": "true",
                    "groups": [
                        {"name": "beta", "rolloutPercentage": 20},
                        {"name": "internal", "rolloutPercentage": 100},
                    ],
                },
                {
                    "name": "new_onboarding",
                    "value": "variant-b",
                    "groups": [
                        {"name": "all", "rolloutPercentage": 100},
                    ],
                },
            ],
            "fetchedAt": FETCHED_AT_MILLIS,
        })
    );

    Ok(())
}

#[tokio::test]
async fn it_omits_unmatched_and_malformed_toggles() -> Result<()> {
    let server = ServerHandle::for_rows(DEMO_SHEET.clone()).await;

    let sheet = random_string("doc-", 12);
    let res = server
        .send_toggles_request(&format!(
            "sheet={}&toggles=missing_key,broken_row,over_rollout",
            sheet
        ))
        .await;
    assert_eq!(StatusCode::OK, res.status());

    let json_data = res.json::<Value>().await?;
    let toggles = json_data["toggles"].as_array().unwrap();

    // missing_key has no row, broken_row has an empty Group field; only
    // over_rollout survives, with its percentage clamped.
    assert_eq!(toggles.len(), 1);
    assert_eq!(toggles[0]["name"], "over_rollout");
    assert_eq!(toggles[0]["groups"][0]["rolloutPercentage"], 100);

    Ok(())
}

#[tokio::test]
async fn it_returns_an_empty_list_when_nothing_matches() -> Result<()> {
    let server = ServerHandle::for_rows(DEMO_SHEET.clone()).await;

    let sheet = random_string("doc-", 12);
    let res = server
        .send_toggles_request(&format!("sheet={}&toggles=missing_key", sheet))
        .await;
    assert_eq!(StatusCode::OK, res.status());

    let json_data = res.json::<Value>().await?;
    assert_eq!(json_data["toggles"], json!([]));

    Ok(())
}

#[tokio::test]
async fn it_fails_the_request_when_parameters_are_missing() -> Result<()> {
    let server = ServerHandle::for_rows(DEMO_SHEET.clone()).await;

    let res = server.send_toggles_request("toggles=dark_mode").await;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    assert!(res.text().await?.contains("sheet id"));

    let res = server
        .send_toggles_request(&format!("sheet={}", random_string("doc-", 12)))
        .await;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    assert!(res.text().await?.contains("toggle names"));

    Ok(())
}
