use reqwest::Client;
use serde_json::json;

use super::utils::{make_authenticated_request, TestApp};

pub async fn create_team(app: &TestApp, token: &str, name: &str) -> String {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &app.api("/teams"),
        token,
        Some(json!({
            "name": name,
            "city": "Springfield",
            "founded_year": 1901
        })),
    ).await;
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_str().expect("No team id").to_string()
}

pub async fn create_player(app: &TestApp, token: &str, team_id: &str, name: &str, number: i32) -> String {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &app.api("/players"),
        token,
        Some(json!({
            "team_id": team_id,
            "name": name,
            "position": "striker",
            "number": number
        })),
    ).await;
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_str().expect("No player id").to_string()
}

pub async fn create_match(
    app: &TestApp,
    token: &str,
    home_team_id: &str,
    away_team_id: &str,
    match_time: &str,
) -> String {
    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &app.api("/matches"),
        token,
        Some(json!({
            "match_time": match_time,
            "home_team_id": home_team_id,
            "away_team_id": away_team_id
        })),
    ).await;
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_str().expect("No match id").to_string()
}

pub async fn report_result(
    app: &TestApp,
    token: &str,
    match_id: &str,
    home_score: i32,
    away_score: i32,
    goals: serde_json::Value,
) -> reqwest::Response {
    make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &app.api(&format!("/matches/{}/report", match_id)),
        token,
        Some(json!({
            "home_score": home_score,
            "away_score": away_score,
            "goals": goals
        })),
    ).await
}
