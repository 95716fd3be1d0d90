use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::league_helpers::{create_match, create_player, create_team, report_result};
use common::utils::{make_authenticated_request, register_admin_and_login, spawn_app};

#[tokio::test]
async fn create_player_succeeds_with_valid_data() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let team_id = create_team(&test_app, &token, "Rovers").await;

    // Act
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &test_app.api("/players"),
        &token,
        Some(json!({
            "team_id": team_id,
            "name": "Sam Keeper",
            "height_cm": 192.5,
            "weight_kg": 88.0,
            "position": "goalkeeper",
            "number": 1
        })),
    ).await;

    // Assert
    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!("Sam Keeper", body["data"]["name"]);
    assert_eq!("goalkeeper", body["data"]["position"]);
    assert_eq!(1, body["data"]["number"]);
    assert_eq!(team_id, body["data"]["team_id"].as_str().unwrap());
}

#[tokio::test]
async fn duplicate_shirt_number_in_same_team_is_rejected() {
    let test_app = spawn_app().await;
    let (_email, token) = register_admin_and_login(&test_app).await;
    let team_id = create_team(&test_app, &token, "Rovers").await;
    create_player(&test_app, &token, &team_id, "First Ten", 10).await;

    let response = make_authenticated_request(
        &Client::new(),
        reqwest::Method::POST,
        &test_app.api("/players"),
        &token,
        Some(json!({
            "team_id": team_id,
            "name": "Second Ten",
            "position": "midfielder",
            "number": 10
        })),
    ).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].as_str().unwrap().contains("number already exists"));
}

#[tokio::test]
async fn same_shirt_number_in_different_teams_is_allowed() {
    let test_app = spawn_app().await;
    let (_email, token) = register_admin_and_login(&test_app).await;
    let rovers = create_team(&test_app, &token, "Rovers").await;
    let united = create_team(&test_app, &token, "United").await;

    create_player(&test_app, &token, &rovers, "Rovers Nine", 9).await;
    create_player(&test_app, &token, &united, "United Nine", 9).await;
}

#[tokio::test]
async fn create_player_rejects_invalid_payloads() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let team_id = create_team(&test_app, &token, "Rovers").await;

    let test_cases = vec![
        (json!({"team_id": team_id, "name": "P", "position": "striker", "number": 0}), "number below range"),
        (json!({"team_id": team_id, "name": "P", "position": "striker", "number": 100}), "number above range"),
        (json!({"team_id": team_id, "name": "", "position": "striker", "number": 7}), "empty name"),
        (json!({"team_id": team_id, "name": "P", "position": "winger", "number": 7}), "unknown position"),
        (json!({"team_id": Uuid::new_v4(), "name": "P", "position": "striker", "number": 7}), "missing team"),
    ];

    for (body, description) in test_cases {
        let response = make_authenticated_request(
            &client,
            reqwest::Method::POST,
            &test_app.api("/players"),
            &token,
            Some(body),
        ).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
    }
}

#[tokio::test]
async fn update_player_keeps_own_number_and_checks_new_team() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let rovers = create_team(&test_app, &token, "Rovers").await;
    let united = create_team(&test_app, &token, "United").await;
    let mover = create_player(&test_app, &token, &rovers, "Mover", 7).await;
    create_player(&test_app, &token, &united, "United Seven", 7).await;
    let player_url = test_app.api(&format!("/players/{}", mover));

    // Same number, same team: the player does not clash with itself
    let rename = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &player_url,
        &token,
        Some(json!({"team_id": rovers, "name": "Renamed", "position": "striker", "number": 7})),
    ).await;
    assert_eq!(200, rename.status().as_u16());

    // Moving to a team where 7 is taken
    let transfer = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &player_url,
        &token,
        Some(json!({"team_id": united, "name": "Renamed", "position": "striker", "number": 7})),
    ).await;
    assert_eq!(400, transfer.status().as_u16());

    let fetched = make_authenticated_request(&client, reqwest::Method::GET, &player_url, &token, None).await;
    let body: serde_json::Value = fetched.json().await.expect("Failed to parse response");
    assert_eq!("Renamed", body["data"]["name"]);
    assert_eq!("Rovers", body["data"]["team_name"]);
}

#[tokio::test]
async fn list_players_by_team_returns_only_that_team() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let rovers = create_team(&test_app, &token, "Rovers").await;
    let united = create_team(&test_app, &token, "United").await;
    create_player(&test_app, &token, &rovers, "Rover One", 1).await;
    create_player(&test_app, &token, &rovers, "Rover Two", 2).await;
    create_player(&test_app, &token, &united, "United One", 1).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api(&format!("/players/by-team/{}", rovers)),
        &token,
        None,
    ).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let players = body["data"].as_array().unwrap();
    assert_eq!(2, players.len());
    assert!(players.iter().all(|p| p["team_id"].as_str().unwrap() == rovers));

    let unknown = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api(&format!("/players/by-team/{}", Uuid::new_v4())),
        &token,
        None,
    ).await;
    assert_eq!(404, unknown.status().as_u16());
}

#[tokio::test]
async fn player_with_goals_cannot_be_deleted() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let home = create_team(&test_app, &token, "Home").await;
    let away = create_team(&test_app, &token, "Away").await;
    let scorer = create_player(&test_app, &token, &home, "Scorer", 9).await;
    let bench = create_player(&test_app, &token, &home, "Bench", 12).await;
    let match_id = create_match(&test_app, &token, &home, &away, "2025-05-01T15:00:00Z").await;
    let reported = report_result(
        &test_app,
        &token,
        &match_id,
        1,
        0,
        json!([{ "player_id": scorer, "minute": 30 }]),
    ).await;
    assert_eq!(200, reported.status().as_u16());

    let blocked = make_authenticated_request(
        &client,
        reqwest::Method::DELETE,
        &test_app.api(&format!("/players/{}", scorer)),
        &token,
        None,
    ).await;
    assert_eq!(400, blocked.status().as_u16());

    let removed = make_authenticated_request(
        &client,
        reqwest::Method::DELETE,
        &test_app.api(&format!("/players/{}", bench)),
        &token,
        None,
    ).await;
    assert_eq!(204, removed.status().as_u16());
}

#[tokio::test]
async fn scorer_cannot_move_to_a_team_outside_their_matches() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let home = create_team(&test_app, &token, "Home").await;
    let away = create_team(&test_app, &token, "Away").await;
    let third = create_team(&test_app, &token, "Third").await;
    let scorer = create_player(&test_app, &token, &home, "Scorer", 9).await;
    let match_id = create_match(&test_app, &token, &home, &away, "2025-05-01T15:00:00Z").await;
    let reported = report_result(
        &test_app,
        &token,
        &match_id,
        1,
        0,
        json!([{ "player_id": scorer, "minute": 30 }]),
    ).await;
    assert_eq!(200, reported.status().as_u16());

    let transfer = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &test_app.api(&format!("/players/{}", scorer)),
        &token,
        Some(json!({
            "team_id": third,
            "name": "Scorer",
            "position": "striker",
            "number": 9
        })),
    ).await;
    assert_eq!(400, transfer.status().as_u16());
    let body: serde_json::Value = transfer.json().await.expect("Failed to parse response");
    assert_eq!("invalid_reference", body["error"]);

    let report = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api(&format!("/reports/matches/{}", match_id)),
        &token,
        None,
    ).await;
    let body: serde_json::Value = report.json().await.expect("Failed to parse response");
    assert_eq!(home, body["data"]["goals"][0]["team_id"].as_str().unwrap());

    // Moving to the other side of that match keeps the goal within the fixture.
    let to_opponent = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &test_app.api(&format!("/players/{}", scorer)),
        &token,
        Some(json!({
            "team_id": away,
            "name": "Scorer",
            "position": "striker",
            "number": 9
        })),
    ).await;
    assert_eq!(200, to_opponent.status().as_u16());
}
