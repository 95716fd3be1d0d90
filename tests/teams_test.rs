use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::league_helpers::{create_match, create_player, create_team};
use common::utils::{make_authenticated_request, register_admin_and_login, spawn_app};

#[tokio::test]
async fn create_team_succeeds_with_valid_data() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;

    // Act
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &test_app.api("/teams"),
        &token,
        Some(json!({
            "name": "Leeds United",
            "logo_url": "https://example.com/leeds.png",
            "founded_year": 1919,
            "stadium_address": "Elland Road",
            "city": "Leeds"
        })),
    ).await;

    // Assert
    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!("Leeds United", body["data"]["name"]);
    assert_eq!(1919, body["data"]["founded_year"]);
    assert_eq!("Leeds", body["data"]["city"]);

    let saved = sqlx::query_scalar::<_, String>("SELECT name FROM teams")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to fetch saved team.");
    assert_eq!("Leeds United", saved);
}

#[tokio::test]
async fn create_team_rejects_empty_name() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &test_app.api("/teams"),
        &token,
        Some(json!({ "name": "  " })),
    ).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(false, body["success"]);
}

#[tokio::test]
async fn list_teams_is_ordered_by_name() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    create_team(&test_app, &token, "Wolves").await;
    create_team(&test_app, &token, "Arsenal").await;
    create_team(&test_app, &token, "Everton").await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &test_app.api("/teams"),
        &token,
        None,
    ).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|team| team["name"].as_str().unwrap())
        .collect();
    assert_eq!(vec!["Arsenal", "Everton", "Wolves"], names);
}

#[tokio::test]
async fn get_update_and_delete_team() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let team_id = create_team(&test_app, &token, "Old Name").await;
    let team_url = test_app.api(&format!("/teams/{}", team_id));

    let update = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &team_url,
        &token,
        Some(json!({ "name": "New Name", "city": "York" })),
    ).await;
    assert_eq!(200, update.status().as_u16());

    let fetched = make_authenticated_request(&client, reqwest::Method::GET, &team_url, &token, None).await;
    assert_eq!(200, fetched.status().as_u16());
    let body: serde_json::Value = fetched.json().await.expect("Failed to parse response");
    assert_eq!("New Name", body["data"]["name"]);
    assert_eq!("York", body["data"]["city"]);

    let deleted = make_authenticated_request(&client, reqwest::Method::DELETE, &team_url, &token, None).await;
    assert_eq!(204, deleted.status().as_u16());

    let missing = make_authenticated_request(&client, reqwest::Method::GET, &team_url, &token, None).await;
    assert_eq!(404, missing.status().as_u16());
}

#[tokio::test]
async fn unknown_team_returns_404() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let team_url = test_app.api(&format!("/teams/{}", Uuid::new_v4()));

    for method in [reqwest::Method::GET, reqwest::Method::DELETE] {
        let response = make_authenticated_request(&client, method, &team_url, &token, None).await;
        assert_eq!(404, response.status().as_u16());
    }

    let update = make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &team_url,
        &token,
        Some(json!({ "name": "Ghosts" })),
    ).await;
    assert_eq!(404, update.status().as_u16());
}

#[tokio::test]
async fn deleting_a_team_removes_its_players() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let team_id = create_team(&test_app, &token, "Short Lived").await;
    create_player(&test_app, &token, &team_id, "Only Player", 10).await;

    let deleted = make_authenticated_request(
        &client,
        reqwest::Method::DELETE,
        &test_app.api(&format!("/teams/{}", team_id)),
        &token,
        None,
    ).await;
    assert_eq!(204, deleted.status().as_u16());

    let players = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count players.");
    assert_eq!(0, players);
}

#[tokio::test]
async fn team_with_matches_cannot_be_deleted() {
    let test_app = spawn_app().await;
    let client = Client::new();
    let (_email, token) = register_admin_and_login(&test_app).await;
    let home = create_team(&test_app, &token, "Home").await;
    let away = create_team(&test_app, &token, "Away").await;
    create_match(&test_app, &token, &home, &away, "2025-05-01T15:00:00Z").await;

    let response = make_authenticated_request(
        &client,
        reqwest::Method::DELETE,
        &test_app.api(&format!("/teams/{}", home)),
        &token,
        None,
    ).await;

    assert_eq!(400, response.status().as_u16());
}
