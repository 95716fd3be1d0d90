use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::LeagueError;
use crate::models::common::ApiResponse;
use crate::models::player::PlayerRequest;
use crate::services::PlayerService;

// POST /api/v1/players
pub async fn create_player(
    pool: web::Data<PgPool>,
    body: web::Json<PlayerRequest>,
) -> Result<HttpResponse, LeagueError> {
    let player = PlayerService::new(pool.get_ref().clone())
        .create_player(&body)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Player created successfully", player)))
}

// GET /api/v1/players
#[tracing::instrument(name = "List players", skip(pool))]
pub async fn get_players(pool: web::Data<PgPool>) -> Result<HttpResponse, LeagueError> {
    let players = PlayerService::new(pool.get_ref().clone()).list_players().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Players retrieved successfully", players)))
}

// GET /api/v1/players/{id}
pub async fn get_player_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    let player = PlayerService::new(pool.get_ref().clone())
        .get_player(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Player retrieved successfully", player)))
}

// GET /api/v1/players/by-team/{team_id}
#[tracing::instrument(name = "List players by team", skip(pool, path), fields(team_id = %path))]
pub async fn get_players_by_team(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    let players = PlayerService::new(pool.get_ref().clone())
        .list_players_by_team(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Players retrieved successfully", players)))
}

// PUT /api/v1/players/{id}
pub async fn update_player(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<PlayerRequest>,
) -> Result<HttpResponse, LeagueError> {
    let player = PlayerService::new(pool.get_ref().clone())
        .update_player(path.into_inner(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Player updated successfully", player)))
}

// DELETE /api/v1/players/{id}
pub async fn delete_player(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    PlayerService::new(pool.get_ref().clone())
        .delete_player(path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
