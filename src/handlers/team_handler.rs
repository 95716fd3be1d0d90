use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::LeagueError;
use crate::models::common::ApiResponse;
use crate::models::team::TeamRequest;
use crate::services::TeamService;

// POST /api/v1/teams
#[tracing::instrument(name = "Create team", skip(body, pool), fields(name = %body.name))]
pub async fn create_team(
    pool: web::Data<PgPool>,
    body: web::Json<TeamRequest>,
) -> Result<HttpResponse, LeagueError> {
    let team = TeamService::new(pool.get_ref().clone()).create_team(&body).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Team created successfully", team)))
}

// GET /api/v1/teams
#[tracing::instrument(name = "List teams", skip(pool))]
pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, LeagueError> {
    let teams = TeamService::new(pool.get_ref().clone()).list_teams().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Teams retrieved successfully", teams)))
}

// GET /api/v1/teams/{id}
#[tracing::instrument(name = "Get team", skip(pool, path))]
pub async fn get_team_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    let team = TeamService::new(pool.get_ref().clone())
        .get_team(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Team retrieved successfully", team)))
}

// PUT /api/v1/teams/{id}
#[tracing::instrument(name = "Update team", skip(pool, path, body))]
pub async fn update_team(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<TeamRequest>,
) -> Result<HttpResponse, LeagueError> {
    let team = TeamService::new(pool.get_ref().clone())
        .update_team(path.into_inner(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Team updated successfully", team)))
}

// DELETE /api/v1/teams/{id}
#[tracing::instrument(name = "Delete team", skip(pool, path))]
pub async fn delete_team(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    TeamService::new(pool.get_ref().clone())
        .delete_team(path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
