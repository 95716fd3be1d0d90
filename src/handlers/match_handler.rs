use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::LeagueError;
use crate::models::admin::TokenClaims;
use crate::models::common::ApiResponse;
use crate::models::matches::{MatchRangeQuery, MatchRequest, ReportResultRequest};
use crate::services::MatchService;

// POST /api/v1/matches
pub async fn create_match(
    pool: web::Data<PgPool>,
    body: web::Json<MatchRequest>,
) -> Result<HttpResponse, LeagueError> {
    let game = MatchService::new(pool.get_ref().clone())
        .create_match(&body)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Match created successfully", game)))
}

// GET /api/v1/matches?start_date=..&end_date=..
#[tracing::instrument(name = "List matches", skip(pool, query), fields(range = %query))]
pub async fn get_matches(
    pool: web::Data<PgPool>,
    query: web::Query<MatchRangeQuery>,
) -> Result<HttpResponse, LeagueError> {
    let games = MatchService::new(pool.get_ref().clone())
        .list_matches(&query)
        .await?;
    tracing::info!("Successfully retrieved {} matches", games.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success("Matches retrieved successfully", games)))
}

// GET /api/v1/matches/{id}
pub async fn get_match_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    let details = MatchService::new(pool.get_ref().clone())
        .get_match(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match retrieved successfully", details)))
}

// GET /api/v1/matches/by-team/{team_id}
pub async fn get_matches_by_team(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    let games = MatchService::new(pool.get_ref().clone())
        .list_matches_by_team(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Matches retrieved successfully", games)))
}

// PUT /api/v1/matches/{id}
pub async fn update_match(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<MatchRequest>,
) -> Result<HttpResponse, LeagueError> {
    let game = MatchService::new(pool.get_ref().clone())
        .update_match(path.into_inner(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match updated successfully", game)))
}

// DELETE /api/v1/matches/{id}
pub async fn delete_match(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, LeagueError> {
    MatchService::new(pool.get_ref().clone())
        .delete_match(path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

// POST /api/v1/matches/{id}/report
#[tracing::instrument(
    name = "Report match result request",
    skip(pool, path, body, claims),
    fields(
        match_id = %path,
        admin = %claims.email
    )
)]
pub async fn report_match_result(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<ReportResultRequest>,
    claims: web::ReqData<TokenClaims>,
) -> Result<HttpResponse, LeagueError> {
    let match_id = path.into_inner();
    tracing::info!(
        "Reporting result {} - {} for match {}",
        body.home_score, body.away_score, match_id
    );

    let game = MatchService::new(pool.get_ref().clone())
        .report_result(match_id, body.home_score, body.away_score, &body.goals)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match result reported successfully", game)))
}
