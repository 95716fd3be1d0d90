use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::LeagueError;
use crate::league::match_report::MatchReportService;
use crate::league::standings::StandingsService;
use crate::league::top_scorers::TopScorerService;
use crate::league::validation::LeagueValidator;
use crate::models::common::ApiResponse;
use crate::models::report::{MatchReportQuery, TopScorersQuery};

// GET /api/v1/reports/standings
pub async fn get_standings(pool: web::Data<PgPool>) -> Result<HttpResponse, LeagueError> {
    let standings = StandingsService::new(pool.get_ref().clone())
        .get_standings()
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Standings retrieved successfully", standings)))
}

// GET /api/v1/reports/top-scorers?limit=N
pub async fn get_top_scorers(
    pool: web::Data<PgPool>,
    query: web::Query<TopScorersQuery>,
) -> Result<HttpResponse, LeagueError> {
    let limit = LeagueValidator::new().normalize_limit(query.limit);
    let scorers = TopScorerService::new(pool.get_ref().clone())
        .get_top_scorers(limit)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Top scorers retrieved successfully", scorers)))
}

// GET /api/v1/reports/matches/{id}?include_history=true
pub async fn get_match_report(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    query: web::Query<MatchReportQuery>,
) -> Result<HttpResponse, LeagueError> {
    let report = MatchReportService::new(pool.get_ref().clone())
        .get_match_report(path.into_inner(), query.include_history)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match report retrieved successfully", report)))
}
