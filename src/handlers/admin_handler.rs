use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::error::LeagueError;
use crate::models::admin::{LoginRequest, RegistrationRequest};
use crate::models::common::ApiResponse;
use crate::services::AdminService;

// POST /api/v1/admin/register
pub async fn register_admin(
    pool: web::Data<PgPool>,
    body: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, LeagueError> {
    let admin = AdminService::new(pool.get_ref().clone())
        .register(&body)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("admin registered successfully", admin)))
}

// POST /api/v1/admin/login
pub async fn login_admin(
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, LeagueError> {
    let login = AdminService::new(pool.get_ref().clone())
        .login(&body, jwt_settings.get_ref())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("login successful", login)))
}
