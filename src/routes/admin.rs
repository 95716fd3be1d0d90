// src/routes/admin.rs
use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::error::LeagueError;
use crate::handlers::admin_handler::{login_admin, register_admin};
use crate::models::admin::{LoginRequest, RegistrationRequest};

/// Register the single league administrator
#[post("/register")]
async fn register(
    registration_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    register_admin(pool, registration_form).await
}

#[post("/login")]
async fn login(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, LeagueError> {
    login_admin(pool, jwt_settings, login_form).await
}
