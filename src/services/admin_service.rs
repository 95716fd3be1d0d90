use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::jwt::generate_token;
use crate::config::jwt::JwtSettings;
use crate::db::admins;
use crate::db::helpers::{translate_write_error, ADMIN_EXISTS_MESSAGE};
use crate::error::{LeagueError, LeagueResult};
use crate::league::validation::LeagueValidator;
use crate::models::admin::{AdminProfile, LoginRequest, LoginResponse, RegistrationRequest};
use crate::utils::password::{hash_password, verify_password};

const INVALID_CREDENTIALS_MESSAGE: &str = "invalid email or password";

#[derive(Debug, Clone)]
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register the one and only admin account.
    ///
    /// The count pre-check gives a readable error; the singleton index on
    /// `admins` rejects a concurrent second registration that passes it.
    #[tracing::instrument(
        name = "Register admin",
        skip(self, request),
        fields(admin = %request)
    )]
    pub async fn register(&self, request: &RegistrationRequest) -> LeagueResult<AdminProfile> {
        let password = request.password.expose_secret();
        LeagueValidator::new().validate_registration(&request.name, &request.email, password)?;

        if admins::count_admins(&self.pool).await? > 0 {
            tracing::info!("Rejected admin registration, an admin already exists");
            return Err(LeagueError::invalid_state(ADMIN_EXISTS_MESSAGE));
        }

        let password_hash = hash_password(password).map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            LeagueError::Internal(format!("password hashing failed: {}", e))
        })?;

        let admin = admins::insert_admin(
            &self.pool,
            request.name.trim(),
            request.email.trim(),
            &password_hash,
        )
        .await
        .map_err(|e| translate_write_error(e, "admin references a missing record"))?;

        tracing::info!("Registered admin {}", admin.id);
        Ok(admin.into())
    }

    #[tracing::instrument(
        name = "Login admin attempt",
        skip(self, request, jwt_settings),
        fields(email = %request.email)
    )]
    pub async fn login(
        &self,
        request: &LoginRequest,
        jwt_settings: &JwtSettings,
    ) -> LeagueResult<LoginResponse> {
        let admin = match admins::find_admin_by_email(&self.pool, request.email.trim()).await? {
            Some(admin) => admin,
            None => {
                tracing::info!("Admin not found or invalid credentials");
                return Err(LeagueError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.into()));
            }
        };

        if !verify_password(request.password.expose_secret(), &admin.password_hash) {
            tracing::info!("Invalid password");
            return Err(LeagueError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.into()));
        }

        let token = generate_token(&admin, jwt_settings).map_err(|e| {
            tracing::error!("Error generating JWT token: {:?}", e);
            LeagueError::Internal(format!("token generation failed: {}", e))
        })?;

        Ok(LoginResponse {
            token,
            admin: admin.into(),
        })
    }
}
