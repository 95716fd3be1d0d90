use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::common::ApiResponse;

pub type LeagueResult<T> = Result<T, LeagueError>;

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    InvalidReference(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("database error")]
    Storage(#[from] sqlx::Error),

    #[error("internal error")]
    Internal(String),
}

impl LeagueError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        LeagueError::NotFound(entity.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        LeagueError::InvalidInput(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        LeagueError::InvalidState(message.into())
    }

    pub fn invalid_reference(message: impl Into<String>) -> Self {
        LeagueError::InvalidReference(message.into())
    }

    fn kind(&self) -> &'static str {
        match self {
            LeagueError::NotFound(_) => "not_found",
            LeagueError::InvalidInput(_) => "invalid_input",
            LeagueError::InvalidState(_) => "invalid_state",
            LeagueError::InvalidReference(_) => "invalid_reference",
            LeagueError::Unauthorized(_) => "unauthorized",
            LeagueError::Storage(_) => "storage_failure",
            LeagueError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for LeagueError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeagueError::NotFound(_) => StatusCode::NOT_FOUND,
            LeagueError::InvalidInput(_)
            | LeagueError::InvalidState(_)
            | LeagueError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            LeagueError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            LeagueError::Storage(_) | LeagueError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            LeagueError::Storage(e) => tracing::error!("Database error occurred: {:?}", e),
            LeagueError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            _ => {}
        }
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::error_with_message(self.to_string(), self.kind()))
    }
}
