//! Helpers shared by the query modules.
//!
//! Postgres enforces the same rules the services pre-check (unique shirt
//! numbers, a single admin, foreign keys). When a concurrent write slips past
//! a pre-check, the constraint violation surfaces here and is translated into
//! the matching [`LeagueError`] instead of a generic storage failure.

use sqlx::error::ErrorKind;

use crate::error::{LeagueError, LeagueResult};

pub const PLAYER_NUMBER_CONSTRAINT: &str = "players_team_number_key";
pub const ADMIN_SINGLETON_CONSTRAINT: &str = "admins_singleton";
pub const ADMIN_EMAIL_CONSTRAINT: &str = "admins_email_key";

pub const DUPLICATE_NUMBER_MESSAGE: &str = "player number already exists in this team";
pub const ADMIN_EXISTS_MESSAGE: &str = "admin already exists. only 1 admin is allowed to register";

/// Unwrap an optional record, returning NotFound if None.
///
/// # Example
/// ```ignore
/// let team = require_record(teams::find_team(pool, id).await?, "team")?;
/// ```
pub fn require_record<T>(record: Option<T>, entity: &str) -> LeagueResult<T> {
    record.ok_or_else(|| LeagueError::not_found(entity))
}

/// Translate a sqlx error raised by a write into a domain error.
///
/// `reference_message` is used for foreign-key violations, whose meaning
/// depends on the statement (missing parent on insert, row still in use on delete).
pub fn translate_write_error(err: sqlx::Error, reference_message: &str) -> LeagueError {
    let translated = match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::ForeignKeyViolation => {
                Some(LeagueError::invalid_reference(reference_message))
            }
            ErrorKind::UniqueViolation => match db_err.constraint() {
                Some(PLAYER_NUMBER_CONSTRAINT) => {
                    Some(LeagueError::invalid_reference(DUPLICATE_NUMBER_MESSAGE))
                }
                Some(ADMIN_SINGLETON_CONSTRAINT) | Some(ADMIN_EMAIL_CONSTRAINT) => {
                    Some(LeagueError::invalid_state(ADMIN_EXISTS_MESSAGE))
                }
                _ => None,
            },
            ErrorKind::CheckViolation => Some(LeagueError::invalid_input(format!(
                "value rejected by constraint {}",
                db_err.constraint().unwrap_or("unknown")
            ))),
            _ => None,
        },
        _ => None,
    };

    match translated {
        Some(league_error) => {
            tracing::warn!("Constraint violation translated to {:?}: {}", league_error, err);
            league_error
        }
        None => LeagueError::Storage(err),
    }
}
