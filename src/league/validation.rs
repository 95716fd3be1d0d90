use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

use crate::error::{LeagueError, LeagueResult};
use crate::models::matches::{MatchRequest, ScoringEvent};
use crate::models::player::PlayerRequest;
use crate::models::team::TeamRequest;

pub const MIN_SHIRT_NUMBER: i32 = 1;
pub const MAX_SHIRT_NUMBER: i32 = 99;
pub const MIN_GOAL_MINUTE: i32 = 0;
pub const MAX_GOAL_MINUTE: i32 = 130;
pub const OLDEST_FOUNDED_YEAR: i32 = 1850;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_TOP_SCORERS_LIMIT: i64 = 10;

const MAX_NAME_LENGTH: usize = 255;

/// Centralized field validation for league write operations
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_team_request(&self, request: &TeamRequest) -> LeagueResult<()> {
        self.validate_name("Team name", &request.name)?;

        if let Some(year) = request.founded_year {
            let current_year = Utc::now().year();
            if year < OLDEST_FOUNDED_YEAR || year > current_year {
                return Err(LeagueError::invalid_input(format!(
                    "Founded year must be between {} and {}, got {}",
                    OLDEST_FOUNDED_YEAR, current_year, year
                )));
            }
        }

        Ok(())
    }

    pub fn validate_player_request(&self, request: &PlayerRequest) -> LeagueResult<()> {
        self.validate_name("Player name", &request.name)?;
        self.validate_id("Team ID", request.team_id)?;
        self.validate_shirt_number(request.number)?;

        if let Some(height) = request.height_cm {
            if !height.is_finite() || height <= 0.0 {
                return Err(LeagueError::invalid_input("Height must be a positive number"));
            }
        }
        if let Some(weight) = request.weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(LeagueError::invalid_input("Weight must be a positive number"));
            }
        }

        Ok(())
    }

    pub fn validate_shirt_number(&self, number: i32) -> LeagueResult<()> {
        if !(MIN_SHIRT_NUMBER..=MAX_SHIRT_NUMBER).contains(&number) {
            return Err(LeagueError::invalid_input(format!(
                "Shirt number must be between {} and {}, got {}",
                MIN_SHIRT_NUMBER, MAX_SHIRT_NUMBER, number
            )));
        }
        Ok(())
    }

    pub fn validate_match_request(&self, request: &MatchRequest) -> LeagueResult<()> {
        self.validate_id("Home team ID", request.home_team_id)?;
        self.validate_id("Away team ID", request.away_team_id)?;

        if request.home_team_id == request.away_team_id {
            return Err(LeagueError::invalid_input("home and away teams must be different"));
        }
        Ok(())
    }

    /// Validate a reported result before touching storage
    pub fn validate_result(
        &self,
        home_score: i32,
        away_score: i32,
        goals: &[ScoringEvent],
    ) -> LeagueResult<()> {
        if home_score < 0 {
            return Err(LeagueError::invalid_input(format!(
                "Home score cannot be negative: {}",
                home_score
            )));
        }
        if away_score < 0 {
            return Err(LeagueError::invalid_input(format!(
                "Away score cannot be negative: {}",
                away_score
            )));
        }

        for goal in goals {
            self.validate_id("Scorer ID", goal.player_id)?;
            if !(MIN_GOAL_MINUTE..=MAX_GOAL_MINUTE).contains(&goal.minute) {
                return Err(LeagueError::invalid_input(format!(
                    "Goal minute must be between {} and {}, got {}",
                    MIN_GOAL_MINUTE, MAX_GOAL_MINUTE, goal.minute
                )));
            }
        }

        Ok(())
    }

    /// Validate date range for match queries. Both bounds or neither.
    pub fn validate_date_range(
        &self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> LeagueResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
        match (start_date, end_date) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err(LeagueError::invalid_input("Start date must not be after end date"));
                }
                Ok(Some((start, end)))
            }
            (None, None) => Ok(None),
            _ => Err(LeagueError::invalid_input(
                "Both start_date and end_date are required for a date range",
            )),
        }
    }

    pub fn validate_registration(&self, name: &str, email: &str, password: &str) -> LeagueResult<()> {
        self.validate_name("Admin name", name)?;

        let email = email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid_email || email.chars().any(char::is_whitespace) {
            return Err(LeagueError::invalid_input("A valid email address is required"));
        }

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(LeagueError::invalid_input(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(())
    }

    /// Absent or non-positive limits fall back to the default
    pub fn normalize_limit(&self, limit: Option<i64>) -> i64 {
        match limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_TOP_SCORERS_LIMIT,
        }
    }

    fn validate_name(&self, field: &str, name: &str) -> LeagueResult<()> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(LeagueError::invalid_input(format!("{} cannot be empty", field)));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(LeagueError::invalid_input(format!(
                "{} too long (maximum {} characters)",
                field, MAX_NAME_LENGTH
            )));
        }
        if trimmed.contains('\0') {
            return Err(LeagueError::invalid_input(format!("{} contains invalid characters", field)));
        }

        Ok(())
    }

    fn validate_id(&self, field: &str, id: Uuid) -> LeagueResult<()> {
        if id.is_nil() {
            return Err(LeagueError::invalid_input(format!("{} cannot be nil", field)));
        }
        Ok(())
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
