use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

use crate::models::goal::GoalWithScorer;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub match_time: DateTime<Utc>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Scores of a finished match. `None` while the match is still scheduled.
    pub fn final_score(&self) -> Option<(i32, i32)> {
        match (self.status, self.home_score, self.away_score) {
            (MatchStatus::Finished, Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_result(self.status, self.home_score, self.away_score)
    }

    /// "home-away", with unset scores rendered as zero
    pub fn score_line(&self) -> String {
        format!(
            "{}-{}",
            self.home_score.unwrap_or(0),
            self.away_score.unwrap_or(0)
        )
    }
}

/// Human-readable result of a match as shown in reports
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    #[serde(rename = "home win")]
    HomeWin,
    #[serde(rename = "away win")]
    AwayWin,
    #[serde(rename = "draw")]
    Draw,
    #[serde(rename = "scheduled")]
    Scheduled,
}

impl MatchOutcome {
    pub fn from_result(status: MatchStatus, home_score: Option<i32>, away_score: Option<i32>) -> Self {
        if status != MatchStatus::Finished {
            return MatchOutcome::Scheduled;
        }
        let home = home_score.unwrap_or(0);
        let away = away_score.unwrap_or(0);
        if home > away {
            MatchOutcome::HomeWin
        } else if away > home {
            MatchOutcome::AwayWin
        } else {
            MatchOutcome::Draw
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::HomeWin => "home win",
            MatchOutcome::AwayWin => "away win",
            MatchOutcome::Draw => "draw",
            MatchOutcome::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Match row joined with both team names
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchWithTeams {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub game: Match,
    pub home_team_name: String,
    pub away_team_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchDetails {
    #[serde(flatten)]
    pub game: MatchWithTeams,
    pub goals: Vec<GoalWithScorer>,
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchRequest {
    pub match_time: DateTime<Utc>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ScoringEvent {
    pub player_id: Uuid,
    pub minute: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportResultRequest {
    pub home_score: i32,
    pub away_score: i32,
    #[serde(default)]
    pub goals: Vec<ScoringEvent>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchRangeQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl fmt::Display for MatchRangeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start_date: {:?}, end_date: {:?}", self.start_date, self.end_date)
    }
}
