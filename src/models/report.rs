use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::matches::MatchOutcome;

/// One row of the league table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub position: u32,
    pub team_id: Uuid,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team_id: Uuid, team_name: impl Into<String>) -> Self {
        Self {
            position: 0,
            team_id,
            team_name: team_name.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    /// Fold one finished match into this team's record, seen from this team's side.
    pub fn record(&mut self, scored: i32, conceded: i32) {
        let scored = scored.max(0) as u32;
        let conceded = conceded.max(0) as u32;

        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;

        if scored > conceded {
            self.won += 1;
            self.points += 3;
        } else if scored < conceded {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += 1;
        }
    }
}

/// Raw per-player goal count as returned by the goals aggregate query
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ScorerTally {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_name: String,
    pub goals: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TopScorer {
    pub rank: u32,
    pub player_id: Uuid,
    pub player_name: String,
    pub team_name: String,
    pub goals: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReportGoal {
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub minute: i32,
}

/// Number of matches each side had won before kick-off
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WinsBeforeMatch {
    pub home_team_wins: i64,
    pub away_team_wins: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchReport {
    pub match_id: Uuid,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub score: String,
    pub match_time: String,
    pub status: String,
    pub outcome: MatchOutcome,
    pub goals: Vec<ReportGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins_before_match: Option<WinsBeforeMatch>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopScorersQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchReportQuery {
    #[serde(default)]
    pub include_history: bool,
}
