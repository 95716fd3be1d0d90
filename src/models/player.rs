use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "player_position", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlayerPosition {
    Striker,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl PlayerPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerPosition::Striker => "striker",
            PlayerPosition::Midfielder => "midfielder",
            PlayerPosition::Defender => "defender",
            PlayerPosition::Goalkeeper => "goalkeeper",
        }
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub position: PlayerPosition,
    pub number: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Player joined with the name of the team they play for
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerWithTeam {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub player: Player,
    pub team_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlayerRequest {
    pub team_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    pub position: PlayerPosition,
    pub number: i32,
}

impl fmt::Display for PlayerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{} ({})", self.name, self.number, self.position)
    }
}
