use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Goal {
    pub id: Uuid,
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub minute: i32,
    pub created_at: DateTime<Utc>,
}

/// Goal joined with the scorer and the team the scorer plays for
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct GoalWithScorer {
    pub id: Uuid,
    pub player_id: Uuid,
    pub player_name: String,
    pub team_id: Uuid,
    pub minute: i32,
}
