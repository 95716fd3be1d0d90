use chrono::Utc;
use sqlx::{PgConnection, PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::goal::{Goal, GoalWithScorer};
use crate::models::matches::ScoringEvent;
use crate::models::report::ScorerTally;

pub async fn delete_goals_for_match(
    conn: &mut PgConnection,
    match_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM goals WHERE match_id = $1")
        .bind(match_id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

pub async fn insert_goal(
    conn: &mut PgConnection,
    match_id: Uuid,
    event: &ScoringEvent,
) -> Result<Goal, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (id, match_id, player_id, minute, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(event.player_id)
    .bind(event.minute)
    .bind(Utc::now())
    .fetch_one(conn)
    .await
}

/// Goals of one match in scoring order
pub async fn find_goals_for_match<'e>(
    executor: impl PgExecutor<'e>,
    match_id: Uuid,
) -> Result<Vec<GoalWithScorer>, sqlx::Error> {
    sqlx::query_as::<_, GoalWithScorer>(
        r#"
        SELECT g.id, g.player_id, p.name AS player_name, p.team_id, g.minute
        FROM goals g
        JOIN players p ON p.id = g.player_id
        WHERE g.match_id = $1
        ORDER BY g.minute ASC, g.created_at ASC, g.id ASC
        "#,
    )
    .bind(match_id)
    .fetch_all(executor)
    .await
}

/// Goal count per player across every match, unordered
pub async fn tally_goals_by_player(pool: &PgPool) -> Result<Vec<ScorerTally>, sqlx::Error> {
    sqlx::query_as::<_, ScorerTally>(
        r#"
        SELECT
            g.player_id,
            p.name AS player_name,
            t.name AS team_name,
            COUNT(*) AS goals
        FROM goals g
        JOIN players p ON p.id = g.player_id
        JOIN teams t ON t.id = p.team_id
        GROUP BY g.player_id, p.name, t.name
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Goals `player_id` scored in matches that `team_id` did not play in
pub async fn count_goals_outside_team(
    pool: &PgPool,
    player_id: Uuid,
    team_id: Uuid,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM goals g
        JOIN matches m ON m.id = g.match_id
        WHERE g.player_id = $1
          AND m.home_team_id <> $2
          AND m.away_team_id <> $2
        "#,
    )
    .bind(player_id)
    .bind(team_id)
    .fetch_one(pool)
    .await
}
