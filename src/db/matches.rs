use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::matches::{Match, MatchRequest, MatchStatus, MatchWithTeams};

const MATCH_WITH_TEAMS_SELECT: &str = r#"
    SELECT m.*, ht.name AS home_team_name, at.name AS away_team_name
    FROM matches m
    JOIN teams ht ON ht.id = m.home_team_id
    JOIN teams at ON at.id = m.away_team_id
"#;

pub async fn insert_match(pool: &PgPool, request: &MatchRequest) -> Result<Match, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (id, match_time, home_team_id, away_team_id, status, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.match_time)
    .bind(request.home_team_id)
    .bind(request.away_team_id)
    .bind(MatchStatus::Scheduled)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list_matches(pool: &PgPool) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let sql = format!("{} ORDER BY m.match_time ASC, m.id ASC", MATCH_WITH_TEAMS_SELECT);
    sqlx::query_as::<_, MatchWithTeams>(&sql).fetch_all(pool).await
}

/// Matches scheduled within `[start, end]`, both bounds inclusive
pub async fn list_matches_between(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let sql = format!(
        "{} WHERE m.match_time BETWEEN $1 AND $2 ORDER BY m.match_time ASC, m.id ASC",
        MATCH_WITH_TEAMS_SELECT
    );
    sqlx::query_as::<_, MatchWithTeams>(&sql)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
}

pub async fn list_matches_by_team(
    pool: &PgPool,
    team_id: Uuid,
) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
    let sql = format!(
        "{} WHERE m.home_team_id = $1 OR m.away_team_id = $1 ORDER BY m.match_time ASC, m.id ASC",
        MATCH_WITH_TEAMS_SELECT
    );
    sqlx::query_as::<_, MatchWithTeams>(&sql)
        .bind(team_id)
        .fetch_all(pool)
        .await
}

pub async fn list_finished_matches<'e>(
    executor: impl PgExecutor<'e>,
) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        SELECT * FROM matches
        WHERE status = $1
          AND home_score IS NOT NULL
          AND away_score IS NOT NULL
        ORDER BY match_time ASC, id ASC
        "#,
    )
    .bind(MatchStatus::Finished)
    .fetch_all(executor)
    .await
}

pub async fn find_match_with_teams(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Option<MatchWithTeams>, sqlx::Error> {
    let sql = format!("{} WHERE m.id = $1", MATCH_WITH_TEAMS_SELECT);
    sqlx::query_as::<_, MatchWithTeams>(&sql)
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_match<'e>(
    executor: impl PgExecutor<'e>,
    match_id: Uuid,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(executor)
        .await
}

/// Load a match and hold a row lock on it until the surrounding transaction ends
pub async fn lock_match(
    conn: &mut PgConnection,
    match_id: Uuid,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1 FOR UPDATE")
        .bind(match_id)
        .fetch_optional(conn)
        .await
}

/// Reschedule a match. Only matches still scheduled are touched.
pub async fn update_match_schedule(
    pool: &PgPool,
    match_id: Uuid,
    request: &MatchRequest,
) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET match_time = $2,
            home_team_id = $3,
            away_team_id = $4,
            updated_at = $5
        WHERE id = $1 AND status = $6
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(request.match_time)
    .bind(request.home_team_id)
    .bind(request.away_team_id)
    .bind(Utc::now())
    .bind(MatchStatus::Scheduled)
    .fetch_optional(pool)
    .await
}

pub async fn record_final_score(
    conn: &mut PgConnection,
    match_id: Uuid,
    home_score: i32,
    away_score: i32,
) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET home_score = $2,
            away_score = $3,
            status = $4,
            updated_at = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(home_score)
    .bind(away_score)
    .bind(MatchStatus::Finished)
    .bind(Utc::now())
    .fetch_one(conn)
    .await
}

pub async fn delete_match(pool: &PgPool, match_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Finished matches won by `team_id` with kick-off strictly before `before`
pub async fn count_wins_before(
    pool: &PgPool,
    team_id: Uuid,
    before: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM matches
        WHERE status = $3
          AND match_time < $2
          AND (
            (home_team_id = $1 AND home_score > away_score)
            OR (away_team_id = $1 AND away_score > home_score)
          )
        "#,
    )
    .bind(team_id)
    .bind(before)
    .bind(MatchStatus::Finished)
    .fetch_one(pool)
    .await
}
