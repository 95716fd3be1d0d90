use chrono::Utc;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::player::{Player, PlayerRequest, PlayerWithTeam};

const PLAYER_WITH_TEAM_SELECT: &str = r#"
    SELECT p.*, t.name AS team_name
    FROM players p
    JOIN teams t ON t.id = p.team_id
"#;

pub async fn insert_player(pool: &PgPool, request: &PlayerRequest) -> Result<Player, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (id, team_id, name, height_cm, weight_kg, position, number, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.team_id)
    .bind(request.name.trim())
    .bind(request.height_cm)
    .bind(request.weight_kg)
    .bind(request.position)
    .bind(request.number)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list_players(pool: &PgPool) -> Result<Vec<PlayerWithTeam>, sqlx::Error> {
    let sql = format!("{} ORDER BY t.name ASC, p.number ASC", PLAYER_WITH_TEAM_SELECT);
    sqlx::query_as::<_, PlayerWithTeam>(&sql).fetch_all(pool).await
}

pub async fn find_player_with_team(
    pool: &PgPool,
    player_id: Uuid,
) -> Result<Option<PlayerWithTeam>, sqlx::Error> {
    let sql = format!("{} WHERE p.id = $1", PLAYER_WITH_TEAM_SELECT);
    sqlx::query_as::<_, PlayerWithTeam>(&sql)
        .bind(player_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_players_by_team(pool: &PgPool, team_id: Uuid) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players WHERE team_id = $1 ORDER BY number ASC")
        .bind(team_id)
        .fetch_all(pool)
        .await
}

/// Player currently wearing `number` for `team_id`, if any
pub async fn find_player_by_number(
    pool: &PgPool,
    team_id: Uuid,
    number: i32,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players WHERE team_id = $1 AND number = $2")
        .bind(team_id)
        .bind(number)
        .fetch_optional(pool)
        .await
}

pub async fn find_players_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    player_ids: &[Uuid],
) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = ANY($1)")
        .bind(player_ids)
        .fetch_all(executor)
        .await
}

pub async fn update_player(
    pool: &PgPool,
    player_id: Uuid,
    request: &PlayerRequest,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        UPDATE players
        SET team_id = $2,
            name = $3,
            height_cm = $4,
            weight_kg = $5,
            position = $6,
            number = $7,
            updated_at = $8
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(player_id)
    .bind(request.team_id)
    .bind(request.name.trim())
    .bind(request.height_cm)
    .bind(request.weight_kg)
    .bind(request.position)
    .bind(request.number)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

pub async fn delete_player(pool: &PgPool, player_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(player_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
