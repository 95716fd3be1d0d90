use chrono::Utc;
use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::models::team::{Team, TeamRequest};

pub async fn insert_team(pool: &PgPool, request: &TeamRequest) -> Result<Team, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (id, name, logo_url, founded_year, stadium_address, city, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.name.trim())
    .bind(&request.logo_url)
    .bind(request.founded_year)
    .bind(&request.stadium_address)
    .bind(&request.city)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list_teams<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name ASC, id ASC")
        .fetch_all(executor)
        .await
}

pub async fn find_team<'e>(
    executor: impl PgExecutor<'e>,
    team_id: Uuid,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(executor)
        .await
}

pub async fn update_team(
    pool: &PgPool,
    team_id: Uuid,
    request: &TeamRequest,
) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        UPDATE teams
        SET name = $2,
            logo_url = $3,
            founded_year = $4,
            stadium_address = $5,
            city = $6,
            updated_at = $7
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(team_id)
    .bind(request.name.trim())
    .bind(&request.logo_url)
    .bind(request.founded_year)
    .bind(&request.stadium_address)
    .bind(&request.city)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Returns the number of deleted rows (0 or 1)
pub async fn delete_team(pool: &PgPool, team_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
