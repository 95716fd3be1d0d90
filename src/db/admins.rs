use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::admin::Admin;

pub async fn count_admins(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
        .fetch_one(pool)
        .await
}

pub async fn insert_admin(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Admin, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Admin>(
        r#"
        INSERT INTO admins (id, name, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn find_admin_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE lower(email) = lower($1)")
        .bind(email)
        .fetch_optional(pool)
        .await
}
