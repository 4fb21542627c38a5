//! Cafe Repository

use super::{RepoError, RepoResult};
use shared::models::{Cafe, CafeCreate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// All cafes ordered by name
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(&format!("SELECT {COLUMNS} FROM cafe ORDER BY name"))
        .fetch_all(pool)
        .await?;
    Ok(cafes)
}

/// One cafe chosen uniformly at random, `None` when the table is empty
pub async fn find_random(pool: &SqlitePool) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(&format!(
        "SELECT {COLUMNS} FROM cafe ORDER BY RANDOM() LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;
    Ok(cafe)
}

/// Cafes whose location matches exactly (case-sensitive)
pub async fn find_by_location(pool: &SqlitePool, location: &str) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(&format!(
        "SELECT {COLUMNS} FROM cafe WHERE location = ? ORDER BY name"
    ))
    .bind(location)
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Cafe>> {
    let cafe = sqlx::query_as::<_, Cafe>(&format!("SELECT {COLUMNS} FROM cafe WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(cafe)
}

/// Insert a cafe inside a transaction
///
/// A duplicate name surfaces as [`RepoError::Duplicate`] after the transaction
/// has been rolled back, leaving the table unchanged.
pub async fn create(pool: &SqlitePool, data: CafeCreate) -> RepoResult<Cafe> {
    let mut tx = pool.begin().await?;

    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO cafe (name, map_url, img_url, location, seats, has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.map_url)
    .bind(&data.img_url)
    .bind(&data.location)
    .bind(&data.seats)
    .bind(data.has_toilet)
    .bind(data.has_wifi)
    .bind(data.has_sockets)
    .bind(data.can_take_calls)
    .bind(&data.coffee_price)
    .fetch_one(&mut *tx)
    .await;

    let id = match inserted {
        Ok(id) => id,
        Err(e) => {
            tx.rollback().await?;
            return Err(e.into());
        }
    };

    tx.commit().await?;
    Ok(data.into_cafe(id))
}

/// Set (or clear, with `None`) the coffee price of one cafe, returning the updated row
pub async fn update_price(
    pool: &SqlitePool,
    id: i64,
    new_price: Option<&str>,
) -> RepoResult<Cafe> {
    let rows = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
        .bind(new_price)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Cafe {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Cafe {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM cafe WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
