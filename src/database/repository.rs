//! Repository layer for database operations
//!
//! This module provides CRUD operations for the activities store.
//! Connections are acquired from the pool per statement and released on
//! every exit path; no handle outlives the operation that used it.

use super::models::Activity;
use crate::error::{AppError, Result};
use sqlx::SqlitePool;

/// Repository for database operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new activity under its id.
    ///
    /// A primary-key collision is an error, never a silent overwrite.
    pub async fn create_activity(&self, activity: &Activity) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO activities (id, name, description, latitude, longitude, date, pin_color, icon, category)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&activity.id)
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(activity.latitude)
        .bind(activity.longitude)
        .bind(activity.date)
        .bind(&activity.pin_color)
        .bind(&activity.icon)
        .bind(&activity.category)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                tracing::debug!("Created activity: {}", activity.id);
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => {
                Err(AppError::DuplicateActivity(activity.id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get an activity by ID
    pub async fn get_activity(&self, id: &str) -> Result<Activity> {
        let activity = sqlx::query_as::<_, Activity>(
            r#"
            SELECT * FROM activities WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::ActivityNotFound(id.to_string()))?;

        Ok(activity)
    }

    /// List every activity in the store. Order is unspecified; display
    /// ordering is applied by the directory at render time.
    pub async fn list_activities(&self) -> Result<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            r#"
            SELECT * FROM activities
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    /// List every activity whose category equals the given value, via the
    /// category index.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            r#"
            SELECT * FROM activities WHERE category = ?
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(activities)
    }

    /// Replace the full record stored under the activity's id.
    ///
    /// Upsert contract: updating an id that is not in the store inserts it.
    pub async fn update_activity(&self, activity: &Activity) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO activities (id, name, description, latitude, longitude, date, pin_color, icon, category)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                latitude = excluded.latitude,
                longitude = excluded.longitude,
                date = excluded.date,
                pin_color = excluded.pin_color,
                icon = excluded.icon,
                category = excluded.category
            "#,
        )
        .bind(&activity.id)
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(activity.latitude)
        .bind(activity.longitude)
        .bind(activity.date)
        .bind(&activity.pin_color)
        .bind(&activity.icon)
        .bind(&activity.category)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Updated activity: {}", activity.id);
        Ok(())
    }

    /// Delete the activity with the given id. Deleting an id that is not in
    /// the store succeeds.
    pub async fn delete_activity(&self, id: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!("Deleted activity: {} ({} rows)", id, rows);
        Ok(())
    }

    /// Insert the given defaults only if the store holds no records at all.
    /// Never merges with or overwrites existing data.
    ///
    /// Returns `true` when the store was empty and the defaults went in.
    pub async fn seed_if_empty(&self, defaults: &[Activity]) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            tracing::debug!("Store already has {} activities, skipping seed", count);
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for activity in defaults {
            sqlx::query(
                r#"
                INSERT INTO activities (id, name, description, latitude, longitude, date, pin_color, icon, category)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&activity.id)
            .bind(&activity.name)
            .bind(&activity.description)
            .bind(activity.latitude)
            .bind(activity.longitude)
            .bind(activity.date)
            .bind(&activity.pin_color)
            .bind(&activity.icon)
            .bind(&activity.category)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!("Seeded {} starter activities", defaults.len());
        Ok(true)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map_or(false, |db| db.is_unique_violation())
}
