//! Activities service
//!
//! High-level persistence operations for activity records. A thin layer
//! over the repository that adds lifecycle logging; synchronization with
//! the in-memory working set lives in [`super::directory`].

use crate::database::{Activity, Repository};
use crate::error::Result;

/// Service for managing activity records
#[derive(Clone)]
pub struct ActivityService {
    repo: Repository,
}

impl ActivityService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Persist a new activity
    pub async fn create_activity(&self, activity: &Activity) -> Result<()> {
        tracing::info!("Creating activity: {}", activity.name);

        self.repo.create_activity(activity).await?;

        tracing::info!("Activity created successfully: {}", activity.id);

        Ok(())
    }

    /// Get an activity by ID
    pub async fn get_activity(&self, id: &str) -> Result<Activity> {
        self.repo.get_activity(id).await
    }

    /// List all activities
    pub async fn list_activities(&self) -> Result<Vec<Activity>> {
        self.repo.list_activities().await
    }

    /// List activities with the given category
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Activity>> {
        self.repo.list_by_category(category).await
    }

    /// Replace a stored activity with the given full record
    pub async fn update_activity(&self, activity: &Activity) -> Result<()> {
        tracing::debug!("Updating activity: {}", activity.id);

        self.repo.update_activity(activity).await?;

        tracing::debug!("Activity updated successfully: {}", activity.id);

        Ok(())
    }

    /// Delete an activity
    pub async fn delete_activity(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting activity: {}", id);

        self.repo.delete_activity(id).await?;

        tracing::info!("Activity deleted successfully: {}", id);

        Ok(())
    }

    /// Seed starter records into an empty store
    pub async fn seed_if_empty(&self, defaults: &[Activity]) -> Result<bool> {
        self.repo.seed_if_empty(defaults).await
    }
}
