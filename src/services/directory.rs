//! Activity directory
//!
//! The in-memory, UI-facing view of the activities currently relevant.
//! The working set is owned exclusively by this type and is only ever
//! replaced wholesale after re-reading the durable store; no mutation
//! result is used to patch it incrementally. Views re-derive display
//! order and the per-category counts from it on every render.

use std::collections::BTreeMap;

use crate::database::Activity;
use crate::editor::SaveIntent;
use crate::error::Result;
use crate::services::ActivityService;

/// Application state synchronizing the UI's working set with the store
pub struct ActivityDirectory {
    service: ActivityService,
    /// Full unfiltered contents of the store as of the last refresh
    records: Vec<Activity>,
    /// What the map and list render: `records`, or the store's
    /// category-indexed subset while a filter is active
    working_set: Vec<Activity>,
    filter: Option<String>,
}

impl ActivityDirectory {
    pub fn new(service: ActivityService) -> Self {
        Self {
            service,
            records: Vec::new(),
            working_set: Vec::new(),
            filter: None,
        }
    }

    /// Startup: seed an empty store with the starter records, then load.
    pub async fn initialize(&mut self, defaults: &[Activity]) -> Result<()> {
        self.service.seed_if_empty(defaults).await?;
        self.refresh().await
    }

    /// Re-read the authoritative lists from the store and replace the
    /// in-memory collections wholesale. On failure the previous (last
    /// known-good) collections are kept untouched.
    pub async fn refresh(&mut self) -> Result<()> {
        let records = self.service.list_activities().await?;
        let working_set = match self.filter.as_deref() {
            Some(category) => self.service.list_by_category(category).await?,
            None => records.clone(),
        };

        self.records = records;
        self.working_set = working_set;
        Ok(())
    }

    /// Apply a save intent produced by the editor dialog.
    pub async fn apply(&mut self, intent: SaveIntent) -> Result<()> {
        match intent {
            SaveIntent::Create(activity) => self.create(activity).await,
            SaveIntent::Update(activity) => self.update(activity).await,
        }
    }

    /// Persist a new record, then reconcile against the store.
    pub async fn create(&mut self, activity: Activity) -> Result<()> {
        let outcome = self.service.create_activity(&activity).await;
        self.resync_after_write(outcome).await
    }

    /// Replace a stored record, then reconcile against the store.
    pub async fn update(&mut self, activity: Activity) -> Result<()> {
        let outcome = self.service.update_activity(&activity).await;
        self.resync_after_write(outcome).await
    }

    /// Delete a record by id, then reconcile against the store.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let outcome = self.service.delete_activity(id).await;
        self.resync_after_write(outcome).await
    }

    /// Every write is followed by a re-fetch, whether it succeeded or not.
    /// A failed write surfaces its own error; the re-fetch after it is
    /// best-effort, since the store was not changed.
    async fn resync_after_write(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => self.refresh().await,
            Err(write_err) => {
                if let Err(refresh_err) = self.refresh().await {
                    tracing::warn!(
                        "Refresh after failed write also failed: {}",
                        refresh_err
                    );
                }
                Err(write_err)
            }
        }
    }

    /// Select a category filter (`None` clears it). The working set is
    /// re-read from the store either way; a failed read reverts to the
    /// previous filter and keeps the previous working set.
    pub async fn set_filter(&mut self, category: Option<String>) -> Result<()> {
        let previous = std::mem::replace(&mut self.filter, category);
        if let Err(e) = self.refresh().await {
            self.filter = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// The records views render, in store order.
    pub fn working_set(&self) -> &[Activity] {
        &self.working_set
    }

    /// The working set in display order: ascending by date. Recomputed on
    /// every call, never persisted.
    pub fn display_order(&self) -> Vec<&Activity> {
        let mut ordered: Vec<&Activity> = self.working_set.iter().collect();
        ordered.sort_by_key(|a| a.date);
        ordered
    }

    /// How many records currently carry each category, over the full
    /// unfiltered store contents. Categories with no records are absent.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for activity in &self.records {
            if let Some(category) = &activity.category {
                *counts.entry(category.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Look up a working-set record by id, e.g. to answer the map's
    /// point-selected event.
    pub fn find(&self, id: &str) -> Option<&Activity> {
        self.working_set.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{initialize_database, Repository};
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_directory() -> ActivityDirectory {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();

        initialize_database(&pool).await.unwrap();

        let service = ActivityService::new(Repository::new(pool));
        ActivityDirectory::new(service)
    }

    fn activity(id: &str, name: &str, category: Option<&str>, date: (i32, u32, u32)) -> Activity {
        Activity {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            latitude: 41.9,
            longitude: 12.5,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            pin_color: None,
            icon: None,
            category: category.map(|c| c.to_string()),
        }
    }

    #[tokio::test]
    async fn test_initialize_seeds_empty_store() {
        let mut directory = create_test_directory().await;

        let defaults = vec![
            activity("1", "One", Some("Rock"), (2025, 6, 15)),
            activity("2", "Two", Some("Jazz"), (2025, 4, 18)),
        ];
        directory.initialize(&defaults).await.unwrap();

        assert_eq!(directory.working_set().len(), 2);

        // A second initialize does not duplicate the starters
        directory.initialize(&defaults).await.unwrap();
        assert_eq!(directory.working_set().len(), 2);
    }

    #[tokio::test]
    async fn test_working_set_matches_store_after_every_mutation() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        directory
            .create(activity("a1", "Vasco", Some("Rock"), (2025, 6, 15)))
            .await
            .unwrap();
        assert_eq!(directory.working_set().len(), 1);

        let mut renamed = directory.find("a1").unwrap().clone();
        renamed.name = "Vasco Rossi".to_string();
        directory.update(renamed).await.unwrap();
        assert_eq!(directory.find("a1").unwrap().name, "Vasco Rossi");

        directory.delete("a1").await.unwrap();
        assert!(directory.working_set().is_empty());
        assert!(directory.find("a1").is_none());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_working_set_consistent() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        directory
            .create(activity("a1", "Original", None, (2025, 6, 1)))
            .await
            .unwrap();

        let err = directory
            .create(activity("a1", "Imposter", None, (2025, 6, 2)))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::AppError::DuplicateActivity(_)));

        // Still exactly the store contents, with the original record
        assert_eq!(directory.working_set().len(), 1);
        assert_eq!(directory.find("a1").unwrap().name, "Original");
    }

    #[tokio::test]
    async fn test_filter_is_served_by_the_store() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        directory
            .create(activity("a1", "Vasco", Some("Rock"), (2025, 6, 15)))
            .await
            .unwrap();
        directory
            .create(activity("a2", "Coldplay", Some("Rock"), (2025, 6, 2)))
            .await
            .unwrap();
        directory
            .create(activity("a3", "Umbria Jazz", Some("Jazz"), (2025, 4, 5)))
            .await
            .unwrap();

        directory.set_filter(Some("Jazz".to_string())).await.unwrap();
        assert_eq!(directory.filter(), Some("Jazz"));
        assert_eq!(directory.working_set().len(), 1);
        assert_eq!(directory.working_set()[0].id, "a3");

        // A mutation while filtered reconciles the filtered view
        directory
            .create(activity("a4", "Jazz Festival", Some("Jazz"), (2025, 4, 18)))
            .await
            .unwrap();
        assert_eq!(directory.working_set().len(), 2);

        directory.set_filter(None).await.unwrap();
        assert_eq!(directory.working_set().len(), 4);
    }

    #[tokio::test]
    async fn test_filter_on_category_with_no_records_is_empty() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        directory
            .create(activity("a1", "Vasco", Some("Rock"), (2025, 6, 15)))
            .await
            .unwrap();

        directory
            .set_filter(Some("Festival".to_string()))
            .await
            .unwrap();
        assert!(directory.working_set().is_empty());
        assert_eq!(directory.category_counts().get("Rock"), Some(&1));
    }

    #[tokio::test]
    async fn test_display_order_is_ascending_by_date() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        directory
            .create(activity("a1", "July", None, (2025, 7, 10)))
            .await
            .unwrap();
        directory
            .create(activity("a2", "April", None, (2025, 4, 18)))
            .await
            .unwrap();
        directory
            .create(activity("a3", "June", None, (2025, 6, 15)))
            .await
            .unwrap();

        let ordered: Vec<&str> = directory
            .display_order()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(ordered, vec!["April", "June", "July"]);
    }

    #[tokio::test]
    async fn test_category_counts_omit_empty_categories() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        directory
            .create(activity("a1", "Vasco", Some("Rock"), (2025, 6, 15)))
            .await
            .unwrap();
        directory
            .create(activity("a2", "Coldplay", Some("Rock"), (2025, 6, 2)))
            .await
            .unwrap();
        directory
            .create(activity("a3", "Umbria Jazz", Some("Jazz"), (2025, 4, 5)))
            .await
            .unwrap();
        directory
            .create(activity("a4", "No category", None, (2025, 8, 1)))
            .await
            .unwrap();

        let counts = directory.category_counts();
        assert_eq!(counts.get("Rock"), Some(&2));
        assert_eq!(counts.get("Jazz"), Some(&1));
        assert!(!counts.contains_key("Festival"));
        assert_eq!(counts.len(), 2);
    }

    #[tokio::test]
    async fn test_editor_intents_flow_through_to_the_store() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        let mut draft = crate::editor::ActivityDraft::new();
        draft.name = "Jazz Festival Perugia".to_string();
        draft.set_category(Some("Jazz".to_string()));
        directory.apply(draft.into_intent(None).unwrap()).await.unwrap();

        assert_eq!(directory.working_set().len(), 1);
        let created = directory.working_set()[0].clone();
        assert_eq!(created.icon.as_deref(), Some("🎷"));

        let mut edit = crate::editor::ActivityDraft::from_activity(&created);
        edit.description = "Moved to the arena".to_string();
        directory
            .apply(edit.into_intent(Some(&created)).unwrap())
            .await
            .unwrap();

        assert_eq!(directory.working_set().len(), 1);
        assert_eq!(
            directory.find(&created.id).unwrap().description,
            "Moved to the arena"
        );
    }

    #[tokio::test]
    async fn test_stalled_backend_keeps_last_known_good_state() {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap();
        initialize_database(&pool).await.unwrap();

        let service = ActivityService::new(Repository::new(pool.clone()));
        let mut directory = ActivityDirectory::new(service);
        directory
            .initialize(&[activity("a1", "Survivor", Some("Rock"), (2025, 6, 15))])
            .await
            .unwrap();

        pool.close().await;

        // Both the write and the follow-up re-fetch fail; the caller gets
        // the write error and the working set stays at last known-good.
        let err = directory
            .create(activity("a2", "Lost", None, (2025, 7, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::AppError::Database(_)));
        assert_eq!(directory.working_set().len(), 1);
        assert_eq!(directory.find("a1").unwrap().name, "Survivor");
    }

    #[tokio::test]
    async fn test_counts_stay_unfiltered_while_a_filter_is_active() {
        let mut directory = create_test_directory().await;
        directory.initialize(&[]).await.unwrap();

        directory
            .create(activity("a1", "Vasco", Some("Rock"), (2025, 6, 15)))
            .await
            .unwrap();
        directory
            .create(activity("a2", "Umbria Jazz", Some("Jazz"), (2025, 4, 5)))
            .await
            .unwrap();

        directory.set_filter(Some("Jazz".to_string())).await.unwrap();

        let counts = directory.category_counts();
        assert_eq!(counts.get("Rock"), Some(&1));
        assert_eq!(counts.get("Jazz"), Some(&1));
    }
}
