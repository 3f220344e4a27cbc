//! Editor dialog contract
//!
//! The dialog itself is rendered by the shell; this module owns its state.
//! A draft collects the user's input, recomputes the pin color and glyph
//! whenever the category changes, and on confirmation turns into a save
//! intent for the directory. Cancelling is simply dropping the draft:
//! no intent, no storage call.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::database::Activity;
use crate::error::{AppError, Result};

/// What a confirmed dialog hands to the directory
#[derive(Debug, Clone, PartialEq)]
pub enum SaveIntent {
    Create(Activity),
    Update(Activity),
}

impl SaveIntent {
    pub fn activity(&self) -> &Activity {
        match self {
            SaveIntent::Create(a) | SaveIntent::Update(a) => a,
        }
    }
}

/// The record being composed in the editor dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Left unset, the activity is dated today at save time
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub pin_color: Option<String>,
    pub icon: Option<String>,
}

impl ActivityDraft {
    /// Create-mode prefill
    pub fn new() -> Self {
        let mut draft = Self {
            name: String::new(),
            description: String::new(),
            latitude: config::DRAFT_DEFAULT_LATITUDE,
            longitude: config::DRAFT_DEFAULT_LONGITUDE,
            date: None,
            category: None,
            pin_color: None,
            icon: None,
        };
        draft.set_category(Some(config::DRAFT_DEFAULT_CATEGORY.to_string()));
        draft
    }

    /// Edit-mode prefill from the record being modified
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            latitude: activity.latitude,
            longitude: activity.longitude,
            date: Some(activity.date),
            category: activity.category.clone(),
            pin_color: activity.pin_color.clone(),
            icon: activity.icon.clone(),
        }
    }

    /// Change the selected category, recomputing the derived appearance
    /// immediately. The color and glyph are frozen into the record at save
    /// time; later edits to the category table never rewrite saved records.
    /// Unknown categories leave the appearance fields as they are.
    pub fn set_category(&mut self, category: Option<String>) {
        if let Some(spec) = category.as_deref().and_then(config::category_spec) {
            self.pin_color = Some(spec.pin_color.to_string());
            self.icon = Some(spec.glyph.to_string());
        }
        self.category = category;
    }

    /// Required-field validation, run before any intent is emitted.
    /// Failure blocks submission and causes no storage operation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }

        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(AppError::Validation(
                "Latitude and longitude must be valid numbers".to_string(),
            ));
        }

        Ok(())
    }

    /// Confirm the dialog: validate, default the optional fields, and
    /// produce the save intent. `existing` is the record being edited, or
    /// `None` in create mode (a fresh id is assigned, never reused).
    pub fn into_intent(self, existing: Option<&Activity>) -> Result<SaveIntent> {
        self.validate()?;

        let activity = Activity {
            id: match existing {
                Some(original) => original.id.clone(),
                None => Uuid::new_v4().to_string(),
            },
            name: self.name,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
            pin_color: self.pin_color,
            icon: self.icon,
            category: self.category,
        };

        Ok(match existing {
            Some(_) => SaveIntent::Update(activity),
            None => SaveIntent::Create(activity),
        })
    }
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self::new()
    }
}
