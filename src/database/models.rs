//! Database models
//!
//! Rust structs representing database entities.
//! All models use serde for serialization to frontend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A geolocated activity record (one pin on the map)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Activity {
    /// Primary key, assigned once at creation and never reused
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Calendar date of the activity (ISO date in storage)
    pub date: NaiveDate,
    /// Display color snapshotted from the category at last save
    pub pin_color: Option<String>,
    /// Marker glyph snapshotted from the category at last save
    pub icon: Option<String>,
    pub category: Option<String>,
}
