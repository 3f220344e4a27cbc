//! List/grid view contract
//!
//! One view-model serves both presentations: the shell renders a `ListRow`
//! as a table row or as a card. Rows carry the record id so the edit and
//! delete affordances can route a [`RowIntent`] back to the directory.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::database::Activity;

/// One activity, formatted for the list or grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub date_label: String,
    pub coords_label: String,
    /// Avatar/badge color; neutral when the record has no saved pin color
    pub pin_color: String,
    /// Avatar glyph; neutral pin when the record has no saved icon
    pub glyph: String,
}

impl ListRow {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.name.clone(),
            subtitle: activity.description.clone(),
            date_label: super::long_date(activity.date),
            coords_label: format!(
                "{:.prec$}, {:.prec$}",
                activity.latitude,
                activity.longitude,
                prec = config::COORD_DECIMALS
            ),
            pin_color: activity
                .pin_color
                .clone()
                .unwrap_or_else(|| config::NEUTRAL_PIN_COLOR.to_string()),
            glyph: activity
                .icon
                .clone()
                .unwrap_or_else(|| config::NEUTRAL_GLYPH.to_string()),
        }
    }
}

/// Build the rows for one render, in the order given (display order)
pub fn rows(activities: &[&Activity]) -> Vec<ListRow> {
    activities.iter().map(|a| ListRow::from_activity(a)).collect()
}

/// What a row's affordances send back toward the directory's mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowIntent {
    /// Open the editor dialog prefilled with this record
    Edit(String),
    /// Delete this record
    Delete(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn row_formats_coordinates_and_date() {
        let activity = Activity {
            id: "a1".to_string(),
            name: "Vasco Rossi - Tour 2025".to_string(),
            description: "Vasco Rossi live at the Stadio Olimpico".to_string(),
            latitude: 41.9341,
            longitude: 12.4547,
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            pin_color: Some("#FF0000".to_string()),
            icon: Some("🎸".to_string()),
            category: Some("Rock".to_string()),
        };

        let row = ListRow::from_activity(&activity);

        assert_eq!(row.coords_label, "41.9341, 12.4547");
        assert_eq!(row.date_label, "15 June 2025");
        assert_eq!(row.pin_color, "#FF0000");
        assert_eq!(row.glyph, "🎸");
    }

    #[test]
    fn row_falls_back_to_the_neutral_appearance() {
        let activity = Activity {
            id: "a1".to_string(),
            name: "Somewhere".to_string(),
            description: String::new(),
            latitude: 41.9,
            longitude: 12.5,
            date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            pin_color: None,
            icon: None,
            category: None,
        };

        let row = ListRow::from_activity(&activity);

        assert_eq!(row.pin_color, config::NEUTRAL_PIN_COLOR);
        assert_eq!(row.glyph, config::NEUTRAL_GLYPH);
    }

    #[test]
    fn rows_preserve_the_given_order() {
        let a = Activity {
            id: "a1".to_string(),
            name: "First".to_string(),
            description: String::new(),
            latitude: 41.9,
            longitude: 12.5,
            date: NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(),
            pin_color: None,
            icon: None,
            category: None,
        };
        let mut b = a.clone();
        b.id = "a2".to_string();
        b.name = "Second".to_string();

        let built = rows(&[&a, &b]);
        let titles: Vec<_> = built.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }
}
