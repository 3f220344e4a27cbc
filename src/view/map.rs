//! Map view contract
//!
//! The map widget accepts a sequence of located, labeled points and a
//! viewport, and emits a point-selected event. It never reads the store:
//! it renders whatever scene is built from the directory's display order.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::database::Activity;

/// Popup content for one marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub date_label: String,
    /// External directions link for the popup's "open in maps" action
    pub directions_url: String,
}

/// One interactive marker on the map.
///
/// `pin_color` of `None` means the shell renders its stock marker instead
/// of the colored dot with the glyph inside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
    pub pin_color: Option<String>,
    pub glyph: Option<String>,
    pub popup: MarkerPopup,
}

impl Marker {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            id: activity.id.clone(),
            latitude: activity.latitude,
            longitude: activity.longitude,
            label: activity.name.clone(),
            pin_color: activity.pin_color.clone(),
            glyph: activity.icon.clone(),
            popup: MarkerPopup {
                title: activity.name.clone(),
                category: activity.category.clone(),
                description: (!activity.description.is_empty())
                    .then(|| activity.description.clone()),
                date_label: super::long_date(activity.date),
                directions_url: format!(
                    "https://www.google.com/maps/search/?api=1&query={},{}",
                    activity.latitude, activity.longitude
                ),
            },
        }
    }
}

/// Requested camera position. `apply` tells the shell whether to actually
/// move the camera this render; it stays `false` on ordinary re-renders so
/// the map never fights a user-initiated pan or zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: u8,
    pub apply: bool,
}

/// Everything the map widget needs for one render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub markers: Vec<Marker>,
    pub viewport: Viewport,
}

impl MapScene {
    /// Build the initial scene: markers in display order, camera on the
    /// first activity (or Rome when the set is empty), applied once.
    pub fn new(activities: &[&Activity]) -> Self {
        let center = activities
            .first()
            .map(|a| (a.latitude, a.longitude))
            .unwrap_or(config::DEFAULT_MAP_CENTER);

        Self {
            markers: activities.iter().map(|a| Marker::from_activity(a)).collect(),
            viewport: Viewport {
                center,
                zoom: config::DEFAULT_MAP_ZOOM,
                apply: true,
            },
        }
    }

    /// A re-render of the same session: markers refresh, camera stays put.
    pub fn refreshed(activities: &[&Activity], previous: Viewport) -> Self {
        Self {
            markers: activities.iter().map(|a| Marker::from_activity(a)).collect(),
            viewport: Viewport {
                apply: false,
                ..previous
            },
        }
    }
}

/// Events the map widget emits back to the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// The user clicked a marker; carries the activity id
    PointSelected(String),
}

/// The camera response to a point-selected event: centered on the record,
/// zoomed in, applied this render.
pub fn focus_viewport(activity: &Activity) -> Viewport {
    Viewport {
        center: (activity.latitude, activity.longitude),
        zoom: config::FOCUS_ZOOM,
        apply: true,
    }
}
