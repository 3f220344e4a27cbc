//! Application configuration constants
//!
//! Central location for all configuration constants, display defaults,
//! and the static category table used throughout the application.

// ===== Durable Store =====

/// File name of the SQLite database inside the app data directory
pub const DB_FILE_NAME: &str = "gigmap.db";

// ===== Categories =====

/// One entry of the static category table.
///
/// The table is configuration data, not state: records snapshot the color
/// and glyph of their category at save time, so editing this table never
/// rewrites previously saved activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: &'static str,
    pub pin_color: &'static str,
    pub glyph: &'static str,
}

/// The fixed set of known activity categories
pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec { name: "Rock", pin_color: "#FF0000", glyph: "🎸" },
    CategorySpec { name: "Pop", pin_color: "#00CC00", glyph: "🎤" },
    CategorySpec { name: "Jazz", pin_color: "#0000FF", glyph: "🎷" },
    CategorySpec { name: "Classical", pin_color: "#FF9900", glyph: "🎻" },
    CategorySpec { name: "Festival", pin_color: "#9900CC", glyph: "🎭" },
];

/// Look up a known category by name. Unknown names return `None`; callers
/// fall back to the neutral appearance.
pub fn category_spec(name: &str) -> Option<&'static CategorySpec> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Pin color used for records without a known category
pub const NEUTRAL_PIN_COLOR: &str = "#cccccc";

/// Marker glyph used for records without a known category
pub const NEUTRAL_GLYPH: &str = "📍";

// ===== Map Defaults =====

/// Viewport center used when no activity provides one (Rome)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (41.9028, 12.4964);

/// Initial zoom level of the map viewport
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Zoom level applied when the user focuses a single marker
pub const FOCUS_ZOOM: u8 = 16;

// ===== Editor Dialog Prefills =====

/// Category preselected in a fresh create dialog
pub const DRAFT_DEFAULT_CATEGORY: &str = "Rock";

/// Latitude prefilled in a fresh create dialog
pub const DRAFT_DEFAULT_LATITUDE: f64 = 41.9;

/// Longitude prefilled in a fresh create dialog
pub const DRAFT_DEFAULT_LONGITUDE: f64 = 12.5;

// ===== Notifications =====

/// How long an operation-outcome notification stays on screen
pub const NOTICE_AUTO_DISMISS_MS: u64 = 3_000;

// ===== Display Formatting =====

/// Decimal places shown for coordinates in list rows and cards
pub const COORD_DECIMALS: usize = 4;
