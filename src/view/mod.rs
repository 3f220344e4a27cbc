//! View contracts
//!
//! The shapes this core hands to the rendering shell, and the events the
//! shell hands back. The widgets themselves (map canvas, list/grid,
//! dialog chrome) live outside this crate; everything here is plain data
//! derived from the directory's working set on each render.

pub mod list;
pub mod map;
pub mod notice;

pub use list::{ListRow, RowIntent};
pub use map::{MapEvent, MapScene, Marker, Viewport};
pub use notice::{Notice, Severity};

use chrono::NaiveDate;

/// Long-form date label used by popups, rows, and cards ("15 June 2025")
pub(crate) fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
