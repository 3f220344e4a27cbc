//! Starter records inserted on first launch
//!
//! These go through [`Repository::seed_if_empty`](super::Repository::seed_if_empty)
//! exactly once, when the store is created empty. They carry the category
//! color/glyph snapshot they were authored with, like any other saved record.

use super::models::Activity;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid starter date")
}

fn starter(
    id: &str,
    name: &str,
    description: &str,
    latitude: f64,
    longitude: f64,
    when: NaiveDate,
    pin_color: &str,
    icon: &str,
    category: &str,
) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        latitude,
        longitude,
        date: when,
        pin_color: Some(pin_color.to_string()),
        icon: Some(icon.to_string()),
        category: Some(category.to_string()),
    }
}

/// The starter concerts shown the first time the app opens
pub fn starter_activities() -> Vec<Activity> {
    vec![
        starter(
            "1",
            "Vasco Rossi - Tour 2025",
            "Vasco Rossi live at the Stadio Olimpico",
            41.9341,
            12.4547,
            date(2025, 6, 15),
            "#FF0000",
            "🎸",
            "Rock",
        ),
        starter(
            "2",
            "Laura Pausini in Concert",
            "European tour, Milan date",
            45.4781,
            9.1236,
            date(2025, 5, 23),
            "#00CC00",
            "🎤",
            "Pop",
        ),
        starter(
            "3",
            "Orchestra Sinfonica Nazionale",
            "Classical concert at the Teatro Massimo",
            38.1191,
            13.3598,
            date(2025, 7, 10),
            "#FF9900",
            "🎻",
            "Classical",
        ),
        starter(
            "4",
            "Jazz Festival Perugia",
            "International jazz festival",
            43.1107,
            12.3908,
            date(2025, 4, 18),
            "#0000FF",
            "🎷",
            "Jazz",
        ),
        starter(
            "5",
            "Coldplay in Concert",
            "Italian date of the world tour",
            40.8518,
            14.2681,
            date(2025, 6, 2),
            "#FF0000",
            "🎸",
            "Rock",
        ),
        starter(
            "6",
            "Umbria Jazz Winter",
            "Winter jazz festival",
            42.7192,
            12.1113,
            date(2025, 4, 5),
            "#0000FF",
            "🎷",
            "Jazz",
        ),
        starter(
            "7",
            "Festival di Sanremo",
            "Italy's leading song festival",
            43.8159,
            7.7763,
            date(2025, 2, 10),
            "#9900CC",
            "🎭",
            "Festival",
        ),
        starter(
            "8",
            "Opera Tosca",
            "Performance of Puccini's Tosca",
            45.4384,
            10.9916,
            date(2025, 7, 26),
            "#FF9900",
            "🎭",
            "Classical",
        ),
    ]
}
