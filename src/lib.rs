//! GigMap application core
//!
//! Persistence, synchronization, and view contracts for a map application
//! over geolocated activity records. The rendering shell embeds this crate,
//! calls [`app::setup`] at startup, and drives [`services::ActivityDirectory`]
//! from its event loop; everything it renders is derived data from the
//! [`view`] module.

pub mod app;
pub mod config;
pub mod database;
pub mod editor;
pub mod error;
pub mod services;
pub mod view;
