//! Services module
//!
//! Business logic services that sit between the UI contracts and the
//! repository.

pub mod activities;
pub mod directory;

pub use activities::ActivityService;
pub use directory::ActivityDirectory;
