//! Cask mobile app
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`platform`] - Rendering target detection
//! - [`ui`] - Class merging, elevation, components and navigation shells
//! - [`contracts`] - Backend response contracts

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core as contracts;
pub use app_platform as platform;
pub use app_ui as ui;

pub use app_ui::cn;
