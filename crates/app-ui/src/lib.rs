//! User interface for the cask mobile app
//!
//! This crate provides the presentation layer: class-name merging,
//! platform-aware card elevation, the shared components built on them,
//! and the navigation shells the screens live in.
//!
//! # Modules
//!
//! - [`style`] - Class merger and its category taxonomy
//! - [`elevation`] - Shadow levels and per-platform shadow styles
//! - [`components`] - Card, SearchInput, OfferStatsCard and toasts
//! - [`navigation`] - Auth and post-auth stack shells
//! - [`config`] - UI configuration file
//!
//! # Example
//!
//! ```rust
//! use app_ui::{Card, ShadowLevel, StyleContext};
//! use app_platform::PlatformKind;
//!
//! let ctx = StyleContext::for_platform(PlatformKind::Android);
//! let card = Card::default()
//!     .with_class_name("bg-gray-50")
//!     .with_shadow_level(ShadowLevel::Sm)
//!     .render(&ctx);
//!
//! assert!(card.class_name.starts_with("bg-gray-50 "));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod config;
pub mod elevation;
pub mod navigation;
pub mod style;

// Re-export commonly used types
pub use style::{cn, CategoryRule, ClassMerger, ClassTaxonomy, ClassValue, StyleError};

pub use elevation::{
    get_card_shadow, ElevationResolver, ShadowDescriptor, ShadowGeometry, ShadowLevel, ShadowOffset,
};

pub use components::{
    show_toast, Card, InputSurface, LogPresenter, Node, OfferStatsCard, SearchInput, StyleContext,
    Surface, TextSurface, Toast, ToastPresenter, ToastType,
};

pub use config::{ConfigError, UiConfig};

pub use navigation::{
    NavigationError, NavigationStack, Route, RouteGroup, ScreenOptions, StackEntry, StackShell,
};
