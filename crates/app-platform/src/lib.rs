//! Platform detection for the cask mobile app
//!
//! The rendering target is resolved once per process and read everywhere
//! after that. Styling code takes a [`PlatformKind`] explicitly; this crate
//! only owns the process-wide default.
//!
//! # Example
//!
//! ```rust
//! use app_platform::PlatformKind;
//!
//! let kind: PlatformKind = "android".parse().unwrap();
//! assert!(kind.is_native());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable that overrides platform detection
pub const PLATFORM_ENV_VAR: &str = "APP_PLATFORM";

/// Errors that can occur while resolving the platform
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The platform name is not recognized
    #[error("Unknown platform: {0}")]
    Unknown(String),

    /// The process-wide platform was already resolved
    #[error("Platform already initialized as {0}")]
    AlreadyInitialized(PlatformKind),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Rendering target family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    /// iOS: shadows are drawn from color, offset, opacity and radius
    Ios,
    /// Android: shadows come from a single elevation value
    Android,
    /// Web: shadows are a CSS box-shadow string
    Web,
}

impl PlatformKind {
    /// All platform kinds
    pub const ALL: [PlatformKind; 3] = [
        PlatformKind::Ios,
        PlatformKind::Android,
        PlatformKind::Web,
    ];

    /// Lowercase name of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKind::Ios => "ios",
            PlatformKind::Android => "android",
            PlatformKind::Web => "web",
        }
    }

    /// Whether this is one of the native mobile families
    pub fn is_native(&self) -> bool {
        !matches!(self, PlatformKind::Web)
    }

    /// Platform implied by the compile target
    pub fn from_target() -> Self {
        if cfg!(target_os = "ios") {
            PlatformKind::Ios
        } else if cfg!(target_os = "android") {
            PlatformKind::Android
        } else {
            PlatformKind::Web
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" | "macos" => Ok(PlatformKind::Ios),
            "android" => Ok(PlatformKind::Android),
            "web" | "windows" | "linux" => Ok(PlatformKind::Web),
            _ => Err(PlatformError::Unknown(s.to_string())),
        }
    }
}

static CURRENT: OnceCell<PlatformKind> = OnceCell::new();

/// Detect the platform from the environment override, then the compile target
pub fn detect() -> PlatformKind {
    detect_with_override(std::env::var(PLATFORM_ENV_VAR).ok().as_deref())
}

/// Detect the platform, preferring `override_value` when it parses
pub fn detect_with_override(override_value: Option<&str>) -> PlatformKind {
    match override_value.map(str::parse::<PlatformKind>) {
        Some(Ok(kind)) => kind,
        Some(Err(e)) => {
            tracing::warn!("Ignoring {}: {}", PLATFORM_ENV_VAR, e);
            PlatformKind::from_target()
        }
        None => PlatformKind::from_target(),
    }
}

/// Set the process-wide platform
///
/// Only the first call succeeds; the platform is immutable afterwards.
pub fn init(kind: PlatformKind) -> Result<()> {
    CURRENT
        .set(kind)
        .map_err(|_| PlatformError::AlreadyInitialized(current()))?;
    tracing::info!(platform = %kind, "Platform initialized");
    Ok(())
}

/// The process-wide platform, detected on first use if [`init`] was never called
pub fn current() -> PlatformKind {
    *CURRENT.get_or_init(|| {
        let kind = detect();
        tracing::info!(platform = %kind, "Platform detected");
        kind
    })
}
