//! Card elevation
//!
//! One abstract [`ShadowLevel`] is translated into whatever each platform
//! draws shadows with: iOS takes color, offset, opacity and radius, Android
//! takes a single elevation, and the web takes a `box-shadow` string. All
//! three encodings come from the same table and grow with the level.

use app_platform::PlatformKind;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Shadow color used on every platform
pub const SHADOW_COLOR: &str = "#000";

// =============================================================================
// Shadow Level
// =============================================================================

/// Requested elevation, from flat to most raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    /// Flat
    None,
    /// Small
    Sm,
    /// Standard card elevation
    #[default]
    Default,
    /// Medium
    Md,
    /// Large
    Lg,
}

impl ShadowLevel {
    /// All levels in increasing order
    pub const ALL: [ShadowLevel; 5] = [
        ShadowLevel::None,
        ShadowLevel::Sm,
        ShadowLevel::Default,
        ShadowLevel::Md,
        ShadowLevel::Lg,
    ];

    /// Parse a level name; unknown names fall back to [`ShadowLevel::Default`]
    pub fn parse(name: &str) -> Self {
        match name {
            "none" => ShadowLevel::None,
            "sm" => ShadowLevel::Sm,
            "default" => ShadowLevel::Default,
            "md" => ShadowLevel::Md,
            "lg" => ShadowLevel::Lg,
            other => {
                tracing::warn!(level = other, "Unknown shadow level, using default");
                ShadowLevel::Default
            }
        }
    }

    /// Level name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadowLevel::None => "none",
            ShadowLevel::Sm => "sm",
            ShadowLevel::Default => "default",
            ShadowLevel::Md => "md",
            ShadowLevel::Lg => "lg",
        }
    }

    /// Geometry for this level
    pub fn geometry(&self) -> ShadowGeometry {
        match self {
            ShadowLevel::None => ShadowGeometry::new(0.0, 0.0, 0.0, 0),
            ShadowLevel::Sm => ShadowGeometry::new(1.0, 0.05, 2.0, 1),
            ShadowLevel::Default => ShadowGeometry::new(2.0, 0.08, 4.0, 3),
            ShadowLevel::Md => ShadowGeometry::new(4.0, 0.10, 8.0, 6),
            ShadowLevel::Lg => ShadowGeometry::new(8.0, 0.15, 16.0, 12),
        }
    }
}

impl From<String> for ShadowLevel {
    fn from(name: String) -> Self {
        ShadowLevel::parse(&name)
    }
}

impl From<&str> for ShadowLevel {
    fn from(name: &str) -> Self {
        ShadowLevel::parse(name)
    }
}

// Any JSON value is accepted; anything that is not a known level name
// resolves to the default level.
impl<'de> Deserialize<'de> for ShadowLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ShadowLevelVisitor)
    }
}

struct ShadowLevelVisitor;

impl ShadowLevelVisitor {
    fn fallback(kind: &str) -> ShadowLevel {
        tracing::warn!(kind, "Non-string shadow level, using default");
        ShadowLevel::Default
    }
}

impl<'de> Visitor<'de> for ShadowLevelVisitor {
    type Value = ShadowLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a shadow level")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadowLevel, E> {
        Ok(ShadowLevel::parse(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<ShadowLevel, E> {
        Ok(Self::fallback("bool"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<ShadowLevel, E> {
        Ok(Self::fallback("number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<ShadowLevel, E> {
        Ok(Self::fallback("number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<ShadowLevel, E> {
        Ok(Self::fallback("number"))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ShadowLevel, E> {
        Ok(Self::fallback("null"))
    }

    fn visit_none<E: de::Error>(self) -> Result<ShadowLevel, E> {
        Ok(Self::fallback("null"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ShadowLevel, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Self::fallback("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ShadowLevel, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Self::fallback("object"))
    }
}

impl fmt::Display for ShadowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform-neutral shadow geometry for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowGeometry {
    /// Vertical offset in points
    pub offset_y: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Blur radius in points
    pub radius: f32,
    /// Android elevation
    pub elevation: u32,
}

impl ShadowGeometry {
    const fn new(offset_y: f32, opacity: f32, radius: f32, elevation: u32) -> Self {
        Self {
            offset_y,
            opacity,
            radius,
            elevation,
        }
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        if self.opacity == 0.0 {
            return "none".to_string();
        }
        format!(
            "0 {}px {}px rgba(0, 0, 0, {})",
            self.offset_y, self.radius, self.opacity
        )
    }
}

// =============================================================================
// Shadow Descriptor
// =============================================================================

/// Shadow offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowOffset {
    /// Horizontal offset
    pub width: f32,
    /// Vertical offset
    pub height: f32,
}

/// Platform-specific shadow style
///
/// Serializes to the style props the platform understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShadowDescriptor {
    /// iOS shadow geometry
    #[serde(rename_all = "camelCase")]
    Geometry {
        /// Shadow color
        shadow_color: String,
        /// Shadow offset
        shadow_offset: ShadowOffset,
        /// Shadow opacity
        shadow_opacity: f32,
        /// Blur radius
        shadow_radius: f32,
    },
    /// Android elevation
    Elevation {
        /// Elevation value
        elevation: u32,
    },
    /// Web box shadow
    #[serde(rename_all = "camelCase")]
    BoxShadow {
        /// CSS box-shadow value
        box_shadow: String,
    },
}

impl ShadowDescriptor {
    /// Platform family this descriptor belongs to
    pub fn platform(&self) -> PlatformKind {
        match self {
            ShadowDescriptor::Geometry { .. } => PlatformKind::Ios,
            ShadowDescriptor::Elevation { .. } => PlatformKind::Android,
            ShadowDescriptor::BoxShadow { .. } => PlatformKind::Web,
        }
    }

    /// Android elevation, if this is an elevation descriptor
    pub fn elevation(&self) -> Option<u32> {
        match self {
            ShadowDescriptor::Elevation { elevation } => Some(*elevation),
            _ => None,
        }
    }

    /// Web box-shadow value, if this is a web descriptor
    pub fn box_shadow(&self) -> Option<&str> {
        match self {
            ShadowDescriptor::BoxShadow { box_shadow } => Some(box_shadow),
            _ => None,
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves shadow levels for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevationResolver {
    platform: PlatformKind,
}

impl ElevationResolver {
    /// Create a resolver for a platform
    pub fn new(platform: PlatformKind) -> Self {
        Self { platform }
    }

    /// Resolver for the process-wide platform
    pub fn current() -> Self {
        Self::new(app_platform::current())
    }

    /// Target platform
    pub fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// Shadow style for a level
    pub fn resolve(&self, level: ShadowLevel) -> ShadowDescriptor {
        let geometry = level.geometry();
        match self.platform {
            PlatformKind::Ios => ShadowDescriptor::Geometry {
                shadow_color: SHADOW_COLOR.to_string(),
                shadow_offset: ShadowOffset {
                    width: 0.0,
                    height: geometry.offset_y,
                },
                shadow_opacity: geometry.opacity,
                shadow_radius: geometry.radius,
            },
            PlatformKind::Android => ShadowDescriptor::Elevation {
                elevation: geometry.elevation,
            },
            PlatformKind::Web => ShadowDescriptor::BoxShadow {
                box_shadow: geometry.to_css(),
            },
        }
    }
}

/// Card shadow for the process-wide platform
pub fn get_card_shadow(level: ShadowLevel) -> ShadowDescriptor {
    ElevationResolver::current().resolve(level)
}
