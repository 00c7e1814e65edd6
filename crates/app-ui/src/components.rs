//! UI component library
//!
//! Components are plain Rust structs with builder-style props. Rendering a
//! component produces a serializable surface tree (merged class string plus
//! platform shadow style) that the native or web frontend draws.
//!
//! Every `render` takes a [`StyleContext`], which carries the class merger
//! and the elevation resolver for the target platform, so components never
//! look the platform up themselves.
//!
//! # Available Components
//!
//! - [`Card`] - Elevated container
//! - [`SearchInput`] - Search field with a change callback
//! - [`OfferStatsCard`] - Single statistic tile
//! - [`Toast`] - Transient notification, shown through a [`ToastPresenter`]

use crate::elevation::{ElevationResolver, ShadowDescriptor, ShadowLevel};
use crate::style::{ClassMerger, ClassValue};
use app_platform::PlatformKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Style Context
// =============================================================================

/// Styling configuration threaded through every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleContext {
    merger: ClassMerger,
    resolver: ElevationResolver,
}

impl StyleContext {
    /// Create a context from its parts
    pub fn new(merger: ClassMerger, resolver: ElevationResolver) -> Self {
        Self { merger, resolver }
    }

    /// Default taxonomy, given platform
    pub fn for_platform(platform: PlatformKind) -> Self {
        Self::new(ClassMerger::global().clone(), ElevationResolver::new(platform))
    }

    /// Default taxonomy, process-wide platform
    pub fn current() -> Self {
        Self::for_platform(app_platform::current())
    }

    /// Target platform
    pub fn platform(&self) -> PlatformKind {
        self.resolver.platform()
    }

    /// Class merger
    pub fn merger(&self) -> &ClassMerger {
        &self.merger
    }

    /// Merge class arguments
    pub fn cn(&self, args: &[ClassValue]) -> String {
        self.merger.merge(args)
    }

    /// Resolve a shadow level
    pub fn shadow(&self, level: ShadowLevel) -> ShadowDescriptor {
        self.resolver.resolve(level)
    }
}

// =============================================================================
// Rendered Surfaces
// =============================================================================

/// A node in a rendered tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// Container view
    View(Surface),
    /// Text run
    Text(TextSurface),
    /// Text input
    Input(InputSurface),
}

impl Node {
    /// Plain text node with no classes
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextSurface {
            class_name: String::new(),
            content: content.into(),
        })
    }
}

impl From<Surface> for Node {
    fn from(surface: Surface) -> Self {
        Node::View(surface)
    }
}

/// Rendered container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    /// Merged class string
    pub class_name: String,
    /// Inline shadow style
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ShadowDescriptor>,
    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Rendered text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSurface {
    /// Merged class string
    pub class_name: String,
    /// Text content
    pub content: String,
}

/// Rendered text input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSurface {
    /// Merged class string
    pub class_name: String,
    /// Placeholder text
    pub placeholder: String,
    /// Current value
    pub value: String,
    /// Placeholder color
    pub placeholder_text_color: String,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leading_icon: Option<String>,
}

// =============================================================================
// Card Component
// =============================================================================

/// Base classes for [`Card`]
pub const CARD_BASE_CLASSES: &str = "bg-white rounded-2xl p-4 border border-gray-100";

/// Elevated container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Content
    #[serde(default)]
    pub children: Vec<Node>,
    /// Class overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Elevation (defaults to [`ShadowLevel::Default`])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_level: Option<ShadowLevel>,
}

impl Card {
    /// Create a card around some content
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            class_name: None,
            shadow_level: None,
        }
    }

    /// Append a child
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set class overrides
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set elevation
    pub fn with_shadow_level(mut self, level: ShadowLevel) -> Self {
        self.shadow_level = Some(level);
        self
    }

    /// Render to a surface
    pub fn render(&self, ctx: &StyleContext) -> Surface {
        Surface {
            class_name: ctx.cn(&[CARD_BASE_CLASSES.into(), self.class_name.as_ref().into()]),
            style: Some(ctx.shadow(self.shadow_level.unwrap_or_default())),
            children: self.children.clone(),
        }
    }
}

// =============================================================================
// Search Input Component
// =============================================================================

/// Base classes for the [`SearchInput`] container
pub const SEARCH_INPUT_BASE_CLASSES: &str =
    "flex-row items-center bg-white rounded-xl px-4 py-3 border border-gray-200";

/// Classes for the text field inside [`SearchInput`]
pub const SEARCH_FIELD_CLASSES: &str = "flex-1 ml-2 text-base text-gray-900";

/// Default [`SearchInput`] placeholder
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// Placeholder and icon color for [`SearchInput`]
pub const SEARCH_MUTED_COLOR: &str = "#9CA3AF";

/// Text change callback
pub type ChangeTextHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Search field
#[derive(Clone, Default)]
pub struct SearchInput {
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Current value (controlled by the caller)
    pub value: Option<String>,
    /// Called on every text change
    pub on_change_text: Option<ChangeTextHandler>,
    /// Class overrides for the container
    pub class_name: Option<String>,
}

impl fmt::Debug for SearchInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchInput")
            .field("placeholder", &self.placeholder)
            .field("value", &self.value)
            .field("on_change_text", &self.on_change_text.as_ref().map(|_| "<fn>"))
            .field("class_name", &self.class_name)
            .finish()
    }
}

impl SearchInput {
    /// Create an empty search input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set class overrides
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the change callback
    pub fn on_change_text<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change_text = Some(Arc::new(handler));
        self
    }

    /// Forward a keystroke's new text to the caller
    pub fn change_text(&self, text: &str) {
        if let Some(handler) = &self.on_change_text {
            handler(text);
        }
    }

    /// Render to a surface
    pub fn render(&self, ctx: &StyleContext) -> Surface {
        let field = InputSurface {
            class_name: ctx.cn(&[SEARCH_FIELD_CLASSES.into()]),
            placeholder: self
                .placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_string()),
            value: self.value.clone().unwrap_or_default(),
            placeholder_text_color: SEARCH_MUTED_COLOR.to_string(),
            leading_icon: Some("search".to_string()),
        };

        Surface {
            class_name: ctx.cn(&[
                SEARCH_INPUT_BASE_CLASSES.into(),
                self.class_name.as_ref().into(),
            ]),
            style: Some(ctx.shadow(ShadowLevel::Sm)),
            children: vec![Node::Input(field)],
        }
    }
}

// =============================================================================
// Offer Stats Card Component
// =============================================================================

/// Base classes for [`OfferStatsCard`]
pub const OFFER_STATS_BASE_CLASSES: &str = "flex-1 items-center rounded-xl p-4 border";

/// Default value color
pub const DEFAULT_VALUE_COLOR: &str = "text-gray-900";

/// Default background
pub const DEFAULT_STATS_BACKGROUND: &str = "bg-white";

/// Default border color
pub const DEFAULT_STATS_BORDER: &str = "border-gray-200";

/// Single statistic tile, e.g. "12 / Active offers"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferStatsCard {
    /// Displayed value
    pub value: String,
    /// Caption under the value
    pub label: String,
    /// Text color class for the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_color: Option<String>,
    /// Background class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Border color class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl OfferStatsCard {
    /// Create a tile
    pub fn new(value: impl fmt::Display, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
            value_color: None,
            background_color: None,
            border_color: None,
        }
    }

    /// Set value color class
    pub fn with_value_color(mut self, class: impl Into<String>) -> Self {
        self.value_color = Some(class.into());
        self
    }

    /// Set background class
    pub fn with_background_color(mut self, class: impl Into<String>) -> Self {
        self.background_color = Some(class.into());
        self
    }

    /// Set border color class
    pub fn with_border_color(mut self, class: impl Into<String>) -> Self {
        self.border_color = Some(class.into());
        self
    }

    /// Render to a surface
    pub fn render(&self, ctx: &StyleContext) -> Surface {
        let value = TextSurface {
            class_name: ctx.cn(&[
                "text-2xl font-bold".into(),
                self.value_color.as_deref().unwrap_or(DEFAULT_VALUE_COLOR).into(),
            ]),
            content: self.value.clone(),
        };
        let label = TextSurface {
            class_name: ctx.cn(&["text-sm text-gray-500 mt-1".into()]),
            content: self.label.clone(),
        };

        Surface {
            class_name: ctx.cn(&[
                OFFER_STATS_BASE_CLASSES.into(),
                self.background_color
                    .as_deref()
                    .unwrap_or(DEFAULT_STATS_BACKGROUND)
                    .into(),
                self.border_color.as_deref().unwrap_or(DEFAULT_STATS_BORDER).into(),
            ]),
            style: Some(ctx.shadow(ShadowLevel::Sm)),
            children: vec![Node::Text(value), Node::Text(label)],
        }
    }
}

// =============================================================================
// Toast Component
// =============================================================================

/// Toast display duration in milliseconds
pub const TOAST_DURATION_MS: u32 = 3000;

/// Distance from the top of the screen
pub const TOAST_TOP_OFFSET: f32 = 60.0;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    /// Success notification
    Success,
    /// Error notification
    Error,
    /// Informational notification
    Info,
}

impl ToastType {
    /// Get icon name for this toast type
    pub fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "circle-check",
            ToastType::Error => "circle-alert",
            ToastType::Info => "circle-info",
        }
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Unique identifier
    pub id: String,
    /// Severity
    #[serde(rename = "type")]
    pub toast_type: ToastType,
    /// First line
    pub title: String,
    /// Second line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Leading icon name
    pub icon: String,
    /// Display time in milliseconds
    pub visibility_time: u32,
    /// Whether the toast hides itself
    pub auto_hide: bool,
    /// Distance from the top of the screen
    pub top_offset: f32,
    /// Timestamp when created
    pub created_at: u64,
}

impl Toast {
    /// Create a toast
    pub fn new(toast_type: ToastType, title: impl Into<String>, body: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            toast_type,
            title: title.into(),
            body,
            icon: toast_type.icon().to_string(),
            visibility_time: TOAST_DURATION_MS,
            auto_hide: true,
            top_offset: TOAST_TOP_OFFSET,
            created_at: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64,
        }
    }
}

/// Something that can put a toast on screen
pub trait ToastPresenter {
    /// Display the toast
    fn present(&self, toast: Toast);
}

/// Presenter that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPresenter;

impl ToastPresenter for LogPresenter {
    fn present(&self, toast: Toast) {
        tracing::info!(
            id = %toast.id,
            kind = ?toast.toast_type,
            title = %toast.title,
            body = toast.body.as_deref().unwrap_or(""),
            icon = %toast.icon,
            "Toast"
        );
    }
}

/// Show a toast with the fixed duration and offset
pub fn show_toast(
    presenter: &dyn ToastPresenter,
    toast_type: ToastType,
    title: &str,
    body: Option<&str>,
) {
    presenter.present(Toast::new(toast_type, title, body.map(str::to_string)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn ios() -> StyleContext {
        StyleContext::for_platform(PlatformKind::Ios)
    }

    fn android() -> StyleContext {
        StyleContext::for_platform(PlatformKind::Android)
    }

    // ==========================================================================
    // Card Tests
    // ==========================================================================

    #[test]
    fn test_card_defaults() {
        let surface = Card::new(vec![Node::text("Hello")]).render(&android());
        assert_eq!(surface.class_name, CARD_BASE_CLASSES);
        assert_eq!(surface.style, Some(ShadowDescriptor::Elevation { elevation: 3 }));
        assert_eq!(surface.children, vec![Node::text("Hello")]);
    }

    #[test]
    fn test_card_overrides() {
        let surface = Card::default()
            .with_class_name("bg-gray-50 mb-4")
            .with_shadow_level(ShadowLevel::Lg)
            .render(&android());

        assert_eq!(surface.class_name, "bg-gray-50 rounded-2xl p-4 border border-gray-100 mb-4");
        assert_eq!(surface.style.and_then(|s| s.elevation()), Some(12));
    }

    #[test]
    fn test_card_side_border_keeps_color() {
        let surface = Card::default().with_class_name("border-b").render(&android());
        assert_eq!(surface.class_name, "bg-white rounded-2xl p-4 border border-gray-100 border-b");
    }

    #[test]
    fn test_card_nesting() {
        let ctx = ios();
        let inner = Card::default().with_shadow_level(ShadowLevel::None).render(&ctx);
        let outer = Card::default().with_child(inner.clone()).render(&ctx);
        assert_eq!(outer.children, vec![Node::View(inner)]);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(vec![Node::text("x")]).with_shadow_level(ShadowLevel::Md);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"shadowLevel\":\"md\""));
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, card);
    }

    #[test]
    fn test_card_non_string_shadow_level() {
        let card: Card = serde_json::from_str(r#"{"shadowLevel":true}"#).unwrap();
        assert_eq!(card.shadow_level, Some(ShadowLevel::Default));

        let card: Card = serde_json::from_str(r#"{"shadowLevel":2}"#).unwrap();
        assert_eq!(card.shadow_level, Some(ShadowLevel::Default));
        let surface = card.render(&android());
        assert_eq!(surface.style.and_then(|s| s.elevation()), Some(3));
    }

    // ==========================================================================
    // SearchInput Tests
    // ==========================================================================

    #[test]
    fn test_search_input_defaults() {
        let surface = SearchInput::new().render(&ios());
        assert_eq!(surface.class_name, SEARCH_INPUT_BASE_CLASSES);

        let Node::Input(field) = &surface.children[0] else {
            panic!("expected input node");
        };
        assert_eq!(field.placeholder, DEFAULT_SEARCH_PLACEHOLDER);
        assert_eq!(field.value, "");
        assert_eq!(field.leading_icon.as_deref(), Some("search"));
    }

    #[test]
    fn test_search_input_props() {
        let surface = SearchInput::new()
            .with_placeholder("Search casks")
            .with_value("islay")
            .with_class_name("mx-4 bg-gray-100")
            .render(&android());

        assert!(surface.class_name.contains("bg-gray-100"));
        assert!(!surface.class_name.contains("bg-white"));
        assert!(surface.class_name.ends_with("mx-4"));

        let Node::Input(field) = &surface.children[0] else {
            panic!("expected input node");
        };
        assert_eq!(field.placeholder, "Search casks");
        assert_eq!(field.value, "islay");
    }

    #[test]
    fn test_search_input_forwards_every_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let input = SearchInput::new().on_change_text(move |text| {
            sink.lock().unwrap().push(text.to_string());
        });

        input.change_text("i");
        input.change_text("is");
        input.change_text("isl");

        assert_eq!(*seen.lock().unwrap(), vec!["i", "is", "isl"]);
    }

    #[test]
    fn test_search_input_without_handler() {
        SearchInput::new().change_text("ignored");
    }

    #[test]
    fn test_search_input_debug_hides_handler() {
        let input = SearchInput::new().on_change_text(|_| {});
        let debug = format!("{:?}", input);
        assert!(debug.contains("<fn>"));
    }

    // ==========================================================================
    // OfferStatsCard Tests
    // ==========================================================================

    #[test]
    fn test_offer_stats_defaults() {
        let surface = OfferStatsCard::new(12, "Active offers").render(&android());
        assert_eq!(
            surface.class_name,
            "flex-1 items-center rounded-xl p-4 border bg-white border-gray-200"
        );
        assert_eq!(surface.style, Some(ShadowDescriptor::Elevation { elevation: 1 }));

        match &surface.children[..] {
            [Node::Text(value), Node::Text(label)] => {
                assert_eq!(value.content, "12");
                assert_eq!(value.class_name, "text-2xl font-bold text-gray-900");
                assert_eq!(label.content, "Active offers");
                assert_eq!(label.class_name, "text-sm text-gray-500 mt-1");
            }
            other => panic!("unexpected children: {:?}", other),
        }
    }

    #[test]
    fn test_offer_stats_colors() {
        let surface = OfferStatsCard::new("£4,200", "Highest bid")
            .with_value_color("text-green-600")
            .with_background_color("bg-green-50")
            .with_border_color("border-green-200")
            .render(&ios());

        assert_eq!(
            surface.class_name,
            "flex-1 items-center rounded-xl p-4 border bg-green-50 border-green-200"
        );
        let Node::Text(value) = &surface.children[0] else {
            panic!("expected text node");
        };
        assert_eq!(value.class_name, "text-2xl font-bold text-green-600");
    }

    // ==========================================================================
    // Toast Tests
    // ==========================================================================

    #[derive(Default)]
    struct RecordingPresenter {
        shown: Mutex<Vec<Toast>>,
    }

    impl ToastPresenter for RecordingPresenter {
        fn present(&self, toast: Toast) {
            self.shown.lock().unwrap().push(toast);
        }
    }

    #[test]
    fn test_show_toast_fixed_settings() {
        let presenter = RecordingPresenter::default();
        show_toast(&presenter, ToastType::Success, "Offer sent", Some("We'll notify you"));
        show_toast(&presenter, ToastType::Error, "Failed", None);

        let shown = presenter.shown.lock().unwrap();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].toast_type, ToastType::Success);
        assert_eq!(shown[0].body.as_deref(), Some("We'll notify you"));
        assert_eq!(shown[1].body, None);
        for toast in shown.iter() {
            assert_eq!(toast.visibility_time, 3000);
            assert!(toast.auto_hide);
            assert_eq!(toast.top_offset, TOAST_TOP_OFFSET);
        }
        assert_ne!(shown[0].id, shown[1].id);
    }

    #[test]
    fn test_log_presenter() {
        show_toast(&LogPresenter, ToastType::Info, "Heads up", None);
    }

    #[test]
    fn test_toast_serialization() {
        let toast = Toast::new(ToastType::Error, "Oops", None);
        let json = serde_json::to_value(&toast).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["visibilityTime"], 3000);
        assert_eq!(json["icon"], "circle-alert");
        assert!(json.get("body").is_none());
    }

    #[test]
    fn test_toast_carries_icon() {
        assert_eq!(Toast::new(ToastType::Success, "Saved", None).icon, "circle-check");
        assert_eq!(Toast::new(ToastType::Info, "Note", None).icon, "circle-info");
    }
}
