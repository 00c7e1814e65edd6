//! Presentation Integration Tests
//!
//! End-to-end checks of class merging and elevation as the components
//! consume them, across every platform.

use cask_mobile::cn;
use cask_mobile::platform::PlatformKind;
use cask_mobile::ui::{
    get_card_shadow, Card, ElevationResolver, Node, OfferStatsCard, SearchInput,
    ShadowDescriptor, ShadowLevel, StyleContext, UiConfig,
};
use std::io::Write;
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Rough visual weight of a shadow, comparable within one platform
fn intensity(shadow: &ShadowDescriptor) -> f32 {
    match shadow {
        ShadowDescriptor::Geometry {
            shadow_offset,
            shadow_opacity,
            shadow_radius,
            ..
        } => shadow_offset.height + shadow_opacity * 100.0 + shadow_radius,
        ShadowDescriptor::Elevation { elevation } => *elevation as f32,
        ShadowDescriptor::BoxShadow { box_shadow } => box_shadow
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .filter_map(|n| n.parse::<f32>().ok())
            .sum(),
    }
}

#[test]
fn test_merge_properties() {
    init_tracing();

    let x = "bg-white rounded-2xl p-4 border border-gray-100";
    assert_eq!(cn!(x, x), cn!(x));
    assert_eq!(cn!("bg-red", "bg-blue"), "bg-blue");
    assert_eq!(cn!("bg-red", "text-black"), "bg-red text-black");
    assert_eq!(cn!(false, "", None::<&str>, "bg-red"), cn!("bg-red"));
    assert_eq!(
        cn!("bg-white", "border-gray-200", "bg-white"),
        "bg-white border-gray-200"
    );
}

#[test]
fn test_elevation_is_monotonic_on_every_platform() {
    init_tracing();

    for platform in PlatformKind::ALL {
        let resolver = ElevationResolver::new(platform);
        let weights: Vec<f32> = ShadowLevel::ALL
            .iter()
            .map(|&level| intensity(&resolver.resolve(level)))
            .collect();
        assert!(
            weights.windows(2).all(|w| w[0] <= w[1]),
            "{} not monotonic: {:?}",
            platform,
            weights
        );
    }
}

#[test]
fn test_android_sm_example() {
    let shadow = ElevationResolver::new(PlatformKind::Android).resolve(ShadowLevel::Sm);
    assert_eq!(
        serde_json::to_value(&shadow).unwrap(),
        serde_json::json!({ "elevation": 1 })
    );
}

#[test]
fn test_process_platform_shadow() {
    let shadow = get_card_shadow(ShadowLevel::Md);
    assert_eq!(shadow.platform(), cask_mobile::platform::current());
}

#[test]
fn test_dashboard_renders_on_each_platform() {
    init_tracing();

    for platform in PlatformKind::ALL {
        let ctx = StyleContext::for_platform(platform);

        let stats = OfferStatsCard::new(3, "Pending")
            .with_value_color("text-amber-600")
            .render(&ctx);
        let card = Card::default()
            .with_class_name("p-6")
            .with_shadow_level(ShadowLevel::Md)
            .with_child(stats)
            .render(&ctx);

        assert_eq!(
            card.class_name,
            "bg-white rounded-2xl p-6 border border-gray-100"
        );
        assert_eq!(card.style.as_ref().map(|s| s.platform()), Some(platform));

        let Node::View(inner) = &card.children[0] else {
            panic!("expected stats surface");
        };
        assert_eq!(inner.style.as_ref().map(|s| s.platform()), Some(platform));
    }
}

#[test]
fn test_search_input_end_to_end() {
    let typed = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&typed);
    let input = SearchInput::new()
        .with_placeholder("Search casks")
        .on_change_text(move |text| *sink.lock().unwrap() = text.to_string());

    for text in ["g", "gl", "gle"] {
        input.change_text(text);
    }
    assert_eq!(*typed.lock().unwrap(), "gle");

    let surface = input
        .with_value("gle")
        .render(&StyleContext::for_platform(PlatformKind::Web));
    let json = serde_json::to_value(&surface).unwrap();
    assert_eq!(json["style"]["boxShadow"], "0 1px 2px rgba(0, 0, 0, 0.05)");
    assert_eq!(json["children"][0]["kind"], "input");
    assert_eq!(json["children"][0]["value"], "gle");
}

#[test]
fn test_config_file_drives_context() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"platform": "ios"}}"#).unwrap();

    let ctx = UiConfig::load(file.path()).unwrap().into_context().unwrap();
    let card = Card::default().render(&ctx);
    assert!(matches!(
        card.style,
        Some(ShadowDescriptor::Geometry { shadow_radius, .. }) if shadow_radius == 4.0
    ));
}
