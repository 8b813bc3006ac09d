//! End-to-end tests of registry construction and rendering.

use insta::assert_snapshot;
use mdxbind_core::{PropValue, Props};
use mdxbind_registry::{ComponentRegistry, Overrides, build_registry, builtin_element_names};
use once_cell::sync::Lazy;
use std::sync::Arc;

static DEFAULT_REGISTRY: Lazy<ComponentRegistry> =
    Lazy::new(|| build_registry(&Overrides::new()));

#[test]
fn default_registry_binds_every_builtin() {
    for name in builtin_element_names() {
        assert!(DEFAULT_REGISTRY.contains(name), "missing binding: {name}");
    }
    assert_eq!(DEFAULT_REGISTRY.len(), builtin_element_names().len());
}

#[test]
fn image_binding_applies_responsive_default() {
    let props = Props::new().with("src", PropValue::literal("x.png"));
    let html = DEFAULT_REGISTRY.render("img", &props).unwrap();
    assert_snapshot!(
        html,
        @r#"<img class="optimized-image" src="x.png" alt="" style="height: auto" loading="lazy" decoding="async"/>"#
    );
}

#[test]
fn image_binding_merges_caller_style_over_default() {
    let props = Props::new()
        .with("src", PropValue::literal("x.png"))
        .with("style", PropValue::style([("width", "10px")]));
    let html = DEFAULT_REGISTRY.render("img", &props).unwrap();
    // Neither the default height rule nor the caller width rule is dropped.
    assert!(html.contains("height: auto"));
    assert!(html.contains("width: 10px"));
}

#[test]
fn heading_binding_renders_with_fixed_level() {
    let props = Props::new().with("children", PropValue::literal("Install the CLI"));
    let html = DEFAULT_REGISTRY.render("h2", &props).unwrap();
    assert_snapshot!(
        html,
        @r##"<h2 id="install-the-cli">Install the CLI<a class="heading__anchor" href="#install-the-cli" aria-hidden="true">#</a></h2>"##
    );
}

#[test]
fn heading_bindings_share_one_renderer() {
    // Each hL binding must be observably the shared heading renderer
    // invoked with {level: L, ...props}.
    let props = Props::new().with("children", PropValue::literal("Same Text"));
    for level in 1..=6u8 {
        let via_binding = DEFAULT_REGISTRY
            .render(&format!("h{level}"), &props)
            .unwrap();
        let explicit = props.clone().with("level", PropValue::number(i64::from(level)));
        let via_shared = DEFAULT_REGISTRY.render("h1", &explicit).unwrap();
        assert_eq!(via_binding, via_shared, "level {level} diverged");
    }
}

#[test]
fn youtube_embed_binding_renders() {
    let props = Props::new().with("embedId", PropValue::literal("dQw4w9WgXcQ"));
    let html = DEFAULT_REGISTRY.render("YoutubeEmbed", &props).unwrap();
    assert_snapshot!(
        html,
        @r#"<div class="youtube-embed"><iframe src="https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ" title="YouTube video" loading="lazy" allowfullscreen></iframe></div>"#
    );
}

#[test]
fn override_replaces_builtin_and_leaves_rest_untouched() {
    let overrides = Overrides::new().with(
        "img",
        Arc::new(|props: &Props| {
            format!("<custom-img src=\"{}\"/>", props.string("src").unwrap_or(""))
        }),
    );
    let registry = build_registry(&overrides);

    let props = Props::new().with("src", PropValue::literal("x.png"));
    assert_eq!(
        registry.render("img", &props),
        Some("<custom-img src=\"x.png\"/>".to_string())
    );

    // All other keys render identically to the default registry.
    for name in builtin_element_names().iter().filter(|n| **n != "img") {
        assert_eq!(
            registry.render(name, &props),
            DEFAULT_REGISTRY.render(name, &props),
            "binding for {name} changed"
        );
    }
}

#[test]
fn props_deserialize_from_host_json() {
    let json = serde_json::json!({
        "href": { "type": "literal", "value": "https://docs.example.com" },
        "children": { "type": "literal", "value": "Docs" }
    });
    let props: Props = serde_json::from_value(json).unwrap();
    let html = DEFAULT_REGISTRY.render("a", &props).unwrap();
    assert_snapshot!(
        html,
        @r#"<a class="mdx-link" href="https://docs.example.com" target="_blank" rel="noopener noreferrer">Docs</a>"#
    );
}
