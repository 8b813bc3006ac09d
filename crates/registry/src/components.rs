//! Built-in presentational renderers.
//!
//! Each renderer emits a plain HTML fragment with BEM-style classes so the
//! host site can style the output without shipping component code. Attribute
//! values and visible text are escaped; the `children` prop is an
//! already-rendered fragment and is inserted as-is.

use crate::renderer::Renderer;
use mdxbind_core::{Props, StyleMap};
use std::borrow::Cow;

fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

fn children(props: &Props) -> &str {
    props.string("children").unwrap_or("")
}

/// Serializes a style map as a `style` attribute value, declarations in
/// property-name order.
fn style_attr(declarations: &StyleMap) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Derives an anchor id from rendered heading content.
///
/// Tag content is skipped, ASCII alphanumerics, hyphens, and underscores are
/// kept lowercased, and spaces become hyphens. Falls back to `heading` when
/// nothing usable remains.
fn anchor_id(rendered: &str) -> String {
    let mut id = String::new();
    let mut in_tag = false;
    for ch in rendered.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            ' ' => id.push('-'),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' => {
                id.push(c.to_ascii_lowercase())
            }
            _ => {}
        }
    }
    if id.is_empty() {
        id.push_str("heading");
    }
    id
}

/// Anchor renderer for markdown links.
///
/// Absolute `http(s)` targets open in a new tab with the usual rel
/// hardening; everything else renders as a plain in-site link.
#[derive(Debug, Default)]
pub struct MdxLink;

impl Renderer for MdxLink {
    fn render(&self, props: &Props) -> String {
        let href = props.string("href").unwrap_or("#");
        let external = href.starts_with("http://") || href.starts_with("https://");
        let mut out = format!("<a class=\"mdx-link\" href=\"{}\"", attr(href));
        if external {
            out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
        }
        out.push('>');
        out.push_str(children(props));
        out.push_str("</a>");
        out
    }
}

/// The shared heading renderer behind all six `h1`..`h6` bindings.
///
/// Reads the `level` prop (clamped to 1..=6, defaulting to 1) and renders
/// the heading with a stable id and a trailing anchor link. The id comes
/// from the `id` prop when supplied, otherwise it is derived from the
/// visible heading text.
#[derive(Debug, Default)]
pub struct MdxHeading;

impl Renderer for MdxHeading {
    fn render(&self, props: &Props) -> String {
        let level = props.number("level").unwrap_or(1).clamp(1, 6);
        let body = children(props);
        let id = match props.string("id") {
            Some(id) => id.to_string(),
            None => anchor_id(body),
        };
        format!(
            "<h{level} id=\"{id}\">{body}<a class=\"heading__anchor\" href=\"#{id}\" aria-hidden=\"true\">#</a></h{level}>",
            level = level,
            id = attr(&id),
            body = body,
        )
    }
}

/// Stand-in for the external image-optimization renderer.
///
/// Emits an `<img>` with lazy loading and async decoding; the `style` prop,
/// when present, is serialized declaration-by-declaration in property order.
#[derive(Debug, Default)]
pub struct OptimizedImage;

impl Renderer for OptimizedImage {
    fn render(&self, props: &Props) -> String {
        let src = props.string("src").unwrap_or("");
        let alt = props.string("alt").unwrap_or("");
        let mut out = format!(
            "<img class=\"optimized-image\" src=\"{}\" alt=\"{}\"",
            attr(src),
            attr(alt)
        );
        if let Some(width) = props.number("width") {
            out.push_str(&format!(" width=\"{}\"", width));
        }
        if let Some(height) = props.number("height") {
            out.push_str(&format!(" height=\"{}\"", height));
        }
        if let Some(style) = props.style_of("style") {
            out.push_str(&format!(" style=\"{}\"", attr(&style_attr(style))));
        }
        out.push_str(" loading=\"lazy\" decoding=\"async\"/>");
        out
    }
}

/// Collapsible disclosure block with a summary line.
#[derive(Debug, Default)]
pub struct Accordion;

impl Renderer for Accordion {
    fn render(&self, props: &Props) -> String {
        let title = props.string("title").unwrap_or("Details");
        format!(
            "<details class=\"accordion\"><summary class=\"accordion__summary\">{}</summary><div class=\"accordion__body\">{}</div></details>",
            text(title),
            children(props),
        )
    }
}

/// One selectable block inside a [`BlockSwitcher`].
#[derive(Debug, Default)]
pub struct Block;

impl Renderer for Block {
    fn render(&self, props: &Props) -> String {
        let mut out = String::from("<div class=\"block\"");
        if let Some(name) = props.string("name") {
            out.push_str(&format!(" data-name=\"{}\"", attr(name)));
        }
        out.push('>');
        out.push_str(children(props));
        out.push_str("</div>");
        out
    }
}

/// Container that lets the reader switch between sibling blocks.
#[derive(Debug, Default)]
pub struct BlockSwitcher;

impl Renderer for BlockSwitcher {
    fn render(&self, props: &Props) -> String {
        format!(
            "<div class=\"block-switcher\">{}</div>",
            children(props)
        )
    }
}

/// Highlighted aside; the `type` prop selects the variant (`info` default).
#[derive(Debug, Default)]
pub struct Callout;

impl Renderer for Callout {
    fn render(&self, props: &Props) -> String {
        let kind = props.string("type").unwrap_or("info");
        format!(
            "<aside class=\"callout callout--{}\">{}</aside>",
            attr(kind),
            children(props),
        )
    }
}

/// Content card; with an `href` prop the whole card becomes a link.
#[derive(Debug, Default)]
pub struct Card;

impl Renderer for Card {
    fn render(&self, props: &Props) -> String {
        match props.string("href") {
            Some(href) => format!(
                "<a class=\"card\" href=\"{}\">{}</a>",
                attr(href),
                children(props)
            ),
            None => format!("<div class=\"card\">{}</div>", children(props)),
        }
    }
}

/// Body region of a [`Card`].
#[derive(Debug, Default)]
pub struct CardDetail;

impl Renderer for CardDetail {
    fn render(&self, props: &Props) -> String {
        format!("<div class=\"card__detail\">{}</div>", children(props))
    }
}

/// Illustration region of a [`Card`].
#[derive(Debug, Default)]
pub struct CardGraphic;

impl Renderer for CardGraphic {
    fn render(&self, props: &Props) -> String {
        let src = props.string("src").unwrap_or("");
        let alt = props.string("alt").unwrap_or("");
        format!(
            "<div class=\"card__graphic\"><img src=\"{}\" alt=\"{}\"/></div>",
            attr(src),
            attr(alt),
        )
    }
}

/// Button-styled link to an external destination.
#[derive(Debug, Default)]
pub struct ExternalLinkButton;

impl Renderer for ExternalLinkButton {
    fn render(&self, props: &Props) -> String {
        let href = props.string("href").unwrap_or("#");
        format!(
            "<a class=\"link-button link-button--external\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            attr(href),
            children(props),
        )
    }
}

/// Wraps content that only applies to some of the site's filter contexts;
/// the comma-separated `filters` prop is carried through for the host's
/// client-side filtering.
#[derive(Debug, Default)]
pub struct InlineFilter;

impl Renderer for InlineFilter {
    fn render(&self, props: &Props) -> String {
        let mut out = String::from("<div class=\"inline-filter\"");
        if let Some(filters) = props.string("filters") {
            out.push_str(&format!(" data-filters=\"{}\"", attr(filters)));
        }
        out.push('>');
        out.push_str(children(props));
        out.push_str("</div>");
        out
    }
}

/// Button-styled link to another page on the site.
#[derive(Debug, Default)]
pub struct InternalLinkButton;

impl Renderer for InternalLinkButton {
    fn render(&self, props: &Props) -> String {
        let href = props.string("href").unwrap_or("#");
        format!(
            "<a class=\"link-button link-button--internal\" href=\"{}\">{}</a>",
            attr(href),
            children(props),
        )
    }
}

/// Banner pointing readers of superseded pages at the current docs.
#[derive(Debug, Default)]
pub struct MigrationAlert;

impl Renderer for MigrationAlert {
    fn render(&self, props: &Props) -> String {
        let mut out = format!(
            "<aside class=\"migration-alert\"><p class=\"migration-alert__body\">{}</p>",
            children(props)
        );
        if let Some(url) = props.string("url") {
            out.push_str(&format!(
                "<a class=\"migration-alert__link\" href=\"{}\">View the current version</a>",
                attr(url)
            ));
        }
        out.push_str("</aside>");
        out
    }
}

/// Privacy-friendly YouTube iframe wrapper keyed by the `embedId` prop.
#[derive(Debug, Default)]
pub struct YoutubeEmbed;

impl Renderer for YoutubeEmbed {
    fn render(&self, props: &Props) -> String {
        let embed_id = props.string("embedId").unwrap_or("");
        let title = props.string("title").unwrap_or("YouTube video");
        format!(
            "<div class=\"youtube-embed\"><iframe src=\"https://www.youtube-nocookie.com/embed/{}\" title=\"{}\" loading=\"lazy\" allowfullscreen></iframe></div>",
            attr(embed_id),
            attr(title),
        )
    }
}
