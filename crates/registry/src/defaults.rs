//! Default built-in bindings.
//!
//! The built-in set covers the structural markdown elements (`a`,
//! `h1`..`h6`, `img`) and the authoring components content writers may use
//! by name inside MDX documents.

use crate::adapters::{LevelHeading, ResponsiveImage};
use crate::components::{
    Accordion, Block, BlockSwitcher, Callout, Card, CardDetail, CardGraphic, ExternalLinkButton,
    InlineFilter, InternalLinkButton, MdxHeading, MdxLink, MigrationAlert, OptimizedImage,
    YoutubeEmbed,
};
use crate::renderer::RendererRef;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Returns the element names bound by the built-in set.
pub fn builtin_element_names() -> &'static [&'static str] {
    &[
        "a",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "img",
        "Accordion",
        "Block",
        "BlockSwitcher",
        "Callout",
        "Card",
        "CardDetail",
        "CardGraphic",
        "ExternalLinkButton",
        "InlineFilter",
        "InternalLinkButton",
        "MigrationAlert",
        "YoutubeEmbed",
    ]
}

/// Constructs the built-in bindings map.
///
/// The six heading entries share one underlying [`MdxHeading`] instance
/// behind per-level adapters; the `img` entry wraps [`OptimizedImage`] in
/// the responsive-default adapter. Authoring components are bound directly
/// with no wrapping.
pub(crate) fn builtin_bindings() -> BTreeMap<String, RendererRef> {
    let mut entries: BTreeMap<String, RendererRef> = BTreeMap::new();

    entries.insert("a".to_string(), Arc::new(MdxLink));

    let heading: RendererRef = Arc::new(MdxHeading);
    for level in 1..=6u8 {
        entries.insert(
            format!("h{}", level),
            Arc::new(LevelHeading::new(level, Arc::clone(&heading))),
        );
    }

    entries.insert(
        "img".to_string(),
        Arc::new(ResponsiveImage::new(Arc::new(OptimizedImage))),
    );

    entries.insert("Accordion".to_string(), Arc::new(Accordion));
    entries.insert("Block".to_string(), Arc::new(Block));
    entries.insert("BlockSwitcher".to_string(), Arc::new(BlockSwitcher));
    entries.insert("Callout".to_string(), Arc::new(Callout));
    entries.insert("Card".to_string(), Arc::new(Card));
    entries.insert("CardDetail".to_string(), Arc::new(CardDetail));
    entries.insert("CardGraphic".to_string(), Arc::new(CardGraphic));
    entries.insert(
        "ExternalLinkButton".to_string(),
        Arc::new(ExternalLinkButton),
    );
    entries.insert("InlineFilter".to_string(), Arc::new(InlineFilter));
    entries.insert(
        "InternalLinkButton".to_string(),
        Arc::new(InternalLinkButton),
    );
    entries.insert("MigrationAlert".to_string(), Arc::new(MigrationAlert));
    entries.insert("YoutubeEmbed".to_string(), Arc::new(YoutubeEmbed));

    entries
}
