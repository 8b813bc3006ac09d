//! Delegation adapters for the structural markdown bindings.
//!
//! Both adapters inject defaults and delegate to a shared inner renderer;
//! caller props are merged on top of the injected defaults, so defaults can
//! be overridden but never silently dropped.

use crate::renderer::{Renderer, RendererRef};
use mdxbind_core::{PropValue, Props};

/// Binds one fixed heading level over a shared heading renderer.
///
/// The six `h1`..`h6` registry entries are six of these wrapping a single
/// shared inner renderer, so a change to the heading renderer changes all
/// six levels uniformly while each binding's level stays fixed.
pub struct LevelHeading {
    level: u8,
    inner: RendererRef,
}

impl LevelHeading {
    /// Creates a heading adapter for the given level (1..=6).
    pub fn new(level: u8, inner: RendererRef) -> Self {
        debug_assert!((1..=6).contains(&level));
        Self { level, inner }
    }

    /// The fixed heading level this adapter injects.
    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Renderer for LevelHeading {
    fn render(&self, props: &Props) -> String {
        let defaults = Props::new().with("level", PropValue::number(i64::from(self.level)));
        self.inner.render(&props.merged_over(&defaults))
    }
}

/// Injects the responsive default `style: {height: auto}` before delegating
/// to the image renderer. Caller style declarations merge on top of the
/// default rather than replacing it.
pub struct ResponsiveImage {
    inner: RendererRef,
}

impl ResponsiveImage {
    /// Wraps the given image renderer.
    pub fn new(inner: RendererRef) -> Self {
        Self { inner }
    }
}

impl Renderer for ResponsiveImage {
    fn render(&self, props: &Props) -> String {
        let defaults = Props::new().with("style", PropValue::style([("height", "auto")]));
        self.inner.render(&props.merged_over(&defaults))
    }
}
