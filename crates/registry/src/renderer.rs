//! The renderer seam.
//!
//! A renderer is an opaque capability: props in, HTML fragment out. The
//! registry stores and forwards renderers by name and never inspects their
//! internals. Child content already rendered by the host pipeline arrives
//! in the conventional `children` prop as a literal HTML fragment.

use mdxbind_core::Props;
use std::sync::Arc;

/// An opaque rendering capability.
pub trait Renderer: Send + Sync {
    /// Renders one element occurrence with the given props.
    fn render(&self, props: &Props) -> String;
}

/// Shared handle to a renderer stored in a registry.
///
/// Registries clone handles, not renderers; several table entries (or
/// several registries) can share one underlying instance.
pub type RendererRef = Arc<dyn Renderer>;

impl<F> Renderer for F
where
    F: Fn(&Props) -> String + Send + Sync,
{
    fn render(&self, props: &Props) -> String {
        self(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdxbind_core::PropValue;

    #[test]
    fn closures_are_renderers() {
        let upper: RendererRef = Arc::new(|props: &Props| {
            props.string("children").unwrap_or("").to_uppercase()
        });
        let props = Props::new().with("children", PropValue::literal("hi"));
        assert_eq!(upper.render(&props), "HI");
    }
}
