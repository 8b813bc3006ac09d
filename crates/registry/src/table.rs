//! Registry table and override set types.

use crate::renderer::RendererRef;
use mdxbind_core::Props;
use std::collections::BTreeMap;

/// The complete element-to-renderer mapping for one render pass.
///
/// Immutable once constructed; hosts that want different bindings build a
/// fresh registry. Lookups are by exact element name.
pub struct ComponentRegistry {
    entries: BTreeMap<String, RendererRef>,
}

impl ComponentRegistry {
    pub(crate) fn from_entries(entries: BTreeMap<String, RendererRef>) -> Self {
        Self { entries }
    }

    /// Looks up the renderer bound to an element name.
    pub fn get(&self, name: &str) -> Option<&RendererRef> {
        self.entries.get(name)
    }

    /// Returns true if the name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over bound element names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of bindings in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders one element occurrence through its bound renderer.
    ///
    /// Returns `None` when the name is not bound, leaving fallback
    /// behavior to the host pipeline.
    pub fn render(&self, name: &str, props: &Props) -> Option<String> {
        self.entries.get(name).map(|renderer| renderer.render(props))
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The caller-supplied partial mapping applied on top of the built-ins.
///
/// Within the override set itself, inserting the same name twice keeps the
/// last renderer.
#[derive(Default, Clone)]
pub struct Overrides {
    entries: BTreeMap<String, RendererRef>,
}

impl Overrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a renderer to an element name, replacing any earlier binding
    /// for the same name.
    pub fn insert(&mut self, name: impl Into<String>, renderer: RendererRef) -> &mut Self {
        self.entries.insert(name.into(), renderer);
        self
    }

    /// Chainable insert, for building override sets inline.
    pub fn with(mut self, name: impl Into<String>, renderer: RendererRef) -> Self {
        self.entries.insert(name.into(), renderer);
        self
    }

    /// Iterates over (name, renderer) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RendererRef)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if a binding exists for the name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of override bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Overrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overrides")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdxbind_core::PropValue;
    use std::sync::Arc;

    #[test]
    fn overrides_last_insert_wins() {
        let mut overrides = Overrides::new();
        overrides.insert("img", Arc::new(|_: &Props| "first".to_string()));
        overrides.insert("img", Arc::new(|_: &Props| "second".to_string()));

        assert_eq!(overrides.len(), 1);
        let (_, renderer) = overrides.iter().next().unwrap();
        assert_eq!(renderer.render(&Props::new()), "second");
    }

    #[test]
    fn registry_render_forwards_props() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "echo".to_string(),
            Arc::new(|props: &Props| props.string("children").unwrap_or("").to_string())
                as RendererRef,
        );
        let registry = ComponentRegistry::from_entries(entries);

        let props = Props::new().with("children", PropValue::literal("hello"));
        assert_eq!(registry.render("echo", &props), Some("hello".to_string()));
        assert_eq!(registry.render("missing", &props), None);
    }
}
