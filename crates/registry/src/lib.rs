#![deny(missing_docs)]
//! mdxbind registry: built-in renderers, heading/image adapters, and the
//! element-to-renderer table consumed by an MDX rendering pipeline.

/// Heading-level and responsive-image delegation adapters.
pub mod adapters;
/// Registry construction (total and checked variants).
pub mod builder;
/// Built-in presentational renderers.
pub mod components;
/// Default built-in bindings.
pub mod defaults;
/// The renderer seam: trait and shared handle.
pub mod renderer;
/// Registry table and override set types.
pub mod table;

pub use adapters::{LevelHeading, ResponsiveImage};
pub use builder::{build_registry, try_build_registry};
pub use defaults::builtin_element_names;
pub use renderer::{Renderer, RendererRef};
pub use table::{ComponentRegistry, Overrides};
