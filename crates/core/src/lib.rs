#![deny(missing_docs)]
//! mdxbind core: the props data model shared between renderers and the
//! registry, plus the error types surfaced by checked registry construction.

/// Registry error types.
pub mod error;
/// Props bag and prop value types, including merge semantics.
pub mod props;

pub use error::RegistryError;
pub use props::{PropValue, Props, StyleMap};
