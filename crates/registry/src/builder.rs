//! Registry construction.
//!
//! Built-ins are laid down first and every override is applied after, so a
//! key collision always resolves in favor of the override. Construction is
//! pure: a fresh registry per call, no process-wide state, inputs untouched.

use crate::defaults::builtin_bindings;
use crate::table::{ComponentRegistry, Overrides};
use log::debug;
use mdxbind_core::RegistryError;
use std::sync::Arc;

/// Builds the complete element-to-renderer registry for one render pass.
///
/// Total for any override set, including the empty one. Deterministic: the
/// same overrides produce structurally identical registries on every call.
pub fn build_registry(overrides: &Overrides) -> ComponentRegistry {
    let mut entries = builtin_bindings();
    for (name, renderer) in overrides.iter() {
        if entries.insert(name.to_string(), Arc::clone(renderer)).is_some() {
            debug!("override shadows built-in binding for '{}'", name);
        }
    }
    ComponentRegistry::from_entries(entries)
}

/// Checked variant of [`build_registry`] that rejects malformed override
/// keys before constructing the table.
///
/// A key is malformed when it is empty or contains whitespace or control
/// characters; the error names the offending key. Hosts that trust their
/// override source can keep using the total builder.
pub fn try_build_registry(overrides: &Overrides) -> Result<ComponentRegistry, RegistryError> {
    for (name, _) in overrides.iter() {
        validate_name(name)?;
    }
    Ok(build_registry(overrides))
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::invalid_renderer(name, "empty element name"));
    }
    if name
        .chars()
        .any(|ch| ch.is_whitespace() || ch.is_control())
    {
        return Err(RegistryError::invalid_renderer(
            name,
            "element name contains whitespace or control characters",
        ));
    }
    Ok(())
}
