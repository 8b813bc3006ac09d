use thiserror::Error;

/// Errors surfaced by checked registry construction.
///
/// The unchecked builder is total and never produces these; only the
/// fail-fast entry point validates override bindings.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An override binding carries a malformed key.
    #[error("invalid renderer binding for '{name}': {reason}")]
    InvalidRenderer {
        /// The offending binding key.
        name: String,
        /// Why the key was rejected.
        reason: String,
    },
}

impl RegistryError {
    /// Creates an invalid-renderer error naming the offending key.
    pub fn invalid_renderer(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRenderer {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
