//! Identifier generation seam
//!
//! The editor never mints record ids itself; it asks an injected
//! [`IdSource`]. Production uses [`UuidSource`], tests substitute a
//! deterministic source.

/// Source of globally-unique record identifiers.
pub trait IdSource {
    /// Produce one fresh, globally-unique id string.
    fn next_id(&self) -> String;
}

/// Default id source: hyphenated UUID v4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
