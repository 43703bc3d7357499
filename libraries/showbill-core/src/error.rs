/// Core error types for Showbill
use crate::types::ShowId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Showbill
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A show references an artist or venue that was not supplied by the
    /// persistence boundary. Referential integrity is owned by that
    /// boundary, so this is a data-integrity failure, not a user error.
    #[error("show {show_id} references missing {entity} {entity_id}")]
    BrokenReference {
        /// The show carrying the dangling reference
        show_id: ShowId,
        /// Which side of the association is missing ("artist" or "venue")
        entity: &'static str,
        /// The unresolvable id
        entity_id: i64,
    },
}

impl CoreError {
    /// Create a broken reference error
    pub fn broken_reference(show_id: ShowId, entity: &'static str, entity_id: i64) -> Self {
        Self::BrokenReference {
            show_id,
            entity,
            entity_id,
        }
    }
}
