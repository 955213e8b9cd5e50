//! Collision reaction failures.

use crate::entity::{ComponentKind, EntityId};
use crate::error::{ErrorSeverity, GameError};

/// A collision reaction could not complete.
///
/// The resolver disables the failing slot for the rest of the game and
/// keeps resolving every other pair.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReactionError {
    /// A participant was expected to carry a component it does not have.
    #[error("entity {entity} has no {kind} component")]
    MissingComponent {
        entity: EntityId,
        kind: ComponentKind,
    },

    /// A participant vanished from the scene mid-dispatch.
    #[error("entity {0} is no longer in the scene")]
    MissingEntity(EntityId),

    /// The reaction rejected the contact for its own reasons.
    #[error("reaction on {entity} failed: {reason}")]
    Rejected {
        entity: EntityId,
        reason: &'static str,
    },
}

impl GameError for ReactionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ReactionError::MissingComponent { .. } => ErrorSeverity::Internal,
            ReactionError::MissingEntity(_) | ReactionError::Rejected { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ReactionError::MissingComponent { .. } => "REACTION_MISSING_COMPONENT",
            ReactionError::MissingEntity(_) => "REACTION_MISSING_ENTITY",
            ReactionError::Rejected { .. } => "REACTION_REJECTED",
        }
    }
}
