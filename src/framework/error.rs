//! # Framework Errors
//!
//! Failures of the message plumbing itself, independent of any one resource.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps a resource-specific error raised inside an entity hook.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// Recovers the resource-specific error if this is an [`FrameworkError::EntityError`]
    /// carrying an `E`.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of stock")]
    struct OutOfStock;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::entity(OutOfStock);
        assert_eq!(err.downcast_entity::<OutOfStock>().ok(), Some(OutOfStock));
    }

    #[test]
    fn downcast_leaves_plumbing_errors_alone() {
        let err = FrameworkError::ActorClosed;
        assert!(matches!(
            err.downcast_entity::<OutOfStock>(),
            Err(FrameworkError::ActorClosed)
        ));
    }
}
