use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::MenuItemId;

/// Errors that can occur during menu operations.
///
/// `InvalidArgument` and `NotFound` are caller mistakes; only
/// `ActorCommunicationError` indicates something wrong with the service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("MenuItem with id {0} not found")]
    NotFound(MenuItemId),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        MenuError::ActorCommunicationError(e.to_string())
    }
}
