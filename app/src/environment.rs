//! Environment dependencies for the todos reducer

use std::sync::Arc;
use taskpad_client::{ServiceError, TodoApi, TodoServiceClient};

/// Environment dependencies for the todos reducer
///
/// The one injected dependency is the remote todo service. The environment
/// is built once at bootstrap and handed to the store explicitly; nothing
/// reaches for it through a global.
#[derive(Clone)]
pub struct TodosEnvironment {
    /// Remote todo service
    pub service: Arc<dyn TodoApi>,
}

impl TodosEnvironment {
    /// Creates an environment around the given service
    #[must_use]
    pub fn new(service: Arc<dyn TodoApi>) -> Self {
        Self { service }
    }

    /// Creates the production environment from process configuration
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] if the configured base URL is
    /// unusable.
    pub fn from_env() -> Result<Self, ServiceError> {
        Ok(Self::new(Arc::new(TodoServiceClient::from_env()?)))
    }
}
