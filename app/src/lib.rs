//! Todo-list client built on the taskpad store architecture.
//!
//! One observable store mirrors a remote todo collection. The four user
//! operations (fetch, add, update, delete) are dispatched as commands;
//! each command's reducer arm issues the matching service call as an
//! effect, and the call's tagged result re-enters the reducer to apply the
//! transition.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use taskpad_app::{TodoAction, TodosEnvironment, TodosReducer, TodosState};
//! use taskpad_client::TodoServiceClient;
//! use taskpad_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = Arc::new(TodoServiceClient::from_env()?);
//! let store = Store::new(
//!     TodosState::new(),
//!     TodosReducer::new(),
//!     TodosEnvironment::new(service),
//! );
//!
//! // Load the collection
//! let mut handle = store.send(TodoAction::FetchTodos).await?;
//! handle.wait().await;
//!
//! // Observe it
//! let titles: Vec<String> = store
//!     .state(|s| s.items.iter().map(|r| r.title.clone()).collect())
//!     .await;
//! println!("{titles:?}");
//! # Ok(())
//! # }
//! ```

pub mod environment;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use environment::TodosEnvironment;
pub use reducer::TodosReducer;
pub use types::{RequestStatus, TodoAction, TodosState};

// Wire types consumers deal with directly
pub use taskpad_client::{ServiceError, TodoId, TodoRecord};
