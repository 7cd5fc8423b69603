//! # Taskpad Testing
//!
//! Testing utilities and helpers for the taskpad architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: a fluent Given-When-Then harness for reducers
//! - [`assertions`]: helpers for asserting on returned effects
//! - [`MockTodoService`]: an in-memory, server-authoritative stand-in for
//!   the remote todo service, with scriptable latency and failures
//!
//! ## Example
//!
//! ```ignore
//! use taskpad_testing::{MockTodoService, ReducerTest, assertions};
//!
//! ReducerTest::new(TodosReducer::new())
//!     .with_env(TodosEnvironment::new(Arc::new(MockTodoService::new())))
//!     .given_state(TodosState::new())
//!     .when_action(TodoAction::TodosFetched(Ok(records)))
//!     .then_state(|state| assert_eq!(state.items.len(), 2))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod service_mock;

pub use reducer_test::{ReducerTest, assertions};
pub use service_mock::MockTodoService;
