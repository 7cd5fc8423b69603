//! # Taskpad Core
//!
//! Core traits and types for the taskpad store architecture.
//!
//! Taskpad keeps a remote todo collection mirrored in a single observable
//! store. This crate provides the two abstractions everything else is built
//! from:
//!
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: a description of a side effect (not its execution)
//!
//! The reducer owns every state transition; side effects (here, the HTTP
//! calls against the remote todo service) are returned as [`effect::Effect`]
//! values and executed by the store runtime, which feeds any resulting
//! action back into the reducer.
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use taskpad_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for TodosReducer {
//!     type State = TodosState;
//!     type Action = TodoAction;
//!     type Environment = TodosEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TodosState,
//!         action: TodoAction,
//!         env: &TodosEnvironment,
//!     ) -> SmallVec<[Effect<TodoAction>; 4]> {
//!         match action {
//!             TodoAction::FetchTodos => {
//!                 state.status = RequestStatus::Loading;
//!                 let service = env.service.clone();
//!                 smallvec![Effect::Future(Box::pin(async move {
//!                     Some(TodoAction::TodosFetched(service.list_all().await))
//!                 }))]
//!             }
//!             // ...
//!         }
//!     }
//! }
//! ```

// Re-export so reducers can name their return type without depending on
// smallvec directly.
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - the core trait for state transition logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all transition logic and are deterministic and testable;
/// anything asynchronous leaves the reducer as an [`crate::effect::Effect`].
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for state transition logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodosReducer {
    ///     type State = TodosState;
    ///     type Action = TodoAction;
    ///     type Environment = TodosEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TodosState,
    ///         action: TodoAction,
    ///         env: &TodosEnvironment,
    ///     ) -> SmallVec<[Effect<TodoAction>; 4]> {
    ///         // transition logic here
    ///         smallvec![Effect::None]
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most transitions return
        /// either nothing or a single `Effect::Future`; the inline capacity
        /// of the `SmallVec` keeps the common cases allocation-free.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime. An effect may produce a follow-up action, which the runtime
    /// feeds back into the reducer; this is how an in-flight HTTP request
    /// reports its outcome.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap a future that may produce a follow-up action
        ///
        /// Shorthand for `Effect::Future(Box::pin(fut))`.
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }
}
