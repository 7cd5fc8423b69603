//! Reducer logic for the todos feature
//!
//! Each command arm issues exactly one service call, described as an
//! `Effect::Future` that resolves to the command's result action. Each
//! result arm applies the deterministic transition for its tag. The mirror
//! is server-authoritative: a successful fetch replaces it wholesale, and
//! the records appended or substituted by the other operations are the
//! decoded responses, never the submitted input.

use crate::environment::TodosEnvironment;
use crate::types::{RequestStatus, TodoAction, TodosState};
use std::sync::Arc;
use taskpad_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the todos feature
#[derive(Clone, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = TodoAction;
    type Environment = TodosEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            TodoAction::FetchTodos => {
                state.status = RequestStatus::Loading;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(TodoAction::TodosFetched(service.list_all().await))
                })]
            },

            TodoAction::AddTodo { title } => {
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(TodoAction::TodoCreated(service.create(title).await))
                })]
            },

            TodoAction::UpdateTodo { id, title } => {
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(TodoAction::TodoUpdated(service.update(id, title).await))
                })]
            },

            TodoAction::DeleteTodo { id } => {
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(TodoAction::TodoDeleted(service.remove(id).await))
                })]
            },

            // ========== Results ==========
            TodoAction::TodosFetched(Ok(records)) => {
                state.status = RequestStatus::Idle;
                state.items = records;
                state.error = None;
                smallvec![Effect::None]
            },

            TodoAction::TodosFetched(Err(error)) => {
                tracing::warn!(%error, "fetch failed");
                state.status = RequestStatus::Idle;
                state.error = Some(error);
                smallvec![Effect::None]
            },

            TodoAction::TodoCreated(Ok(record)) => {
                state.items.push(record);
                smallvec![Effect::None]
            },

            TodoAction::TodoUpdated(Ok(record)) => {
                // The record may have been deleted while the update was in
                // flight; a missing id is a tolerated no-op.
                if let Some(slot) = state.items.iter_mut().find(|r| r.id == record.id) {
                    *slot = record;
                }
                smallvec![Effect::None]
            },

            TodoAction::TodoDeleted(Ok(id)) => {
                state.items.retain(|r| r.id != id);
                smallvec![Effect::None]
            },

            // Create/update/delete failures leave shared state untouched;
            // the store's action broadcast is the only place to observe
            // them.
            TodoAction::TodoCreated(Err(error)) => {
                tracing::warn!(%error, "create failed");
                smallvec![Effect::None]
            },
            TodoAction::TodoUpdated(Err(error)) => {
                tracing::warn!(%error, "update failed");
                smallvec![Effect::None]
            },
            TodoAction::TodoDeleted(Err(error)) => {
                tracing::warn!(%error, "delete failed");
                smallvec![Effect::None]
            },
        }
    }
}
