//! Domain types for the todos feature

use taskpad_client::{ServiceError, TodoId, TodoRecord};

/// Whether the collection fetch is in flight
///
/// Only the fetch-all operation toggles this. Add, update, and delete do
/// not expose an in-flight phase through shared state; a consumer that
/// needs a per-operation busy signal has to track it itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestStatus {
    /// No fetch in flight
    #[default]
    Idle,
    /// A fetch-all is in flight
    Loading,
}

impl RequestStatus {
    /// True while a fetch-all is in flight
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Observable state of the todos feature
///
/// The single piece of session-wide state: a client-side mirror of the
/// remote collection (in server order), the fetch status, and the last
/// fetch failure. Created once at bootstrap, mutated only by the reducer,
/// discarded with the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodosState {
    /// Mirror of the server collection, in server order
    pub items: Vec<TodoRecord>,
    /// Fetch-all request status
    pub status: RequestStatus,
    /// Error of the last failed fetch-all, cleared by the next successful one
    pub error: Option<ServiceError>,
}

impl TodosState {
    /// Creates the initial, empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mirrored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the mirror holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the mirrored record with the given id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoRecord> {
        self.items.iter().find(|r| r.id == *id)
    }

    /// Checks whether an id is currently mirrored
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Actions of the todos feature
///
/// Commands carry user intent; results carry the tagged outcome of the
/// service call a command triggered. The reducer reads the tag and applies
/// the corresponding transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: replace the mirror with the current server collection
    FetchTodos,

    /// Command: create a todo with the given title
    ///
    /// Callers validate that `title` is non-blank before dispatching; the
    /// store does not enforce it.
    AddTodo {
        /// Title of the new todo
        title: String,
    },

    /// Command: replace the title of an existing todo
    UpdateTodo {
        /// Target record
        id: TodoId,
        /// New title
        title: String,
    },

    /// Command: delete a todo
    DeleteTodo {
        /// Target record
        id: TodoId,
    },

    // ========== Results ==========
    /// Result: the fetch-all settled
    TodosFetched(Result<Vec<TodoRecord>, ServiceError>),

    /// Result: the create settled
    TodoCreated(Result<TodoRecord, ServiceError>),

    /// Result: the update settled
    TodoUpdated(Result<TodoRecord, ServiceError>),

    /// Result: the delete settled
    TodoDeleted(Result<TodoId, ServiceError>),
}

impl TodoAction {
    /// True for user-intent commands (the dispatch surface)
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(
            self,
            Self::FetchTodos
                | Self::AddTodo { .. }
                | Self::UpdateTodo { .. }
                | Self::DeleteTodo { .. }
        )
    }

    /// True for effect-produced result actions
    #[must_use]
    pub const fn is_result(&self) -> bool {
        !self.is_command()
    }
}
