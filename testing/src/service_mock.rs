//! In-memory mock of the remote todo service
//!
//! The mock behaves like the real service: it owns the collection, assigns
//! ids, and answers each call from its current state. Two knobs make the
//! asynchronous paths testable:
//!
//! - `set_latency`: each call captured after the setter applies its change
//!   immediately (the server is fast) but holds its response for the given
//!   duration (the network is slow). Overlapping calls can therefore
//!   resolve out of dispatch order, exactly like real responses.
//! - `fail_next`: the next call consumes the scripted error and returns it
//!   instead of touching the collection.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use taskpad_client::{ApiFuture, ServiceError, TodoApi, TodoId, TodoRecord};

#[derive(Default)]
struct Inner {
    records: Vec<TodoRecord>,
    next_id: u64,
    fail_next: Option<ServiceError>,
    latency: Option<Duration>,
}

/// In-memory, server-authoritative implementation of [`TodoApi`]
///
/// Clones share the same collection, so a clone handed to a store
/// environment and the original kept by the test observe the same data.
#[derive(Clone, Default)]
pub struct MockTodoService {
    inner: Arc<Mutex<Inner>>,
}

impl MockTodoService {
    /// Create an empty service
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with records
    #[must_use]
    pub fn seeded(records: impl IntoIterator<Item = TodoRecord>) -> Self {
        let service = Self::new();
        {
            let mut inner = service.lock();
            inner.records = records.into_iter().collect();
        }
        service
    }

    /// Script the next call to fail with the given error
    ///
    /// The error is consumed by exactly one call; later calls succeed
    /// again.
    pub fn fail_next(&self, error: ServiceError) {
        self.lock().fail_next = Some(error);
    }

    /// Hold every subsequent response for the given duration
    pub fn set_latency(&self, latency: Duration) {
        self.lock().latency = Some(latency);
    }

    /// Stop holding responses
    pub fn clear_latency(&self) {
        self.lock().latency = None;
    }

    /// Snapshot of the service-side collection
    #[must_use]
    pub fn records(&self) -> Vec<TodoRecord> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only happens if a test already panicked.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn fresh_id(inner: &mut Inner) -> TodoId {
        loop {
            inner.next_id += 1;
            let candidate = TodoId::new(inner.next_id.to_string());
            if !inner.records.iter().any(|r| r.id == candidate) {
                return candidate;
            }
        }
    }

    /// Apply `op` to the collection now, then hold the response for the
    /// scripted latency. A scripted failure preempts the operation.
    fn respond<T, F>(&self, op: F) -> ApiFuture<'_, T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Inner) -> Result<T, ServiceError> + Send + 'static,
    {
        let (result, latency) = {
            let mut inner = self.lock();
            let latency = inner.latency;
            let result = match inner.fail_next.take() {
                Some(error) => Err(error),
                None => op(&mut inner),
            };
            (result, latency)
        };

        Box::pin(async move {
            if let Some(latency) = latency {
                tokio::time::sleep(latency).await;
            }
            result
        })
    }
}

impl TodoApi for MockTodoService {
    fn list_all(&self) -> ApiFuture<'_, Vec<TodoRecord>> {
        self.respond(|inner| Ok(inner.records.clone()))
    }

    fn create(&self, title: String) -> ApiFuture<'_, TodoRecord> {
        self.respond(move |inner| {
            let record = TodoRecord {
                id: Self::fresh_id(inner),
                title,
            };
            inner.records.push(record.clone());
            Ok(record)
        })
    }

    fn update(&self, id: TodoId, title: String) -> ApiFuture<'_, TodoRecord> {
        self.respond(move |inner| {
            let Some(record) = inner.records.iter_mut().find(|r| r.id == id) else {
                return Err(ServiceError::Status {
                    status: 404,
                    body: format!("no record with id {id}"),
                });
            };
            record.title = title;
            Ok(record.clone())
        })
    }

    fn remove(&self, id: TodoId) -> ApiFuture<'_, TodoId> {
        self.respond(move |inner| {
            let before = inner.records.len();
            inner.records.retain(|r| r.id != id);
            if inner.records.len() == before {
                return Err(ServiceError::Status {
                    status: 404,
                    body: format!("no record with id {id}"),
                });
            }
            Ok(id)
        })
    }
}
