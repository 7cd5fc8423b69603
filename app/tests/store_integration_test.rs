//! End-to-end tests of the todos feature against the Store runtime
//!
//! The mock service applies each operation immediately but can hold its
//! response, so these tests exercise the real asynchronous paths: the
//! observable loading phase, responses resolving out of dispatch order,
//! and failures that never reach shared state.

use std::sync::Arc;
use std::time::Duration;
use taskpad_app::{
    RequestStatus, ServiceError, TodoAction, TodoId, TodoRecord, TodosEnvironment, TodosReducer,
    TodosState,
};
use taskpad_runtime::Store;
use taskpad_testing::MockTodoService;

type TodoStore = Store<TodosState, TodoAction, TodosEnvironment, TodosReducer>;

fn store_with(service: &MockTodoService) -> TodoStore {
    Store::new(
        TodosState::new(),
        TodosReducer::new(),
        TodosEnvironment::new(Arc::new(service.clone())),
    )
}

fn two_records() -> Vec<TodoRecord> {
    vec![TodoRecord::new("1", "a"), TodoRecord::new("2", "b")]
}

#[tokio::test]
async fn fetch_shows_loading_then_the_server_collection() {
    let service = MockTodoService::seeded(two_records());
    service.set_latency(Duration::from_millis(50));
    let store = store_with(&service);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();

    // The pending phase is immediately observable.
    let state = store.state(Clone::clone).await;
    assert_eq!(state.status, RequestStatus::Loading);
    assert!(state.items.is_empty());

    handle.wait().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, two_records());
    assert_eq!(state.status, RequestStatus::Idle);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn refetching_replaces_instead_of_merging() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    for _ in 0..2 {
        let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
        handle.wait().await;
    }

    let items = store.state(|s| s.items.clone()).await;
    assert_eq!(items, two_records());
}

#[tokio::test]
async fn add_appends_the_server_assigned_record() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    let mut handle = store
        .send(TodoAction::AddTodo {
            title: "c".to_string(),
        })
        .await
        .unwrap();
    handle.wait().await;

    let items = store.state(|s| s.items.clone()).await;
    assert_eq!(items.len(), 3);
    assert_eq!(&items[..2], &two_records()[..]);
    assert_eq!(items[2].title, "c");
    // The id came from the service, not the client.
    assert!(service.records().iter().any(|r| r.id == items[2].id));
}

#[tokio::test]
async fn update_replaces_in_place_on_server_and_mirror() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    let mut handle = store
        .send(TodoAction::UpdateTodo {
            id: TodoId::from("1"),
            title: "z".to_string(),
        })
        .await
        .unwrap();
    handle.wait().await;

    let items = store.state(|s| s.items.clone()).await;
    assert_eq!(
        items,
        vec![TodoRecord::new("1", "z"), TodoRecord::new("2", "b")]
    );
    assert_eq!(service.records(), items);
}

#[tokio::test]
async fn delete_removes_the_record_everywhere() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    let mut handle = store
        .send(TodoAction::DeleteTodo {
            id: TodoId::from("2"),
        })
        .await
        .unwrap();
    handle.wait().await;

    let items = store.state(|s| s.items.clone()).await;
    assert_eq!(items, vec![TodoRecord::new("1", "a")]);
    assert_eq!(service.records(), items);
}

#[tokio::test]
async fn failed_fetch_keeps_items_and_surfaces_the_error() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    service.fail_next(ServiceError::Status {
        status: 500,
        body: "boom".to_string(),
    });
    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, two_records());
    assert_eq!(state.status, RequestStatus::Idle);
    assert_eq!(state.error.as_ref().and_then(ServiceError::status_code), Some(500));
}

#[tokio::test]
async fn successful_fetch_clears_a_previous_error() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    service.fail_next(ServiceError::Transport("down".to_string()));
    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;
    assert!(store.state(|s| s.error.is_some()).await);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.error, None);
    assert_eq!(state.items, two_records());
}

#[tokio::test]
async fn create_failure_is_only_visible_on_the_action_stream() {
    // Known asymmetry, kept deliberately: a failed create leaves shared
    // state untouched (no error, no status change) and is observable
    // only as a rejected result action.
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    let mut actions = store.subscribe_actions();
    service.fail_next(ServiceError::Transport("down".to_string()));

    let mut handle = store
        .send(TodoAction::AddTodo {
            title: "never lands".to_string(),
        })
        .await
        .unwrap();
    handle.wait().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, two_records());
    assert_eq!(state.error, None);
    assert_eq!(state.status, RequestStatus::Idle);

    let observed = actions.recv().await.unwrap();
    assert_eq!(
        observed,
        TodoAction::TodoCreated(Err(ServiceError::Transport("down".to_string())))
    );
}

#[tokio::test]
async fn other_successes_do_not_clear_a_stale_fetch_error() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    service.fail_next(ServiceError::Transport("down".to_string()));
    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    let mut handle = store
        .send(TodoAction::AddTodo {
            title: "c".to_string(),
        })
        .await
        .unwrap();
    handle.wait().await;

    let state = store.state(Clone::clone).await;
    assert!(state.error.is_some());
    assert_eq!(state.items.len(), 1);
}

#[tokio::test]
async fn late_update_response_after_delete_is_a_noop() {
    let service = MockTodoService::seeded(two_records());
    let store = store_with(&service);

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();
    handle.wait().await;

    // The update is applied server-side right away, but its response is
    // held; the delete dispatched afterwards resolves first.
    service.set_latency(Duration::from_millis(100));
    let mut slow_update = store
        .send(TodoAction::UpdateTodo {
            id: TodoId::from("1"),
            title: "resurrected?".to_string(),
        })
        .await
        .unwrap();

    // Wait until the update has actually been issued (it applies
    // server-side at request time) before letting the delete go out fast.
    while !service.records().iter().any(|r| r.title == "resurrected?") {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    service.clear_latency();
    let mut fast_delete = store
        .send(TodoAction::DeleteTodo {
            id: TodoId::from("1"),
        })
        .await
        .unwrap();
    fast_delete.wait().await;

    assert_eq!(
        store.state(|s| s.items.clone()).await,
        vec![TodoRecord::new("2", "b")]
    );

    // The stale response lands on a missing id: tolerated, no change.
    slow_update.wait().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, vec![TodoRecord::new("2", "b")]);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn state_subscribers_see_the_loading_transition() {
    let service = MockTodoService::seeded(two_records());
    service.set_latency(Duration::from_millis(200));
    let store = store_with(&service);

    let mut rx = store.subscribe();

    let mut handle = store.send(TodoAction::FetchTodos).await.unwrap();

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().status, RequestStatus::Loading);

    handle.wait().await;
    rx.changed().await.unwrap();
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.status, RequestStatus::Idle);
    assert_eq!(snapshot.items, two_records());
}
