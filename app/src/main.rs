//! Command-line demo for the todos store.
//!
//! Stands in for the list screen: fetches the remote collection on start,
//! then walks one add → update → delete round-trip, printing the
//! observable state after each step.

use std::time::Duration;
use taskpad_app::{TodoAction, TodosEnvironment, TodosReducer, TodosState};
use taskpad_runtime::Store;

/// The demo renders at most this many rows, like the list view it stands
/// in for.
const DISPLAY_LIMIT: usize = 20;

const EFFECT_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let env = TodosEnvironment::from_env()?;
    let store = Store::new(TodosState::new(), TodosReducer::new(), env);

    println!("=== Taskpad ===\n");

    // Load-on-start, like the list screen mounting.
    println!("Fetching todos...");
    let mut handle = store.send(TodoAction::FetchTodos).await?;
    handle.wait_with_timeout(EFFECT_TIMEOUT).await?;
    render(&store.state(Clone::clone).await);

    // Add
    let title = "Try taskpad";
    anyhow::ensure!(!title.trim().is_empty(), "enter a valid title");
    println!("\nAdding {title:?}...");
    let mut handle = store
        .send(TodoAction::AddTodo {
            title: title.to_string(),
        })
        .await?;
    handle.wait_with_timeout(EFFECT_TIMEOUT).await?;
    render(&store.state(Clone::clone).await);

    // Update the selected item (here: the one just added)
    let Some(selected) = store.state(|s| s.items.last().cloned()).await else {
        println!("\nNo item selected, nothing to update or delete.");
        return Ok(());
    };
    println!("\nRenaming {}...", selected.id);
    let mut handle = store
        .send(TodoAction::UpdateTodo {
            id: selected.id.clone(),
            title: "Tried taskpad".to_string(),
        })
        .await?;
    handle.wait_with_timeout(EFFECT_TIMEOUT).await?;
    render(&store.state(Clone::clone).await);

    // Delete it again
    println!("\nDeleting {}...", selected.id);
    let mut handle = store
        .send(TodoAction::DeleteTodo { id: selected.id })
        .await?;
    handle.wait_with_timeout(EFFECT_TIMEOUT).await?;
    render(&store.state(Clone::clone).await);

    println!("\n=== Done ===");
    Ok(())
}

fn render(state: &TodosState) {
    if state.status.is_loading() {
        println!("  (loading)");
        return;
    }
    if let Some(error) = &state.error {
        println!("  error: {error}");
        return;
    }
    for record in state.items.iter().take(DISPLAY_LIMIT) {
        println!("  {}: {}", record.id, record.title);
    }
    if state.items.len() > DISPLAY_LIMIT {
        println!("  ... and {} more", state.items.len() - DISPLAY_LIMIT);
    }
    println!("  total: {}", state.items.len());
}
