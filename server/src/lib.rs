//! HTTP surface of the todo service.
//!
//! # Design
//! Routes map one-to-one onto `TodoService` operations. Every response is
//! HTTP 200 with a JSON body; failures carry an `err` key instead of a
//! non-2xx status. Handlers depend only on the `TodoStore` trait, so the
//! records file can be swapped for another backend.

use std::sync::Arc;

use axum::{routing::get, Router};
use todo_core::{TodoService, TodoStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod shutdown;

use handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};

pub fn app(store: Arc<dyn TodoStore>) -> Router {
    Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route("/todo/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(TodoService::new(store))
}

pub async fn run(listener: TcpListener, store: Arc<dyn TodoStore>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
