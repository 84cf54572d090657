use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use todo_core::{ListQuery, Todo, TodoService};

use crate::error::ApiResult;
use crate::extract::{RecordBody, RecordId};

pub async fn create_todo(
    State(service): State<TodoService>,
    RecordBody(fields): RecordBody,
) -> ApiResult<Todo> {
    Ok(Json(service.create(fields).await?))
}

pub async fn get_todo(
    State(service): State<TodoService>,
    RecordId(id): RecordId,
) -> ApiResult<Todo> {
    Ok(Json(service.get(&id).await?))
}

pub async fn list_todos(
    State(service): State<TodoService>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<Todo>> {
    let query = ListQuery::from_params(&params);
    Ok(Json(service.list(query).await?))
}

pub async fn update_todo(
    State(service): State<TodoService>,
    RecordId(id): RecordId,
    RecordBody(patch): RecordBody,
) -> ApiResult<Todo> {
    Ok(Json(service.update(&id, patch).await?))
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    RecordId(id): RecordId,
) -> ApiResult<Todo> {
    Ok(Json(service.delete(&id).await?))
}
