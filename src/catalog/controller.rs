use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    BoxError, Router,
};
use axum::body::HttpBody;
use serde_json::Value;
use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog_service.clone()).execute(ListBooksCommandRequest::default()).await?;
    debug!(count = res.books.len(), "listed books");
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(isbn);
    let res = GetBookCommand::new(state.catalog_service.clone()).execute(req).await?;
    Ok(Json(res))
}

// resource routes plus the action-style paths older clients still call
pub fn build_router<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    Router::new()
        .route("/api/v1/books", get(list_books).post(add_book))
        .route("/api/v1/books/:isbn", get(find_book_by_isbn))
        .route("/api/v1/createBook", post(add_book))
        .route("/api/v1/getBooks", get(list_books))
        .route("/api/v1/getBookByIsbn/:isbn", get(find_book_by_isbn))
        .with_state(state)
}
