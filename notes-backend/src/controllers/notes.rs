//! Note CRUD — read, overwrite, remove, and list notes by name.
//!
//! Creation goes through the upload controller (`POST /write`); everything
//! here keys off the `{name}` path segment or enumerates the whole store.

use actix_web::{web, HttpResponse, Responder};

use crate::controllers::{message_json, store_error_response, ErrorResponse, MessageResponse};
use crate::store::Note;
use crate::AppState;

/// Read a note's text verbatim.
#[utoipa::path(
    get,
    path = "/notes/{name}",
    tag = "notes",
    params(("name" = String, Path, description = "Note name")),
    responses(
        (status = 200, description = "Stored note text", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid note name", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
    )
)]
pub(crate) async fn get_note(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> impl Responder {
    match state.store.get(&name) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        Err(e) => store_error_response(e),
    }
}

/// Overwrite an existing note with the raw request body.
#[utoipa::path(
    put,
    path = "/notes/{name}",
    tag = "notes",
    params(("name" = String, Path, description = "Note name")),
    request_body(content = String, content_type = "text/plain", description = "New note text"),
    responses(
        (status = 200, description = "Note updated", body = MessageResponse),
        (status = 400, description = "Invalid note name", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
    )
)]
pub(crate) async fn update_note(
    state: web::Data<AppState>,
    name: web::Path<String>,
    body: String,
) -> impl Responder {
    match state.store.put(&name, &body) {
        Ok(()) => HttpResponse::Ok().json(message_json("Note updated successfully")),
        Err(e) => store_error_response(e),
    }
}

/// Remove a note.
#[utoipa::path(
    delete,
    path = "/notes/{name}",
    tag = "notes",
    params(("name" = String, Path, description = "Note name")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 400, description = "Invalid note name", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
    )
)]
pub(crate) async fn delete_note(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> impl Responder {
    match state.store.delete(&name) {
        Ok(()) => HttpResponse::Ok().json(message_json("Note deleted successfully")),
        Err(e) => store_error_response(e),
    }
}

/// List every note with its full text. Ordering follows the directory
/// enumeration and is not guaranteed stable or sorted.
#[utoipa::path(
    get,
    path = "/notes",
    tag = "notes",
    responses(
        (status = 200, description = "All stored notes", body = [Note]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub(crate) async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    match state.store.list() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => store_error_response(e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .route("", web::get().to(list_notes))
            .route("/{name}", web::get().to(get_note))
            .route("/{name}", web::put().to(update_note))
            .route("/{name}", web::delete().to(delete_note)),
    );
}
