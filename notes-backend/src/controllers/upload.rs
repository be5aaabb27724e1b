//! Note creation — the multipart `POST /write` endpoint and the static
//! HTML form that posts to it.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use utoipa::ToSchema;

use crate::controllers::{error_json, message_json, store_error_response, ErrorResponse, MessageResponse};
use crate::AppState;

/// Form fields accepted by `POST /write`. Used for the OpenAPI document;
/// the handler reads the fields straight off the multipart stream.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub(crate) struct CreateNoteForm {
    /// Name of the note to create
    note_name: String,
    /// Note text content
    note: String,
}

const UPLOAD_FORM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Upload Note</title>
</head>
<body>
  <h1>Upload a Note</h1>
  <form action="/write" method="POST" enctype="multipart/form-data">
    <label for="note_name">Note Name:</label>
    <input type="text" id="note_name" name="note_name" required>
    <br><br>
    <label for="note">Note Text:</label>
    <textarea id="note" name="note" required></textarea>
    <br><br>
    <button type="submit">Upload</button>
  </form>
</body>
</html>
"#;

/// Create a new note from multipart form fields. A field that is absent or
/// empty counts as missing; creating an existing name is a conflict
/// reported with a client-error status.
#[utoipa::path(
    post,
    path = "/write",
    tag = "notes",
    request_body(content = CreateNoteForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Note created", body = MessageResponse),
        (status = 400, description = "Missing fields, invalid name, or note already exists", body = ErrorResponse),
    )
)]
pub(crate) async fn create_note(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> impl Responder {
    let mut note_name: Option<String> = None;
    let mut note_text: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(error_json(&format!("Failed to process upload: {}", e)));
            }
        };
        let field_name = field
            .content_disposition()
            .get_name()
            .unwrap_or_default()
            .to_string();

        let mut data: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => data.extend_from_slice(&bytes),
                Err(e) => {
                    return HttpResponse::BadRequest()
                        .json(error_json(&format!("Failed to read upload data: {}", e)));
                }
            }
        }

        let value = match String::from_utf8(data) {
            Ok(v) => v,
            Err(_) => {
                return HttpResponse::BadRequest()
                    .json(error_json(&format!("Field '{}' is not valid UTF-8", field_name)));
            }
        };

        match field_name.as_str() {
            "note_name" => note_name = Some(value),
            "note" => note_text = Some(value),
            _ => {}
        }
    }

    let (name, text) = match (note_name.as_deref(), note_text.as_deref()) {
        (Some(name), Some(text)) if !name.is_empty() && !text.is_empty() => (name, text),
        _ => {
            return HttpResponse::BadRequest().json(error_json("Missing note_name or note"));
        }
    };

    match state.store.create_if_absent(name, text) {
        Ok(()) => HttpResponse::Created().json(message_json("Note created successfully")),
        Err(e) => store_error_response(e),
    }
}

/// Serve the static upload form. Purely presentational, no state.
#[utoipa::path(
    get,
    path = "/UploadForm.html",
    tag = "notes",
    responses(
        (status = 200, description = "Upload form page", body = String, content_type = "text/html"),
    )
)]
pub(crate) async fn upload_form() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(UPLOAD_FORM_HTML)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/write", web::post().to(create_note));
    cfg.route("/UploadForm.html", web::get().to(upload_form));
}
