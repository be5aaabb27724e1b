//! HTTP controllers, one module per concern. Each exposes a
//! `config(cfg: &mut web::ServiceConfig)` registration function wired up in
//! `main`.

pub mod docs;
pub mod health;
pub mod notes;
pub mod upload;

use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::store::StoreError;

/// The `{error}` envelope used for every non-data failure response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// The `{message}` envelope used for every non-data success response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn error_json(status_error: &str) -> ErrorResponse {
    ErrorResponse {
        error: status_error.to_string(),
    }
}

pub(crate) fn message_json(message: &str) -> MessageResponse {
    MessageResponse {
        message: message.to_string(),
    }
}

/// Map a store failure onto the wire. Unhandled filesystem errors (e.g.
/// permission denied, disk full) become a consistent 500 envelope instead
/// of propagating unstructured.
pub(crate) fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound => HttpResponse::NotFound().json(error_json("Note not found")),
        StoreError::AlreadyExists => {
            HttpResponse::BadRequest().json(error_json("Note already exists"))
        }
        StoreError::InvalidName => {
            HttpResponse::BadRequest().json(error_json("Invalid note name"))
        }
        StoreError::Io(e) => {
            log::error!("Storage error: {}", e);
            HttpResponse::InternalServerError().json(error_json("Internal storage error"))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::web;
    use tempfile::TempDir;

    use crate::config::Config;
    use crate::store::NoteStore;
    use crate::AppState;

    /// AppState over a fresh temp storage directory. The TempDir must be
    /// kept alive for the duration of the test.
    pub fn test_state(dir: &TempDir) -> web::Data<AppState> {
        let storage_dir = dir.path().join("notes");
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            storage_dir: storage_dir.clone(),
        };
        let store = NoteStore::open(storage_dir).unwrap();
        web::Data::new(AppState { config, store })
    }

    /// Multipart body for POST /write with the given (field, value) pairs.
    pub const BOUNDARY: &str = "----noteformboundary";

    pub fn multipart_body(fields: &[(&str, &str)]) -> (String, String) {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            ));
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        let content_type = format!("multipart/form-data; boundary={}", BOUNDARY);
        (content_type, body)
    }
}
