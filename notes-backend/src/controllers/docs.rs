//! OpenAPI document for the service, rendered interactively at `/docs/`.

use utoipa::OpenApi;

use crate::controllers::{notes, upload, ErrorResponse, MessageResponse};
use crate::store::Note;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Note Store Service",
        description = "Stores text notes as individual files in a directory."
    ),
    paths(
        notes::get_note,
        notes::update_note,
        notes::delete_note,
        notes::list_notes,
        upload::create_note,
        upload::upload_form,
    ),
    components(schemas(Note, ErrorResponse, MessageResponse, upload::CreateNoteForm)),
    tags(
        (name = "notes", description = "Note storage operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_covers_every_route() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = json["paths"].as_object().unwrap();

        assert!(paths.contains_key("/notes"));
        assert!(paths.contains_key("/notes/{name}"));
        assert!(paths.contains_key("/write"));
        assert!(paths.contains_key("/UploadForm.html"));

        let by_name = &paths["/notes/{name}"];
        for method in ["get", "put", "delete"] {
            assert!(by_name.get(method).is_some(), "missing {} operation", method);
        }
    }
}
