//! Document management handlers.
//!
//! ```text
//! GET    /api/v1/documents?q=report
//! GET    /api/v1/documents/{id}
//! POST   /api/v1/documents
//! PUT    /api/v1/documents/{id}
//! DELETE /api/v1/documents/{id}?confirm=true
//! GET    /api/v1/documents/{id}/view
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::removal::remove_document;
use crate::domain::{
    DeleteOutcome, Document, DocumentDraft, DocumentId, DocumentStatus, DocumentValidationError,
    DomainError, FileAttachment, Notification, ViewDisposition,
};

use super::accounts::DeleteResponse;
use super::auth::resolve_identity;
use super::params::{ConfirmQuery, SearchQuery};
use super::session::SessionContext;
use super::state::HttpState;
use super::ApiResult;

/// Attached file descriptor as sent by clients.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilePayload {
    /// File name including extension.
    pub file_name: String,
    /// Size in bytes.
    pub byte_size: u64,
}

/// Document fields accepted by create and update.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    /// Document title; required.
    pub title: String,
    /// Author display name; required.
    pub author: String,
    /// Review status; legacy `In Progress` is accepted as `Pending`.
    pub status: String,
    /// Attached file; required on create, optional on update.
    #[serde(default)]
    pub file: Option<FilePayload>,
}

/// Response for the view operation.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    /// Where the file is served from.
    pub file_url: String,
    /// File name including extension.
    pub file_name: String,
    /// How a browser should present the file.
    pub disposition: ViewDisposition,
}

fn map_document_validation(err: &DocumentValidationError) -> DomainError {
    DomainError::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": "invalid_field" }))
}

fn parse_status(raw: &str) -> Result<DocumentStatus, DomainError> {
    DocumentStatus::parse(raw).map_err(|err| map_document_validation(&err))
}

fn attachment_from_payload(file: Option<FilePayload>) -> Result<Option<FileAttachment>, DomainError> {
    file.map(|payload| {
        FileAttachment::new(payload.file_name, payload.byte_size)
            .map_err(|err| map_document_validation(&err))
    })
    .transpose()
}

fn draft_from_payload(payload: DocumentPayload) -> Result<DocumentDraft, DomainError> {
    let status = parse_status(&payload.status)?;
    let attachment = attachment_from_payload(payload.file)?;
    DocumentDraft::new(payload.title, payload.author, status, attachment)
        .map_err(|err| map_document_validation(&err))
}

fn document_not_found(id: DocumentId) -> DomainError {
    DomainError::not_found(format!("no document with id {id}"))
}

/// List documents, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/v1/documents",
    params(("q" = Option<String>, Query, description = "Case-insensitive filter over title and author")),
    responses(
        (status = 200, description = "Documents in insertion order", body = [Document]),
        (status = 401, description = "Unauthorised", body = DomainError)
    ),
    tags = ["documents"],
    operation_id = "listDocuments"
)]
#[get("/documents")]
pub async fn list_documents(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<Document>>> {
    resolve_identity(&state.directory, &session)?;
    Ok(web::Json(state.documents.list(query.text()).await))
}

/// Fetch a single document.
#[utoipa::path(
    get,
    path = "/api/v1/documents/{id}",
    params(("id" = u32, Path, description = "Document id")),
    responses(
        (status = 200, description = "The document", body = Document),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 404, description = "Not found", body = DomainError)
    ),
    tags = ["documents"],
    operation_id = "getDocument"
)]
#[get("/documents/{id}")]
pub async fn get_document(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u32>,
) -> ApiResult<web::Json<Document>> {
    resolve_identity(&state.directory, &session)?;
    let id = DocumentId(path.into_inner());
    let document = state
        .documents
        .find(id)
        .await
        .ok_or_else(|| document_not_found(id))?;
    Ok(web::Json(document))
}

/// Create a document.
///
/// Any authenticated session may add documents; role gating applies to
/// account management only.
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    request_body = DocumentPayload,
    responses(
        (status = 201, description = "Document created", body = Document),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 401, description = "Unauthorised", body = DomainError)
    ),
    tags = ["documents"],
    operation_id = "createDocument"
)]
#[post("/documents")]
pub async fn create_document(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<DocumentPayload>,
) -> ApiResult<HttpResponse> {
    resolve_identity(&state.directory, &session)?;
    let draft = draft_from_payload(payload.into_inner())?;
    let document = state.documents.create(draft).await;
    state.notifier.notify(&Notification::success(
        "Document added",
        format!("{} has been added.", document.title),
    ));
    Ok(HttpResponse::Created().json(document))
}

/// Update a document.
///
/// Omitting `file` keeps the existing attachment; `dateCreated` is never
/// rewritten, only `lastUpdated`.
#[utoipa::path(
    put,
    path = "/api/v1/documents/{id}",
    params(("id" = u32, Path, description = "Document id")),
    request_body = DocumentPayload,
    responses(
        (status = 200, description = "Document updated", body = Document),
        (status = 400, description = "Invalid request", body = DomainError),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 404, description = "Not found", body = DomainError)
    ),
    tags = ["documents"],
    operation_id = "updateDocument"
)]
#[put("/documents/{id}")]
pub async fn update_document(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u32>,
    payload: web::Json<DocumentPayload>,
) -> ApiResult<web::Json<Document>> {
    resolve_identity(&state.directory, &session)?;
    let id = DocumentId(path.into_inner());
    let mut payload = payload.into_inner();
    if payload.file.is_none() {
        // Edits without a fresh drop keep the stored attachment.
        let existing = state
            .documents
            .find(id)
            .await
            .ok_or_else(|| document_not_found(id))?;
        payload.file = Some(FilePayload {
            file_name: existing.file_name,
            byte_size: existing.byte_size,
        });
    }
    let draft = draft_from_payload(payload)?;
    let document = state
        .documents
        .update(id, draft)
        .await
        .map_err(|_| document_not_found(id))?;
    state.notifier.notify(&Notification::success(
        "Document updated",
        format!("{} has been updated.", document.title),
    ));
    Ok(web::Json(document))
}

/// Delete a document after confirmation.
#[utoipa::path(
    delete,
    path = "/api/v1/documents/{id}",
    params(
        ("id" = u32, Path, description = "Document id"),
        ("confirm" = Option<bool>, Query, description = "Resolved confirmation-dialog answer")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteResponse),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 404, description = "Not found", body = DomainError)
    ),
    tags = ["documents"],
    operation_id = "deleteDocument"
)]
#[delete("/documents/{id}")]
pub async fn delete_document(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u32>,
    query: web::Query<ConfirmQuery>,
) -> ApiResult<web::Json<DeleteResponse>> {
    resolve_identity(&state.directory, &session)?;
    let id = DocumentId(path.into_inner());
    match remove_document(state.documents.as_ref(), query.gate(), id).await {
        DeleteOutcome::Deleted(document) => {
            state.notifier.notify(&Notification::success(
                "Document deleted",
                format!("{} has been removed.", document.title),
            ));
            Ok(web::Json(DeleteResponse {
                outcome: "deleted".to_owned(),
            }))
        }
        DeleteOutcome::Cancelled => Ok(web::Json(DeleteResponse {
            outcome: "cancelled".to_owned(),
        })),
        DeleteOutcome::Missing => Err(document_not_found(id)),
    }
}

/// Resolve how a document's file should be presented.
#[utoipa::path(
    get,
    path = "/api/v1/documents/{id}/view",
    params(("id" = u32, Path, description = "Document id")),
    responses(
        (status = 200, description = "View descriptor", body = ViewResponse),
        (status = 401, description = "Unauthorised", body = DomainError),
        (status = 404, description = "Not found", body = DomainError)
    ),
    tags = ["documents"],
    operation_id = "viewDocument"
)]
#[get("/documents/{id}/view")]
pub async fn view_document(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<u32>,
) -> ApiResult<web::Json<ViewResponse>> {
    resolve_identity(&state.directory, &session)?;
    let id = DocumentId(path.into_inner());
    let document = state
        .documents
        .find(id)
        .await
        .ok_or_else(|| document_not_found(id))?;
    let disposition = document.view_disposition();
    Ok(web::Json(ViewResponse {
        file_url: document.file_url,
        file_name: document.file_name,
        disposition,
    }))
}
