use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use mentra_model::Activity;
use tracing::info;

use crate::{
    http::{error::ApiError, AppState},
    services::activity::{CreateActivity, UploadedFile},
};

pub(crate) async fn list_activities_handler(
    State(state): State<AppState>,
    Path(mentee_id): Path<String>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    let activities = state.activity_service.list(&mentee_id)?;
    Ok(Json(activities))
}

pub(crate) async fn create_activity_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut mentee_id = String::new();
    let mut name = String::new();
    let mut kind = String::new();
    let mut description = String::new();
    let mut pdf: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        let field_name = match field.name() {
            Some(n) => n.to_owned(),
            None => continue,
        };
        match field_name.as_str() {
            "menteeId" => mentee_id = read_text(field).await?,
            "name" => name = read_text(field).await?,
            "type" => kind = read_text(field).await?,
            "description" => description = read_text(field).await?,
            "pdf" => {
                let file_name = field.file_name().unwrap_or("upload.pdf").to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                // An empty file input submitted without a selection is not
                // an attachment.
                if !bytes.is_empty() {
                    pdf = Some(UploadedFile {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    info!(mentee_id = %mentee_id, "create activity request");
    let activity = state.activity_service.create(CreateActivity {
        mentee_id,
        name,
        kind,
        description,
        pdf,
    })?;

    Ok((StatusCode::CREATED, Json(activity)))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

pub(crate) async fn serve_upload_handler(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let path = state
        .upload_store
        .resolve(&file_name)
        .ok_or_else(|| ApiError::not_found("Upload not found"))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, "application/pdf")], bytes))
}
