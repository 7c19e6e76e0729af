use crate::{
    repositories::activity::{defs::NewActivityRow, ActivityRepository},
    services::uploads::UploadStore,
};
use mentra_model::Activity;
use thiserror::Error;
use tracing::{error, info};
use typed_builder::TypedBuilder;

#[derive(Error, Debug)]
pub enum ActivityServiceError {
    /// A required field was missing or empty. Non-retryable without fixing input.
    #[error("All fields are required")]
    MissingFields,

    #[error("Failed to persist the uploaded document")]
    Upload(#[source] std::io::Error),

    #[error("Failed to access the activity store")]
    Storage(#[source] eyre::Error),
}

pub type Result<T> = std::result::Result<T, ActivityServiceError>;

/// A file attached to a create request, already read off the wire.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Everything a caller supplies to create an activity.
#[derive(Clone, Debug)]
pub struct CreateActivity {
    pub mentee_id: String,
    pub name: String,
    pub kind: String,
    pub description: String,
    pub pdf: Option<UploadedFile>,
}

#[derive(Clone, TypedBuilder)]
pub struct ActivityService {
    activity_repository: ActivityRepository,
    upload_store: UploadStore,
}

impl ActivityService {
    /// Validates the request, persists the optional proof document, then the
    /// record. The blob is written first; if the record insert fails the blob
    /// is removed again so it doesn't linger as an orphan.
    pub fn create(&self, input: CreateActivity) -> Result<Activity> {
        if input.mentee_id.is_empty()
            || input.name.is_empty()
            || input.kind.is_empty()
            || input.description.is_empty()
        {
            return Err(ActivityServiceError::MissingFields);
        }

        let upload = match &input.pdf {
            Some(file) => Some(
                self.upload_store
                    .store(&file.file_name, &file.bytes)
                    .map_err(ActivityServiceError::Upload)?,
            ),
            None => None,
        };

        let inserted = self.activity_repository.insert(NewActivityRow {
            mentee_id: input.mentee_id,
            name: input.name,
            kind: input.kind,
            description: input.description,
            pdf_path: upload.as_ref().map(|u| u.relative_path.clone()),
        });

        match inserted {
            Ok(activity) => {
                info!(
                    activity_id = %activity.id,
                    mentee_id = %activity.mentee_id,
                    "activity created"
                );
                Ok(activity.into())
            }
            Err(e) => {
                if let Some(upload) = &upload {
                    self.upload_store.remove(upload);
                }
                error!("activity insert failed: {e}");
                Err(ActivityServiceError::Storage(e))
            }
        }
    }

    /// All activities of one mentee; an unknown mentee yields an empty list.
    pub fn list(&self, mentee_id: &str) -> Result<Vec<Activity>> {
        let rows = self
            .activity_repository
            .list_for_mentee(mentee_id)
            .map_err(ActivityServiceError::Storage)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub fn upload_store(&self) -> &UploadStore {
        &self.upload_store
    }
}
