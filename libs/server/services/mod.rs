use crate::{
    core::storage::Storage,
    repositories::activity::ActivityRepository,
    services::{activity::ActivityService, uploads::UploadStore},
};

pub mod activity;
pub mod uploads;

pub fn build(storage: Storage, upload_store: UploadStore) -> ActivityService {
    let activity_repository = ActivityRepository::builder().storage(storage).build();

    ActivityService::builder()
        .activity_repository(activity_repository)
        .upload_store(upload_store)
        .build()
}
