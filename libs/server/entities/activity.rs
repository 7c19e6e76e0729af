use native_db::{native_db, ToKey};
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

pub type ActivityId = String;

#[native_model(id = 1, version = 1)]
#[native_db]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, TypedBuilder)]
pub struct Activity {
    /// ULID; lexical order is creation order, which the list operation relies on.
    #[primary_key]
    pub id: ActivityId,
    #[secondary_key]
    pub mentee_id: String,
    pub name: String,
    pub kind: String,
    pub description: String,
    #[builder(default = None)]
    pub pdf_path: Option<String>,
    pub created_at: u64,
}

impl From<Activity> for mentra_model::Activity {
    fn from(activity: Activity) -> Self {
        mentra_model::Activity {
            id: activity.id,
            mentee_id: activity.mentee_id,
            name: activity.name,
            kind: activity.kind,
            description: activity.description,
            pdf_path: activity.pdf_path,
            created_at: activity.created_at,
        }
    }
}
