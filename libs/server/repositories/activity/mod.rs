use crate::{
    core::{storage::Storage, utils::unix_now_ms},
    entities::activity::{Activity, ActivityKey},
};
use std::sync::{Arc, Mutex};
use typed_builder::TypedBuilder;
use ulid::Generator;

pub mod defs;

#[derive(Clone, TypedBuilder)]
pub struct ActivityRepository {
    storage: Storage,
    /// Monotonic generator: ids handed out within the same millisecond
    /// still sort in generation order.
    #[builder(default = Arc::new(Mutex::new(Generator::new())))]
    id_generator: Arc<Mutex<Generator>>,
}

impl ActivityRepository {
    fn next_id(&self) -> eyre::Result<String> {
        let mut generator = self
            .id_generator
            .lock()
            .map_err(|_| eyre::eyre!("id generator mutex poisoned"))?;
        Ok(generator.generate()?.to_string())
    }

    /// Inserts a new activity row and returns it with its assigned id.
    pub fn insert(&self, row: defs::NewActivityRow) -> eyre::Result<Activity> {
        let activity = Activity::builder()
            .id(self.next_id()?)
            .mentee_id(row.mentee_id)
            .name(row.name)
            .kind(row.kind)
            .description(row.description)
            .pdf_path(row.pdf_path)
            .created_at(unix_now_ms())
            .build();

        self.storage.insert(activity.clone())?;

        Ok(activity)
    }

    /// All activities of one mentee, in insertion order.
    pub fn list_for_mentee(&self, mentee_id: &str) -> eyre::Result<Vec<Activity>> {
        self.storage.read_txn(|qr| {
            let mut rows = qr
                .scan()
                .secondary::<Activity>(ActivityKey::mentee_id)?
                .range(mentee_id.to_string()..=mentee_id.to_string())?
                .collect::<Result<Vec<_>, _>>()?;

            // Secondary scans don't guarantee an order; monotonic ULIDs do.
            rows.sort_by(|a, b| a.id.cmp(&b.id));

            Ok(rows)
        })
    }
}
