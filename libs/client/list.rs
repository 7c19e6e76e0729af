use mentra_model::Activity;

type OnCreated = Box<dyn Fn(&Activity) + Send + Sync>;

/// View state behind the activity list: the fetched records, the row
/// currently opened in the detail view, and an optional callback through
/// which a parent collaborator observes newly created records.
#[derive(Default)]
pub struct ActivityList {
    records: Vec<Activity>,
    selected: Option<String>,
    on_created: Option<OnCreated>,
}

impl ActivityList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_created(&mut self, callback: impl Fn(&Activity) + Send + Sync + 'static) {
        self.on_created = Some(Box::new(callback));
    }

    /// Replaces the list with freshly fetched records.
    pub fn load(&mut self, records: Vec<Activity>) {
        self.selected = None;
        self.records = records;
    }

    /// Appends a record returned by a successful create and notifies the
    /// parent collaborator.
    pub fn append(&mut self, record: Activity) {
        if let Some(callback) = &self.on_created {
            callback(&record);
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[Activity] {
        &self.records
    }

    /// Opens the detail view for a row; returns the record when it exists.
    pub fn select(&mut self, id: &str) -> Option<&Activity> {
        let record = self.records.iter().find(|a| a.id == id)?;
        self.selected = Some(record.id.clone());
        Some(record)
    }

    pub fn selected(&self) -> Option<&Activity> {
        let id = self.selected.as_deref()?;
        self.records.iter().find(|a| a.id == id)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}
