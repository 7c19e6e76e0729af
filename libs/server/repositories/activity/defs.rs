/// Fields of an activity row as handed to the repository; the id and
/// creation timestamp are assigned on insert.
#[derive(Clone, Debug)]
pub struct NewActivityRow {
    pub mentee_id: String,
    pub name: String,
    pub kind: String,
    pub description: String,
    pub pdf_path: Option<String>,
}
