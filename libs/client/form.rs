use crate::client::{CreateActivityRequest, PdfAttachment};
use mentra_model::NewActivity;

/// Per-field validation messages, surfaced next to each field.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.kind.is_none() && self.description.is_none()
    }
}

/// Local state of the add-activity form: three required text fields, an
/// optional attachment, and the mentee the form is bound to. Editing a
/// field clears its error; a successful submission resets everything but
/// the mentee id.
#[derive(Clone, Default)]
pub struct ActivityForm {
    mentee_id: String,
    name: String,
    kind: String,
    description: String,
    pdf: Option<PdfAttachment>,
    errors: FieldErrors,
}

impl ActivityForm {
    pub fn new(mentee_id: impl Into<String>) -> Self {
        Self {
            mentee_id: mentee_id.into(),
            ..Self::default()
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.name = None;
    }

    pub fn set_kind(&mut self, value: impl Into<String>) {
        self.kind = value.into();
        self.errors.kind = None;
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.errors.description = None;
    }

    pub fn attach_pdf(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.pdf = Some(PdfAttachment {
            file_name: file_name.into(),
            bytes,
        });
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn mentee_id(&self) -> &str {
        &self.mentee_id
    }

    /// Records a message for every empty required field. Returns whether
    /// the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors {
            name: self
                .name
                .is_empty()
                .then(|| "Activity name is required".to_string()),
            kind: self
                .kind
                .is_empty()
                .then(|| "Activity type is required".to_string()),
            description: self
                .description
                .is_empty()
                .then(|| "Description is required".to_string()),
        };
        self.errors.is_clear()
    }

    /// Validates and, if the form is complete, hands back the request to
    /// send and resets the fields (keeping the mentee id).
    pub fn submission(&mut self) -> Option<CreateActivityRequest> {
        if !self.validate() {
            return None;
        }

        let request = CreateActivityRequest {
            activity: NewActivity {
                mentee_id: self.mentee_id.clone(),
                name: std::mem::take(&mut self.name),
                kind: std::mem::take(&mut self.kind),
                description: std::mem::take(&mut self.description),
            },
            pdf: self.pdf.take(),
        };
        self.errors = FieldErrors::default();

        Some(request)
    }
}
