mod client;
mod form;
mod list;
mod session;

pub use client::{ActivityClient, ClientError, CreateActivityRequest, PdfAttachment};
pub use form::{ActivityForm, FieldErrors};
pub use list::ActivityList;
pub use session::Session;
