use mentra_model::{Activity, ApiMessage, NewActivity};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode, Url};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL cannot address the service.
    #[error("invalid server url: {message}")]
    InvalidServerUrl { message: String },

    /// The server rejected the input (HTTP 400). Resubmitting the same
    /// request will fail again.
    #[error("{message}")]
    Validation { message: String },

    /// The server failed (HTTP 5xx); not classified further.
    #[error("{message}")]
    Server { message: String },

    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// A proof document attached to a create request.
#[derive(Clone, Debug)]
pub struct PdfAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct CreateActivityRequest {
    pub activity: NewActivity,
    pub pdf: Option<PdfAttachment>,
}

/// HTTP client for the activity store service. No retries: a failed call
/// surfaces its error and leaves caller state untouched.
#[derive(Clone)]
pub struct ActivityClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ActivityClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let raw = base_url.as_ref();
        let base_url = Url::parse(raw).map_err(|e| ClientError::InvalidServerUrl {
            message: format!("'{raw}': {e}"),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidServerUrl {
                message: format!("'{raw}' has no host to send requests to"),
            });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub async fn list(&self, mentee_id: &str) -> Result<Vec<Activity>, ClientError> {
        let url = self.endpoint(["activities", mentee_id])?;
        let resp = self.http.get(url).send().await?;

        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn create(&self, request: CreateActivityRequest) -> Result<Activity, ClientError> {
        let mut form = Form::new()
            .text("menteeId", request.activity.mentee_id)
            .text("name", request.activity.name)
            .text("type", request.activity.kind)
            .text("description", request.activity.description);

        if let Some(pdf) = request.pdf {
            form = form.part("pdf", Part::bytes(pdf.bytes).file_name(pdf.file_name));
        }

        let url = self.endpoint(["activities"])?;
        let resp = self.http.post(url).multipart(form).send().await?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// Resolves an activity's stored pdf path against the serving base URL.
    pub fn file_url(&self, activity: &Activity) -> Option<String> {
        let path = activity.pdf_path.as_ref()?;
        self.endpoint(path.split('/'))
            .ok()
            .map(|url| url.to_string())
    }

    /// Appends path segments to the base URL, percent-encoding each one so
    /// caller-supplied values cannot change the request path.
    fn endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidServerUrl {
                message: format!("'{}' cannot carry a request path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn check(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<ApiMessage>()
            .await
            .map(|m| m.message)
            .unwrap_or_else(|_| format!("unexpected status {status}"));

        tracing::warn!(%status, "activity request failed: {message}");

        if status == StatusCode::BAD_REQUEST {
            Err(ClientError::Validation { message })
        } else {
            Err(ClientError::Server { message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity_with_pdf(pdf_path: Option<&str>) -> Activity {
        Activity {
            id: "a1".to_string(),
            mentee_id: "m1".to_string(),
            name: "Science Fair".to_string(),
            kind: "Academic-adjacent".to_string(),
            description: "Won 2nd place".to_string(),
            pdf_path: pdf_path.map(str::to_string),
            created_at: 0,
        }
    }

    #[test]
    fn trailing_slash_in_base_url_does_not_double_up() {
        let client = ActivityClient::new("http://localhost:4117/").unwrap();
        assert_eq!(
            client.file_url(&activity_with_pdf(Some("uploads/01H-proof.pdf"))),
            Some("http://localhost:4117/uploads/01H-proof.pdf".to_string())
        );
    }

    #[test]
    fn file_url_is_absent_without_a_pdf() {
        let client = ActivityClient::new("http://localhost:4117").unwrap();
        assert_eq!(client.file_url(&activity_with_pdf(None)), None);
    }

    #[test]
    fn file_url_encodes_spaces_in_file_names() {
        let client = ActivityClient::new("http://localhost:4117").unwrap();
        assert_eq!(
            client.file_url(&activity_with_pdf(Some("uploads/science fair.pdf"))),
            Some("http://localhost:4117/uploads/science%20fair.pdf".to_string())
        );
    }

    #[test]
    fn mentee_id_cannot_change_the_request_path() {
        let client = ActivityClient::new("http://localhost:4117").unwrap();
        let url = client.endpoint(["activities", "m1/../other"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4117/activities/m1%2F..%2Fother"
        );
    }

    #[test]
    fn base_url_without_a_host_is_rejected() {
        assert!(matches!(
            ActivityClient::new("not a url"),
            Err(ClientError::InvalidServerUrl { .. })
        ));
        assert!(matches!(
            ActivityClient::new("mailto:someone@example.com"),
            Err(ClientError::InvalidServerUrl { .. })
        ));
    }
}
