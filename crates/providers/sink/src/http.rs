//! Contains the [`HttpBlockSink`].

use crate::{BlockSink, UploadError};
use async_trait::async_trait;
use blockpost_primitives::BlockRecord;
use reqwest::{Client, header::CONTENT_TYPE};
use url::Url;

/// The maximum number of response body bytes kept in an [`UploadError::Status`].
const MAX_ERROR_BODY_LEN: usize = 256;

/// Credentials attached to every upload.
#[derive(Clone, PartialEq, Eq)]
pub enum SinkAuth {
    /// Sent as an `Authorization: Bearer <token>` header.
    Bearer(String),
    /// Appended to the endpoint as a query parameter, e.g. Firebase's `?auth=<token>`.
    Query {
        /// The query parameter name.
        name: String,
        /// The query parameter value.
        value: String,
    },
}

impl core::fmt::Debug for SinkAuth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
            Self::Query { name, .. } => {
                f.debug_struct("Query").field("name", name).field("value", &"<redacted>").finish()
            }
        }
    }
}

/// A [`BlockSink`] that POSTs records as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpBlockSink {
    /// The destination endpoint.
    endpoint: Url,
    /// Optional credentials.
    auth: Option<SinkAuth>,
    /// The inner reqwest client.
    client: Client,
}

impl HttpBlockSink {
    /// Creates a new [`HttpBlockSink`] posting to `endpoint`.
    pub fn new(endpoint: Url) -> Self {
        Self { endpoint, auth: None, client: Client::new() }
    }

    /// Attaches credentials to every upload.
    pub fn with_auth(mut self, auth: SinkAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Returns the destination endpoint, without credentials.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if let Some(SinkAuth::Query { name, value }) = &self.auth {
            url.query_pairs_mut().append_pair(name, value);
        }
        url
    }
}

#[async_trait]
impl BlockSink for HttpBlockSink {
    async fn upload(&self, record: &BlockRecord) -> Result<(), UploadError> {
        let body = serde_json::to_vec(record)?;

        let mut request =
            self.client.post(self.request_url()).header(CONTENT_TYPE, "application/json");
        if let Some(SinkAuth::Bearer(token)) = &self.auth {
            request = request.bearer_auth(token);
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        if status.is_success() {
            trace!(target: "sink", block_hash = %record.hash, %status, "Upload accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(UploadError::Status { status: status.as_u16(), body: truncate(body) })
    }
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY_LEN {
        let mut end = MAX_ERROR_BODY_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
    }
    body
}
