//! The hacoCMS API client and its four retrieval operations.
//!
//! Construction wires up two `reqwest` sessions with fixed default headers;
//! each operation is a single stateless GET round trip against one of them.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::debug;
use url::Url;

use crate::content::ApiContent;
use crate::query::QueryParameters;
use crate::response::{ListApiResponse, ListEnvelope};
use crate::{Error, Result};

/// Header carrying the project-wide draft credential.
const DRAFT_TOKEN_HEADER: &str = "Haco-Project-Draft-Token";

/// Fixed API-root path segment resolved against the caller-supplied origin.
const API_ROOT: &str = "/api/v1/";

/// Default per-request timeout applied to both sessions.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the hacoCMS content API.
///
/// Holds two authenticated sessions: a public one that sees published
/// content only, and — when a Project-Draft-Token was supplied at
/// construction — a draft one whose headers are the public set plus the
/// draft credential. Both sessions and the resolved base address are fixed
/// at construction; any number of operations may run concurrently on the
/// same client.
///
/// ```rust,no_run
/// # async fn run() -> hacocms::Result<()> {
/// use hacocms::{HacoCmsClient, QueryParameters};
///
/// let client = HacoCmsClient::builder()
///     .base_url("https://example.hacocms.com")
///     .access_token("YOUR_ACCESS_TOKEN")
///     .build()?;
///
/// # #[derive(serde::Deserialize)]
/// # struct Post { #[serde(flatten)] system: hacocms::SystemFields }
/// # impl hacocms::ApiContent for Post {
/// #     fn id(&self) -> &str { &self.system.id }
/// #     fn created_at(&self) -> chrono::DateTime<chrono::Utc> { self.system.created_at }
/// #     fn updated_at(&self) -> chrono::DateTime<chrono::Utc> { self.system.updated_at }
/// #     fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.system.published_at }
/// #     fn closed_at(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.system.closed_at }
/// # }
/// let query = QueryParameters::new().limit(50).sort("-publishedAt,id");
/// let posts = client.get_list::<Post>("entries", Some(&query)).await?;
/// println!("{} of {} entries", posts.data.len(), posts.meta.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HacoCmsClient {
    base_url: Url,
    public: reqwest::Client,
    draft: Option<reqwest::Client>,
}

impl HacoCmsClient {
    pub fn builder() -> HacoCmsClientBuilder {
        HacoCmsClientBuilder::new()
    }

    /// Convenience constructor for published-only access. Use the builder to
    /// supply a Project-Draft-Token or a custom timeout.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .access_token(access_token)
            .build()
    }

    /// The resolved absolute prefix all request paths are joined to,
    /// `{origin}/api/v1/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a draft session was configured at construction.
    pub fn has_draft_session(&self) -> bool {
        self.draft.is_some()
    }

    /// Fetch a list of published contents from a list-format endpoint.
    pub async fn get_list<T: ApiContent>(
        &self,
        endpoint: &str,
        query: Option<&QueryParameters>,
    ) -> Result<ListApiResponse<T>> {
        self.fetch_list(&self.public, endpoint, query).await
    }

    /// Fetch a list of contents including unpublished drafts.
    ///
    /// Fails with [`Error::Configuration`] before any network activity if
    /// the client was built without a Project-Draft-Token.
    pub async fn get_list_including_draft<T: ApiContent>(
        &self,
        endpoint: &str,
        query: Option<&QueryParameters>,
    ) -> Result<ListApiResponse<T>> {
        let session = self
            .draft
            .as_ref()
            .ok_or_else(|| Error::configuration("need Project-Draft-Token to get draft contents"))?;
        self.fetch_list(session, endpoint, query).await
    }

    /// Fetch the content of a single-format endpoint.
    pub async fn get_single<T: ApiContent>(&self, endpoint: &str) -> Result<T> {
        let body = self.fetch(self.preferred_session(), endpoint, &[]).await?;
        let raw: serde_json::Value = serde_json::from_str(&body)?;
        T::from_json(raw)
    }

    /// Fetch one content of a list-format endpoint by id.
    ///
    /// `draft_token` is a per-request token for one specific unpublished
    /// revision, sent as a `draft` query parameter. It is independent of the
    /// session-level draft header and works on the public session too.
    pub async fn get_content<T: ApiContent>(
        &self,
        endpoint: &str,
        id: &str,
        draft_token: Option<&str>,
    ) -> Result<T> {
        let path = format!("{}/{}", endpoint.trim_end_matches('/'), id);
        let params: Vec<(String, String)> = draft_token
            .map(|token| vec![("draft".to_string(), token.to_string())])
            .unwrap_or_default();
        let body = self.fetch(self.preferred_session(), &path, &params).await?;
        let raw: serde_json::Value = serde_json::from_str(&body)?;
        T::from_json(raw)
    }

    async fn fetch_list<T: ApiContent>(
        &self,
        session: &reqwest::Client,
        endpoint: &str,
        query: Option<&QueryParameters>,
    ) -> Result<ListApiResponse<T>> {
        let pairs = query.map(QueryParameters::to_pairs).unwrap_or_default();
        let body = self.fetch(session, endpoint, &pairs).await?;
        let envelope: ListEnvelope = serde_json::from_str(&body)?;
        ListApiResponse::from_envelope(envelope)
    }

    /// Single and by-id reads always use the draft session when one exists:
    /// the draft credential is a strict superset of public access, so the
    /// elevated session can serve every read the public one can.
    fn preferred_session(&self) -> &reqwest::Client {
        self.draft.as_ref().unwrap_or(&self.public)
    }

    /// Issue one GET and return the raw body of a 2xx response.
    async fn fetch(
        &self,
        session: &reqwest::Client,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<String> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%url, "GET");
        let mut request = session.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::api(status.as_u16(), body));
        }
        Ok(body)
    }

    /// Resolve a relative endpoint path under the API root. A leading slash
    /// is trimmed so `/entries` and `entries` name the same endpoint.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| Error::configuration(format!("invalid endpoint path {endpoint:?}: {e}")))
    }
}

/// Builder for [`HacoCmsClient`].
///
/// `base_url` and `access_token` are required; everything else has a
/// default. No network activity happens at build time.
pub struct HacoCmsClientBuilder {
    base_url: Option<String>,
    access_token: Option<String>,
    project_draft_token: Option<String>,
    timeout: Duration,
}

impl HacoCmsClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            access_token: None,
            project_draft_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Project origin, `https://{subdomain}.hacocms.com/`. Any path on the
    /// origin is replaced by the fixed `/api/v1/` API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Project Access-Token, sent as `Authorization: Bearer …` on every
    /// request.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Project-Draft-Token. Supplying one enables the draft session and
    /// with it [`HacoCmsClient::get_list_including_draft`].
    pub fn project_draft_token(mut self, token: impl Into<String>) -> Self {
        self.project_draft_token = Some(token.into());
        self
    }

    /// Per-request timeout applied to both sessions. Defaults to 30 s.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HacoCmsClient> {
        let base = self
            .base_url
            .ok_or_else(|| Error::configuration("base URL must be specified"))?;
        let access_token = self
            .access_token
            .ok_or_else(|| Error::configuration("Access-Token must be specified"))?;

        let origin = Url::parse(&base)
            .map_err(|e| Error::configuration(format!("invalid base URL {base:?}: {e}")))?;
        let base_url = origin
            .join(API_ROOT)
            .map_err(|e| Error::configuration(format!("cannot resolve API root under {base:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {access_token}"))
            .map_err(|e| Error::configuration(format!("invalid Access-Token: {e}")))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let public = Self::session(headers.clone(), self.timeout)?;

        // The draft session carries every public header plus the draft
        // credential.
        let draft = match self.project_draft_token {
            Some(token) => {
                let mut value = HeaderValue::from_str(&token)
                    .map_err(|e| Error::configuration(format!("invalid Project-Draft-Token: {e}")))?;
                value.set_sensitive(true);
                let mut draft_headers = headers;
                draft_headers.insert(DRAFT_TOKEN_HEADER, value);
                Some(Self::session(draft_headers, self.timeout)?)
            }
            None => None,
        };

        Ok(HacoCmsClient {
            base_url,
            public,
            draft,
        })
    }

    fn session(headers: HeaderMap, timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP session: {e}")))
    }
}

impl Default for HacoCmsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
