use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

/// Client for the AI Explorer REST API.
///
/// Every call carries `Accept: application/json` and, when a token is
/// configured, a bearer `Authorization` header. Requests time out after
/// 30 seconds; there are no retries.
#[derive(Debug, Clone)]
pub struct ExplorerApi {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

/// Response of `POST /api/tasks`
#[derive(Deserialize, Debug, Clone)]
pub struct TaskCreated {
    #[serde(rename = "taskId")]
    pub task_id: String,
}

/// Tool metadata as served by the recommendation and session endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub id: String,
    pub name: String,
    pub category: String,
    pub supports_embed: bool,
    pub site_url: String,
}

/// One entry of `GET /api/tasks/{id}/recommendations`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub tool: ToolInfo,
    pub rationale: String,
}

/// Body of `POST /api/sessions`
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreateRequest {
    pub task_id: String,
    pub tool_id: String,
}

/// Response of `POST /api/sessions`
#[derive(Deserialize, Debug, Clone)]
pub struct SessionCreated {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// One entry of `GET /api/tasks/{id}/sessions`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
}

/// Response of `GET /api/sessions/{id}`.
///
/// The transcript arrives as a JSON string encoding a list of
/// role/content pairs; use [`SessionDetail::parse_transcript`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionDetail {
    pub id: String,
    pub title: String,
    pub transcript: String,
    pub tool: ToolInfo,
}

/// A single transcript entry; also the body of `POST /api/sessions/{id}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranscriptMessage {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

// The server omits the role on some older transcripts; the original
// client treated those entries as assistant messages.
fn default_role() -> String {
    "assistant".to_string()
}

impl SessionCreateRequest {
    pub fn new(task_id: impl Into<String>, tool_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            tool_id: tool_id.into(),
        }
    }
}

impl SessionDetail {
    /// Decode the serialized transcript into its individual messages
    pub fn parse_transcript(&self) -> Result<Vec<TranscriptMessage>, ApiError> {
        serde_json::from_str(&self.transcript)
            .map_err(|e| ApiError::Transcript(e.to_string()))
    }
}

impl TranscriptMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// Custom error type for the Explorer API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Malformed transcript: {0}")]
    Transcript(String),
}

/// Presentation of an error body: parsed JSON when the server sends
/// it, the raw text otherwise.
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json.to_string(),
        Err(_) => body.to_string(),
    }
}

impl ExplorerApi {
    /// Build a client honoring the 30-second request timeout. Fails
    /// only when the underlying TLS/connector setup fails, which is
    /// fatal for the whole app.
    pub fn new(base_url: String, api_token: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("Accept", "application/json");

        if let Some(token) = &self.api_token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        builder
    }

    /// Turn any HTTP error status into an [`ApiError::Status`] carrying
    /// the server's own error body; pass successful responses through.
    async fn check_status(&self, path: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.as_u16() >= 400 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let detail = error_detail(&body);
            warn!("API error on {}: {} {}", path, status, detail);

            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        info!("{} -> {}", path, status);
        Ok(response)
    }

    /// Check the response status and deserialize the body on success
    async fn read_response<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T, ApiError> {
        let response = self.check_status(path, response).await?;
        Ok(response.json().await?)
    }

    /// `GET /api/health` — opaque payload, only reachability matters
    pub async fn health(&self) -> Result<Value, ApiError> {
        let response = self.request(Method::GET, "/api/health").send().await?;
        self.read_response("/api/health", response).await
    }

    /// `POST /api/tasks`
    pub async fn create_task(&self, description: &str) -> Result<TaskCreated, ApiError> {
        let response = self
            .request(Method::POST, "/api/tasks")
            .json(&serde_json::json!({ "description": description }))
            .send()
            .await?;
        self.read_response("/api/tasks", response).await
    }

    /// `GET /api/tasks/{id}/recommendations`
    pub async fn recommendations(&self, task_id: &str) -> Result<Vec<Recommendation>, ApiError> {
        let path = format!("/api/tasks/{}/recommendations", task_id);
        let response = self.request(Method::GET, &path).send().await?;
        self.read_response(&path, response).await
    }

    /// `POST /api/sessions`
    pub async fn create_session(
        &self,
        request: &SessionCreateRequest,
    ) -> Result<SessionCreated, ApiError> {
        let response = self
            .request(Method::POST, "/api/sessions")
            .json(request)
            .send()
            .await?;
        self.read_response("/api/sessions", response).await
    }

    /// `GET /api/tasks/{id}/sessions`
    pub async fn task_sessions(&self, task_id: &str) -> Result<Vec<SessionSummary>, ApiError> {
        let path = format!("/api/tasks/{}/sessions", task_id);
        let response = self.request(Method::GET, &path).send().await?;
        self.read_response(&path, response).await
    }

    /// `GET /api/sessions/{id}`
    pub async fn session(&self, session_id: &str) -> Result<SessionDetail, ApiError> {
        let path = format!("/api/sessions/{}", session_id);
        let response = self.request(Method::GET, &path).send().await?;
        self.read_response(&path, response).await
    }

    /// `POST /api/sessions/{id}` — append a message to the transcript.
    /// The response body is ignored beyond the error check; callers
    /// refetch the session detail afterwards.
    pub async fn post_message(
        &self,
        session_id: &str,
        message: &TranscriptMessage,
    ) -> Result<(), ApiError> {
        let path = format!("/api/sessions/{}", session_id);
        let response = self
            .request(Method::POST, &path)
            .json(message)
            .send()
            .await?;

        self.check_status(&path, response).await?;
        Ok(())
    }
}
