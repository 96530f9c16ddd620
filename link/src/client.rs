//! HTTP client for the job-board API with builder pattern.
//!
//! All operations target the single configured host. Failed requests are not
//! retried; the caller decides how to surface the error.

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::{
    auth::AuthProvider,
    error::{LinkError, Result},
    models::{Envelope, Job, JobDraft, LoginRequest, LoginResponse, RegisterRequest},
};

/// Client for the job-board REST API.
///
/// Use [`JobDeckClientBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust,no_run
/// use jobdeck_link::JobDeckClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = JobDeckClient::builder()
///     .base_url("http://localhost:8080")
///     .timeout(std::time::Duration::from_secs(30))
///     .build()?;
///
/// let jobs = client.list_jobs().await?;
/// println!("{} jobs", jobs.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JobDeckClient {
    base_url: String,
    http_client: reqwest::Client,
    auth: AuthProvider,
}

impl JobDeckClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> JobDeckClientBuilder {
        JobDeckClientBuilder::new()
    }

    /// The configured server URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticate with email and password.
    ///
    /// `POST /login`. Returns the JWT whose claims carry the role and expiry.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/login", self.base_url);
        debug!("[LOGIN] Authenticating '{}' at url={}", email, url);

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let start = Instant::now();
        let response = self.http_client.post(&url).json(&body).send().await?;
        let status = response.status();
        debug!(
            "[LOGIN] Response received in {:?}, status={}",
            start.elapsed(),
            status
        );

        if !status.is_success() {
            let message = Self::error_text(response).await;
            warn!("[LOGIN] Login failed: {}", message);
            return Err(LinkError::AuthenticationError(format!(
                "login failed ({}): {}",
                status, message
            )));
        }

        Ok(response.json::<LoginResponse>().await?)
    }

    /// Create a new account, then log in with the same credentials.
    ///
    /// `POST /users` followed by `POST /login`.
    pub async fn register(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/users", self.base_url);
        debug!("[REGISTER] Creating account '{}' at url={}", email, url);

        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.http_client.post(&url).json(&body).send().await?;
        let status = response.status();
        debug!("[REGISTER] Response status={}", status);

        if !status.is_success() {
            let message = Self::error_text(response).await;
            return Err(LinkError::AuthenticationError(format!(
                "registration failed ({}): {}",
                status, message
            )));
        }

        // Registration does not return a session; log in for one.
        self.login(email, password).await
    }

    /// Fetch the full job collection. `GET /jobs`.
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        let url = format!("{}/jobs", self.base_url);
        let response = self.get(&url).await?;
        let envelope: Envelope<Vec<Job>> = response.json().await?;
        Ok(envelope.data)
    }

    /// Fetch a single job by id. `GET /jobs/{id}`.
    pub async fn get_job(&self, id: &str) -> Result<Job> {
        let url = format!("{}/jobs/{}", self.base_url, id);
        let response = self.get(&url).await?;
        let envelope: Envelope<Job> = response.json().await?;
        Ok(envelope.data)
    }

    /// Create a job posting; the server assigns id and posting date.
    /// `POST /jobs`.
    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job> {
        let url = format!("{}/jobs", self.base_url);
        debug!("[JOBS] POST {}", url);

        let start = Instant::now();
        let request = self.auth.apply_to_request(self.http_client.post(&url).json(draft));
        let response = request.send().await?;
        let status = response.status();
        debug!(
            "[JOBS] Response received in {:?}, status={}",
            start.elapsed(),
            status
        );

        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }

        let envelope: Envelope<Job> = response.json().await?;
        Ok(envelope.data)
    }

    /// Replace the editable fields of a job. `PUT /jobs/{id}`.
    pub async fn update_job(&self, id: &str, draft: &JobDraft) -> Result<Job> {
        let url = format!("{}/jobs/{}", self.base_url, id);
        debug!("[JOBS] PUT {}", url);

        let start = Instant::now();
        let request = self.auth.apply_to_request(self.http_client.put(&url).json(draft));
        let response = request.send().await?;
        let status = response.status();
        debug!(
            "[JOBS] Response received in {:?}, status={}",
            start.elapsed(),
            status
        );

        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }

        let envelope: Envelope<Job> = response.json().await?;
        Ok(envelope.data)
    }

    /// Delete a job posting. `DELETE /jobs/{id}`, same host as every other
    /// call.
    pub async fn delete_job(&self, id: &str) -> Result<()> {
        let url = format!("{}/jobs/{}", self.base_url, id);
        debug!("[JOBS] DELETE {}", url);

        let request = self.auth.apply_to_request(self.http_client.delete(&url));
        let response = request.send().await?;
        let status = response.status();
        debug!("[JOBS] DELETE status={}", status);

        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }
        Ok(())
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!("[JOBS] GET {}", url);
        let start = Instant::now();
        let request = self.auth.apply_to_request(self.http_client.get(url));
        let response = request.send().await?;
        let status = response.status();
        debug!(
            "[JOBS] Response received in {:?}, status={}",
            start.elapsed(),
            status
        );

        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }
        Ok(response)
    }

    /// Map a non-2xx response to the error taxonomy.
    async fn error_for(status: reqwest::StatusCode, response: reqwest::Response) -> LinkError {
        let message = Self::error_text(response).await;
        warn!("[JOBS] Server error: status={} message=\"{}\"", status, message);
        match status.as_u16() {
            401 => LinkError::AuthenticationError(message),
            403 => LinkError::AuthorizationError(message),
            404 => LinkError::NotFound(message),
            code => LinkError::ServerError {
                status_code: code,
                message,
            },
        }
    }

    /// Best-effort extraction of an error message from a response body.
    ///
    /// Prefers `{"message": "..."}` or `{"error": "..."}` shapes, falling
    /// back to the raw body text.
    async fn error_text(response: reqwest::Response) -> String {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            for key in ["message", "error"] {
                if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                    return message.to_string();
                }
            }
        }
        text
    }
}

/// Builder for configuring [`JobDeckClient`] instances.
pub struct JobDeckClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    auth: AuthProvider,
}

impl JobDeckClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            auth: AuthProvider::none(),
        }
    }

    /// Set the base URL for the job-board server
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Set the request timeout (default 30s)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set bearer-token authentication
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthProvider::bearer_token(token);
        self
    }

    /// Set the authentication provider directly
    pub fn auth(mut self, auth: AuthProvider) -> Self {
        self.auth = auth;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<JobDeckClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| LinkError::ConfigurationError("base_url is required".into()))?;

        // Keep-alive connections avoid repeated TCP handshakes across calls
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| LinkError::ConfigurationError(e.to_string()))?;

        Ok(JobDeckClient {
            base_url,
            http_client,
            auth: self.auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let result = JobDeckClient::builder()
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(10))
            .bearer_token("test_token")
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_missing_url() {
        let result = JobDeckClient::builder().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = JobDeckClient::builder()
            .base_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
