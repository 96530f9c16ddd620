//! Data models for the job-board API.
//!
//! Collection and item endpoints wrap their JSON payloads in a `data`
//! envelope; login and registration return a bare token object.

use serde::{Deserialize, Serialize};

use crate::error::{LinkError, Result};

/// A job posting as returned by the server.
///
/// `id` and `date_posted` are server-assigned at creation and never change;
/// clients only ever send the three editable fields (see [`JobDraft`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    /// Server-assigned identifier. Some deployments emit `_id`.
    #[serde(alias = "_id")]
    pub id: String,

    pub title: String,

    pub company: String,

    pub description: String,

    /// Posting date, set once by the server (ISO date string)
    #[serde(rename = "datePosted", default)]
    pub date_posted: String,
}

/// The client-editable fields of a job posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub description: String,
}

impl JobDraft {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
        }
    }

    /// Require all three fields to be non-empty after trimming.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("title", &self.title),
            ("company", &self.company),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(LinkError::ValidationError(format!("{} is required", field)));
            }
        }
        Ok(())
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the JWT carrying role and expiry in its claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// The `data` envelope used by collection and item endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}
