//! Client library for the jobdeck job-board API.
//!
//! Provides the HTTP client, session lifecycle (token decode, expiry check,
//! role extraction) and the job-collection store that mirrors API results
//! into a persisted local cache.

pub mod auth;
pub mod board;
pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;
pub mod token;

pub use auth::AuthProvider;
pub use board::JobBoard;
pub use client::{JobDeckClient, JobDeckClientBuilder};
pub use error::{LinkError, Result};
pub use models::{Envelope, Job, JobDraft, LoginRequest, LoginResponse, RegisterRequest};
pub use session::{Session, SessionStore};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use token::{decode_claims, Claims};
