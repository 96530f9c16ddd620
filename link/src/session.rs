//! Session lifecycle: login, registration, restoration and logout.
//!
//! A session is `{ email, token, role }` and is valid only while the token's
//! embedded expiry is in the future. The persisted record is adopted on
//! startup only after the token decodes cleanly and has not expired; anything
//! else is treated as "no session".

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    auth::AuthProvider,
    client::JobDeckClient,
    error::Result,
    storage::Storage,
    token::decode_claims,
};

/// Storage key for the persisted session record
pub const SESSION_KEY: &str = "session";

/// An authenticated session.
///
/// Invariant: the role comes from the token's claims, so an unauthenticated
/// caller can never hold a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub email: String,
    pub token: String,
    pub role: String,
}

impl Session {
    /// Build a session from a freshly issued token.
    ///
    /// Decodes the claims for the role and rejects tokens that are already
    /// expired or malformed.
    pub fn from_token(email: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        if claims.is_expired() {
            return Err(crate::error::LinkError::AuthenticationError(
                "token is already expired".into(),
            ));
        }
        Ok(Self {
            email: email.into(),
            token,
            role: claims.role,
        })
    }

    /// Whether this session may create, edit or delete job postings
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Bearer-token auth provider for API calls under this session
    pub fn auth_provider(&self) -> AuthProvider {
        AuthProvider::bearer_token(self.token.clone())
    }
}

/// Persists the current session and restores it across runs.
pub struct SessionStore<S: Storage> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restore the persisted session, if any.
    ///
    /// An unreadable record, a malformed token or a past expiry all yield
    /// `None` — never an error the caller has to handle.
    pub fn restore(&self) -> Option<Session> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("[SESSION] Failed to read stored session: {}", e);
                return None;
            }
        };

        let session: Session = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("[SESSION] Discarding unreadable session record: {}", e);
                return None;
            }
        };

        match decode_claims(&session.token) {
            Ok(claims) if !claims.is_expired() => Some(session),
            Ok(_) => {
                debug!("[SESSION] Stored token expired; discarding session");
                None
            }
            Err(e) => {
                warn!("[SESSION] Discarding session with malformed token: {}", e);
                None
            }
        }
    }

    /// Log in and persist the resulting session.
    ///
    /// On any failure the previously stored session is left untouched.
    pub async fn login(
        &mut self,
        client: &JobDeckClient,
        email: &str,
        password: &str,
    ) -> Result<Session> {
        let response = client.login(email, password).await?;
        let session = Session::from_token(email, response.token)?;
        self.persist(&session)?;
        Ok(session)
    }

    /// Register a new account, then log in with the same credentials.
    pub async fn register(
        &mut self,
        client: &JobDeckClient,
        email: &str,
        password: &str,
    ) -> Result<Session> {
        let response = client.register(email, password).await?;
        let session = Session::from_token(email, response.token)?;
        self.persist(&session)?;
        Ok(session)
    }

    /// Clear the persisted session.
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(SESSION_KEY)
    }

    fn persist(&mut self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.storage.set(SESSION_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::token::{encode_test_token, Claims};

    fn token(role: &str, exp: i64) -> String {
        encode_test_token(&Claims {
            sub: "alice@example.com".to_string(),
            role: role.to_string(),
            exp,
        })
    }

    fn stored(store: &mut SessionStore<MemoryStorage>, session: &Session) {
        let raw = serde_json::to_string(session).unwrap();
        store.storage.set(SESSION_KEY, &raw).unwrap();
    }

    #[test]
    fn test_restore_adopts_valid_session() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let session = Session {
            email: "alice@example.com".to_string(),
            token: token("admin", chrono::Utc::now().timestamp() + 3600),
            role: "admin".to_string(),
        };
        stored(&mut store, &session);

        let restored = store.restore().unwrap();
        assert_eq!(restored, session);
        assert!(restored.is_admin());
    }

    #[test]
    fn test_restore_discards_expired_token() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let session = Session {
            email: "alice@example.com".to_string(),
            token: token("admin", chrono::Utc::now().timestamp() - 60),
            role: "admin".to_string(),
        };
        stored(&mut store, &session);

        // A past expiry must never be adopted as an active session
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_discards_malformed_token() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let session = Session {
            email: "alice@example.com".to_string(),
            token: "garbage".to_string(),
            role: "admin".to_string(),
        };
        stored(&mut store, &session);

        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_discards_unparseable_record() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.storage.set(SESSION_KEY, "not json").unwrap();
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_restore_empty_store() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_logout_clears_session() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let session = Session {
            email: "alice@example.com".to_string(),
            token: token("user", chrono::Utc::now().timestamp() + 3600),
            role: "user".to_string(),
        };
        stored(&mut store, &session);
        assert!(store.restore().is_some());

        store.logout().unwrap();
        assert!(store.restore().is_none());
    }

    #[test]
    fn test_session_from_token_extracts_role() {
        let session = Session::from_token(
            "bob@example.com",
            token("user", chrono::Utc::now().timestamp() + 3600),
        )
        .unwrap();
        assert_eq!(session.role, "user");
        assert!(!session.is_admin());
        assert!(session.auth_provider().is_authenticated());
    }

    #[test]
    fn test_session_from_expired_token_is_rejected() {
        let result = Session::from_token(
            "bob@example.com",
            token("user", chrono::Utc::now().timestamp() - 1),
        );
        assert!(result.is_err());
    }
}
