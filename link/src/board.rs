//! Job-collection store.
//!
//! Mirrors the remote job collection into memory and a persisted local cache.
//! The remote API is the source of truth: every successful mutation replaces
//! the in-memory collection wholesale and writes the full collection back to
//! storage. A failed call leaves prior state intact — there is no partial
//! write and no rollback to perform.

use log::{debug, warn};

use crate::{
    client::JobDeckClient,
    error::{LinkError, Result},
    models::{Job, JobDraft},
    session::Session,
    storage::Storage,
};

/// Storage key for the denormalized job-collection cache
pub const JOBS_KEY: &str = "jobs";

/// Stateful store over the remote job collection.
///
/// Ordering follows the server response (newest first by convention, not
/// enforced here). Mutating operations are gated to admin sessions and
/// validated before any network call is made.
pub struct JobBoard<S: Storage> {
    client: JobDeckClient,
    storage: S,
    session: Option<Session>,
    jobs: Vec<Job>,
}

impl<S: Storage> JobBoard<S> {
    pub fn new(client: JobDeckClient, storage: S, session: Option<Session>) -> Self {
        Self {
            client,
            storage,
            session,
            jobs: Vec::new(),
        }
    }

    /// The current in-memory collection, in server order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Fetch the collection from the API.
    ///
    /// Requires a session. On failure the collection is left empty rather
    /// than falling back to the stale local cache — the cache exists for
    /// other consumers, not as an offline mode.
    pub async fn refresh(&mut self) -> Result<()> {
        if self.session.is_none() {
            debug!("[BOARD] No session; skipping fetch");
            self.jobs.clear();
            return Err(LinkError::AuthenticationError("not signed in".into()));
        }

        match self.client.list_jobs().await {
            Ok(jobs) => {
                debug!("[BOARD] Fetched {} jobs", jobs.len());
                self.jobs = jobs;
                Ok(())
            }
            Err(e) => {
                warn!("[BOARD] Failed to fetch job listings: {}", e);
                self.jobs.clear();
                Err(e)
            }
        }
    }

    /// Create a job posting.
    ///
    /// Admin-gated and validated before any network call. On success the
    /// server-returned record is prepended and the collection persisted.
    pub async fn create(&mut self, draft: &JobDraft) -> Result<Job> {
        self.require_admin()?;
        draft.validate()?;

        let job = self.client.create_job(draft).await?;
        self.apply_created(job.clone())?;
        Ok(job)
    }

    /// Replace the editable fields of the job with the given id.
    pub async fn update(&mut self, id: &str, draft: &JobDraft) -> Result<Job> {
        self.require_admin()?;
        draft.validate()?;

        let job = self.client.update_job(id, draft).await?;
        self.apply_updated(job.clone())?;
        Ok(job)
    }

    /// Delete the job with the given id.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.require_admin()?;

        self.client.delete_job(id).await?;
        self.apply_removed(id)
    }

    /// Fetch a single job from the API.
    ///
    /// Absence is a normal outcome (`Ok(None)`), not an error.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Job>> {
        match self.client.get_job(id).await {
            Ok(job) => Ok(Some(job)),
            Err(LinkError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Case-insensitive substring search over title, company and description.
    pub fn filter(&self, term: &str) -> Vec<&Job> {
        let needle = term.to_lowercase();
        self.jobs
            .iter()
            .filter(|job| {
                job.title.to_lowercase().contains(&needle)
                    || job.company.to_lowercase().contains(&needle)
                    || job.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn require_admin(&self) -> Result<()> {
        match &self.session {
            Some(session) if session.is_admin() => Ok(()),
            Some(_) => Err(LinkError::AuthorizationError(
                "only admins can modify job postings".into(),
            )),
            None => Err(LinkError::AuthorizationError(
                "sign in as an admin to modify job postings".into(),
            )),
        }
    }

    fn apply_created(&mut self, job: Job) -> Result<()> {
        self.jobs.insert(0, job);
        self.persist()
    }

    fn apply_updated(&mut self, job: Job) -> Result<()> {
        if let Some(slot) = self.jobs.iter_mut().find(|j| j.id == job.id) {
            *slot = job;
        }
        self.persist()
    }

    fn apply_removed(&mut self, id: &str) -> Result<()> {
        self.jobs.retain(|job| job.id != id);
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.jobs)?;
        self.storage.set(JOBS_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::token::{encode_test_token, Claims};

    fn job(id: &str, title: &str) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            description: "Build things".to_string(),
            date_posted: "2024-01-15".to_string(),
        }
    }

    fn session(role: &str) -> Session {
        let token = encode_test_token(&Claims {
            sub: "alice@example.com".to_string(),
            role: role.to_string(),
            exp: chrono::Utc::now().timestamp() + 3600,
        });
        Session {
            email: "alice@example.com".to_string(),
            token,
            role: role.to_string(),
        }
    }

    fn board(session: Option<Session>) -> JobBoard<MemoryStorage> {
        // The client is never contacted in these tests: gating and local
        // state transitions both run without touching the network.
        let client = JobDeckClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        JobBoard::new(client, MemoryStorage::new(), session)
    }

    fn cached_jobs(board: &JobBoard<MemoryStorage>) -> Vec<Job> {
        match board.storage.get(JOBS_KEY).unwrap() {
            Some(raw) => serde_json::from_str(&raw).unwrap(),
            None => Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_create_rejected_without_admin_role() {
        let mut board = board(Some(session("user")));
        let draft = JobDraft::new("Engineer", "Acme", "Build things");

        match board.create(&draft).await {
            Err(LinkError::AuthorizationError(_)) => {}
            other => panic!("expected AuthorizationError, got {:?}", other),
        }

        // No state change, no cache write
        assert!(board.jobs().is_empty());
        assert!(board.storage.get(JOBS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_rejected_without_session() {
        let mut board = board(None);
        let draft = JobDraft::new("Engineer", "Acme", "Build things");

        match board.update("1", &draft).await {
            Err(LinkError::AuthorizationError(_)) => {}
            other => panic!("expected AuthorizationError, got {:?}", other),
        }
        assert!(board.storage.get(JOBS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_rejected_without_admin_role() {
        let mut board = board(Some(session("user")));
        assert!(matches!(
            board.delete("1").await,
            Err(LinkError::AuthorizationError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields_before_network() {
        let mut board = board(Some(session("admin")));
        let draft = JobDraft::new("", "Acme", "Build things");

        // Validation fires before the (unreachable) network call
        match board.create(&draft).await {
            Err(LinkError::ValidationError(_)) => {}
            other => panic!("expected ValidationError, got {:?}", other),
        }
        assert!(board.storage.get(JOBS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_created_record_is_prepended_once_and_cached() {
        let mut board = board(Some(session("admin")));
        board.jobs = vec![job("1", "Old")];

        board.apply_created(job("2", "New")).unwrap();

        let ids: Vec<&str> = board.jobs().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        assert_eq!(
            board.jobs().iter().filter(|j| j.id == "2").count(),
            1
        );
        assert_eq!(cached_jobs(&board), board.jobs);
    }

    #[test]
    fn test_update_replaces_exactly_the_matching_record() {
        let mut board = board(Some(session("admin")));
        board.jobs = vec![job("1", "Old title"), job("2", "Other")];

        let mut updated = job("1", "New title");
        updated.company = "NewCorp".to_string();
        board.apply_updated(updated.clone()).unwrap();

        assert_eq!(board.jobs()[0], updated);
        assert_eq!(board.jobs()[1], job("2", "Other"));
        assert_eq!(cached_jobs(&board), board.jobs);
    }

    #[test]
    fn test_delete_removes_from_memory_and_cache() {
        let mut board = board(Some(session("admin")));
        board.jobs = vec![job("1", "First"), job("2", "Second")];

        board.apply_removed("1").unwrap();

        assert_eq!(board.jobs(), &[job("2", "Second")]);
        assert_eq!(cached_jobs(&board), vec![job("2", "Second")]);
    }

    #[test]
    fn test_filter_matches_any_field_case_insensitively() {
        let mut board = board(None);
        board.jobs = vec![job("1", "Frontend Developer"), job("2", "Backend Engineer")];
        board.jobs[1].company = "CloudTech".to_string();

        assert_eq!(board.filter("frontend").len(), 1);
        assert_eq!(board.filter("CLOUDTECH").len(), 1);
        // Both descriptions say "Build things"
        assert_eq!(board.filter("build").len(), 2);
        assert_eq!(board.filter("nothing-matches").len(), 0);
    }

    #[tokio::test]
    async fn test_refresh_without_session_leaves_collection_empty() {
        let mut board = board(None);
        board.jobs = vec![job("1", "Stale")];

        assert!(board.refresh().await.is_err());
        assert!(board.jobs().is_empty());
    }
}
