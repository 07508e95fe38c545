//! Job board use cases: the claim workflow and skill-match
//! recommendations.

use std::sync::Arc;
use std::time::Duration;

use blan_core::channel::{names, StateChannel};
use blan_core::job::{ClaimOutcome, Job};
use blan_core::matcher::SkillMatcher;
use blan_core::profile::Profile;
use blan_core::store::KeyValueStore;

use crate::seeds;

/// Fallback summary shown while (or when) the collaborator cannot answer.
pub const NEEDS_SUMMARY_FALLBACK: &str = "Analyzing local skill trends...";

/// Use-case service over the jobs channel.
pub struct JobBoard {
    jobs: StateChannel<Vec<Job>>,
    matcher: Arc<dyn SkillMatcher>,
    matcher_timeout: Duration,
}

impl JobBoard {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        matcher: Arc<dyn SkillMatcher>,
        matcher_timeout: Duration,
    ) -> Self {
        Self {
            jobs: StateChannel::new(names::JOBS, store),
            matcher,
            matcher_timeout,
        }
    }

    /// Current jobs, seeded on first load.
    pub async fn list(&self) -> Vec<Job> {
        self.jobs.load(seeds::initial_jobs()).await
    }

    /// Attempts to claim a job for `actor_id`.
    ///
    /// Claims are monotonic: an already-claimed job is a guarded no-op that
    /// leaves the existing assignee untouched, and nothing is written to
    /// the channel on rejection. The outcome is returned for observability
    /// but never surfaced as an error.
    pub async fn claim(&self, job_id: &str, actor_id: &str) -> blan_core::Result<ClaimOutcome> {
        let mut jobs = self.list().await;
        let Some(job) = jobs.iter_mut().find(|j| j.id == job_id) else {
            tracing::debug!(job_id, "claim on unknown job ignored");
            return Ok(ClaimOutcome::NotFound);
        };

        let outcome = job.claim(actor_id);
        match outcome {
            ClaimOutcome::Claimed => {
                self.jobs.save(&jobs).await?;
                tracing::debug!(job_id, actor_id, "job claimed");
            }
            ClaimOutcome::AlreadyClaimed => {
                tracing::debug!(job_id, actor_id, "claim on non-open job ignored");
            }
            ClaimOutcome::NotFound => unreachable!("job was found above"),
        }
        Ok(outcome)
    }

    /// Asks the skill-matching collaborator for the resident's best job
    /// ids, ranked best-first.
    ///
    /// Any collaborator failure or timeout degrades to no recommendations;
    /// it is never a user-facing error.
    pub async fn recommendations(&self, profile: &Profile) -> Vec<String> {
        let jobs = self.list().await;
        match tokio::time::timeout(self.matcher_timeout, self.matcher.match_jobs(profile, &jobs))
            .await
        {
            Ok(Ok(ids)) => ids,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "skill matcher failed, no recommendations");
                Vec::new()
            }
            Err(_) => {
                tracing::warn!(timeout = ?self.matcher_timeout, "skill matcher timed out");
                Vec::new()
            }
        }
    }

    /// Asks the collaborator for a short neighborhood skill-gap summary,
    /// falling back to a fixed placeholder on failure or timeout.
    pub async fn needs_summary(&self) -> String {
        let jobs = self.list().await;
        match tokio::time::timeout(self.matcher_timeout, self.matcher.summarize_needs(&jobs)).await
        {
            Ok(Ok(summary)) => summary,
            Ok(Err(_)) | Err(_) => NEEDS_SUMMARY_FALLBACK.to_string(),
        }
    }
}
