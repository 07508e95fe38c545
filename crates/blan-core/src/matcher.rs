//! External skill-matching collaborator boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::job::Job;
use crate::profile::Profile;

/// Opaque generative-AI collaborator that ranks jobs against a resident's
/// skills.
///
/// This is a boundary, not an engine: implementations may call out to a
/// third-party API, and any failure or timeout must be absorbed by the
/// caller as "no recommendations" (an empty list) or a fixed placeholder
/// summary, never surfaced as a user-facing error. No retry or backoff is
/// layered on top.
#[async_trait]
pub trait SkillMatcher: Send + Sync {
    /// Returns the ids of the jobs best matching the profile's skills,
    /// ranked best-first.
    async fn match_jobs(&self, profile: &Profile, jobs: &[Job]) -> Result<Vec<String>>;

    /// Returns a short human-readable summary of the neighborhood's
    /// current skill gap.
    async fn summarize_needs(&self, jobs: &[Job]) -> Result<String>;
}
