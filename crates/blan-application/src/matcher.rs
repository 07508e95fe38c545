//! Degenerate skill-matcher for offline operation.

use async_trait::async_trait;

use blan_core::job::Job;
use blan_core::matcher::SkillMatcher;
use blan_core::profile::Profile;
use blan_core::Result;

use crate::job_board::NEEDS_SUMMARY_FALLBACK;

/// Collaborator used when no generative-AI backend is configured.
///
/// Behaves exactly like a failed call: no recommendations and the fixed
/// placeholder summary. No local matching algorithm is substituted.
pub struct OfflineMatcher;

#[async_trait]
impl SkillMatcher for OfflineMatcher {
    async fn match_jobs(&self, _profile: &Profile, _jobs: &[Job]) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn summarize_needs(&self, _jobs: &[Job]) -> Result<String> {
        Ok(NEEDS_SUMMARY_FALLBACK.to_string())
    }
}
