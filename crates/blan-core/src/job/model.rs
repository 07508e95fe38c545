//! Neighborhood job domain models.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a job.
///
/// Transitions are monotonic: OPEN -> IN_PROGRESS -> COMPLETED, no state
/// may regress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    InProgress,
    Completed,
}

impl JobStatus {
    /// Whether a transition from `self` to `next` preserves monotonicity.
    pub fn can_advance_to(self, next: JobStatus) -> bool {
        matches!(
            (self, next),
            (JobStatus::Open, JobStatus::InProgress)
                | (JobStatus::InProgress, JobStatus::Completed)
        )
    }
}

/// Result of a claim attempt. Rejections are guarded no-ops, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    AlreadyClaimed,
    NotFound,
}

/// A help-request posted to the neighborhood job board.
///
/// Invariant: `assigned_to` is set if and only if status != OPEN, and once
/// set it never changes (there is no unassign operation; claims are
/// monotonic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub posted_by: String,
    pub poster_name: String,
    pub reward: i64,
    pub required_skills: Vec<String>,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub location: String,
}

impl Job {
    /// Attempts to claim this job for `actor_id`.
    ///
    /// Succeeds only when the job is OPEN and unassigned; anything else is
    /// a no-op that leaves the existing assignee untouched.
    pub fn claim(&mut self, actor_id: &str) -> ClaimOutcome {
        if self.status != JobStatus::Open || self.assigned_to.is_some() {
            return ClaimOutcome::AlreadyClaimed;
        }
        self.status = JobStatus::InProgress;
        self.assigned_to = Some(actor_id.to_string());
        ClaimOutcome::Claimed
    }

    /// Whether the job is open for claiming.
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open && self.assigned_to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_job() -> Job {
        Job {
            id: "job-1".to_string(),
            title: "Leaking Sink Repair".to_string(),
            description: "Kitchen sink has a slow leak.".to_string(),
            posted_by: "u-elderly-1".to_string(),
            poster_name: "Mrs. Gable".to_string(),
            reward: 50,
            required_skills: vec!["Plumbing".to_string()],
            status: JobStatus::Open,
            assigned_to: None,
            location: "Section A-3".to_string(),
        }
    }

    #[test]
    fn test_claim_open_job() {
        let mut job = open_job();
        assert_eq!(job.claim("u-777"), ClaimOutcome::Claimed);
        assert_eq!(job.status, JobStatus::InProgress);
        assert_eq!(job.assigned_to.as_deref(), Some("u-777"));
    }

    #[test]
    fn test_second_claim_is_noop() {
        let mut job = open_job();
        job.claim("u-a");
        assert_eq!(job.claim("u-b"), ClaimOutcome::AlreadyClaimed);
        assert_eq!(job.assigned_to.as_deref(), Some("u-a"));
        assert_eq!(job.status, JobStatus::InProgress);
    }

    #[test]
    fn test_status_monotonicity() {
        assert!(JobStatus::Open.can_advance_to(JobStatus::InProgress));
        assert!(JobStatus::InProgress.can_advance_to(JobStatus::Completed));
        assert!(!JobStatus::InProgress.can_advance_to(JobStatus::Open));
        assert!(!JobStatus::Completed.can_advance_to(JobStatus::InProgress));
        assert!(!JobStatus::Completed.can_advance_to(JobStatus::Open));
        assert!(!JobStatus::Open.can_advance_to(JobStatus::Completed));
    }

    #[test]
    fn test_status_serializes_screaming_snake() {
        let json = serde_json::to_value(JobStatus::InProgress).unwrap();
        assert_eq!(json, serde_json::json!("IN_PROGRESS"));
    }

    #[test]
    fn test_absent_assignee_is_omitted() {
        let json = serde_json::to_value(open_job()).unwrap();
        assert!(json.get("assignedTo").is_none());
        assert!(json.get("requiredSkills").is_some());
    }
}
