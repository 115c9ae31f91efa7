use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{errors::DomainError, value_objects::JobStatus};

/// Tracks one request through validation, transform, naming and
/// persistence
#[derive(Debug, Clone)]
pub struct TransformJob {
    id: Uuid,
    status: JobStatus,
    received_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TransformJob {
    /// Create new job in RECEIVED state
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            status: JobStatus::Received,
            received_at: now,
            updated_at: now,
        }
    }

    fn transition(&mut self, to: JobStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(to) {
            return Err(DomainError::InvalidStateTransition {
                from: self.status,
                to,
            });
        }

        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn mark_validated(&mut self) -> Result<(), DomainError> {
        self.transition(JobStatus::Validated)
    }

    pub fn mark_rejected(&mut self) -> Result<(), DomainError> {
        self.transition(JobStatus::RejectedByValidator)
    }

    pub fn mark_transformed(&mut self) -> Result<(), DomainError> {
        self.transition(JobStatus::Transformed)
    }

    pub fn mark_failed(&mut self) -> Result<(), DomainError> {
        self.transition(JobStatus::TransformFailed)
    }

    pub fn mark_named(&mut self) -> Result<(), DomainError> {
        self.transition(JobStatus::Named)
    }

    pub fn mark_persisted(&mut self) -> Result<(), DomainError> {
        self.transition(JobStatus::Persisted)
    }

    // Getters
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> JobStatus {
        self.status
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Default for TransformJob {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_happy_path() {
        let mut job = TransformJob::new();
        assert_eq!(job.status(), JobStatus::Received);

        job.mark_validated().unwrap();
        job.mark_transformed().unwrap();
        job.mark_named().unwrap();
        job.mark_persisted().unwrap();

        assert_eq!(job.status(), JobStatus::Persisted);
        assert!(job.status().is_terminal());
        assert!(job.updated_at() >= job.received_at());
    }

    #[test]
    fn test_job_rejected_is_terminal() {
        let mut job = TransformJob::new();
        job.mark_rejected().unwrap();

        let err = job.mark_validated().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidStateTransition {
                from: JobStatus::RejectedByValidator,
                to: JobStatus::Validated,
            }
        );
    }

    #[test]
    fn test_job_cannot_skip_transform() {
        let mut job = TransformJob::new();
        job.mark_validated().unwrap();
        assert!(job.mark_named().is_err());
        assert_eq!(job.status(), JobStatus::Validated);
    }

    #[test]
    fn test_job_failure_after_validation() {
        let mut job = TransformJob::new();
        assert!(job.mark_failed().is_err());
        job.mark_validated().unwrap();
        job.mark_failed().unwrap();
        assert_eq!(job.status(), JobStatus::TransformFailed);
    }
}
