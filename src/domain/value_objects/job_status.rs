use serde::{Deserialize, Serialize};

/// Lifecycle of a single transform job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Upload received, nothing checked yet
    Received,
    /// Filename passed the extension check
    Validated,
    /// Codec ran to completion
    Transformed,
    /// Output name derived
    Named,
    /// Output written to storage
    Persisted,
    /// Filename failed the extension check
    RejectedByValidator,
    /// Codec returned an error
    TransformFailed,
}

impl JobStatus {
    /// Check if transition is valid
    pub fn can_transition_to(&self, target: JobStatus) -> bool {
        matches!(
            (self, target),
            (JobStatus::Received, JobStatus::Validated)
                | (JobStatus::Received, JobStatus::RejectedByValidator)
                | (JobStatus::Validated, JobStatus::Transformed)
                | (JobStatus::Validated, JobStatus::TransformFailed)
                | (JobStatus::Transformed, JobStatus::Named)
                | (JobStatus::Named, JobStatus::Persisted)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobStatus::Persisted | JobStatus::RejectedByValidator | JobStatus::TransformFailed
        )
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Received => write!(f, "RECEIVED"),
            JobStatus::Validated => write!(f, "VALIDATED"),
            JobStatus::Transformed => write!(f, "TRANSFORMED"),
            JobStatus::Named => write!(f, "NAMED"),
            JobStatus::Persisted => write!(f, "PERSISTED"),
            JobStatus::RejectedByValidator => write!(f, "REJECTED_BY_VALIDATOR"),
            JobStatus::TransformFailed => write!(f, "TRANSFORM_FAILED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_happy_path() {
        assert!(JobStatus::Received.can_transition_to(JobStatus::Validated));
        assert!(JobStatus::Validated.can_transition_to(JobStatus::Transformed));
        assert!(JobStatus::Transformed.can_transition_to(JobStatus::Named));
        assert!(JobStatus::Named.can_transition_to(JobStatus::Persisted));
    }

    #[test]
    fn test_job_status_failure_edges() {
        assert!(JobStatus::Received.can_transition_to(JobStatus::RejectedByValidator));
        assert!(JobStatus::Validated.can_transition_to(JobStatus::TransformFailed));
        assert!(!JobStatus::Received.can_transition_to(JobStatus::TransformFailed));
        assert!(!JobStatus::Transformed.can_transition_to(JobStatus::RejectedByValidator));
    }

    #[test]
    fn test_job_status_invalid_skips() {
        assert!(!JobStatus::Received.can_transition_to(JobStatus::Transformed));
        assert!(!JobStatus::Validated.can_transition_to(JobStatus::Persisted));
        assert!(!JobStatus::Persisted.can_transition_to(JobStatus::Received));
        assert!(!JobStatus::TransformFailed.can_transition_to(JobStatus::Named));
    }

    #[test]
    fn test_terminal_states() {
        assert!(JobStatus::Persisted.is_terminal());
        assert!(JobStatus::RejectedByValidator.is_terminal());
        assert!(JobStatus::TransformFailed.is_terminal());
        assert!(!JobStatus::Named.is_terminal());
    }

    #[test]
    fn test_job_status_display() {
        assert_eq!(JobStatus::Received.to_string(), "RECEIVED");
        assert_eq!(
            JobStatus::RejectedByValidator.to_string(),
            "REJECTED_BY_VALIDATOR"
        );
    }
}
