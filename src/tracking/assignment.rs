use std::fmt;

use serde::{Deserialize, Serialize};

/// The lifecycle states of an assignment.
///
/// Each assignment flows through: released → working → submitted → passed/failed,
/// with a reminder side path forced by the class list:
/// released|working|submitted → final reminder → submitted → passed/failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Released,
    Working,
    Submitted,
    FinalReminder,
    Passed,
    Failed,
}

impl Status {
    /// The wire/display form used in notifications and status queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Released => "released",
            Status::Working => "working",
            Status::Submitted => "submitted",
            Status::FinalReminder => "final reminder",
            Status::Passed => "passed",
            Status::Failed => "failed",
        }
    }

    /// Passed and failed are terminal — no automatic transition leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Passed | Status::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single gradable unit owned by exactly one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub status: Status,
    score: Option<u8>,
}

impl Assignment {
    /// Create a fresh assignment in the `released` state with no score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: Status::Released,
            score: None,
        }
    }

    /// Store a score and derive the terminal status from it.
    ///
    /// The pass mark is strictly greater than 50: a score of 50 fails,
    /// 51 passes. The score is stored as-is, without range validation.
    pub fn set_score(&mut self, score: u8) {
        self.score = Some(score);
        self.status = if score > 50 {
            Status::Passed
        } else {
            Status::Failed
        };
    }

    /// The score, or `None` if the assignment has not been graded.
    pub fn score(&self) -> Option<u8> {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assignment_is_released_and_ungraded() {
        let a = Assignment::new("HW1");
        assert_eq!(a.status, Status::Released);
        assert_eq!(a.score(), None);
    }

    #[test]
    fn score_above_pass_mark_passes() {
        let mut a = Assignment::new("HW1");
        a.set_score(51);
        assert_eq!(a.status, Status::Passed);
        assert_eq!(a.score(), Some(51));
    }

    #[test]
    fn score_at_pass_mark_fails() {
        let mut a = Assignment::new("HW1");
        a.set_score(50);
        assert_eq!(a.status, Status::Failed);
        assert_eq!(a.score(), Some(50));
    }

    #[test]
    fn regrading_reevaluates_status() {
        let mut a = Assignment::new("HW1");
        a.set_score(40);
        assert_eq!(a.status, Status::Failed);
        a.set_score(90);
        assert_eq!(a.status, Status::Passed);
    }

    #[test]
    fn terminal_statuses() {
        assert!(Status::Passed.is_terminal());
        assert!(Status::Failed.is_terminal());
        assert!(!Status::Released.is_terminal());
        assert!(!Status::Working.is_terminal());
        assert!(!Status::Submitted.is_terminal());
        assert!(!Status::FinalReminder.is_terminal());
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Released.to_string(), "released");
        assert_eq!(Status::FinalReminder.to_string(), "final reminder");
        assert_eq!(Status::Passed.to_string(), "passed");
    }
}
