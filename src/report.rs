use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::tracking::{ClassList, Status, Student};

/// Snapshot of one assignment inside a report.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentReport {
    pub name: String,
    pub status: Status,
    pub score: Option<u8>,
}

/// Per-student summary: current assignments and the running average.
#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    pub name: String,
    pub email: String,
    pub average: f64,
    pub assignments: Vec<AssignmentReport>,
}

impl StudentReport {
    fn from_student(student: &Student) -> Self {
        Self {
            name: student.name(),
            email: student.email(),
            average: student.grade(),
            assignments: student
                .assignments()
                .iter()
                .map(|a| AssignmentReport {
                    name: a.name.clone(),
                    status: a.status,
                    score: a.score(),
                })
                .collect(),
        }
    }
}

/// Structured snapshot of a whole class list at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub generated_at: DateTime<Utc>,
    pub students: Vec<StudentReport>,
}

impl GradeReport {
    /// Capture the current state of every student in class-list order.
    pub fn from_class_list(class: &ClassList) -> Self {
        Self {
            generated_at: Utc::now(),
            students: class.students().iter().map(StudentReport::from_student).collect(),
        }
    }
}
