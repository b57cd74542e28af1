use tokio::task::JoinSet;

use super::student::Student;
use crate::error::GradeflowError;

/// An ordered collection of students supporting bulk operations.
///
/// Name uniqueness is not enforced; lookups and removal act on the first
/// match in insertion order.
#[derive(Default)]
pub struct ClassList {
    students: Vec<Student>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Append a student and print a plain confirmation line.
    pub fn add(&mut self, student: Student) {
        println!("{} has been added to the classlist.", student.name());
        self.students.push(student);
    }

    /// Remove the first student matching `name`, cancelling their pending
    /// transition so no orphaned callback fires after removal.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.students.iter().position(|s| s.name() == name) {
            Some(index) => {
                let student = self.students.remove(index);
                student.cancel_pending();
                true
            }
            None => false,
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name() == name)
    }

    /// Names of students with outstanding work for `assignment`.
    ///
    /// A student counts when the named assignment exists and is not yet
    /// graded, or when the assignment was never assigned to them but they
    /// still have any ungraded assignment. Order follows the class list.
    pub fn find_outstanding(&self, assignment: &str) -> Vec<String> {
        self.students
            .iter()
            .filter(|student| match student.current_status(assignment) {
                Some(status) => !status.is_terminal(),
                None => student.has_outstanding_work(),
            })
            .map(|student| student.name())
            .collect()
    }

    /// Release every assignment to every student, each update scheduled as
    /// an independent task.
    ///
    /// Resolves only after the whole fan-out has run. Units are not ordered
    /// relative to each other; a failed unit does not stop the rest, and
    /// the first join failure is reported once all units have settled.
    pub async fn release_all(&self, assignments: &[&str]) -> Result<(), GradeflowError> {
        let mut set = JoinSet::new();
        for assignment in assignments {
            for student in &self.students {
                let student = student.clone();
                let assignment = assignment.to_string();
                set.spawn(async move {
                    student.update_status(&assignment, None);
                });
            }
        }

        let mut first_err = None;
        while let Some(result) = set.join_next().await {
            if let Err(e) = result {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Escalate an overdue assignment: every student still holding it in a
    /// non-terminal status is force-submitted for grading. Students lacking
    /// the assignment or already graded are skipped silently.
    pub fn send_reminder(&self, assignment: &str) {
        for student in &self.students {
            student.remind(assignment);
        }
    }
}
