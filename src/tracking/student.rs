use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use super::assignment::{Assignment, Status};
use crate::notify::Notify;

/// Mutable student state, guarded by a single lock.
struct Inner {
    name: String,
    email: String,
    /// Insertion order is first-reference order; names are unique per student.
    assignments: Vec<Assignment>,
    /// At most one outstanding delayed transition per student.
    pending: Option<JoinHandle<()>>,
}

/// A student owning an ordered collection of assignments.
///
/// `Student` is a cheap cloneable handle around shared state so that
/// scheduled transitions (auto-submit after [`Student::start_working`],
/// random grading after [`Student::submit`] or a forced reminder) can
/// mutate the same student they were scheduled from. The timed operations
/// spawn onto the ambient tokio runtime.
#[derive(Clone)]
pub struct Student {
    inner: Arc<Mutex<Inner>>,
    notifier: Arc<dyn Notify>,
    grade_delay: Duration,
}

impl Student {
    /// Create a student with no assignments.
    ///
    /// `grade_delay` is the simulated latency before an auto-submit or
    /// auto-grade transition fires.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        notifier: Arc<dyn Notify>,
        grade_delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                name: name.into(),
                email: email.into(),
                assignments: Vec::new(),
                pending: None,
            })),
            notifier,
            grade_delay,
        }
    }

    pub fn name(&self) -> String {
        self.inner.lock().name.clone()
    }

    pub fn email(&self) -> String {
        self.inner.lock().email.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.lock().name = name.into();
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.inner.lock().email = email.into();
    }

    /// Update an assignment, creating it on first reference.
    ///
    /// An unknown assignment is created in the `released` state and a
    /// release notification fires before any pass/fail one. When a score is
    /// supplied the assignment is graded immediately and the resulting
    /// status is notified. A known assignment with no score is a no-op.
    pub fn update_status(&self, assignment: &str, score: Option<u8>) {
        let mut notices = Vec::new();
        {
            let mut inner = self.inner.lock();
            let student = inner.name.clone();
            match inner.assignments.iter_mut().find(|a| a.name == assignment) {
                Some(item) => {
                    if let Some(score) = score {
                        item.set_score(score);
                        notices.push((student, item.status));
                    }
                }
                None => {
                    let mut item = Assignment::new(assignment);
                    notices.push((student.clone(), Status::Released));
                    if let Some(score) = score {
                        item.set_score(score);
                        notices.push((student, item.status));
                    }
                    inner.assignments.push(item);
                }
            }
        }
        for (student, status) in notices {
            self.notifier.notify(&student, assignment, status);
        }
    }

    /// Human-readable status for a single assignment.
    ///
    /// Returns `"Hasn't been assigned"` for an unknown assignment,
    /// `"Pass"`/`"Fail"` once graded, and the raw status string otherwise.
    pub fn status_of(&self, assignment: &str) -> String {
        let inner = self.inner.lock();
        match inner.assignments.iter().find(|a| a.name == assignment) {
            None => "Hasn't been assigned".to_string(),
            Some(item) => match item.status {
                Status::Passed => "Pass".to_string(),
                Status::Failed => "Fail".to_string(),
                other => other.as_str().to_string(),
            },
        }
    }

    /// Arithmetic mean of all graded assignments, or 0.0 when none are graded.
    pub fn grade(&self) -> f64 {
        let inner = self.inner.lock();
        let scores: Vec<u8> = inner.assignments.iter().filter_map(|a| a.score()).collect();
        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64
    }

    /// The current lifecycle status of an assignment, if it exists.
    pub fn current_status(&self, assignment: &str) -> Option<Status> {
        self.inner
            .lock()
            .assignments
            .iter()
            .find(|a| a.name == assignment)
            .map(|a| a.status)
    }

    /// Whether any assignment is still in a non-terminal status.
    pub fn has_outstanding_work(&self) -> bool {
        self.inner
            .lock()
            .assignments
            .iter()
            .any(|a| !a.status.is_terminal())
    }

    /// Snapshot of all assignments in first-reference order.
    pub fn assignments(&self) -> Vec<Assignment> {
        self.inner.lock().assignments.clone()
    }

    /// Begin working on an existing assignment.
    ///
    /// Sets the status to `working` and schedules an auto-submit after the
    /// grading delay, superseding any previously pending transition.
    /// Unknown assignments are ignored.
    pub fn start_working(&self, assignment: &str) {
        let notice;
        {
            let mut inner = self.inner.lock();
            let student = inner.name.clone();
            let Some(item) = inner.assignments.iter_mut().find(|a| a.name == assignment)
            else {
                return;
            };
            item.status = Status::Working;
            notice = (student, Status::Working);

            if let Some(handle) = inner.pending.take() {
                handle.abort();
            }
            let me = self.clone();
            let name = assignment.to_string();
            inner.pending = Some(tokio::spawn(async move {
                sleep(me.grade_delay).await;
                me.submit(&name);
            }));
        }
        self.notifier.notify(&notice.0, assignment, notice.1);
    }

    /// Submit an existing assignment for grading.
    ///
    /// Cancels a pending auto-submit, sets the status to `submitted` and
    /// schedules random grading after the grading delay. Unknown
    /// assignments are ignored.
    pub fn submit(&self, assignment: &str) {
        let notice;
        {
            let mut inner = self.inner.lock();
            let student = inner.name.clone();
            let Some(item) = inner.assignments.iter_mut().find(|a| a.name == assignment)
            else {
                return;
            };
            item.status = Status::Submitted;
            notice = (student, Status::Submitted);
            self.schedule_grading(&mut inner, assignment);
        }
        self.notifier.notify(&notice.0, assignment, notice.1);
    }

    /// Force-submit after a final reminder, sent by the class list.
    ///
    /// Skipped (returns false) when the assignment is unknown or already
    /// graded. Otherwise notifies the reminder, cancels any pending
    /// transition, forces `submitted` and schedules random grading.
    pub fn remind(&self, assignment: &str) -> bool {
        let student;
        {
            let mut inner = self.inner.lock();
            student = inner.name.clone();
            let Some(item) = inner.assignments.iter_mut().find(|a| a.name == assignment)
            else {
                return false;
            };
            if item.status.is_terminal() {
                return false;
            }
            item.status = Status::Submitted;
            self.schedule_grading(&mut inner, assignment);
        }
        self.notifier
            .notify(&student, assignment, Status::FinalReminder);
        self.notifier.notify(&student, assignment, Status::Submitted);
        true
    }

    /// Abort the outstanding delayed transition, if any.
    ///
    /// Called when a student leaves the class list so that no orphaned
    /// callback mutates removed state.
    pub fn cancel_pending(&self) {
        if let Some(handle) = self.inner.lock().pending.take() {
            handle.abort();
        }
    }

    /// Whether a delayed transition is scheduled and has not yet fired.
    pub fn has_pending_transition(&self) -> bool {
        self.inner
            .lock()
            .pending
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    // Replaces any pending timer with a fresh grading task: sleep, then
    // grade with a uniform random score in [0, 100].
    fn schedule_grading(&self, inner: &mut Inner, assignment: &str) {
        if let Some(handle) = inner.pending.take() {
            handle.abort();
        }
        let me = self.clone();
        let name = assignment.to_string();
        inner.pending = Some(tokio::spawn(async move {
            sleep(me.grade_delay).await;
            let score = rand::thread_rng().gen_range(0..=100u8);
            me.update_status(&name, Some(score));
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;

    const DELAY: Duration = Duration::from_millis(500);

    fn make_student(sink: &Arc<MemoryNotifier>) -> Student {
        Student::new("Ana", "ana@example.edu", sink.clone(), DELAY)
    }

    #[test]
    fn update_status_creates_and_notifies_released() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);

        ana.update_status("HW1", None);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].status, Status::Released);
        assert_eq!(events[0].assignment, "HW1");
        assert_eq!(ana.status_of("HW1"), "released");
    }

    #[test]
    fn release_notification_precedes_grading_on_implicit_creation() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);

        ana.update_status("HW1", Some(70));

        let statuses: Vec<Status> = sink.events().iter().map(|e| e.status).collect();
        assert_eq!(statuses, vec![Status::Released, Status::Passed]);
    }

    #[test]
    fn grading_existing_assignment_notifies_only_pass_fail() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", None);

        ana.update_status("HW1", Some(70));

        let statuses: Vec<Status> = sink.events().iter().map(|e| e.status).collect();
        assert_eq!(statuses, vec![Status::Released, Status::Passed]);
        assert_eq!(ana.status_of("HW1"), "Pass");
        assert_eq!(ana.grade(), 70.0);
    }

    #[test]
    fn update_without_score_on_existing_assignment_is_noop() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", None);

        ana.update_status("HW1", None);

        assert_eq!(sink.events().len(), 1);
    }

    #[test]
    fn status_of_unknown_assignment() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        assert_eq!(ana.status_of("HW9"), "Hasn't been assigned");
    }

    #[test]
    fn status_of_failed_assignment() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", Some(50));
        assert_eq!(ana.status_of("HW1"), "Fail");
    }

    #[test]
    fn grade_is_zero_without_scores() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", None);
        assert_eq!(ana.grade(), 0.0);
    }

    #[test]
    fn grade_is_mean_of_scored_assignments() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", Some(90));
        ana.update_status("HW2", Some(40));
        ana.update_status("HW3", None); // ungraded, excluded from the mean
        assert_eq!(ana.grade(), 65.0);
    }

    #[test]
    fn rename_is_reflected_in_notifications() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.set_name("Ana Clara");
        ana.update_status("HW1", None);
        assert_eq!(sink.events()[0].student, "Ana Clara");
    }

    #[test]
    fn contact_details_are_mutable() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.set_email("ana.clara@example.edu");
        assert_eq!(ana.email(), "ana.clara@example.edu");
    }

    #[tokio::test(start_paused = true)]
    async fn start_working_auto_submits_and_grades() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", None);

        ana.start_working("HW1");
        assert_eq!(ana.status_of("HW1"), "working");

        // One delay to auto-submit, another to auto-grade.
        sleep(DELAY * 3).await;

        assert_eq!(sink.count_of(Status::Working), 1);
        assert_eq!(sink.count_of(Status::Submitted), 1);
        let status = ana.current_status("HW1").unwrap();
        assert!(status.is_terminal());
        assert!(ana.assignments()[0].score().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn start_working_on_unknown_assignment_is_noop() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);

        ana.start_working("HW9");
        sleep(DELAY * 3).await;

        assert!(sink.events().is_empty());
        assert_eq!(ana.status_of("HW9"), "Hasn't been assigned");
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_cancels_pending_auto_submit() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", None);

        ana.start_working("HW1");
        assert!(ana.remind("HW1"));

        sleep(DELAY * 4).await;

        // Only the forced submission; the auto-submit never fired.
        assert_eq!(sink.count_of(Status::Submitted), 1);
        assert_eq!(sink.count_of(Status::FinalReminder), 1);
        assert!(ana.current_status("HW1").unwrap().is_terminal());
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_skips_graded_assignment() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", Some(30));

        assert!(!ana.remind("HW1"));
        assert_eq!(sink.count_of(Status::FinalReminder), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reminder_on_unknown_assignment_returns_false() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        assert!(!ana.remind("HW9"));
        assert!(sink.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_pending_stops_the_scheduled_transition() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", None);

        ana.start_working("HW1");
        assert!(ana.has_pending_transition());
        ana.cancel_pending();

        sleep(DELAY * 3).await;

        assert_eq!(ana.status_of("HW1"), "working");
        assert_eq!(sink.count_of(Status::Submitted), 0);
        assert!(!ana.has_pending_transition());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_grades_with_a_random_score_in_range() {
        let sink = MemoryNotifier::new();
        let ana = make_student(&sink);
        ana.update_status("HW1", None);

        ana.submit("HW1");
        assert_eq!(ana.status_of("HW1"), "submitted");

        sleep(DELAY * 2).await;

        let score = ana.assignments()[0].score().unwrap();
        assert!(score <= 100);
        assert!(ana.current_status("HW1").unwrap().is_terminal());
    }
}
