//! Teacher and student accounts: capabilities composed over an identity.
//!
//! There is no role hierarchy. A teacher account is an identity plus the
//! registries it owns; a student account is an identity plus a submission
//! capability. Ownership of a registry is the only thing that makes an
//! account a teacher.

use chrono::{DateTime, Utc};

use crate::events::{Event, EventSink};
use crate::identity::{Identity, Role};
use crate::model::{Assignment, PresentationSlide, Question, Quiz};
use crate::registry::{Registry, UpdateOutcome};

/// A teacher-role account and the artifact registries it owns.
///
/// All mutation goes through `&mut self`, so exclusive access is
/// compiler-enforced; no locking exists or is needed in this model.
#[derive(Debug, Clone)]
pub struct TeacherAccount {
    identity: Identity,
    assignments: Registry<Assignment>,
    quizzes: Registry<Quiz>,
    slides: Registry<PresentationSlide>,
}

impl TeacherAccount {
    pub fn new(username: &str, password: &str, name: &str, email: &str) -> Self {
        Self {
            identity: Identity::new(username, password, name, email, Role::Teacher),
            assignments: Registry::new(),
            quizzes: Registry::new(),
            slides: Registry::new(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    pub fn assignments(&self) -> &Registry<Assignment> {
        &self.assignments
    }

    pub fn quizzes(&self) -> &Registry<Quiz> {
        &self.quizzes
    }

    pub fn slides(&self) -> &Registry<PresentationSlide> {
        &self.slides
    }

    // --- assignments -------------------------------------------------------

    pub fn create_assignment(
        &mut self,
        title: &str,
        description: &str,
        due: DateTime<Utc>,
    ) -> &Assignment {
        let owner = self.identity.username().to_string();
        self.assignments
            .create(|id| Assignment::new(id, title, description, due, &owner))
    }

    /// Overwrite the mutable fields of the matching assignment.
    pub fn update_assignment(
        &mut self,
        id: u32,
        title: &str,
        description: &str,
        due: DateTime<Utc>,
    ) -> UpdateOutcome {
        self.assignments.update(id, |a| {
            a.set_title(title);
            a.set_description(description);
            a.set_due(due);
        })
    }

    pub fn delete_assignment(&mut self, id: u32) -> usize {
        self.assignments.remove(id)
    }

    // --- quizzes -----------------------------------------------------------

    /// The question sequence is stored as given; the registry does not
    /// defensively copy or validate it.
    pub fn create_quiz(
        &mut self,
        title: &str,
        duration_minutes: u32,
        questions: Vec<Question>,
    ) -> &Quiz {
        let owner = self.identity.username().to_string();
        self.quizzes
            .create(|id| Quiz::new(id, title, duration_minutes, questions, &owner))
    }

    /// Full overwrite of title, duration, and question sequence.
    pub fn update_quiz(
        &mut self,
        id: u32,
        title: &str,
        duration_minutes: u32,
        questions: Vec<Question>,
    ) -> UpdateOutcome {
        self.quizzes.update(id, |q| {
            q.set_title(title);
            q.set_duration_minutes(duration_minutes);
            q.set_questions(questions);
        })
    }

    pub fn delete_quiz(&mut self, id: u32) -> usize {
        self.quizzes.remove(id)
    }

    /// Append a question to one quiz's sequence.
    pub fn add_question(&mut self, quiz_id: u32, question: Question) -> UpdateOutcome {
        self.quizzes.update(quiz_id, |q| q.add_question(question))
    }

    /// Detach a question from one quiz's sequence. Other quizzes holding
    /// the same question keep it.
    pub fn remove_question(&mut self, quiz_id: u32, question_id: u32) -> UpdateOutcome {
        self.quizzes.update(quiz_id, |q| {
            q.remove_question(question_id);
        })
    }

    /// Look up the quiz and render its placeholder result summary.
    ///
    /// `None` when no quiz has the id. The summary echoes the submissions
    /// and performs no answer comparison.
    pub fn grade_quiz(&self, id: u32, submissions: &[String]) -> Option<String> {
        self.quizzes.get(id).map(|q| q.results(submissions))
    }

    // --- slides ------------------------------------------------------------

    pub fn create_slide(&mut self, title: &str, content: &str) -> &PresentationSlide {
        let owner = self.identity.username().to_string();
        self.slides
            .create(|id| PresentationSlide::new(id, title, content, &owner))
    }

    pub fn update_slide(&mut self, id: u32, title: &str, content: &str) -> UpdateOutcome {
        self.slides.update(id, |s| {
            s.set_title(title);
            s.set_content(content);
        })
    }

    pub fn delete_slide(&mut self, id: u32) -> usize {
        self.slides.remove(id)
    }
}

/// Stub capability for student submissions.
///
/// Neither call checks that its target exists, and nothing is recorded; the
/// only observable effect is the event handed to the sink. A submissions
/// store is outside this system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionClient;

impl SubmissionClient {
    pub fn submit_assignment(&self, assignment_id: u32, submission: &str, sink: &dyn EventSink) {
        sink.on_event(&Event::AssignmentSubmitted {
            assignment_id,
            submission: submission.to_string(),
        });
    }

    pub fn take_quiz(&self, quiz_id: u32, sink: &dyn EventSink) {
        sink.on_event(&Event::QuizTaken { quiz_id });
    }
}

/// A student-role account: an identity plus a submission capability.
#[derive(Debug, Clone)]
pub struct StudentAccount {
    identity: Identity,
    submissions: SubmissionClient,
}

impl StudentAccount {
    pub fn new(username: &str, password: &str, name: &str, email: &str) -> Self {
        Self {
            identity: Identity::new(username, password, name, email, Role::Student),
            submissions: SubmissionClient,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    pub fn submit_assignment(&self, assignment_id: u32, submission: &str, sink: &dyn EventSink) {
        self.submissions
            .submit_assignment(assignment_id, submission, sink);
    }

    pub fn take_quiz(&self, quiz_id: u32, sink: &dyn EventSink) {
        self.submissions.take_quiz(quiz_id, sink);
    }
}
