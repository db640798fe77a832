//! Instructional artifact types: assignments, quizzes, questions, slides.
//!
//! These are plain value types; lifecycle (id allocation, mutation,
//! deletion) belongs to the owning teacher's registries. Each artifact
//! records the username of the teacher that created it, for attribution
//! only, not access control.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::Keyed;

/// A homework assignment owned by one teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    id: u32,
    title: String,
    description: String,
    due: DateTime<Utc>,
    created_by: String,
}

impl Assignment {
    pub(crate) fn new(
        id: u32,
        title: &str,
        description: &str,
        due: DateTime<Utc>,
        created_by: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            due,
            created_by: created_by.to_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due(&self) -> DateTime<Utc> {
        self.due
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Human-readable summary. A pure projection, not a business rule.
    pub fn details(&self) -> String {
        format!(
            "Title: {}, Description: {}, Due Date: {}",
            self.title,
            self.description,
            self.due.to_rfc3339()
        )
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub(crate) fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub(crate) fn set_due(&mut self, due: DateTime<Utc>) {
        self.due = due;
    }
}

impl Keyed for Assignment {
    fn key(&self) -> u32 {
        self.id
    }
}

/// A quiz question. Ids are process-wide, minted by a
/// [`QuestionBank`](crate::bank::QuestionBank).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: u32,
    text: String,
    options: Vec<String>,
    correct_answer: String,
}

impl Question {
    pub(crate) fn new(id: u32, text: &str, options: Vec<String>, correct_answer: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            options,
            correct_answer: correct_answer.to_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    // Field mutators. Deliberately unvalidated: an empty option list or a
    // correct answer absent from the options is accepted (advisory plan
    // validation flags both).

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
    }

    pub fn set_correct_answer(&mut self, correct_answer: &str) {
        self.correct_answer = correct_answer.to_string();
    }
}

impl Keyed for Question {
    fn key(&self) -> u32 {
        self.id
    }
}

/// A timed quiz holding an ordered question sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    id: u32,
    title: String,
    duration_minutes: u32,
    questions: Vec<Question>,
    created_by: String,
}

impl Quiz {
    pub(crate) fn new(
        id: u32,
        title: &str,
        duration_minutes: u32,
        questions: Vec<Question>,
        created_by: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            duration_minutes,
            questions,
            created_by: created_by.to_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    /// Placeholder result summary: renders the submissions verbatim.
    ///
    /// No comparison against any question's correct answer takes place;
    /// real grading is a separate feature this system does not have.
    pub fn results(&self, submissions: &[String]) -> String {
        format!("Quiz results: [{}]", submissions.join(", "))
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub(crate) fn set_duration_minutes(&mut self, duration_minutes: u32) {
        self.duration_minutes = duration_minutes;
    }

    pub(crate) fn set_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
    }

    pub(crate) fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Detach every question with the given id from this quiz. Other
    /// quizzes referencing the question are untouched.
    pub(crate) fn remove_question(&mut self, question_id: u32) -> usize {
        let before = self.questions.len();
        self.questions.retain(|q| q.id() != question_id);
        before - self.questions.len()
    }
}

impl Keyed for Quiz {
    fn key(&self) -> u32 {
        self.id
    }
}

/// A single presentation slide owned by one teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationSlide {
    id: u32,
    title: String,
    content: String,
    created_by: String,
}

impl PresentationSlide {
    pub(crate) fn new(id: u32, title: &str, content: &str, created_by: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_by: created_by.to_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    pub(crate) fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub(crate) fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }
}

impl Keyed for PresentationSlide {
    fn key(&self) -> u32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn assignment_details_projection() {
        let assignment = Assignment::new(1, "Linear equations", "Exercises 1-10", due(), "mokafor");
        let details = assignment.details();
        assert!(details.contains("Title: Linear equations"));
        assert!(details.contains("Description: Exercises 1-10"));
        assert!(details.contains("2026-09-01"));
    }

    #[test]
    fn quiz_results_echo_submissions_without_grading() {
        let question = Question::new(1, "What is 2 + 2?", vec!["3".into(), "4".into()], "4");
        let quiz = Quiz::new(1, "Arithmetic check", 20, vec![question], "mokafor");

        // Wrong answers render exactly like right ones.
        let submissions = vec!["7".to_string(), "banana".to_string()];
        let summary = quiz.results(&submissions);
        assert_eq!(summary, "Quiz results: [7, banana]");
        assert!(!summary.contains('4'));
    }

    #[test]
    fn quiz_question_sequence_mutation() {
        let mut quiz = Quiz::new(1, "Arithmetic check", 20, vec![], "mokafor");
        quiz.add_question(Question::new(1, "a", vec![], ""));
        quiz.add_question(Question::new(2, "b", vec![], ""));
        assert_eq!(quiz.questions().len(), 2);

        assert_eq!(quiz.remove_question(1), 1);
        assert_eq!(quiz.remove_question(1), 0);
        assert_eq!(quiz.questions().len(), 1);
        assert_eq!(quiz.questions()[0].id(), 2);
    }

    #[test]
    fn question_mutators_accept_invalid_input() {
        let mut question = Question::new(1, "What is 2 + 2?", vec!["3".into(), "4".into()], "4");
        question.set_options(vec![]);
        question.set_correct_answer("not an option");
        assert!(question.options().is_empty());
        assert_eq!(question.correct_answer(), "not an option");
    }
}
