//! TOML course-plan parser.
//!
//! A course plan is authoring input: one teacher's assignments, quizzes,
//! and slides, replayable into fresh registries. Loading a plan never
//! bypasses the registry rules; `CoursePlan::instantiate` replays each
//! entry through the normal create operations.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::bank::{QuestionBank, QuestionIds};
use crate::roles::TeacherAccount;

/// Intermediate TOML structure for parsing plan files.
#[derive(Debug, Deserialize)]
struct TomlPlanFile {
    course: TomlCourseHeader,
    #[serde(default)]
    assignments: Vec<TomlAssignment>,
    #[serde(default)]
    quizzes: Vec<TomlQuiz>,
    #[serde(default)]
    slides: Vec<TomlSlide>,
}

#[derive(Debug, Deserialize)]
struct TomlCourseHeader {
    title: String,
    teacher: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
struct TomlAssignment {
    title: String,
    #[serde(default)]
    description: String,
    /// RFC 3339 timestamp, e.g. "2026-09-01T00:00:00Z".
    due: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuiz {
    title: String,
    #[serde(default = "default_duration")]
    duration_minutes: u32,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

fn default_duration() -> u32 {
    30
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    correct_answer: String,
}

#[derive(Debug, Deserialize)]
struct TomlSlide {
    title: String,
    #[serde(default)]
    content: String,
}

/// A parsed course plan.
#[derive(Debug, Clone)]
pub struct CoursePlan {
    pub title: String,
    pub teacher: PlanTeacher,
    pub assignments: Vec<PlannedAssignment>,
    pub quizzes: Vec<PlannedQuiz>,
    pub slides: Vec<PlannedSlide>,
}

/// The teacher a plan belongs to. Plans never carry credentials.
#[derive(Debug, Clone)]
pub struct PlanTeacher {
    pub username: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct PlannedAssignment {
    pub title: String,
    pub description: String,
    pub due: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PlannedQuiz {
    pub title: String,
    pub duration_minutes: u32,
    pub questions: Vec<PlannedQuestion>,
}

#[derive(Debug, Clone)]
pub struct PlannedQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone)]
pub struct PlannedSlide {
    pub title: String,
    pub content: String,
}

/// Parse a single TOML file into a `CoursePlan`.
pub fn parse_plan(path: &Path) -> Result<CoursePlan> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read course plan: {}", path.display()))?;

    parse_plan_str(&content, path)
}

/// Parse a TOML string into a `CoursePlan` (useful for testing).
pub fn parse_plan_str(content: &str, source_path: &Path) -> Result<CoursePlan> {
    let parsed: TomlPlanFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let assignments = parsed
        .assignments
        .into_iter()
        .map(|a| {
            let due = DateTime::parse_from_rfc3339(&a.due)
                .with_context(|| format!("invalid due date for '{}': {}", a.title, a.due))?
                .with_timezone(&Utc);
            Ok(PlannedAssignment {
                title: a.title,
                description: a.description,
                due,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let quizzes = parsed
        .quizzes
        .into_iter()
        .map(|q| PlannedQuiz {
            title: q.title,
            duration_minutes: q.duration_minutes,
            questions: q
                .questions
                .into_iter()
                .map(|question| PlannedQuestion {
                    text: question.text,
                    options: question.options,
                    correct_answer: question.correct_answer,
                })
                .collect(),
        })
        .collect();

    let slides = parsed
        .slides
        .into_iter()
        .map(|s| PlannedSlide {
            title: s.title,
            content: s.content,
        })
        .collect();

    Ok(CoursePlan {
        title: parsed.course.title,
        teacher: PlanTeacher {
            username: parsed.course.teacher,
            name: parsed.course.name,
            email: parsed.course.email,
        },
        assignments,
        quizzes,
        slides,
    })
}

/// Recursively load all `.toml` course plans from a directory.
pub fn load_plan_directory(dir: &Path) -> Result<Vec<CoursePlan>> {
    let mut plans = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            plans.extend(load_plan_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_plan(&path) {
                Ok(plan) => plans.push(plan),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(plans)
}

/// A warning from course-plan validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The title of the entry the warning refers to (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a course plan for common authoring mistakes.
///
/// Warnings are advisory: the core accepts every plan it can parse, so a
/// zero-duration quiz or an empty option list still loads.
pub fn validate_plan(plan: &CoursePlan) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut check_titles = |kind: &str, titles: Vec<&str>| {
        let mut seen = std::collections::HashSet::new();
        for title in titles {
            if title.trim().is_empty() {
                warnings.push(ValidationWarning {
                    subject: None,
                    message: format!("{kind} with empty title"),
                });
            } else if !seen.insert(title) {
                warnings.push(ValidationWarning {
                    subject: Some(title.to_string()),
                    message: format!("duplicate {kind} title: {title}"),
                });
            }
        }
    };

    check_titles(
        "assignment",
        plan.assignments.iter().map(|a| a.title.as_str()).collect(),
    );
    check_titles("quiz", plan.quizzes.iter().map(|q| q.title.as_str()).collect());
    check_titles("slide", plan.slides.iter().map(|s| s.title.as_str()).collect());

    for quiz in &plan.quizzes {
        if quiz.duration_minutes == 0 {
            warnings.push(ValidationWarning {
                subject: Some(quiz.title.clone()),
                message: "quiz duration is zero minutes".into(),
            });
        }

        for question in &quiz.questions {
            if question.options.is_empty() {
                warnings.push(ValidationWarning {
                    subject: Some(quiz.title.clone()),
                    message: format!("question '{}' has no options", question.text),
                });
            } else if !question.options.contains(&question.correct_answer) {
                warnings.push(ValidationWarning {
                    subject: Some(quiz.title.clone()),
                    message: format!(
                        "question '{}' lists a correct answer that is not among its options",
                        question.text
                    ),
                });
            }
        }
    }

    warnings
}

impl CoursePlan {
    /// Replay the plan through a fresh teacher account, so every loaded
    /// entity obeys the registry id rules. Question ids are drawn from the
    /// supplied allocator.
    ///
    /// The account is provisioned with an empty password: credentials
    /// belong to the external user directory and are set through
    /// [`Identity::register`](crate::identity::Identity::register).
    pub fn instantiate(&self, ids: QuestionIds) -> TeacherAccount {
        let mut account = TeacherAccount::new(
            &self.teacher.username,
            "",
            &self.teacher.name,
            &self.teacher.email,
        );

        for a in &self.assignments {
            account.create_assignment(&a.title, &a.description, a.due);
        }

        let bank = QuestionBank::new(ids);
        for q in &self.quizzes {
            let questions = q
                .questions
                .iter()
                .map(|p| bank.create(&p.text, p.options.clone(), &p.correct_answer))
                .collect();
            account.create_quiz(&q.title, q.duration_minutes, questions);
        }

        for s in &self.slides {
            account.create_slide(&s.title, &s.content);
        }

        account
    }
}
