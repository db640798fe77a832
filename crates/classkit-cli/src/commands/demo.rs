//! The `classkit demo` command: a fixed lifecycle walkthrough.
//!
//! Exercises the full entity lifecycle once (create, student interaction,
//! update, grade, delete), printing each outcome.

use anyhow::Result;
use chrono::{Duration, Utc};

use classkit_core::bank::{QuestionBank, QuestionIds};
use classkit_core::events::RecordingSink;
use classkit_core::roles::{StudentAccount, TeacherAccount};

pub fn execute() -> Result<()> {
    let mut teacher = TeacherAccount::new(
        "mokafor",
        "chalkdust",
        "Amara Okafor",
        "amara@school.example",
    );
    let student = StudentAccount::new("jlin", "pencilcase", "Jun Lin", "jun@school.example");
    let sink = RecordingSink::new();

    let due = Utc::now() + Duration::days(7);
    let assignment = teacher.create_assignment("Linear equations", "Solve exercises 1-10", due);
    println!("Created assignment {}: {}", assignment.id(), assignment.details());

    let bank = QuestionBank::new(QuestionIds::new());
    let q1 = bank.create("What is 2 + 2?", vec!["3".into(), "4".into()], "4");
    let q2 = bank.create("What is 3 * 3?", vec!["6".into(), "9".into()], "9");
    let quiz = teacher.create_quiz("Arithmetic check", 20, vec![q1, q2]);
    println!(
        "Created quiz {}: {} ({} questions, {} min)",
        quiz.id(),
        quiz.title(),
        quiz.questions().len(),
        quiz.duration_minutes()
    );

    let slide = teacher.create_slide("Intro to algebra", "Variables stand for unknown numbers.");
    println!("Created slide {}: {}", slide.id(), slide.title());

    student.submit_assignment(1, "My worked solutions", &sink);
    student.take_quiz(1, &sink);

    let outcome = teacher.update_assignment(1, "Linear equations", "Solve exercises 1-20", due);
    println!("Updated assignment 1: {outcome:?}");
    let outcome = teacher.update_quiz(1, "Arithmetic check", 30, vec![]);
    println!("Updated quiz 1: {outcome:?}");
    let outcome = teacher.update_slide(
        1,
        "Advanced algebra",
        "Rearranging both sides of an equation.",
    );
    println!("Updated slide 1: {outcome:?}");

    let submissions = vec!["4".to_string(), "9".to_string()];
    match teacher.grade_quiz(1, &submissions) {
        Some(summary) => println!("{summary}"),
        None => println!("Quiz 1 not found"),
    }

    println!("Deleted {} assignment(s)", teacher.delete_assignment(1));
    println!("Deleted {} quiz(zes)", teacher.delete_quiz(1));
    println!("Deleted {} slide(s)", teacher.delete_slide(1));

    student.identity().logout(&sink);

    println!("\nStudent events:");
    for event in sink.events() {
        println!("  {event:?}");
    }

    Ok(())
}
