//! The `classkit show` command: render a loaded plan's registries.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;

use classkit_core::bank::QuestionIds;
use classkit_core::model::{Assignment, PresentationSlide, Quiz};
use classkit_core::roles::TeacherAccount;

pub fn execute(plan_path: PathBuf, format: String) -> Result<()> {
    let plan = classkit_core::plan::parse_plan(&plan_path)?;
    let account = plan.instantiate(QuestionIds::new());

    match format.as_str() {
        "table" => print_tables(&plan.title, &account),
        "json" => print_json(&plan.title, &account)?,
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}

fn print_tables(title: &str, account: &TeacherAccount) {
    println!(
        "{title} - {} <{}>",
        account.identity().name(),
        account.identity().email()
    );

    let mut assignments = Table::new();
    assignments.set_header(vec!["Id", "Title", "Due", "Description"]);
    for a in account.assignments().iter() {
        assignments.add_row(vec![
            a.id().to_string(),
            a.title().to_string(),
            a.due().to_rfc3339(),
            a.description().to_string(),
        ]);
    }
    println!("\nAssignments\n{assignments}");

    let mut quizzes = Table::new();
    quizzes.set_header(vec!["Id", "Title", "Duration (min)", "Questions"]);
    for q in account.quizzes().iter() {
        quizzes.add_row(vec![
            q.id().to_string(),
            q.title().to_string(),
            q.duration_minutes().to_string(),
            q.questions().len().to_string(),
        ]);
    }
    println!("\nQuizzes\n{quizzes}");

    let mut slides = Table::new();
    slides.set_header(vec!["Id", "Title"]);
    for s in account.slides().iter() {
        slides.add_row(vec![s.id().to_string(), s.title().to_string()]);
    }
    println!("\nSlides\n{slides}");
}

#[derive(Serialize)]
struct Roster<'a> {
    course: &'a str,
    teacher: &'a str,
    assignments: Vec<&'a Assignment>,
    quizzes: Vec<&'a Quiz>,
    slides: Vec<&'a PresentationSlide>,
}

fn print_json(title: &str, account: &TeacherAccount) -> Result<()> {
    let roster = Roster {
        course: title,
        teacher: account.identity().username(),
        assignments: account.assignments().iter().collect(),
        quizzes: account.quizzes().iter().collect(),
        slides: account.slides().iter().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&roster)?);
    Ok(())
}
