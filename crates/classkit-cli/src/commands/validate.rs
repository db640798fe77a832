//! The `classkit validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(plan_path: PathBuf) -> Result<()> {
    let plans = if plan_path.is_dir() {
        classkit_core::plan::load_plan_directory(&plan_path)?
    } else {
        vec![classkit_core::plan::parse_plan(&plan_path)?]
    };

    let mut total_warnings = 0;

    for plan in &plans {
        println!(
            "Course plan: {} ({} assignments, {} quizzes, {} slides)",
            plan.title,
            plan.assignments.len(),
            plan.quizzes.len(),
            plan.slides.len()
        );

        let warnings = classkit_core::plan::validate_plan(plan);
        for w in &warnings {
            let prefix = w
                .subject
                .as_ref()
                .map(|s| format!("  [{s}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All course plans valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
