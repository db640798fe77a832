//! The `classkit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("plans")?;
    let example_path = std::path::Path::new("plans/example.toml");
    if example_path.exists() {
        println!("plans/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_PLAN)?;
        println!("Created plans/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit plans/example.toml with your course content");
    println!("  2. Run: classkit validate --plan plans/example.toml");
    println!("  3. Run: classkit show --plan plans/example.toml");

    Ok(())
}

const EXAMPLE_PLAN: &str = r#"[course]
title = "Algebra I"
teacher = "mokafor"
name = "Amara Okafor"
email = "amara@school.example"

[[assignments]]
title = "Linear equations"
description = "Solve exercises 1-10"
due = "2026-09-01T00:00:00Z"

[[quizzes]]
title = "Arithmetic check"
duration_minutes = 20

[[quizzes.questions]]
text = "What is 2 + 2?"
options = ["3", "4"]
correct_answer = "4"

[[quizzes.questions]]
text = "What is 3 * 3?"
options = ["6", "9"]
correct_answer = "9"

[[slides]]
title = "Intro to algebra"
content = "Variables stand for unknown numbers."
"#;
