//! Init command implementation.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError};

use crate::app::api::{self, InitOptions};
use crate::domain::{AppError, ProjectInfo};

pub fn run_init(
    name: Option<String>,
    force: bool,
    author: Option<String>,
    framework: Option<String>,
) -> Result<(), AppError> {
    let cwd = std::env::current_dir()?;
    let options = InitOptions { name, force, author, framework };
    let mut project = api::resolve_project(&cwd, &options)?;

    if !project.force && api::is_initialized(&project.base_path) && std::io::stdin().is_terminal() {
        if !confirm_overwrite(&project)? {
            println!("Aborted. Existing project left untouched.");
            return Ok(());
        }
        project.force = true;
    }

    let outcome = api::init_project(&project)?;

    println!("✅ Initialized {} at {}", project.name, outcome.root.display());
    println!(
        "   {} directories, {} files",
        outcome.directories.len(),
        outcome.files_written.len() + 1
    );
    if outcome.preserved_config {
        println!("   Kept settings from the existing config.json");
    }
    println!();
    println!("Next steps:");
    if outcome.root != cwd {
        println!("  cd {}", project.name);
    }
    println!("  mjcuadrado-net-sdk doctor");
    Ok(())
}

fn confirm_overwrite(project: &ProjectInfo) -> Result<bool, AppError> {
    let prompt = format!(
        "{} is already initialized. Overwrite the scaffold?",
        project.base_path.display()
    );
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => Ok(answer),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::Interaction(format!("Failed to read confirmation: {}", err))),
    }
}
