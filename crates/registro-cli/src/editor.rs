//! Interactive editing support
//!
//! Opens $EDITOR for document descriptions and asks for confirmation before
//! destructive commands.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Marks template lines that are dropped from the edited text
const COMMENT_PREFIX: &str = "#";

/// Edit the description of document `nombre` in the user's preferred editor
///
/// The buffer starts with a short commented header naming the document.
/// Uses $EDITOR, $VISUAL, or falls back to common editors.
pub fn edit_description(nombre: &str, current: &str) -> Result<String> {
    let editor = find_editor()?;

    let mut file = tempfile::Builder::new()
        .prefix("registro_")
        .suffix(".txt")
        .tempfile()
        .context("Failed to create temp file for editing")?;
    file.write_all(description_template(nombre, current).as_bytes())
        .context("Failed to write temp file for editing")?;
    file.flush()?;

    let status = Command::new(&editor)
        .arg(file.path())
        .status()
        .with_context(|| format!("Failed to run editor: {}", editor))?;

    if !status.success() {
        bail!(
            "Editor '{}' exited with non-zero status; description left unchanged.",
            editor
        );
    }

    let content = fs::read_to_string(file.path())
        .with_context(|| format!("Failed to read edited file: {:?}", file.path()))?;

    Ok(strip_template(&content))
}

/// Buffer shown in the editor: commented header, then the current text
fn description_template(nombre: &str, current: &str) -> String {
    format!(
        "{c} Descripción de '{}'\n{c} Lines starting with '{c}' are ignored.\n{}\n",
        nombre,
        current,
        c = COMMENT_PREFIX
    )
}

/// Drop header lines and the trailing whitespace most editors append
fn strip_template(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Find the user's preferred editor
fn find_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    let common_editors = ["nano", "vim", "vi", "emacs", "notepad"];

    for editor in common_editors {
        if command_exists(editor) {
            return Ok(editor.to_string());
        }
    }

    bail!(
        "No editor found. Set $EDITOR environment variable.\n\
         Example: export EDITOR=nano"
    )
}

/// Check if a command exists in PATH
fn command_exists(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Prompt for confirmation
///
/// Returns true if user confirms, false otherwise.
/// In non-interactive mode (no TTY), returns false.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(false);
    }

    Ok(is_affirmative(&input))
}

/// Accept English and Spanish confirmations
fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}
