use crate::error::{FormkitError, FormkitResult};
use crate::preview::document::FormFile;
use crate::preview::render::render_preview;
use colored::Colorize;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebouncedEventKind};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;

/// Execute the preview command
pub fn preview(file: PathBuf, output: Option<PathBuf>, watch: bool) -> FormkitResult<()> {
    let output = output.unwrap_or_else(|| file.with_extension("html"));

    println!("{}", "🖼  Formkit - Form Preview".bold().green());
    println!("   Source: {}", file.display());
    println!("   Output: {}\n", output.display());

    render_to_file(&file, &output)?;
    println!("{} {}", "✅ Preview written:".bold().green(), output.display());

    if watch {
        watch_and_render(&file, &output)?;
    }

    Ok(())
}

/// Execute the check command
pub fn check(files: Vec<PathBuf>) -> FormkitResult<()> {
    println!("{}", "🔍 Formkit - Checking form documents".bold().green());
    println!();

    let mut failures = 0usize;
    for file in &files {
        match check_file(file) {
            Ok(()) => println!("   {} {}", "✅".green(), file.display()),
            Err(e) => {
                failures += 1;
                println!("   {} {}: {}", "❌".red(), file.display(), e);
            }
        }
    }
    println!();

    if failures > 0 {
        return Err(FormkitError::Validation(format!(
            "{failures} of {} document(s) failed to parse",
            files.len()
        )));
    }

    println!("{}", "✅ All documents parsed".bold().green());
    Ok(())
}

fn check_file(file: &Path) -> FormkitResult<()> {
    let source = fs::read_to_string(file)?;
    serde_yaml::from_str::<Option<FormFile>>(&source)?;
    Ok(())
}

/// Render the document and write the preview file. A document that fails to
/// parse still writes an error panel, so the preview never goes stale.
fn render_to_file(file: &Path, output: &Path) -> FormkitResult<()> {
    let source = fs::read_to_string(file)?;
    let html = render_preview(&source);
    fs::write(output, html)?;
    Ok(())
}

/// Re-render the preview on every change to the watched file.
fn watch_and_render(file: &Path, output: &Path) -> FormkitResult<()> {
    println!("\n{}", "👁  Watch mode".bold().green());
    println!("   Press {} to stop\n", "Ctrl+C".bold().yellow());

    if !file.exists() {
        return Err(FormkitError::Validation(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let canonical_path = file.canonicalize()?;
    let parent_dir = canonical_path
        .parent()
        .ok_or_else(|| FormkitError::Validation("Cannot determine parent directory".to_string()))?;

    // Channel for file system events
    let (tx, rx) = channel();

    // Debounce rapid-fire events during file saves
    let mut debouncer = new_debouncer(Duration::from_millis(200), tx)
        .map_err(|e| FormkitError::Validation(format!("Failed to create file watcher: {e}")))?;

    // Watch the parent directory; editors often replace the file on save
    debouncer
        .watcher()
        .watch(parent_dir, RecursiveMode::NonRecursive)
        .map_err(|e| FormkitError::Validation(format!("Failed to watch directory: {e}")))?;

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events.iter().any(|event| {
                    if event.kind != DebouncedEventKind::Any {
                        return false;
                    }
                    if let Ok(event_canonical) = event.path.canonicalize() {
                        if event_canonical == canonical_path {
                            return true;
                        }
                    }
                    event.path.file_name() == canonical_path.file_name()
                });

                if relevant {
                    println!("{}", "🔄 Change detected, re-rendering".cyan());
                    match render_to_file(file, output) {
                        Ok(()) => {
                            println!("   {} {}", "✅ Preview updated:".green(), output.display())
                        }
                        Err(e) => eprintln!("{} {}", "❌ Render failed:".bold().red(), e),
                    }
                }
            }
            Ok(Err(error)) => {
                eprintln!("{} Watch error: {}", "❌".red(), error);
            }
            Err(e) => {
                eprintln!("{} Channel error: {}", "❌".red(), e);
                break;
            }
        }
    }

    Ok(())
}
