use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Status line for work that is starting
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// A file the command wrote, with its size
pub fn file_written(path: &Path, bytes: usize) {
    println!(
        "  {} {} {}",
        "→".cyan(),
        path.display().to_string().bright_white(),
        format!("({})", format_bytes(bytes)).dimmed()
    );
}

fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}
