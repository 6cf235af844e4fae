/// Diagnostic output helpers. Everything goes to stderr; stdout is left alone.
use colored::*;

/// Display a section header
pub fn section_header(title: &str) {
    eprintln!("\n{}", title.bold().cyan());
}

/// Display a success message
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Display a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Display an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Tree structure item
pub fn tree_item(is_last: bool, label: &str, value: Option<&str>) {
    let prefix = if is_last { "└─" } else { "├─" };
    if let Some(val) = value {
        eprintln!("{} {}: {}", prefix.dimmed(), label, val);
    } else {
        eprintln!("{} {}", prefix.dimmed(), label);
    }
}
