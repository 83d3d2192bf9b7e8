//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Amount rounded to cents for display, with an optional currency prefix.
pub fn money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Receipt file name without its directory, for compact listings.
pub fn short_path(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}
