//! CLI console utilities

use colored::*;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, Write};

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold markup regex"));

/// Formatted status output for commands
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// Print the input prompt without a newline
    pub fn prompt(&self) -> io::Result<()> {
        print!("{} ", ">".cyan().bold());
        io::stdout().flush()
    }
}

/// Render `**bold**` spans as terminal bold
pub fn render_markup(text: &str) -> String {
    let mut rendered = String::with_capacity(text.len());
    let mut last = 0;
    for captures in BOLD_RE.captures_iter(text) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        rendered.push_str(&text[last..whole.start()]);
        rendered.push_str(&inner.as_str().bold().to_string());
        last = whole.end();
    }
    rendered.push_str(&text[last..]);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markup_strips_markers() {
        colored::control::set_override(false);
        assert_eq!(
            render_markup("A **CNN** uses **filters** on images."),
            "A CNN uses filters on images."
        );
        assert_eq!(render_markup("no markup"), "no markup");
        assert_eq!(render_markup("dangling **bold"), "dangling **bold");
    }
}
