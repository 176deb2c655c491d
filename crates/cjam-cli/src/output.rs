//! Terminal output for the cjam CLI.
//!
//! `init` reports through a header naming the language, one `[WARN]` line per
//! solution file it is about to replace, a `[n/total] Wrote <file>` line per
//! written file and a closing `[OK]`. The inspection commands (`languages`,
//! `assets`) print indented `key: value` lines under a header. Errors go to
//! stderr so a failed `init` never mixes with template text printed by `show`.
//!
//! Each `print_*` function has a `format_*` counterpart that builds the line;
//! styling comes from [`console`] and disappears when colors are disabled.

use console::style;

/// Header title over an `=` rule as wide as the title.
pub fn format_header(text: &str) -> String {
    let rule = "=".repeat(text.chars().count());
    format!("{}\n{}", style(text).bold().cyan(), style(rule).dim())
}

pub fn print_header(text: &str) {
    println!("\n{}", format_header(text));
}

pub fn format_success(text: &str) -> String {
    format!("{} {}", style("[OK]").green().bold(), text)
}

pub fn print_success(text: &str) {
    println!("{}", format_success(text));
}

/// `[WARN]` line, used for files `init` is about to overwrite.
pub fn format_warning(text: &str) -> String {
    format!("{} {}", style("[WARN]").yellow().bold(), text)
}

pub fn print_warning(text: &str) {
    println!("{}", format_warning(text));
}

pub fn format_error(text: &str) -> String {
    format!("{} {}", style("[ERROR]").red().bold(), text)
}

/// Print to stderr. `main` passes the full `anyhow` chain (`{:#}`).
pub fn print_error(text: &str) {
    eprintln!("{}", format_error(text));
}

/// Progress line for one written file, e.g. `[1/2] Wrote main.go`.
pub fn format_step(step: usize, total: usize, text: &str) -> String {
    format!("{} {}", style(format!("[{step}/{total}]")).dim(), text)
}

pub fn print_step(step: usize, total: usize, text: &str) {
    println!("{}", format_step(step, total, text));
}

/// Indented `key: value`, e.g. `  Aliases: go`.
pub fn format_key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

pub fn print_key_value(key: &str, value: &str) {
    println!("{}", format_key_value(key, value));
}
