//! Styled terminal output utilities.
//!
//! Status lines go to stderr so stdout carries nothing but the query JSON.

use owo_colors::OwoColorize;

/// Print the logsift banner
pub fn logo() {
    let logo = r#"
    ╦  ╔═╗╔═╗╔═╗╦╔═╗╔╦╗
    ║  ║ ║║ ╦╚═╗║╠╣  ║
    ╩═╝╚═╝╚═╝╚═╝╩╚   ╩
    "#;
    println!("{}", logo.bright_cyan().bold());
}

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print a success message
pub fn success(text: &str) {
    eprintln!("{} {}", "✔".green().bold(), text.green());
}

/// Print a warning message
pub fn warn(text: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), text.yellow());
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a newline
pub fn newline() {
    println!();
}

/// Print dimmed text
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// Print a query document, unstyled
pub fn json(text: &str) {
    println!("{}", text);
}
