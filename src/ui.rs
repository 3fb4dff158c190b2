// Terminal output helpers

use colored::Colorize;

pub fn print_header(title: &str) {
    println!();
    println!("{}", format!("== {} ==", title).bright_blue().bold());
}

pub fn print_success(message: &str) {
    println!("{}", format!("✅ {}", message).bright_green().bold());
}

pub fn print_info(message: &str) {
    println!("{}", format!("ℹ️  {}", message).bright_cyan());
}

pub fn print_warning(message: &str) {
    println!("{}", format!("⚠️  {}", message).bright_yellow());
}

/// Two-column key/value row
pub fn print_field(key: &str, value: &str) {
    println!("  {:<14} {}", format!("{}:", key).dimmed(), value);
}
