//! Terminal output shared by the commands. Errors are printed by `main`.

use colored::Colorize;
use url::Url;

/// Heading above a block of output
pub fn heading(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "─".repeat(title.chars().count()).cyan());
}

/// Heading for one group of fields in the home profile form
pub fn form_section(title: &str, optional: bool) {
    heading(&section_title(title, optional));
    if optional {
        println!("{}", "Press Enter to skip a question.".dimmed());
    }
}

/// Announce a request before it goes out, naming the backend it goes to
pub fn contacting(action: &str, api_root: &Url) {
    println!(
        "{} {} {}",
        "→".yellow(),
        action.bright_white(),
        format!("({api_root})").dimmed()
    );
}

pub fn done(message: &str) {
    println!("{} {}", "✔".green(), message.green());
}

pub fn file_written(path: &str, purpose: &str) {
    done(&format!("Wrote {path}"));
    println!("  {} edit it {purpose}", "›".blue());
}

pub fn file_kept(path: &str) {
    println!(
        "{} {} {}",
        "•".yellow(),
        format!("{path} already exists, leaving it untouched").yellow(),
        "(use --force to overwrite)".dimmed()
    );
}

/// Suggest the command to run next
pub fn next_step(command: &str) {
    println!("\n{} {}", "Next:".bold(), command.bright_white());
}

fn section_title(title: &str, optional: bool) -> String {
    if optional {
        format!("{title} (optional)")
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title_marks_optional_groups() {
        assert_eq!(section_title("Basic Information", false), "Basic Information");
        assert_eq!(section_title("Energy Details", true), "Energy Details (optional)");
    }
}
