//! Status output helpers.
//!
//! Pure formatting functions with no process-wide state; each caller decides
//! what to report.

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display an artifact rename as a from/to pair.
pub fn display_rename(from: &str, to: &str) {
    println!("\n\x1b[1mRenamed artifact:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", from);
    println!("  To:   \x1b[32m{}\x1b[0m", to);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_status() {
        // Visual verification test - output is printed to stdout
        display_status("test status");
    }
}
