pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Display a short summary of the commit batch under analysis.
pub fn display_commit_analysis(commit_messages: &[String]) {
    println!("\n\x1b[1mAnalyzing {} commit(s)\x1b[0m", commit_messages.len());

    for (i, message) in commit_messages.iter().take(10).enumerate() {
        let subject = message.lines().next().unwrap_or("");
        // Truncate on a char boundary; byte slicing panics on multibyte text
        let short_msg: String = subject.chars().take(60).collect();
        println!("  {}. {}", i + 1, short_msg);
    }

    if commit_messages.len() > 10 {
        println!("  ... and {} more commits", commit_messages.len() - 10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_analysis_truncates_multibyte_subjects() {
        // A subject whose 60th byte falls inside a multibyte character
        let long_cjk = format!("feat: {}", "テスト日本語".repeat(20));
        let messages = vec![long_cjk, "fix: ascii only".to_string()];
        display_commit_analysis(&messages);
    }

    #[test]
    fn test_commit_analysis_handles_empty_messages() {
        display_commit_analysis(&[String::new()]);
        display_commit_analysis(&[]);
    }
}
