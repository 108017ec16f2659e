//! Text formatting helpers shared by the presentation-facing layers.

use once_cell::sync::Lazy;
use regex::Regex;

// The patterns are literals; compiling them cannot fail.
#[allow(clippy::unwrap_used)]
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
#[allow(clippy::unwrap_used)]
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
#[allow(clippy::unwrap_used)]
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"--+").unwrap());

/// Words per minute assumed when estimating reading time.
const WORDS_PER_MINUTE: usize = 200;

/// Format a view count with K/M abbreviations.
///
/// Counts below 1000 are rendered verbatim; `1000` becomes `"1.0K"`
/// and `1_000_000` becomes `"1.0M"`.
#[must_use]
pub fn format_view_count(count: i64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 1_000_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    }
}

/// Generate a URL-safe slug from free text.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&stripped, "-");
    HYPHEN_RUN.replace_all(&hyphenated, "-").into_owned()
}

/// Truncate text to `max_chars` characters, appending an ellipsis
/// when anything was cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Estimate reading time in minutes from word count.
#[must_use]
pub fn estimate_reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// Render a reading time for display.
#[must_use]
pub fn format_reading_time(minutes: u32) -> String {
    match minutes {
        0 => "Less than 1 min read".to_string(),
        1 => "1 min read".to_string(),
        n => format!("{n} min read"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_view_count_boundaries() {
        assert_eq!(format_view_count(999), "999");
        assert_eq!(format_view_count(1_000), "1.0K");
        assert_eq!(format_view_count(1_520), "1.5K");
        assert_eq!(format_view_count(999_999), "1000.0K");
        assert_eq!(format_view_count(1_000_000), "1.0M");
        assert_eq!(format_view_count(2_340_000), "2.3M");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust &  TypeScript  "), "rust-typescript");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn test_truncate_only_when_needed() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("hello world", 5), "hello...");
        // Trailing whitespace at the cut point is trimmed before the ellipsis.
        assert_eq!(truncate("hello world", 6), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_estimate_reading_time() {
        assert_eq!(estimate_reading_time(""), 0);
        assert_eq!(estimate_reading_time("one two three"), 1);
        let long = "word ".repeat(401);
        assert_eq!(estimate_reading_time(&long), 3);
    }

    #[test]
    fn test_format_reading_time() {
        assert_eq!(format_reading_time(0), "Less than 1 min read");
        assert_eq!(format_reading_time(1), "1 min read");
        assert_eq!(format_reading_time(7), "7 min read");
    }
}
