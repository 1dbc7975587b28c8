//! Text statistics and display helpers used around summarization.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;
pub const DEFAULT_PREVIEW_CHARS: usize = 100;
pub const DEFAULT_MIN_WORDS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub character_count: usize,
    pub word_count: usize,
    pub paragraph_count: usize,
}

pub fn calculate_text_stats(text: &str) -> TextStats {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return TextStats::default();
    }

    TextStats {
        character_count: text.chars().count(),
        word_count: trimmed.split_whitespace().count(),
        paragraph_count: count_paragraphs(trimmed),
    }
}

/// Paragraphs are runs of non-blank lines separated by one or more blank lines.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;

    for line in text.lines() {
        let blank = line.trim().is_empty();
        if !blank && !in_paragraph {
            count += 1;
        }
        in_paragraph = !blank;
    }

    count
}

pub fn reading_time_minutes(text: &str, words_per_minute: usize) -> usize {
    let words = calculate_text_stats(text).word_count;
    words.div_ceil(words_per_minute.max(1))
}

/// Truncates to at most `max_chars` characters, ellipsis included.
pub fn truncate_text(text: &str, max_chars: usize, ellipsis: &str) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ellipsis.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ellipsis);
    truncated
}

/// Trims and collapses every whitespace run into a single space.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn text_preview(text: &str, max_chars: usize) -> String {
    truncate_text(&clean_text(text), max_chars, "...")
}

pub fn is_summarizable(text: &str, min_words: usize) -> bool {
    calculate_text_stats(text).word_count >= min_words
}

/// Rough server-side cost estimate in seconds.
pub fn estimated_processing_time(text: &str) -> f64 {
    const BASE_SECONDS: f64 = 0.5;
    const SECONDS_PER_WORD: f64 = 0.003;

    let words = calculate_text_stats(text).word_count as f64;
    (words * SECONDS_PER_WORD).max(BASE_SECONDS)
}

pub fn format_processing_time(seconds: f64) -> String {
    if seconds < 1.0 {
        return "Less than 1 second".to_string();
    }

    if seconds < 60.0 {
        let rounded = seconds.round() as u64;
        return format!("{} second{}", rounded, plural(rounded as usize));
    }

    let minutes = (seconds / 60.0).floor() as u64;
    let remaining = (seconds % 60.0).round() as u64;

    if remaining == 0 {
        return format!("{} minute{}", minutes, plural(minutes as usize));
    }

    format!("{}:{:02}", minutes, remaining)
}

pub fn format_text_stats(stats: &TextStats) -> String {
    let mut parts = Vec::new();

    if stats.word_count > 0 {
        parts.push(format!(
            "{} word{}",
            group_thousands(stats.word_count),
            plural(stats.word_count)
        ));
    }
    if stats.character_count > 0 {
        parts.push(format!(
            "{} character{}",
            group_thousands(stats.character_count),
            plural(stats.character_count)
        ));
    }
    if stats.paragraph_count > 0 {
        parts.push(format!(
            "{} paragraph{}",
            stats.paragraph_count,
            plural(stats.paragraph_count)
        ));
    }

    parts.join(", ")
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
