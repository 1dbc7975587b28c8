//! Rule-based sentence-selection summarizer.
//!
//! The input is split into sentences on runs of `.`, `!` and `?`. A fixed
//! ratio per [`LengthTier`] decides how many sentences to keep, and the
//! first sentence, a strided sample of the middle third and the last
//! sentence are joined back together.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Inputs longer than this many characters are rejected.
pub const MAX_TEXT_CHARS: usize = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    /// Share of the input's sentences retained for this tier.
    pub fn ratio(self) -> f64 {
        match self {
            LengthTier::Short => 0.2,
            LengthTier::Medium => 0.4,
            LengthTier::Long => 0.6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthTier::Short => "short",
            LengthTier::Medium => "medium",
            LengthTier::Long => "long",
        }
    }

    /// Resolves an optional token, falling back to the default tier when absent.
    pub fn resolve(token: Option<&str>) -> Result<Self> {
        token.map_or(Ok(LengthTier::default()), str::parse)
    }
}

impl FromStr for LengthTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "short" => Ok(LengthTier::Short),
            "medium" => Ok(LengthTier::Medium),
            "long" => Ok(LengthTier::Long),
            _ => Err(invalid_length()),
        }
    }
}

impl fmt::Display for LengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    pub word_count: usize,
    /// Seconds, rounded to two decimals.
    pub processing_time: f64,
}

pub(crate) fn invalid_length() -> AppError {
    AppError::UnprocessableInput(
        "Invalid length option - must be short, medium, or long".to_string(),
    )
}

pub(crate) fn missing_text() -> AppError {
    AppError::InvalidInput("Invalid input - text is required".to_string())
}

pub(crate) fn text_too_long() -> AppError {
    AppError::UnprocessableInput("Text too long - maximum 10,000 characters".to_string())
}

/// Checks the emptiness and size limits shared by every entry point.
pub fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(missing_text());
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(text_too_long());
    }
    Ok(())
}

/// Summarizes `text`, parsing the length token first.
///
/// Errors surface in a fixed order: missing text, oversized text, unknown
/// length token, then text without any sentence.
pub fn summarize_with_token(text: &str, length: Option<&str>) -> Result<SummaryResult> {
    validate_text(text)?;
    let tier = LengthTier::resolve(length)?;
    summarize(text, tier)
}

pub fn summarize(text: &str, length: LengthTier) -> Result<SummaryResult> {
    let start = Instant::now();

    validate_text(text)?;

    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Err(AppError::InvalidInput(
            "Invalid input - text contains no meaningful content".to_string(),
        ));
    }

    let target = target_sentences(sentences.len(), length);
    let selected = select_sentences(&sentences, target);

    let mut summary = selected.join(". ");
    summary.push('.');
    let word_count = count_words(&summary);

    let elapsed = start.elapsed().as_secs_f64();

    Ok(SummaryResult {
        summary,
        word_count,
        processing_time: (elapsed * 100.0).round() / 100.0,
    })
}

/// Splits on runs of sentence-terminal punctuation, dropping blank fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

pub fn target_sentences(total: usize, length: LengthTier) -> usize {
    let target = (total as f64 * length.ratio()).ceil() as usize;
    target.max(1)
}

/// Picks the first sentence, a strided sample from the middle third, and the
/// last sentence, in that order.
///
/// The middle sample may come up short of `target - 2` when the stride
/// walks past the end of the middle third.
pub fn select_sentences<'a>(sentences: &[&'a str], target: usize) -> Vec<&'a str> {
    let n = sentences.len();
    if n <= target {
        return sentences.to_vec();
    }

    let mut selected = Vec::with_capacity(target);
    selected.push(sentences[0]);

    if target > 2 {
        let middle_start = n / 3;
        let middle_end = (n * 2) / 3;
        let middle_count = target - 2;
        let step = ((middle_end - middle_start) / middle_count).max(1);

        selected.extend(
            (0..middle_count)
                .map(|i| middle_start + i * step)
                .take_while(|&idx| idx < middle_end)
                .map(|idx| sentences[idx]),
        );
    }

    if target > 1 {
        selected.push(sentences[n - 1]);
    }

    selected
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
