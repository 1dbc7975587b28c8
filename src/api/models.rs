use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::summarizer::{self, LengthTier};

/// Body of `POST /api/summarize` as sent by [`crate::client::SummaryClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SummaryOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<LengthTier>,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>, length: LengthTier) -> Self {
        SummaryRequest {
            text: text.into(),
            options: Some(SummaryOptions { length: Some(length) }),
        }
    }

    pub fn length(&self) -> LengthTier {
        self.options
            .as_ref()
            .and_then(|options| options.length)
            .unwrap_or_default()
    }
}

/// Loosely typed body accepted by the server, so that wrong types surface
/// as taxonomy errors instead of deserializer rejections.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeBody {
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub options: Option<RawOptions>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawOptions {
    #[serde(default)]
    pub length: Option<Value>,
}

/// A request that passed shape validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub text: String,
    pub length: LengthTier,
}

impl SummarizeBody {
    pub fn validate(self) -> Result<ValidatedRequest> {
        let text = match self.text {
            Some(Value::String(text)) if !text.is_empty() => text,
            _ => return Err(summarizer::missing_text()),
        };
        summarizer::validate_text(&text)?;

        let length = match self.options.and_then(|options| options.length) {
            None | Some(Value::Null) => LengthTier::default(),
            Some(Value::String(token)) => token.parse()?,
            Some(_) => return Err(summarizer::invalid_length()),
        };

        Ok(ValidatedRequest { text, length })
    }
}
