//! Recovers a JSON payload from free-form model output.
//!
//! Search-grounded generation cannot be combined with a JSON response
//! type, so answers arrive as text that may carry prose around the
//! payload or wrap it in a markdown code fence.

use serde::de::DeserializeOwned;
use thiserror::Error;

const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    List,
    Object,
}

impl Shape {
    pub fn delimiters(self) -> (char, char) {
        match self {
            Shape::List => ('[', ']'),
            Shape::Object => ('{', '}'),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no {open}...{close} payload found in response")]
    NoPayload { open: char, close: char },
    #[error("payload is not valid json: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ExtractError {
    pub fn is_missing_payload(&self) -> bool {
        matches!(self, ExtractError::NoPayload { .. })
    }
}

/// Strips a leading ```` ```lang ```` fence and its closing fence, if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix(FENCE) else {
        return trimmed;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.strip_suffix(FENCE).unwrap_or(rest);
    rest.trim()
}

/// Returns the span from the first `open` to the last `close`, inclusive.
pub fn extract_payload(raw: &str, open: char, close: char) -> Result<&str, ExtractError> {
    let cleaned = strip_code_fence(raw);
    let missing = ExtractError::NoPayload { open, close };
    let Some(start) = cleaned.find(open) else {
        return Err(missing);
    };
    let Some(end) = cleaned.rfind(close) else {
        return Err(missing);
    };
    if end < start {
        return Err(missing);
    }
    Ok(&cleaned[start..end + close.len_utf8()])
}

pub fn extract_json<T: DeserializeOwned>(raw: &str, shape: Shape) -> Result<T, ExtractError> {
    let (open, close) = shape.delimiters();
    let payload = extract_payload(raw, open, close)?;
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
mod tests {
    use super::strip_code_fence;

    #[test]
    fn strips_tagged_fence() {
        assert_eq!(strip_code_fence("```json\n[1,2]\n```"), "[1,2]");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fence("  ```\n{\"a\":1}\n```  "), "{\"a\":1}");
    }

    #[test]
    fn tolerates_missing_closing_fence() {
        assert_eq!(strip_code_fence("```json\n[1]"), "[1]");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fence(" intro [1] outro "), "intro [1] outro");
    }
}
