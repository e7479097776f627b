use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::extract::Shape;
use crate::http_client::http_client;
use crate::model::Match;

#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub prompt: &'a str,
    pub system_instruction: &'a str,
    pub use_search: bool,
    /// Payload shape the caller will extract from the answer.
    pub expect: Shape,
    /// Match under analysis, if any. The HTTP backend ignores it.
    pub fixture: Option<&'a Match>,
}

/// A text generation backend. Implementations return the raw answer text.
pub trait TextGenerator {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String> {
        (**self).generate(request)
    }
}

pub struct GeminiClient {
    client: &'static Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| anyhow!("missing GEMINI_API_KEY"))?;
        Ok(Self {
            client: http_client(config.timeout)?,
            api_key,
            model: normalize_model(&config.model),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerateRequest<'_>) -> Result<String> {
        let body = build_request_body(request);
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .context("request failed")?;
        let status = resp.status();
        let text = resp.text().context("failed reading body")?;
        if !status.is_success() {
            return Err(anyhow!("http {}: {}", status, truncate(&text, 300)));
        }
        parse_generate_response(&text)
    }
}

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<GeminiTool>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GeminiTool {
    google_search: EmptyObject,
}

#[derive(Serialize)]
struct EmptyObject {}

fn build_request_body<'a>(request: &GenerateRequest<'a>) -> GeminiRequest<'a> {
    let system_instruction = if request.system_instruction.trim().is_empty() {
        None
    } else {
        Some(GeminiContent {
            role: None,
            parts: vec![GeminiPart {
                text: request.system_instruction,
            }],
        })
    };
    let tools = if request.use_search {
        vec![GeminiTool {
            google_search: EmptyObject {},
        }]
    } else {
        Vec::new()
    };
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user"),
            parts: vec![GeminiPart {
                text: request.prompt,
            }],
        }],
        system_instruction,
        tools,
    }
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

/// Concatenates the text parts of the first candidate. A response without
/// text yields an empty string; a blocked prompt is an error.
pub fn parse_generate_response(raw: &str) -> Result<String> {
    let resp: GeminiResponse =
        serde_json::from_str(raw.trim()).context("invalid generateContent json")?;
    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(anyhow!("prompt blocked: {reason}"));
    }
    let text = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter(|part| !part.thought)
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

fn normalize_model(model: &str) -> String {
    let trimmed = model.trim();
    trimmed
        .strip_prefix("models/")
        .unwrap_or(trimmed)
        .to_string()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{GenerateRequest, build_request_body, normalize_model, truncate};
    use crate::extract::Shape;

    #[test]
    fn search_tool_is_sent_when_requested() {
        let req = GenerateRequest {
            prompt: "p",
            system_instruction: "s",
            use_search: true,
            expect: Shape::List,
            fixture: None,
        };
        let json = serde_json::to_value(build_request_body(&req)).expect("serializable");
        assert_eq!(json["tools"][0]["google_search"], serde_json::json!({}));
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "s");
        assert_eq!(json["contents"][0]["role"], "user");
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn tools_omitted_without_search() {
        let req = GenerateRequest {
            prompt: "p",
            system_instruction: "",
            use_search: false,
            expect: Shape::Object,
            fixture: None,
        };
        let json = serde_json::to_value(build_request_body(&req)).expect("serializable");
        assert!(json.get("tools").is_none());
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn model_prefix_is_stripped() {
        assert_eq!(normalize_model(" models/gemini-2.5-flash "), "gemini-2.5-flash");
        assert_eq!(normalize_model("gemini-2.5-pro"), "gemini-2.5-pro");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
