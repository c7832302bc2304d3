//! Request body of the `generateContent` endpoint

use serde::{Deserialize, Serialize};

/// Safety threshold applied to every harm category
pub const DEFAULT_SAFETY_THRESHOLD: &str = "BLOCK_ONLY_HIGH";

/// Full request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub safety_settings: Vec<SafetySetting>,
}

impl GenerateContentRequest {
    /// Wrap a prompt in a single user turn with the fixed request options
    pub fn new(prompt: impl Into<String>, options: &RequestOptions) -> Self {
        let tools = if options.grounding {
            vec![Tool::google_search()]
        } else {
            Vec::new()
        };

        Self {
            contents: vec![Content::user(prompt)],
            generation_config: options.generation.clone(),
            tools,
            safety_settings: HarmCategory::all()
                .iter()
                .map(|category| SafetySetting {
                    category: *category,
                    threshold: options.safety_threshold.clone(),
                })
                .collect(),
        }
    }

    /// The prompt text carried by the request
    pub fn prompt(&self) -> Option<&str> {
        self.contents
            .first()
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
    }
}

/// One conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }
}

/// A content fragment; only text fragments are used here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Sampling and length parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 512,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
        }
    }
}

/// Tool declaration; only live web search grounding is requested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

impl Tool {
    pub fn google_search() -> Self {
        Self {
            google_search: GoogleSearch {},
        }
    }
}

/// Marker object enabling Google Search grounding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// Content-safety categories filtered on every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub fn all() -> &'static [HarmCategory] {
        &[
            HarmCategory::Harassment,
            HarmCategory::HateSpeech,
            HarmCategory::SexuallyExplicit,
            HarmCategory::DangerousContent,
        ]
    }
}

/// Category/threshold pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: String,
}

/// Fixed options applied to every request of a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub generation: GenerationConfig,
    pub grounding: bool,
    pub safety_threshold: String,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            grounding: true,
            safety_threshold: DEFAULT_SAFETY_THRESHOLD.to_string(),
        }
    }
}
