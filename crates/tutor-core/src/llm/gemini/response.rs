//! Response body of the `generateContent` endpoint

use super::request::Content;
use serde::Deserialize;

/// Response body; only the fields needed to extract text are modelled
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate.
    ///
    /// Non-empty fragments are joined with a blank line and the result is
    /// trimmed. Returns `None` when nothing is left.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let joined = parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> GenerateContentResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_single_fragment() {
        let response = parse(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"  Transformers use attention.\n"}]},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(response.text().as_deref(), Some("Transformers use attention."));
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_fragments_joined_with_blank_line() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"First."},{"text":""},{"functionCall":{"name":"x"}},{"text":"Second."}]}}]}"#,
        );
        assert_eq!(response.text().as_deref(), Some("First.\n\nSecond."));
    }

    #[test]
    fn test_only_first_candidate_is_used() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"one"}]}},{"content":{"parts":[{"text":"two"}]}}]}"#,
        );
        assert_eq!(response.text().as_deref(), Some("one"));
    }

    #[test]
    fn test_missing_text() {
        assert_eq!(parse(r#"{}"#).text(), None);
        assert_eq!(parse(r#"{"candidates":[]}"#).text(), None);
        assert_eq!(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).text(), None);
        assert_eq!(
            parse(r#"{"candidates":[{"content":{"parts":[{"text":"   "}]}}]}"#).text(),
            None
        );
    }
}
