//! Reply text extraction from provider responses.
//!
//! Extractors run in [`EXTRACTION_CHAIN`] order and the first one yielding
//! non-blank text wins. When none does, the caller gets [`Extracted::Filler`].

use serde_json::Value;

use super::GenerateResponse;

/// Reply used when the provider answered but no usable text came back.
pub const FILLER_REPLY: &str = "Let's take a soft breath together — inhale... exhale...";

/// One way of finding reply text in a [`GenerateResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// The top-level `text` field.
    DirectText,
    /// `candidates[0].content.parts[0].text`.
    CandidateParts,
}

/// Extractors in the order they are tried.
pub const EXTRACTION_CHAIN: [Extractor; 2] = [Extractor::DirectText, Extractor::CandidateParts];

impl Extractor {
    /// Returns the text this extractor finds, if any.
    pub fn extract(self, response: &GenerateResponse) -> Option<&str> {
        match self {
            Extractor::DirectText => response.text.as_deref(),
            Extractor::CandidateParts => response
                .candidates
                .as_ref()
                .and_then(|c| c.pointer("/0/content/parts/0/text"))
                .and_then(Value::as_str),
        }
    }
}

/// Outcome of running the extraction chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// Text produced by the provider.
    Generated(String),
    /// Nothing usable; reply with [`FILLER_REPLY`].
    Filler,
}

impl Extracted {
    pub fn into_reply(self) -> String {
        match self {
            Extracted::Generated(text) => text,
            Extracted::Filler => FILLER_REPLY.to_string(),
        }
    }
}

/// Runs the extraction chain over `response`.
pub fn extract_reply(response: &GenerateResponse) -> Extracted {
    EXTRACTION_CHAIN
        .iter()
        .filter_map(|extractor| extractor.extract(response))
        .find(|text| !text.trim().is_empty())
        .map(|text| Extracted::Generated(text.to_string()))
        .unwrap_or(Extracted::Filler)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn candidates(value: Value) -> GenerateResponse {
        GenerateResponse {
            text: None,
            candidates: Some(value),
        }
    }

    #[test]
    fn direct_text_wins() {
        let response = GenerateResponse {
            text: Some("direct".into()),
            candidates: Some(json!([{"content": {"parts": [{"text": "nested"}]}}])),
        };
        assert_eq!(
            extract_reply(&response),
            Extracted::Generated("direct".into())
        );
    }

    #[test]
    fn nested_candidate_used_when_text_missing() {
        let response = candidates(json!([
            {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
            {"content": {"parts": [{"text": "other candidate"}]}}
        ]));
        assert_eq!(
            extract_reply(&response),
            Extracted::Generated("first".into())
        );
    }

    #[test]
    fn blank_direct_text_falls_through_to_candidates() {
        let response = GenerateResponse {
            text: Some("  ".into()),
            candidates: Some(json!([{"content": {"parts": [{"text": "nested"}]}}])),
        };
        assert_eq!(
            extract_reply(&response),
            Extracted::Generated("nested".into())
        );
    }

    #[test]
    fn malformed_candidates_yield_filler() {
        let shapes = [
            json!([]),
            json!({}),
            json!("candidates"),
            json!([{"content": {}}]),
            json!([{"content": {"parts": []}}]),
            json!([{"content": {"parts": [{"text": 7}]}}]),
            json!([{"finishReason": "SAFETY"}]),
        ];
        for shape in shapes {
            assert_eq!(
                extract_reply(&candidates(shape.clone())),
                Extracted::Filler,
                "shape {shape}"
            );
        }
    }

    #[test]
    fn empty_response_yields_filler_reply() {
        let reply = extract_reply(&GenerateResponse::default()).into_reply();
        assert_eq!(reply, FILLER_REPLY);
        assert!(reply.contains("breath together"));
    }

    #[test]
    fn chain_order_is_direct_then_nested() {
        assert_eq!(
            EXTRACTION_CHAIN,
            [Extractor::DirectText, Extractor::CandidateParts]
        );
    }
}
