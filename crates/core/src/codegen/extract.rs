use super::types::FileMap;

/// The agent reply could not be turned into a [`FileMap`].
#[derive(thiserror::Error, Debug)]
#[error("Failed to parse generated code: {0}")]
pub struct ExtractionError(#[from] serde_json::Error);

/// A Markdown code fence recognised around the agent payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceRule {
    pub open: &'static str,
    pub close: &'static str,
}

/// Fence rules in priority order. The first rule whose opener appears in the
/// text wins, even if a later rule would also match.
pub const FENCE_RULES: &[FenceRule] = &[
    FenceRule {
        open: "```json",
        close: "```",
    },
    FenceRule {
        open: "```",
        close: "```",
    },
];

/// Strip Markdown code fences from an agent reply.
///
/// Returns the text between the first opener and the next closer, trimmed.
/// A missing closer yields everything after the opener. Text without any
/// fence is returned trimmed.
pub fn strip_fences(text: &str) -> &str {
    for rule in FENCE_RULES {
        let Some(start) = text.find(rule.open) else {
            continue;
        };

        let body = &text[start + rule.open.len()..];
        let body = match body.find(rule.close) {
            Some(end) => &body[..end],
            None => body,
        };

        return body.trim();
    }

    text.trim()
}

/// Extract the generated project files from a raw agent reply.
///
/// The fence-stripped text must be a JSON object whose values are all
/// strings. Anything else fails as a whole; no partial map is returned.
pub fn extract_files(raw: &str) -> Result<FileMap, ExtractionError> {
    Ok(serde_json::from_str(strip_fences(raw))?)
}
