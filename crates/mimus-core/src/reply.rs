//! Reply formatting: inline text or file-attachment fallback.

use std::path::PathBuf;

/// Notice sent alongside an attachment when a result exceeds the inline limit.
pub const OVERSIZE_NOTICE: &str =
    "Response content exceeded the platform's message size limit; see the attached file";

/// How an inference result should be delivered back to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Result fits within the platform limit and is sent as message text.
    Inline(String),
    /// Result is too large; deliver the artifact file with a notice.
    Attachment { path: PathBuf, notice: String },
}

impl ReplyOutcome {
    /// Decide delivery for `result` given the platform's inline `limit`.
    ///
    /// Length is counted in characters, matching the platform's limit
    /// semantics. A result of exactly `limit` characters is still inline.
    pub fn decide(result: &str, limit: usize, artifact: PathBuf) -> Self {
        if result.chars().count() <= limit {
            Self::Inline(result.to_string())
        } else {
            Self::Attachment {
                path: artifact,
                notice: OVERSIZE_NOTICE.to_string(),
            }
        }
    }
}
