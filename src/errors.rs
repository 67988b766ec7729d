//! Error types with diagnostics using miette
//!
//! Geometry never fails: non-finite or negative inputs flow through into the
//! markup unchanged. The only errors are caller mistakes at the edges.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building or exporting a vector icon
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("invalid anchor kind: {value:?} (expected one of \"tail\", \"mid\", \"head\")")]
    #[diagnostic(
        code(vector_icon::invalid_anchor),
        help("the anchor must be one of `tail`, `mid` or `head`")
    )]
    InvalidAnchor { value: String },

    #[error("failed to serialize divIcon options")]
    #[diagnostic(code(vector_icon::serialize))]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_anchor_message_lists_accepted_tokens() {
        let err = IconError::InvalidAnchor {
            value: "nose".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"nose\""), "{msg}");
        for token in ["tail", "mid", "head"] {
            assert!(msg.contains(token), "{msg} should mention {token}");
        }
    }

    #[test]
    fn invalid_anchor_has_diagnostic_code() {
        let err = IconError::InvalidAnchor {
            value: "nose".to_string(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("vector_icon::invalid_anchor"));
        assert!(err.help().is_some());
    }
}
