use crate::types::PayloadKind;

/// Errors returned by wire-codec operations.
///
/// Both variants signal an integration error — the caller handed the codec a
/// shape its wire format cannot carry. Callers should reject the message or
/// close the connection; retrying cannot change the outcome.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    #[error("{codec} codec cannot encode {offered} payloads")]
    EncodingUnsupported {
        codec: &'static str,
        offered: PayloadKind,
    },

    #[error("{codec} codec cannot decode into {wanted} payloads")]
    DecodingUnsupported {
        codec: &'static str,
        wanted: PayloadKind,
    },
}

impl CodecError {
    /// Returns `true` for transient errors that may succeed on retry.
    ///
    /// Every shipped variant is a shape mismatch, so today this is always
    /// `false`; it exists so callers branch on the policy rather than on
    /// variant names.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Convenience constructor for `EncodingUnsupported`.
    pub fn encoding_unsupported(codec: &'static str, offered: PayloadKind) -> Self {
        Self::EncodingUnsupported { codec, offered }
    }

    /// Convenience constructor for `DecodingUnsupported`.
    pub fn decoding_unsupported(codec: &'static str, wanted: PayloadKind) -> Self {
        Self::DecodingUnsupported { codec, wanted }
    }
}
