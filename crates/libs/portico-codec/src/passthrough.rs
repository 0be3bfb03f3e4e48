use crate::error::CodecError;
use crate::traits::Encoder;
use crate::types::{Payload, PayloadKind};

/// Byte pass-through codec for payloads that are already in wire form.
///
/// "Encoding" moves the byte buffer out unchanged and "decoding" copies the
/// received bytes back into a binary payload. Plug this in when an outer
/// layer pre-serializes the message schema and the gateway only needs a
/// uniform codec seam. It performs no structured serialization — a format
/// that does is a separate [`Encoder`] implementation, not a mode of this
/// one.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughEncoder;

impl PassthroughEncoder {
    const NAME: &'static str = "passthrough";
}

impl Encoder for PassthroughEncoder {
    fn encode(&self, payload: Payload) -> Result<Vec<u8>, CodecError> {
        match payload {
            Payload::Binary(bytes) => Ok(bytes.into_vec()),
            other => Err(CodecError::encoding_unsupported(Self::NAME, other.kind())),
        }
    }

    fn decode(&self, data: &[u8], want: PayloadKind) -> Result<Payload, CodecError> {
        match want {
            PayloadKind::Binary => Ok(Payload::binary(data)),
            other => Err(CodecError::decoding_unsupported(Self::NAME, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_returns_binary_bytes_unchanged() {
        let codec = PassthroughEncoder;
        let wire = codec
            .encode(Payload::binary(vec![0x01, 0x02, 0x03]))
            .expect("binary payloads encode");
        assert_eq!(wire, vec![0x01, 0x02, 0x03]);
    }

    #[test]
    fn encode_accepts_empty_frames() {
        let codec = PassthroughEncoder;
        let wire = codec
            .encode(Payload::binary(Vec::new()))
            .expect("empty frames encode");
        assert!(wire.is_empty());
    }

    #[test]
    fn encode_rejects_text_payloads() {
        let codec = PassthroughEncoder;
        let err = codec
            .encode(Payload::text("42"))
            .expect_err("text is not wire form");
        assert_eq!(
            err,
            CodecError::EncodingUnsupported {
                codec: "passthrough",
                offered: PayloadKind::Text,
            }
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn decode_yields_binary_payload_equal_to_input() {
        let codec = PassthroughEncoder;
        let decoded = codec
            .decode(&[0xAA], PayloadKind::Binary)
            .expect("binary targets decode");
        assert_eq!(decoded, Payload::binary(vec![0xAA]));
    }

    #[test]
    fn decode_rejects_text_target() {
        let codec = PassthroughEncoder;
        let err = codec
            .decode(&[0xAA], PayloadKind::Text)
            .expect_err("only binary targets are supported");
        assert_eq!(
            err,
            CodecError::DecodingUnsupported {
                codec: "passthrough",
                wanted: PayloadKind::Text,
            }
        );
    }

    /// Same inputs, same outcomes — the codec keeps no hidden state between
    /// calls.
    #[test]
    fn repeated_calls_are_identical() {
        let codec = PassthroughEncoder;

        let first = codec.encode(Payload::binary(b"frame".to_vec()));
        let second = codec.encode(Payload::binary(b"frame".to_vec()));
        assert_eq!(first, second);

        let first = codec.decode(b"frame", PayloadKind::Text);
        let second = codec.decode(b"frame", PayloadKind::Text);
        assert_eq!(first, second);
    }
}
