use crate::error::CodecError;
use crate::types::{Payload, PayloadKind};

/// The wire-codec contract every gateway codec implements.
///
/// Implementations convert between application payloads and the byte
/// sequences an outer transport frames and sends. They hold no per-call
/// state and are shared across every connection of a gateway process, so the
/// trait requires `Send + Sync` and is object safe — `Arc<dyn Encoder>` is
/// the expected handle type.
pub trait Encoder: Send + Sync {
    /// Convert an application payload into its wire representation.
    ///
    /// Takes the payload by value so implementations that already hold wire
    /// bytes can move them out without copying.
    ///
    /// # Errors
    /// [`CodecError::EncodingUnsupported`] when this codec's format cannot
    /// represent the payload's shape.
    fn encode(&self, payload: Payload) -> Result<Vec<u8>, CodecError>;

    /// Interpret wire bytes as the payload shape the caller expects.
    ///
    /// # Errors
    /// [`CodecError::DecodingUnsupported`] when the bytes cannot be
    /// interpreted as a `want`-shaped payload. Nothing is produced on
    /// failure.
    fn decode(&self, data: &[u8], want: PayloadKind) -> Result<Payload, CodecError>;
}
