use std::fmt;

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

// ── Payload ───────────────────────────────────────────────────────────────────

/// An application-level payload crossing the wire seam.
///
/// The variant set is closed on purpose: connection handlers build one of
/// these and hand it to an [`Encoder`](crate::Encoder), and the compiler
/// rejects anything else. A codec that cannot carry a given variant reports
/// that with [`CodecError`](crate::CodecError) instead of guessing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Payload {
    /// A frame already in wire form, pre-serialized by an outer layer.
    Binary(ByteBuf),
    /// A UTF-8 text frame.
    Text(String),
}

impl Payload {
    /// Build a binary payload from any byte source.
    pub fn binary(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Binary(ByteBuf::from(bytes.into()))
    }

    /// Build a text payload.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The shape tag of this payload.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Binary(_) => PayloadKind::Binary,
            Self::Text(_) => PayloadKind::Text,
        }
    }
}

// ── Payload kinds ─────────────────────────────────────────────────────────────

/// Fieldless shape tag for [`Payload`].
///
/// Doubles as the decode selector — the caller states which shape it expects
/// back — and as the shape carried inside codec errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PayloadKind {
    Binary,
    Text,
}

impl PayloadKind {
    /// Lower-case shape name, as it appears in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
