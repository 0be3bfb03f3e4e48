//! Wire-codec boundary for the portico message gateway.
//!
//! This crate defines the seam between the gateway's connection layer and the
//! byte stream it puts on the transport. It provides:
//!
//! - **[`Payload`]** — the closed set of application payload shapes
//! - **[`Encoder`]** — the encode/decode contract every wire codec satisfies
//! - **[`PassthroughEncoder`]** — the byte-identity reference codec
//! - **[`CodecError`]** — typed, non-retryable shape-mismatch errors
//!
//! The connection layer holds an `Arc<dyn Encoder>` selected when the gateway
//! is built, calls [`Encoder::encode`] before writing to a socket and
//! [`Encoder::decode`] after reading from one, and never inspects the byte
//! representation itself — so the wire format can be swapped without touching
//! connection code.

pub mod error;
pub mod traits;
pub mod types;

pub use error::CodecError;
pub use traits::Encoder;
pub use types::{Payload, PayloadKind};

mod passthrough;
pub use passthrough::PassthroughEncoder;
