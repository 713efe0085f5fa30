//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding wire messages.
///
/// A decode failure never terminates a connection: the dispatcher logs it
/// and drops the offending frame.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed — malformed JSON, a missing or unknown
    /// `type` tag, or fields of the wrong shape.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
