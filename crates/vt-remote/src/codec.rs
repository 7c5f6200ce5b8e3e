// codec.rs — Transport encoding for file bodies.
//
// The contents API carries file bodies as base64 text. Responses wrap the
// payload with newlines every 60 characters, so decoding strips ASCII
// whitespace first; requests are sent unwrapped.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decode a base64 payload as returned by the contents API.
///
/// The API line-wraps response payloads, which the strict base64 alphabet
/// rejects, so whitespace is stripped before decoding.
pub fn decode_transport(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact.as_bytes())
}

/// Encode file content for a contents API write request.
pub fn encode_transport(content: &[u8]) -> String {
    STANDARD.encode(content)
}
