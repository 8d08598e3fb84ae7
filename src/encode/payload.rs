//! SVG markup to inscription payload.
//!
//! The pipeline is fixed for compatibility with existing consumers of the hex string:
//!
//! 1. Treat each markup char as one byte (Latin-1) and base64 it. Chars above U+00FF have no
//!    byte and are rejected, mirroring the host `btoa` failure.
//! 2. Prefix with [`SVG_DATA_URI_PREFIX`].
//! 3. Emit each UTF-16 code unit of the data URI as uppercase hex, unpadded, concatenated.
//!
//! Step 3 is not a byte-accurate encoding in general, but every char of a base64 data URI is
//! printable ASCII, so each unit yields exactly two hex digits and the result is reversible.

use std::fmt::{self, Write as _};

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::foundation::error::{RainbowError, RainbowResult};

pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Uppercase hex payload, without the `0x` marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// `0x`-prefixed form for a transaction `data` field.
    pub fn to_tx_data(&self) -> String {
        format!("0x{}", self.0)
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn latin1_bytes(s: &str) -> RainbowResult<Vec<u8>> {
    s.chars()
        .enumerate()
        .map(|(index, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| {
                RainbowError::encode(format!(
                    "char {ch:?} (U+{:04X}) at index {index} is outside Latin-1",
                    u32::from(ch)
                ))
            })
        })
        .collect()
}

pub fn svg_data_uri(markup: &str) -> RainbowResult<String> {
    let bytes = latin1_bytes(markup)?;
    Ok(format!("{SVG_DATA_URI_PREFIX}{}", STANDARD.encode(bytes)))
}

pub fn string_to_hex(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        let _ = write!(out, "{unit:X}");
    }
    out
}

#[tracing::instrument(skip(markup), fields(len = markup.len()))]
pub fn encode_payload(markup: &str) -> RainbowResult<EncodedPayload> {
    let uri = svg_data_uri(markup)?;
    Ok(EncodedPayload(string_to_hex(&uri)))
}

/// Inverse of [`encode_payload`]. Accepts an optional `0x` marker and either hex case.
pub fn decode_payload(hex_str: &str) -> RainbowResult<String> {
    let trimmed = hex_str.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let uri_bytes =
        hex::decode(digits).map_err(|e| RainbowError::decode(format!("payload hex: {e}")))?;
    let uri: String = uri_bytes.iter().copied().map(char::from).collect();

    let b64 = uri.strip_prefix(SVG_DATA_URI_PREFIX).ok_or_else(|| {
        RainbowError::decode(format!(
            "payload is not an svg data uri (expected prefix {SVG_DATA_URI_PREFIX:?})"
        ))
    })?;

    let markup_bytes = STANDARD
        .decode(b64)
        .map_err(|e| RainbowError::decode(format!("payload base64: {e}")))?;
    Ok(markup_bytes.into_iter().map(char::from).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/payload.rs"]
mod tests;
