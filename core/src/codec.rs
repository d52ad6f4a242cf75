// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Compact, versioned text form of a [`Roster`], safe to use as a URL fragment.
//!
//! The layout is `v1:<base64url(json)>`, without padding. Decoding tolerates a leading `#`,
//! a missing version prefix, padding characters and the standard base64 alphabet.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::NaiveDate;
use url::Url;

use crate::datetime::today;
use crate::roster::Roster;
use crate::sanitize::sanitize_with;

/// Version tag written in front of every encoded roster.
pub const STATE_VERSION_PREFIX: &str = "v1:";

/// Why an encoded roster could not be read.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The text is not valid base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The decoded text is not a JSON document.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes a roster, sanitizing it first.
pub fn encode(roster: &Roster) -> String {
    encode_with(roster, today())
}

/// Encodes a roster, sanitizing it first with the given "today".
pub fn encode_with(roster: &Roster, today: NaiveDate) -> String {
    let clean = roster.sanitized_with(today);
    // serializing plain strings and integers cannot fail
    let json = serde_json::to_string(&clean).unwrap_or_default();
    format!("{STATE_VERSION_PREFIX}{}", URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a roster. Any failure yields the built-in roster.
pub fn decode(text: &str) -> Roster {
    decode_with(text, today())
}

/// Decodes a roster with the given "today". Any failure yields the built-in roster.
pub fn decode_with(text: &str, today: NaiveDate) -> Roster {
    match try_decode_with(text, today) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::warn!(error = %e, "failed to decode state, using the default roster");
            Roster::default_with(today)
        }
    }
}

/// Decodes a roster, reporting why the text could not be read.
pub fn try_decode(text: &str) -> Result<Roster, DecodeError> {
    try_decode_with(text, today())
}

/// Decodes a roster with the given "today", reporting why the text could not be read.
///
/// Empty text is not an error: it means no state was shared and yields the built-in roster.
pub fn try_decode_with(text: &str, today: NaiveDate) -> Result<Roster, DecodeError> {
    let text = text.trim();
    let text = text.strip_prefix('#').unwrap_or(text);
    if text.is_empty() {
        return Ok(Roster::default_with(today));
    }

    let payload = text.strip_prefix(STATE_VERSION_PREFIX).unwrap_or(text);
    let payload = payload
        .trim_end_matches('=')
        .replace('+', "-")
        .replace('/', "_");

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    let json = String::from_utf8(bytes)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    Ok(sanitize_with(&value, today))
}

/// The state text carried by `input`, which is either a full URL or a bare fragment.
pub fn fragment_of(input: &str) -> &str {
    let input = input.trim();
    match input.split_once('#') {
        Some((_, fragment)) => fragment,
        None if input.contains("://") => "",
        None => input,
    }
}

/// A link to `base` whose fragment carries the encoded roster.
pub fn share_url(base: &Url, roster: &Roster) -> Url {
    share_url_with(base, roster, today())
}

/// A link to `base` whose fragment carries the roster encoded with the given "today".
pub fn share_url_with(base: &Url, roster: &Roster, today: NaiveDate) -> Url {
    let mut url = base.clone();
    url.set_fragment(Some(&encode_with(roster, today)));
    url
}
