//! Master-key authorization for the Cosmos DB REST API.
//!
//! Every request carries an `authorization` header derived from the verb,
//! resource type, resource link and `x-ms-date` of that request, signed with
//! HMAC-SHA256 using the base64-decoded account key.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{CosmosError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Format a timestamp the way `x-ms-date` expects (RFC 1123, always GMT).
pub fn rfc1123_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Build the payload that gets signed.
///
/// The resource link keeps its case; everything else is lowercased.
pub fn string_to_sign(verb: &str, resource_type: &str, resource_link: &str, date: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        resource_link,
        date.to_lowercase()
    )
}

/// Decode the account key, failing early if it is not valid base64.
pub fn decode_master_key(key: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(key.trim())
        .map_err(|e| CosmosError::Signature(format!("master key is not valid base64: {}", e)))
}

/// Produce the URL-encoded `authorization` header value for one request.
pub fn master_key_token(
    key: &str,
    verb: &str,
    resource_type: &str,
    resource_link: &str,
    date: &str,
) -> Result<String> {
    let key_bytes = decode_master_key(key)?;
    let mut mac = HmacSha256::new_from_slice(&key_bytes)
        .map_err(|e| CosmosError::Signature(e.to_string()))?;
    mac.update(string_to_sign(verb, resource_type, resource_link, date).as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    let token = format!("type=master&ver=1.0&sig={}", signature);
    Ok(urlencoding::encode(&token).into_owned())
}
