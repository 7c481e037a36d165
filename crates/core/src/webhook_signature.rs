//! Payment-provider webhook signature verification.
//!
//! The provider sends a `Stripe-Signature` header of the form
//! `t=<unix seconds>,v1=<hex>[,v1=<hex>...]`. Each `v1` value is the
//! HMAC-SHA256 of `"{t}.{raw body}"` keyed with the endpoint secret. A request
//! verifies when any `v1` matches and `t` is not older than the tolerance.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the header carrying the signature.
pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// Default maximum age of a signed timestamp, in seconds.
pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

const SCHEME: &str = "v1";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("signature header has no timestamp")]
    MissingTimestamp,

    #[error("signature header has no v1 signatures")]
    MissingSignatures,

    #[error("signature timestamp is outside the tolerance window")]
    TimestampOutsideTolerance,

    #[error("no signature matches the payload")]
    Mismatch,
}

fn mac_for(secret: &str, timestamp: i64, payload: &[u8]) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    mac
}

/// Verify `header` against the raw request body.
///
/// `now` is the current Unix time in seconds. Returns the signed timestamp on
/// success.
pub fn verify(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: i64,
    tolerance_secs: i64,
) -> Result<i64, SignatureError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            continue;
        };
        match key {
            "t" => timestamp = value.parse::<i64>().ok(),
            SCHEME => {
                // Undecodable entries cannot match; skip them.
                if let Ok(bytes) = hex::decode(value) {
                    signatures.push(bytes);
                }
            }
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or(SignatureError::MissingTimestamp)?;
    if signatures.is_empty() {
        return Err(SignatureError::MissingSignatures);
    }

    let mac = mac_for(secret, timestamp, payload);
    let matched = signatures
        .iter()
        .any(|sig| mac.clone().verify_slice(sig).is_ok());
    if !matched {
        return Err(SignatureError::Mismatch);
    }

    if tolerance_secs > 0 && timestamp < now - tolerance_secs {
        return Err(SignatureError::TimestampOutsideTolerance);
    }

    Ok(timestamp)
}

/// Produce a header value for `payload` signed at `timestamp`.
///
/// Used by tests and local tooling that replay provider events.
pub fn sign(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let digest = mac_for(secret, timestamp, payload).finalize().into_bytes();
    format!("t={timestamp},{SCHEME}={}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const BODY: &[u8] = br#"{"id":"evt_1","type":"checkout.session.completed"}"#;
    const NOW: i64 = 1_700_000_000;

    #[test]
    fn signed_payload_verifies() {
        let header = sign(BODY, SECRET, NOW);
        assert_eq!(verify(BODY, &header, SECRET, NOW, 300), Ok(NOW));
    }

    #[test]
    fn tampered_body_fails() {
        let header = sign(BODY, SECRET, NOW);
        let result = verify(b"{\"id\":\"evt_2\"}", &header, SECRET, NOW, 300);
        assert_eq!(result, Err(SignatureError::Mismatch));
    }

    #[test]
    fn wrong_secret_fails() {
        let header = sign(BODY, "another_secret", NOW);
        assert_eq!(
            verify(BODY, &header, SECRET, NOW, 300),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn stale_timestamp_fails() {
        let header = sign(BODY, SECRET, NOW - 301);
        assert_eq!(
            verify(BODY, &header, SECRET, NOW, 300),
            Err(SignatureError::TimestampOutsideTolerance)
        );
    }

    #[test]
    fn zero_tolerance_skips_age_check() {
        let header = sign(BODY, SECRET, NOW - 10_000);
        assert!(verify(BODY, &header, SECRET, NOW, 0).is_ok());
    }

    #[test]
    fn any_matching_signature_is_enough() {
        let good = sign(BODY, SECRET, NOW);
        let good_sig = good.split_once(",v1=").unwrap().1;
        let header = format!("t={NOW},v1=deadbeef,v1={good_sig},v0=ignored");
        assert!(verify(BODY, &header, SECRET, NOW, 300).is_ok());
    }

    #[test]
    fn malformed_headers_are_rejected() {
        assert_eq!(
            verify(BODY, "", SECRET, NOW, 300),
            Err(SignatureError::MissingTimestamp)
        );
        assert_eq!(
            verify(BODY, "t=abc,v1=00", SECRET, NOW, 300),
            Err(SignatureError::MissingTimestamp)
        );
        assert_eq!(
            verify(BODY, &format!("t={NOW}"), SECRET, NOW, 300),
            Err(SignatureError::MissingSignatures)
        );
        assert_eq!(
            verify(BODY, &format!("t={NOW},v1=not-hex"), SECRET, NOW, 300),
            Err(SignatureError::MissingSignatures)
        );
    }
}
