use http::header::{CONTENT_TYPE, InvalidHeaderValue, USER_AGENT};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::domain::AppKey;
use crate::transport::signature::Signature;

pub const APP_KEY: HeaderName = HeaderName::from_static("app-key");
pub const NONCE: HeaderName = HeaderName::from_static("nonce");
pub const TIMESTAMP: HeaderName = HeaderName::from_static("timestamp");
pub const SIGNATURE: HeaderName = HeaderName::from_static("signature");

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const DEFAULT_USER_AGENT: &str = concat!("rongcloud-rs/", env!("CARGO_PKG_VERSION"));

/// Stamp authentication headers plus form content type and user agent.
pub fn fill_signed_headers(
    headers: &mut HeaderMap,
    app_key: &AppKey,
    signature: &Signature,
    user_agent: &HeaderValue,
) -> Result<(), InvalidHeaderValue> {
    headers.insert(APP_KEY, HeaderValue::from_str(app_key.as_str())?);
    headers.insert(NONCE, HeaderValue::from_str(&signature.nonce)?);
    headers.insert(TIMESTAMP, HeaderValue::from_str(&signature.timestamp)?);
    headers.insert(SIGNATURE, {
        let mut value = HeaderValue::from_str(&signature.signature)?;
        value.set_sensitive(true);
        value
    });
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    headers.insert(USER_AGENT, user_agent.clone());
    Ok(())
}

/// Switch the body content type to JSON; other headers are left alone.
pub fn fill_json_content_type(headers: &mut HeaderMap) {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_headers_are_complete() {
        let mut headers = HeaderMap::new();
        let signature = Signature::compute("abc", "111", "222");
        fill_signed_headers(
            &mut headers,
            &AppKey::new("key").unwrap(),
            &signature,
            &HeaderValue::from_static(DEFAULT_USER_AGENT),
        )
        .unwrap();

        assert_eq!(headers["App-Key"], "key");
        assert_eq!(headers["Nonce"], "111");
        assert_eq!(headers["Timestamp"], "222");
        assert_eq!(headers["Signature"], signature.signature.as_str());
        assert!(headers["Signature"].is_sensitive());
        assert_eq!(headers["Content-Type"], FORM_CONTENT_TYPE);
        assert!(
            headers["User-Agent"]
                .to_str()
                .unwrap()
                .starts_with("rongcloud-rs/")
        );
    }

    #[test]
    fn json_content_type_only_touches_content_type() {
        let mut headers = HeaderMap::new();
        fill_signed_headers(
            &mut headers,
            &AppKey::new("key").unwrap(),
            &Signature::compute("abc", "1", "2"),
            &HeaderValue::from_static(DEFAULT_USER_AGENT),
        )
        .unwrap();
        let before = headers.len();

        fill_json_content_type(&mut headers);
        assert_eq!(headers.len(), before);
        assert_eq!(headers["Content-Type"], JSON_CONTENT_TYPE);
        assert_eq!(headers["App-Key"], "key");

        let mut bare = HeaderMap::new();
        fill_json_content_type(&mut bare);
        assert_eq!(bare.len(), 1);
        assert_eq!(bare[CONTENT_TYPE], JSON_CONTENT_TYPE);
    }
}
