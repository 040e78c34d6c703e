//! Internal request building helpers for the MailerLite protocol.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::{Error, Result};

/// Header carrying the account API key on every request.
pub(crate) const HEADER_API_KEY: &str = "X-MailerLite-ApiKey";

/// Media type used for request and response bodies.
pub(crate) const APPLICATION_JSON: &str = "application/json";

/// Encode a request body as JSON.
///
/// serde_json never HTML-escapes `<`, `>` or `&`, so payloads are sent as
/// the caller wrote them.
pub(crate) fn encode_body<B>(body: &B) -> Result<Vec<u8>>
where
    B: Serialize + ?Sized,
{
    serde_json::to_vec(body).map_err(Error::Encode)
}

/// Percent-encode `value` so it resolves as exactly one path segment.
///
/// Empty and dot segments would resolve to a different resource and are
/// rejected.
pub(crate) fn path_segment(value: &str) -> Result<Cow<'_, str>> {
    if matches!(value, "" | "." | "..") {
        return Err(Error::Path(value.to_string()));
    }
    Ok(urlencoding::encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_escapes_url_syntax() {
        assert_eq!(path_segment("a#b@x.com").unwrap(), "a%23b%40x.com");
        assert_eq!(path_segment("q?x=1").unwrap(), "q%3Fx%3D1");
        assert_eq!(path_segment("../stats").unwrap(), "..%2Fstats");
        assert_eq!(path_segment("12").unwrap(), "12");
    }

    #[test]
    fn test_path_segment_rejects_dot_segments() {
        assert!(matches!(path_segment(".."), Err(Error::Path(_))));
        assert!(matches!(path_segment("."), Err(Error::Path(_))));
        assert!(matches!(path_segment(""), Err(Error::Path(_))));
    }

    #[test]
    fn test_encode_body_keeps_html() {
        let body = serde_json::json!({"title": "<b>News & Updates</b>"});
        let encoded = encode_body(&body).unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            r#"{"title":"<b>News & Updates</b>"}"#
        );
    }
}
