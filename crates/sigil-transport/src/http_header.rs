//! Server-side header fingerprint.
//!
//! The receiving server fills the `http_header_fingerprint` category from
//! the request it actually saw; the client can only supply the referer.
//! TLS details come from the server's connection metadata and are passed in
//! by the caller.

use sigil_core::HttpHeaderFingerprint;

/// Headers considered ordinary; anything else counts as unusual.
const COMMON_HEADERS: [&str; 11] = [
    "accept",
    "accept-encoding",
    "accept-language",
    "cache-control",
    "connection",
    "cookie",
    "host",
    "pragma",
    "referer",
    "user-agent",
    "upgrade-insecure-requests",
];

/// Build the header fingerprint from request header name/value pairs.
///
/// Names keep their original casing in `headers_present`; the common-set
/// comparison is case-insensitive. `http_version` and the TLS fields are
/// connection metadata -- set them on the returned value where available.
pub fn from_headers<'a, I>(headers: I) -> HttpHeaderFingerprint
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut headers_present = Vec::new();
    let mut unusual_headers = Vec::new();
    let mut referer = None;

    for (name, value) in headers {
        let lower = name.to_lowercase();
        if !COMMON_HEADERS.contains(&lower.as_str()) {
            unusual_headers.push(name.to_string());
        }
        if lower == "referer" {
            referer = Some(value.to_string());
        }
        headers_present.push(name.to_string());
    }

    HttpHeaderFingerprint {
        header_count: u32::try_from(headers_present.len()).ok(),
        http_version: None,
        tls_protocol: None,
        tls_cipher_suite: None,
        headers_present,
        unusual_headers,
        referer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_classifies_headers() {
        let fp = from_headers([
            ("Host", "example.test"),
            ("User-Agent", "sigil/0.4"),
            ("Referer", "https://ref.test/"),
            ("X-Forwarded-For", "203.0.113.7"),
            ("Sec-CH-UA-Platform", "\"Linux\""),
        ]);

        assert_eq!(fp.header_count, Some(5));
        assert_eq!(fp.headers_present.len(), 5);
        assert_eq!(
            fp.unusual_headers,
            vec![
                "X-Forwarded-For".to_string(),
                "Sec-CH-UA-Platform".to_string()
            ]
        );
        assert_eq!(fp.referer.as_deref(), Some("https://ref.test/"));
    }

    #[test]
    fn empty_request_yields_zero_count() {
        let fp = from_headers(std::iter::empty::<(&str, &str)>());
        assert_eq!(fp.header_count, Some(0));
        assert!(fp.headers_present.is_empty());
        assert!(fp.unusual_headers.is_empty());
        assert_eq!(fp.referer, None);
    }

    #[test]
    fn common_set_comparison_ignores_case() {
        let fp = from_headers([("ACCEPT", "*/*"), ("Cookie", "sid=1")]);
        assert!(fp.unusual_headers.is_empty());
    }
}
