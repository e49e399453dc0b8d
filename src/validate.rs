//! URL validation ahead of QR encoding

use tracing::{error, info};
use url::Url;

/// Check whether `input` is a syntactically well-formed absolute URL.
///
/// A bare scheme without a host (`mailto:`, `data:` and friends) is
/// rejected; the QR payload is expected to be a fetchable link. The
/// attempt and its outcome are logged, so callers only need to skip the
/// encode step on `false`.
pub fn is_valid_url(input: &str) -> bool {
    info!("Validating URL: {input}");

    let valid = matches!(Url::parse(input), Ok(parsed) if parsed.has_host());
    if valid {
        info!("URL is valid: {input}");
    } else {
        error!("Invalid URL provided: {input}");
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1"));
    }

    #[test]
    fn accepts_other_host_bearing_schemes() {
        assert!(is_valid_url("ftp://ftp.example.com/pub"));
    }

    #[test]
    fn rejects_relative_and_garbage_input() {
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn rejects_hostless_schemes() {
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("data:text/plain,hello"));
    }
}
