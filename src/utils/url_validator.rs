//! Link URL validation.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Checks that `raw` is an absolute HTTP or HTTPS URL with a host.
///
/// The URL is not rewritten: links are stored exactly as submitted.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// such as `javascript:` or `file:`.
/// Returns [`UrlValidationError::MissingHost`] if the URL has no host.
pub fn validate_link_url(raw: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_link_url("https://docs.spring.io/spring-boot/docs/current/").is_ok());
        assert!(validate_link_url("http://localhost:8080/path?q=1").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            validate_link_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_link_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            validate_link_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_link_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }
}
