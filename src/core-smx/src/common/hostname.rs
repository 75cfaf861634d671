use url::Url;

use crate::sitemap_gen::Result;

/// Checks that the configured hostname is an absolute URL such as
/// `https://example.com`.
///
/// The serializer concatenates hostname and path textually, so this is the
/// single place a malformed hostname gets caught.
pub fn validate_hostname(hostname: &str) -> Result<()> {
    Url::parse(hostname)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls_are_accepted() {
        assert!(validate_hostname("https://example.com").is_ok());
        assert!(validate_hostname("http://localhost:3000").is_ok());
    }

    #[test]
    fn test_relative_or_garbage_hostnames_are_rejected() {
        assert!(validate_hostname("example.com").is_err());
        assert!(validate_hostname("not a url").is_err());
    }
}
