use url::Url;

pub trait UriParser: Send + Sync {
    /// The lower-cased scheme of `value`, or `None` when it is not a URI.
    fn scheme(&self, value: &str) -> Option<String>;
}

/// WHATWG parsing via `url`, with an RFC 3986 scheme-prefix fallback for URIs `url` rejects
/// (for example `http://` with an empty host still has the scheme `http`).
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardUri;

impl UriParser for StandardUri {
    fn scheme(&self, value: &str) -> Option<String> {
        match Url::parse(value) {
            Ok(url) => Some(url.scheme().to_string()),
            Err(_) => lexical_scheme(value),
        }
    }
}

fn lexical_scheme(value: &str) -> Option<String> {
    let (scheme, _) = value.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| scheme.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_common_schemes() {
        assert_eq!(StandardUri.scheme("https://example.com/").as_deref(), Some("https"));
        assert_eq!(StandardUri.scheme("mailto:security@example.com").as_deref(), Some("mailto"));
        assert_eq!(StandardUri.scheme("tel:+1-201-555-0123").as_deref(), Some("tel"));
        assert_eq!(StandardUri.scheme("HTTP://EXAMPLE.COM").as_deref(), Some("http"));
    }

    #[test]
    fn bare_values_have_no_scheme() {
        assert_eq!(StandardUri.scheme("security@example.com"), None);
        assert_eq!(StandardUri.scheme("example.com/security"), None);
        assert_eq!(StandardUri.scheme("/relative/path"), None);
    }

    #[test]
    fn falls_back_to_lexical_scheme() {
        assert_eq!(lexical_scheme("http://").as_deref(), Some("http"));
        assert_eq!(lexical_scheme("1http://x"), None);
        assert_eq!(lexical_scheme("no colon"), None);
    }
}
