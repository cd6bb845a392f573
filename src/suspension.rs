/// Decoding of The Great Suspender's placeholder page URLs
///
/// A suspended tab's address is replaced with the extension page below, with
/// the original page carried in the fragment:
/// `suspended.html#ttl=<title>&pos=0&uri=<url>`
use crate::domain::collapse_www;
use crate::error::RecoveryError;
use url::Url;

pub const SUSPENDED_PAGE_URL: &str =
    "chrome-extension://klbibkeccnjlkjkiokjodocebajanakg/suspended.html";

/// Title and URL recovered from a history entry
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
    pub title: String,
    pub url: String,
}

pub fn is_suspension_url(url: &str) -> bool {
    url.starts_with(SUSPENDED_PAGE_URL)
}

/// Resolve the page a history entry really refers to.
///
/// Suspension URLs have `ttl` / `uri` read from the fragment; each falls back
/// to the entry's own title / URL (with `/www.` collapsed) when missing or
/// empty. Any other URL passes through untouched.
pub fn resolve_page(url: &str, title: &str) -> Result<ResolvedPage, RecoveryError> {
    if !is_suspension_url(url) {
        return Ok(ResolvedPage {
            title: title.to_string(),
            url: url.to_string(),
        });
    }

    let collapsed = collapse_www(url);
    let parsed = Url::parse(&collapsed).map_err(|e| RecoveryError::malformed_url(url, e))?;

    let mut recovered_title = None;
    let mut recovered_url = None;

    if let Some(fragment) = parsed.fragment() {
        for (key, value) in url::form_urlencoded::parse(fragment.as_bytes()) {
            match key.as_ref() {
                "ttl" if recovered_title.is_none() && !value.is_empty() => {
                    recovered_title = Some(value.into_owned())
                }
                "uri" if recovered_url.is_none() && !value.is_empty() => {
                    recovered_url = Some(value.into_owned())
                }
                _ => {}
            }
        }
    }

    Ok(ResolvedPage {
        title: recovered_title.unwrap_or_else(|| title.to_string()),
        url: recovered_url.unwrap_or(collapsed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suspended(fragment: &str) -> String {
        format!("{}#{}", SUSPENDED_PAGE_URL, fragment)
    }

    #[test]
    fn test_is_suspension_url() {
        assert!(is_suspension_url(&suspended("ttl=a")));
        assert!(is_suspension_url(SUSPENDED_PAGE_URL));
        assert!(!is_suspension_url("https://example.com/suspended.html"));
        assert!(!is_suspension_url("chrome-extension://other/suspended.html"));
    }

    #[test]
    fn test_resolve_encoded_fragment() {
        let page = resolve_page(&suspended("ttl=Foo&uri=https%3A%2F%2Fexample.com"), "Suspended").unwrap();

        assert_eq!(page.title, "Foo");
        assert_eq!(page.url, "https://example.com");
    }

    #[test]
    fn test_resolve_plus_and_percent_decoding() {
        let page = resolve_page(
            &suspended("ttl=Rust+Book%20%E2%80%94%20Ch.1&pos=0&uri=https%3A%2F%2Fdoc.rust-lang.org%2Fbook%2F"),
            "",
        )
        .unwrap();

        assert_eq!(page.title, "Rust Book — Ch.1");
        assert_eq!(page.url, "https://doc.rust-lang.org/book/");
    }

    #[test]
    fn test_resolve_unencoded_uri_collapses_www() {
        let page = resolve_page(&suspended("ttl=News&uri=https://www.bbc.co.uk/news"), "").unwrap();

        assert_eq!(page.url, "https://bbc.co.uk/news");
    }

    #[test]
    fn test_resolve_missing_params_fall_back() {
        let url = suspended("pos=3");
        let page = resolve_page(&url, "Entry Title").unwrap();

        assert_eq!(page.title, "Entry Title");
        assert_eq!(page.url, url);
    }

    #[test]
    fn test_resolve_empty_params_fall_back() {
        let page = resolve_page(&suspended("ttl=&uri="), "Entry Title").unwrap();

        assert_eq!(page.title, "Entry Title");
        assert!(page.url.starts_with(SUSPENDED_PAGE_URL));
    }

    #[test]
    fn test_pass_through() {
        let page = resolve_page("https://www.example.com/a?b=c#d", "Example").unwrap();

        assert_eq!(page.title, "Example");
        assert_eq!(page.url, "https://www.example.com/a?b=c#d");
    }
}
