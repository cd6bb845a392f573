/// Hostname extraction for grouping recovered items
use crate::error::RecoveryError;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn www_segment() -> &'static Regex {
    static WWW: OnceLock<Regex> = OnceLock::new();
    WWW.get_or_init(|| Regex::new(r"/www\.").expect("static regex"))
}

/// Collapse the first `/www.` in a URL to `/`
///
/// Examples:
/// - https://www.google.com/search → https://google.com/search
/// - https://google.com → https://google.com
pub fn collapse_www(url: &str) -> String {
    www_segment().replace(url, "/").into_owned()
}

/// Extract the hostname from a URL
///
/// Unlike the registrable domain, subdomains are kept:
/// - https://docs.microsoft.com/en-us → docs.microsoft.com
/// - http://localhost:3000 → localhost
///
/// URLs without a host (`file:`, `mailto:`) give an empty hostname; only
/// URLs that fail to parse are rejected.
pub fn hostname(url: &str) -> Result<String, RecoveryError> {
    let parsed = Url::parse(url.trim()).map_err(|e| RecoveryError::malformed_url(url, e))?;

    Ok(parsed.host_str().unwrap_or("").to_string())
}
