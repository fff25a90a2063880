use regex::Regex;
use std::sync::OnceLock;

fn scheme_regex() -> &'static Regex {
    static SCHEME: OnceLock<Regex> = OnceLock::new();
    SCHEME.get_or_init(|| Regex::new(r"(?i)^https?://").expect("scheme pattern is valid"))
}

/// Make an href absolute against the site origin.
///
/// Hrefs that already carry an http(s) scheme are returned unchanged.
/// Every other href, including `//host/...` and `mailto:` forms, gets the
/// origin prefixed exactly once.
pub fn absolute_url(href: &str, origin: &str) -> String {
    let href = href.trim();
    if scheme_regex().is_match(href) {
        return href.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if href.starts_with('/') {
        format!("{}{}", origin, href)
    } else {
        format!("{}/{}", origin, href)
    }
}

/// Derive an export file name from search keywords, e.g. `ai_data_jobs.csv`
pub fn output_file_name(keywords: &str) -> String {
    let mut slug = keywords
        .trim()
        .to_lowercase()
        .replace(|c: char| !c.is_ascii_alphanumeric(), "_");
    while slug.contains("__") {
        slug = slug.replace("__", "_");
    }
    let slug = slug.trim_matches('_');

    // Limit filename length
    let slug = if slug.len() > 100 { &slug[..100] } else { slug };

    if slug.is_empty() {
        "jobs.csv".to_string()
    } else {
        format!("{}_jobs.csv", slug)
    }
}
