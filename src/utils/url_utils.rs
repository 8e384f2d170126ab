//! URL and path manipulation utilities.
//!
//! The filename derivation here is shared by the node transformer (figure
//! references, cover image) and the asset fetcher (file on disk). Both must
//! go through [`local_filename`] so a written file always matches its reference.

use url::Url;

/// Derive the local filename for a media URL.
///
/// Takes the final path segment (query string and fragment excluded) and
/// replaces `+` and `%` with `_`. A URL without a usable final segment maps
/// to `asset`.
///
/// # Examples
/// ```
/// # use wp2hugo::utils::local_filename;
/// assert_eq!(local_filename("https://x/img%20one.png"), "img_20one.png");
/// assert_eq!(local_filename("https://x/a/b+c.jpg?format=1500w"), "b_c.jpg");
/// ```
#[must_use]
pub fn local_filename(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let segment = without_query.rsplit('/').next().unwrap_or(without_query);

    if segment.is_empty() {
        return "asset".to_string();
    }

    segment.replace(['+', '%'], "_")
}

/// Site-relative path of a canonical link, without leading or trailing slashes.
///
/// Absolute URLs are reduced to their path; anything that does not parse as a
/// URL is treated as a path already.
///
/// # Examples
/// ```
/// # use wp2hugo::utils::link_path;
/// assert_eq!(link_path("https://example.com/blog/hello/"), "blog/hello");
/// assert_eq!(link_path("/about"), "about");
/// ```
#[must_use]
pub fn link_path(link: &str) -> String {
    let path = match Url::parse(link) {
        Ok(url) => url.path().to_string(),
        Err(_) => link.to_string(),
    };

    path.trim_matches('/').to_string()
}
