//! Slash normalization for root URLs and path segments.
//!
//! URLs are built by plain concatenation, so the only normalization applied
//! anywhere is trimming slashes at the joints: leading slashes come off path
//! arguments and trailing slashes come off root URLs.

/// Removes every leading `/` from `path`.
///
/// Internal and trailing slashes are left alone.
///
/// # Examples
///
/// ```
/// use tcurls::clean_path;
///
/// assert_eq!(clean_path("///task/123/"), "task/123/");
/// assert_eq!(clean_path("///"), "");
/// ```
#[must_use]
pub fn clean_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Removes every trailing `/` from `url`.
///
/// # Examples
///
/// ```
/// use tcurls::clean_url;
///
/// assert_eq!(clean_url("https://tc.example.com//"), "https://tc.example.com");
/// ```
#[must_use]
pub fn clean_url(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_strips_leading_slashes() {
        assert_eq!(clean_path("/a"), "a");
        assert_eq!(clean_path("////a/b"), "a/b");
    }

    #[test]
    fn test_clean_path_keeps_inner_and_trailing() {
        assert_eq!(clean_path("a//b/"), "a//b/");
        assert_eq!(clean_path("/a//b//"), "a//b//");
    }

    #[test]
    fn test_clean_path_degenerate_inputs() {
        assert_eq!(clean_path(""), "");
        assert_eq!(clean_path("/"), "");
        assert_eq!(clean_path("/////"), "");
    }

    #[test]
    fn test_clean_url_strips_trailing_slashes() {
        assert_eq!(clean_url("https://tc.example.com/"), "https://tc.example.com");
        assert_eq!(clean_url("https://tc.example.com///"), "https://tc.example.com");
        assert_eq!(clean_url("https://tc.example.com"), "https://tc.example.com");
    }

    #[test]
    fn test_clean_url_keeps_leading_slashes() {
        assert_eq!(clean_url("//host/"), "//host");
        assert_eq!(clean_url(""), "");
        assert_eq!(clean_url("///"), "");
    }
}
