//! URL helper functions

/// Join a site URL and a root-relative path into an absolute URL
///
/// # Examples
/// ```ignore
/// full_url("https://blog.example.com/", "/posts/hello") // -> "https://blog.example.com/posts/hello"
/// ```
pub fn full_url(site: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = site.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}
