/// Backend base URL, fixed at build time. Every request path is joined
/// onto this; the `/api` prefix is part of the base so call sites only
/// carry the route-specific tail.
pub fn api_base() -> &'static str {
    match option_env!("STAFFDECK_API_URL") {
        Some(url) => url,
        None => "http://localhost:5000/api",
    }
}

/// Join a path onto the API base, normalizing the leading slash.
pub fn api_url(path: &str) -> String {
    let base = api_base().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_without_duplicate_slashes() {
        let url = api_url("/owner/login");
        assert!(url.ends_with("/owner/login"));
        assert!(!url.contains("//owner"));
        assert_eq!(api_url("owner/login"), url);
    }
}
