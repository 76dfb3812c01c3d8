use url::Url;

/// Split a comma separated line into trimmed, non-empty URLs, keeping order and duplicates
pub fn split_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Final segment of the URL path, or `None` when there is nothing usable
pub fn filename_from_url(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.last()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filename(url: &str) -> Option<String> {
        filename_from_url(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_split_url_list() {
        assert_eq!(
            split_url_list(" https://a.com/x.png ,,  , https://b.com/y.jpg,https://a.com/x.png "),
            vec![
                "https://a.com/x.png",
                "https://b.com/y.jpg",
                "https://a.com/x.png"
            ]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_url_list("").is_empty());
        assert!(split_url_list("  ,  ,").is_empty());
        assert!(split_url_list("\n").is_empty());
    }

    #[test]
    fn test_filename_from_url() {
        assert_eq!(
            filename("https://example.com/pics/cat.png").as_deref(),
            Some("cat.png")
        );
        assert_eq!(
            filename("https://example.com/cat.png?size=large#top").as_deref(),
            Some("cat.png")
        );
    }

    #[test]
    fn test_filename_missing() {
        assert_eq!(filename("https://example.com"), None);
        assert_eq!(filename("https://example.com/"), None);
        assert_eq!(filename("https://example.com/pics/"), None);
    }
}
