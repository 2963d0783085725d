/// Percent-encode a value used as a single path segment (container ids,
/// owner tags, polling ids).
pub fn path_segment(raw: &str) -> String {
    urlencoding::encode(raw.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slashes_and_spaces_are_escaped() {
        assert_eq!(path_segment("abc123"), "abc123");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }
}
