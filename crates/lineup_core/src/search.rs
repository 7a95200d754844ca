//! Name search used to highlight table rows.

/// Case-insensitive substring match; an empty query matches nothing.
pub fn matches_search(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search() {
        assert!(matches_search("Shadow Shaman", "sha"));
        assert!(matches_search("Shadow Shaman", "SHAMAN"));
        assert!(matches_search("Anti-Mage", "i-m"));
        assert!(!matches_search("Axe", "tiny"));
    }

    #[test]
    fn test_empty_query_highlights_nothing() {
        assert!(!matches_search("Axe", ""));
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        assert!(matches_search("Shadow Shaman", " "));
        assert!(!matches_search("Axe", " "));
    }
}
