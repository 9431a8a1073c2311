use milk_core::{config::CODE_PLACEHOLDER, AreaCode};

/// Substitute the URL-encoded `code` for every placeholder in `template`.
///
/// Templates are checked for the placeholder when the fetcher is built.
#[must_use]
pub fn build_search_url(template: &str, code: &AreaCode) -> String {
    template.replace(CODE_PLACEHOLDER, &urlencoding::encode(code.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_from_template() {
        let url = build_search_url("https://jmp.chat/tels?q={code}", &AreaCode::new("212"));
        assert_eq!(url, "https://jmp.chat/tels?q=212");
    }

    #[test]
    fn test_code_is_url_encoded() {
        let url = build_search_url("https://example.com/?q={code}", &AreaCode::new("21 2&x"));
        assert_eq!(url, "https://example.com/?q=21%202%26x");
    }

    #[test]
    fn test_every_placeholder_replaced() {
        let url = build_search_url("https://example.com/{code}?q={code}", &AreaCode::new("415"));
        assert_eq!(url, "https://example.com/415?q=415");
    }
}
