use milk_core::CandidateNumber;
use scraper::{ElementRef, Html};
use std::borrow::Cow;
use tracing::debug;

/// Extract candidate numbers from a listing page body.
///
/// Every `<a>` element whose `href` is at least ten characters long yields
/// its last ten characters, in document order. Duplicates are kept.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD and parsing continues,
/// so a stray byte elsewhere on the page does not lose its links.
#[must_use]
pub fn extract(document: &[u8]) -> Vec<CandidateNumber> {
    let html = String::from_utf8_lossy(document);
    if let Cow::Owned(_) = html {
        debug!(bytes = document.len(), "replaced invalid UTF-8 in listing page");
    }

    let document = Html::parse_document(&html);
    let mut candidates = Vec::new();
    collect_candidates(document.root_element(), &mut candidates);
    candidates
}

fn collect_candidates(element: ElementRef<'_>, candidates: &mut Vec<CandidateNumber>) {
    if element.value().name() == "a" {
        if let Some(candidate) = element
            .value()
            .attr("href")
            .and_then(CandidateNumber::from_link_target)
        {
            candidates.push(candidate);
        }
    }

    for child in element.children() {
        if let Some(child) = ElementRef::wrap(child) {
            collect_candidates(child, candidates);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(candidates: &[CandidateNumber]) -> Vec<&str> {
        candidates.iter().map(CandidateNumber::as_str).collect()
    }

    #[test]
    fn test_last_ten_characters_verbatim() {
        let html = r#"<html><body><a href="+12128675309">call</a></body></html>"#;
        let candidates = extract(html.as_bytes());
        assert_eq!(values(&candidates), vec!["2128675309"]);
    }

    #[test]
    fn test_document_order_and_duplicates() {
        let html = r#"
            <div class="results">
                <ul>
                    <li><a href="/tel/3105551234">310</a></li>
                    <li><span><a href="/tel/2128675309">212</a></span></li>
                </ul>
                <table><tr><td><a href="/tel/3105551234">again</a></td></tr></table>
            </div>
        "#;
        let candidates = extract(html.as_bytes());
        assert_eq!(
            values(&candidates),
            vec!["3105551234", "2128675309", "3105551234"]
        );
    }

    #[test]
    fn test_short_and_missing_targets_skipped() {
        let html = r##"
            <a href="#top">top</a>
            <a name="anchor">no target</a>
            <a href="123456789">nine</a>
            <a href="1234567890">ten</a>
        "##;
        let candidates = extract(html.as_bytes());
        assert_eq!(values(&candidates), vec!["1234567890"]);
    }

    #[test]
    fn test_no_digit_filtering() {
        let html = r#"<a href="https://example.com/about-us">about</a>"#;
        let candidates = extract(html.as_bytes());
        assert_eq!(values(&candidates), vec!["m/about-us"]);
    }

    #[test]
    fn test_only_anchor_elements() {
        let html = r#"<link href="/styles/2128675309.css"><area href="/tel/2128675309">"#;
        let candidates = extract(html.as_bytes());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_stray_latin1_byte_keeps_links() {
        let mut body = br#"<ul><li><a href="/tel/2128675309">212</a></li></ul><p>caf"#.to_vec();
        body.push(0xe9);
        body.extend_from_slice(br#"</p><a href="/tel/3105551234">310</a>"#);

        let candidates = extract(&body);
        assert_eq!(values(&candidates), vec!["2128675309", "3105551234"]);
    }

    #[test]
    fn test_binary_body_yields_nothing() {
        assert!(extract(&[0xff, 0xfe, 0x00]).is_empty());
    }
}
