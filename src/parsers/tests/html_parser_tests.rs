use crate::parsers::Document;
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_hrefs_in_document_order() {
        let html = r#"<html><body>
            <a href="https://a.test/x">x</a>
            <a href="/rel">r</a>
            <a href="https://a.test/x">dup</a>
        </body></html>"#;
        let document = Document::parse(html, None);

        assert!(document.base_url().is_none());
        assert_eq!(
            document.hrefs(),
            vec!["https://a.test/x", "/rel", "https://a.test/x"]
        );
    }

    #[test]
    fn test_anchors_without_usable_href_are_skipped() {
        let html = r#"<a>no href</a><a href="">empty</a><a href="   ">blank</a><a href="https://a.test/">ok</a>"#;
        let document = Document::parse(html, None);

        assert_eq!(document.hrefs(), vec!["https://a.test/"]);
    }

    #[test]
    fn test_absolute_hrefs_are_serialized_through_url() {
        let html = r#"<a href="https://Example.COM">home</a><a href="  https://a.test/p?q=1#top ">p</a>"#;
        let document = Document::parse(html, None);

        assert_eq!(
            document.hrefs(),
            vec!["https://example.com/", "https://a.test/p?q=1#top"]
        );
    }

    #[test]
    fn test_base_element_resolves_relative_hrefs() {
        let html = r#"<html><head><base href="https://a.test/docs/"></head>
            <body><a href="intro">i</a><a href="../about">a</a><a href="https://b.test/">b</a></body></html>"#;
        let document = Document::parse(html, None);

        assert_eq!(
            document.base_url().map(Url::as_str),
            Some("https://a.test/docs/")
        );
        assert_eq!(
            document.hrefs(),
            vec![
                "https://a.test/docs/intro",
                "https://a.test/about",
                "https://b.test/"
            ]
        );
    }

    #[test]
    fn test_relative_base_element_needs_page_url() {
        let html = r#"<head><base href="/docs/"></head><body><a href="intro">i</a></body>"#;

        let unresolved = Document::parse(html, None);
        assert!(unresolved.base_url().is_none());
        assert_eq!(unresolved.hrefs(), vec!["intro"]);

        let page_url = Url::parse("https://a.test/index.html").unwrap();
        let resolved = Document::parse(html, Some(&page_url));
        assert_eq!(
            resolved.base_url().map(Url::as_str),
            Some("https://a.test/docs/")
        );
        assert_eq!(resolved.hrefs(), vec!["https://a.test/docs/intro"]);
    }

    #[test]
    fn test_fallback_base_resolves_when_no_base_element() {
        let page_url = Url::parse("https://a.test/p1").unwrap();
        let html = r#"<a href="/rel">r</a><a href="other">o</a>"#;
        let document = Document::parse(html, Some(&page_url));

        assert_eq!(
            document.hrefs(),
            vec!["https://a.test/rel", "https://a.test/other"]
        );
    }

    #[test]
    fn test_non_http_schemes_pass_through() {
        let html = r#"<a href="mailto:someone@a.test">m</a><a href="javascript:void(0)">j</a>"#;
        let document = Document::parse(html, None);

        assert_eq!(
            document.hrefs(),
            vec!["mailto:someone@a.test", "javascript:void(0)"]
        );
    }

    #[test]
    fn test_malformed_html_still_yields_links() {
        let html = r#"<div><p><a href="https://a.test/1">one<a href="https://a.test/2">two</div>"#;
        let document = Document::parse(html, None);

        assert_eq!(document.hrefs(), vec!["https://a.test/1", "https://a.test/2"]);
    }
}
