use scraper::{Html, Selector};
use url::Url;

/// A parsed HTML page, kept only for the fetch-extract cycle of one URL
pub struct Document {
    html: Html,
    base_url: Option<Url>,
}

impl Document {
    /// Parses `html`, resolving relative hrefs against the page's own `<base href>`.
    ///
    /// `fallback_base` is used when the page declares no usable `<base>` element.
    /// Without either, relative hrefs are left as written.
    pub fn parse(html: &str, fallback_base: Option<&Url>) -> Self {
        let html = Html::parse_document(html);
        let base_url = declared_base(&html, fallback_base).or_else(|| fallback_base.cloned());
        Self { html, base_url }
    }

    /// The URL relative hrefs are resolved against, if any
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Returns the href of every anchor in document order, resolved where possible.
    ///
    /// Hrefs that cannot be resolved are returned verbatim; empty hrefs are dropped.
    pub fn hrefs(&self) -> Vec<String> {
        let link_selector = match Selector::parse("a[href]") {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        let hrefs = self
            .html
            .select(&link_selector)
            .filter_map(|e| e.value().attr("href"))
            .filter(|href| !href.trim().is_empty())
            .map(|href| self.resolve(href))
            .collect::<Vec<String>>();

        ::log::debug!("HTML parser found {} anchors with href", hrefs.len());
        hrefs
    }

    fn resolve(&self, href: &str) -> String {
        let resolved = match &self.base_url {
            Some(base) => base.join(href),
            None => Url::parse(href),
        };
        match resolved {
            Ok(url) => url.to_string(),
            Err(_) => href.to_string(),
        }
    }
}

/// First `<base href>` in the document that resolves to an absolute URL
fn declared_base(html: &Html, fallback_base: Option<&Url>) -> Option<Url> {
    let base_selector = Selector::parse("base[href]").ok()?;
    let href = html
        .select(&base_selector)
        .next()
        .and_then(|e| e.value().attr("href"))?;

    match fallback_base {
        Some(page_url) => page_url.join(href).ok(),
        None => Url::parse(href).ok(),
    }
}
