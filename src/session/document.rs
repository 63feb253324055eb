use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::Script;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A parsed page plus the URL it was loaded from.
pub struct Document {
    url: String,
    html: Html,
}

impl Document {
    pub fn parse(url: &str, source: &str) -> Self {
        Self {
            url: url.to_string(),
            html: Html::parse_document(source),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn find(&self, selector: &Selector) -> Option<Element> {
        self.html.select(selector).next().map(Element::from_ref)
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<Element> {
        self.html.select(selector).map(Element::from_ref).collect()
    }

    pub fn evaluate(&self, script: Script<'_>) -> Option<String> {
        match script {
            Script::TextContent(selector) => self
                .html
                .select(selector)
                .next()
                .map(|el| el.text().collect()),
        }
    }
}

/// Detached snapshot of one element: what a query engine hands back.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    text: String,
    attrs: Vec<(String, String)>,
    inner_html: String,
    displayed: bool,
}

impl Element {
    pub fn from_ref(el: ElementRef<'_>) -> Self {
        let raw: String = el.text().collect();
        Self {
            text: WHITESPACE_RE.replace_all(&raw, " ").trim().to_string(),
            attrs: el
                .value()
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            inner_html: el.inner_html(),
            displayed: is_displayed(el),
        }
    }

    /// Rendered text: whitespace runs collapsed, ends trimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    /// First descendant matching `selector`.
    pub fn find(&self, selector: &Selector) -> Option<Element> {
        let fragment = Html::parse_fragment(&self.inner_html);
        let found = fragment.select(selector).next().map(Element::from_ref);
        found
    }

    pub fn find_all(&self, selector: &Selector) -> Vec<Element> {
        let fragment = Html::parse_fragment(&self.inner_html);
        let found = fragment.select(selector).map(Element::from_ref).collect();
        found
    }
}

fn is_displayed(el: ElementRef<'_>) -> bool {
    std::iter::once(el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .all(|e| {
            let v = e.value();
            let style = v
                .attr("style")
                .unwrap_or("")
                .replace(' ', "")
                .to_ascii_lowercase();
            v.attr("hidden").is_none()
                && !(v.name() == "input" && v.attr("type") == Some("hidden"))
                && !style.contains("display:none")
                && !style.contains("visibility:hidden")
        })
}
