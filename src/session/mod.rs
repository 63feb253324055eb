pub mod document;
pub mod fixture;
pub mod http;

use std::time::Duration;

use scraper::Selector;
use thiserror::Error;

pub use document::{Document, Element};
pub use fixture::StaticSession;
pub use http::HttpSession;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("no page available at {0}")]
    NotFound(String),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("no document loaded")]
    NoDocument,
    #[error("login failed: {0}")]
    Login(String),
}

impl SessionError {
    /// Only authentication failures end the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Login(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    PageDown,
}

/// Scripts a session can evaluate against the current page.
#[derive(Debug, Clone, Copy)]
pub enum Script<'a> {
    /// `textContent` of the first node matching the selector, hidden nodes included.
    TextContent(&'a Selector),
}

/// A navigable, already-authenticated browsing session.
///
/// Implementors supply navigation, scrolling and the current document; lookups
/// default to querying that document. A loaded document never changes, so the
/// default waits resolve on the first lookup and treat absence as final. A
/// session backed by a live renderer overrides them to poll until `timeout`.
pub trait Session {
    fn navigate_to(&mut self, url: &str) -> Result<(), SessionError>;

    fn scroll(&mut self, direction: Scroll) -> Result<(), SessionError>;

    fn document(&self) -> Option<&Document>;

    fn current_url(&self) -> Option<&str> {
        self.document().map(Document::url)
    }

    fn find_element(&self, selector: &Selector) -> Option<Element> {
        self.document()?.find(selector)
    }

    fn find_elements(&self, selector: &Selector) -> Vec<Element> {
        self.document()
            .map(|doc| doc.find_all(selector))
            .unwrap_or_default()
    }

    fn wait_until_present(&self, selector: &Selector, _timeout: Duration) -> Option<Element> {
        self.find_element(selector)
    }

    /// All matches, provided there is at least one and every match is displayed.
    fn wait_until_visible(&self, selector: &Selector, _timeout: Duration) -> Option<Vec<Element>> {
        let found = self.find_elements(selector);
        (!found.is_empty() && found.iter().all(Element::is_displayed)).then_some(found)
    }

    fn evaluate(&self, script: Script<'_>) -> Result<Option<String>, SessionError> {
        let doc = self.document().ok_or(SessionError::NoDocument)?;
        Ok(doc.evaluate(script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::product;

    const PAGE: &str = r#"<html><body>
        <div id="gallery">
          <img class="thumb" src="/a.jpg">
          <img class="thumb" src="/b.jpg" style="display: none">
        </div>
        <div class="shown"><img class="open" src="/c.jpg"></div>
        <span class="a-price"><span class="a-offscreen">  ₹1,299.00 </span></span>
    </body></html>"#;

    fn session() -> StaticSession {
        let mut s = StaticSession::new().with_page("https://shop.test/p", PAGE);
        s.navigate_to("https://shop.test/p").unwrap();
        s
    }

    #[test]
    fn lookups_before_navigation_find_nothing() {
        let s = StaticSession::new();
        let sel = Selector::parse("img").unwrap();
        assert!(s.find_element(&sel).is_none());
        assert!(s.find_elements(&sel).is_empty());
        assert!(matches!(
            s.evaluate(Script::TextContent(&sel)),
            Err(SessionError::NoDocument)
        ));
    }

    #[test]
    fn visible_wait_rejects_partially_hidden_matches() {
        let s = session();
        let all = Selector::parse("img.thumb").unwrap();
        let open = Selector::parse("img.open").unwrap();
        assert!(s.wait_until_visible(&all, Duration::from_secs(1)).is_none());
        let imgs = s.wait_until_visible(&open, Duration::from_secs(1)).unwrap();
        assert_eq!(imgs[0].attr("src"), Some("/c.jpg"));
    }

    #[test]
    fn text_content_script_reads_offscreen_node() {
        let s = session();
        let price = s.evaluate(Script::TextContent(&product::PRICE)).unwrap();
        assert_eq!(price.as_deref(), Some("  ₹1,299.00 "));
    }

    #[test]
    fn only_login_errors_are_fatal() {
        assert!(SessionError::Login("bad password".into()).is_fatal());
        assert!(!SessionError::NotFound("https://shop.test/x".into()).is_fatal());
        assert!(!SessionError::NoDocument.is_fatal());
    }
}
