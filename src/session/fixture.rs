use std::collections::HashMap;

use tracing::debug;

use super::{Document, Scroll, Session, SessionError};

/// In-memory session over pre-rendered pages keyed by URL.
#[derive(Default)]
pub struct StaticSession {
    pages: HashMap<String, String>,
    document: Option<Document>,
    scrolls: usize,
}

impl StaticSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.insert(url, html);
        self
    }

    pub fn insert(&mut self, url: &str, html: &str) {
        self.pages.insert(url.to_string(), html.to_string());
    }

    #[cfg(test)]
    pub fn scrolls(&self) -> usize {
        self.scrolls
    }
}

impl Session for StaticSession {
    fn navigate_to(&mut self, url: &str) -> Result<(), SessionError> {
        let html = self
            .pages
            .get(url)
            .ok_or_else(|| SessionError::NotFound(url.to_string()))?;
        self.document = Some(Document::parse(url, html));
        Ok(())
    }

    fn scroll(&mut self, direction: Scroll) -> Result<(), SessionError> {
        debug!("Scroll {:?}", direction);
        self.scrolls += 1;
        Ok(())
    }

    fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}
