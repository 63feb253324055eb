use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::aggregate::Aggregator;
use crate::builder::RecordBuilder;
use crate::config::Settings;
use crate::harvest;
use crate::pacing::{LazyLoader, Pacer};
use crate::record::CategoryContext;
use crate::session::{Session, SessionError};

/// Per-category counts reported at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub harvested: usize,
    pub kept: usize,
}

/// Walks categories and pages one at a time, feeding kept records to an aggregator.
pub struct Pipeline {
    origin: String,
    pages: u32,
    loader: LazyLoader,
    pacer: Pacer,
    builder: RecordBuilder,
}

impl Pipeline {
    pub fn new(settings: &Settings) -> Self {
        Self {
            origin: settings.origin.clone(),
            pages: settings.pages,
            loader: settings.lazy_loader(),
            pacer: settings.pacer(),
            builder: RecordBuilder::new(settings.waits()),
        }
    }

    /// Each category gets a fresh session from `open_session`, dropped when the
    /// category is done. A fatal open error (a failed login) stops the run before
    /// any further category; any other open error skips just that category.
    pub fn run<S, F>(
        &self,
        categories: &[String],
        mut open_session: F,
        aggregator: &mut Aggregator,
    ) -> Result<Vec<CategorySummary>>
    where
        S: Session,
        F: FnMut() -> Result<S, SessionError>,
    {
        let mut summaries = Vec::with_capacity(categories.len());

        for url in categories {
            let category = CategoryContext::from_url(url);
            info!("Category {} ({})", category.name, category.url);

            let summary = match open_session() {
                Ok(mut session) => self.run_category(&mut session, &category, aggregator),
                Err(e) if e.is_fatal() => {
                    return Err(e)
                        .with_context(|| format!("Could not open a session for {}", category.name));
                }
                Err(e) => {
                    warn!("Skipping category {}: {}", category.name, e);
                    CategorySummary {
                        name: category.name.clone(),
                        harvested: 0,
                        kept: 0,
                    }
                }
            };

            info!(
                "{}: kept {} of {} products",
                summary.name, summary.kept, summary.harvested
            );
            summaries.push(summary);
        }

        Ok(summaries)
    }

    fn run_category<S: Session>(
        &self,
        session: &mut S,
        category: &CategoryContext,
        aggregator: &mut Aggregator,
    ) -> CategorySummary {
        let mut summary = CategorySummary {
            name: category.name.clone(),
            harvested: 0,
            kept: 0,
        };

        for page in 1..=self.pages {
            let page_url = category.page_url(page);
            if let Err(e) = session.navigate_to(&page_url) {
                warn!("Skipping page {}: {}", page_url, e);
                continue;
            }
            self.pacer.pause();
            if let Err(e) = self.loader.run(session) {
                warn!("Lazy loading failed on {}: {}", page_url, e);
            }

            let harvest = session
                .document()
                .map(|doc| harvest::harvest(doc.html(), &self.origin))
                .unwrap_or_default();
            if harvest.links.len() != harvest.ranks.len() {
                warn!(
                    "Page {} has {} links but {} ranks; pairing by position",
                    page,
                    harvest.links.len(),
                    harvest.ranks.len()
                );
            }
            let links = harvest.ranked_links();
            info!("Page {}: {} product links", page, links.len());
            summary.harvested += links.len();

            let pb = progress_bar(links.len());
            for link in &links {
                if let Some(record) = self.builder.build(session, category, link) {
                    summary.kept += 1;
                    aggregator.push(record);
                }
                pb.inc(1);
            }
            pb.finish_and_clear();
        }

        summary
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
    {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}
