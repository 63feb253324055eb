use scraper::Html;
use tracing::debug;

use crate::record::{RankedLink, NO_RANK};
use crate::selectors::listing;

/// Product links and rank labels from one listing page, in document order.
/// A grid cell contributes any number of links but exactly one rank, so the
/// two lists need not be the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Harvest {
    pub links: Vec<String>,
    pub ranks: Vec<String>,
}

impl Harvest {
    /// Pair the i-th link with the i-th rank; links past the end of the rank
    /// list get "N/A".
    pub fn ranked_links(&self) -> Vec<RankedLink> {
        self.links
            .iter()
            .enumerate()
            .map(|(i, url)| RankedLink {
                url: url.clone(),
                rank: self
                    .ranks
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| NO_RANK.to_string()),
            })
            .collect()
    }
}

/// Scan the product grid of a fully loaded listing page. A page without a grid
/// yields an empty harvest.
pub fn harvest(doc: &Html, origin: &str) -> Harvest {
    let mut out = Harvest::default();

    let Some(grid) = doc.select(&listing::GRID).next() else {
        debug!("No product grid on page");
        return out;
    };

    for item in grid.select(&listing::ITEM) {
        for a in item.select(&listing::PRODUCT_LINK) {
            match a.value().attr("href") {
                Some(href) => out.links.push(absolute_url(href, origin)),
                None => debug!("Product anchor without href"),
            }
        }
        let rank = item
            .select(&listing::RANK)
            .next()
            .map(|r| r.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_RANK.to_string());
        out.ranks.push(rank);
    }

    debug!("Harvested {} links, {} ranks", out.links.len(), out.ranks.len());
    out
}

fn absolute_url(href: &str, origin: &str) -> String {
    if href.starts_with("https:") || href.starts_with("http:") {
        href.to_string()
    } else {
        format!("{}{}", origin, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixture;

    fn harvest_str(source: &str) -> Harvest {
        harvest(&Html::parse_document(source), ORIGIN)
    }

    const ORIGIN: &str = "https://www.amazon.in";

    #[test]
    fn listing_fixture() {
        let h = harvest_str(&fixture("listing"));
        assert_eq!(
            h.links,
            [
                "https://www.amazon.in/Kettle/dp/B0KETTLE01/ref=zg_bs_kitchen_1",
                "https://www.amazon.in/Shoes/dp/B0SHOES002/ref=zg_bs_kitchen_2",
            ]
        );
        assert_eq!(h.ranks, ["#1", "#2"]);
    }

    #[test]
    fn missing_grid_is_empty_not_an_error() {
        assert_eq!(harvest_str("<html><body><p>Sorry</p></body></html>"), Harvest::default());
        assert_eq!(harvest_str(""), Harvest::default());
        let empty = harvest_str(r#"<div class="p13n-desktop-grid"></div>"#);
        assert!(empty.links.is_empty() && empty.ranks.is_empty());
    }

    #[test]
    fn cells_contribute_uneven_links() {
        let page = r#"<div class="p13n-desktop-grid">
            <div id="gridItemRoot">
              <span class="zg-bdg-text">#1</span>
              <a tabindex="-1" href="/a/dp/1">img</a>
              <a tabindex="-1" href="/a/dp/1?title">title</a>
              <a href="/a/reviews">reviews</a>
            </div>
            <div id="gridItemRoot"><a tabindex="-1" href="/b/dp/2">b</a></div>
            <div id="gridItemRoot"><span class="zg-bdg-text">#3</span></div>
          </div>
          <div id="gridItemRoot"><a tabindex="-1" href="/outside">x</a></div>"#;
        let h = harvest_str(page);
        assert_eq!(h.links.len(), 3);
        assert_eq!(h.ranks, ["#1", "N/A", "#3"]);

        // Pairing stays positional even when cells disagree.
        let pairs = h.ranked_links();
        assert_eq!(pairs[1].url, "https://www.amazon.in/a/dp/1?title");
        assert_eq!(pairs[1].rank, "N/A");
        assert_eq!(pairs[2].url, "https://www.amazon.in/b/dp/2");
        assert_eq!(pairs[2].rank, "#3");
    }

    #[test]
    fn short_rank_list_pads_with_na() {
        let h = Harvest {
            links: vec!["u1".into(), "u2".into()],
            ranks: vec!["#1".into()],
        };
        let ranks: Vec<String> = h.ranked_links().into_iter().map(|l| l.rank).collect();
        assert_eq!(ranks, ["#1", "N/A"]);
    }
}
