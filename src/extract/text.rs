//! Single-value text fields.

use super::{non_empty, Waits};
use crate::selectors::product;
use crate::session::Session;

pub fn name<S: Session + ?Sized>(session: &S, waits: &Waits) -> Option<String> {
    let el = session.wait_until_present(&product::TITLE, waits.primary)?;
    non_empty(el.text())
}

pub fn rating<S: Session + ?Sized>(session: &S, waits: &Waits) -> Option<String> {
    let el = session.wait_until_present(&product::RATING, waits.primary)?;
    non_empty(el.text())
}

/// Savings badge with its minus signs dropped: "-60%" reads as "60%".
pub fn sales_discount<S: Session + ?Sized>(session: &S) -> Option<String> {
    let el = session.find_element(&product::DISCOUNT)?;
    non_empty(&el.text().replace('-', ""))
}

/// Only a buy-box cell that reads exactly "Amazon" counts.
pub fn ships_from<S: Session + ?Sized>(session: &S) -> Option<String> {
    session
        .find_elements(&product::BUYBOX_MESSAGE)
        .into_iter()
        .find(|el| el.text() == "Amazon")
        .and_then(|el| non_empty(el.text()))
}

pub fn sold_by<S: Session + ?Sized>(session: &S) -> Option<String> {
    let el = session.find_element(&product::SELLER)?;
    non_empty(el.text())
}

pub fn bought_past_month<S: Session + ?Sized>(session: &S) -> Option<String> {
    let el = session.find_element(&product::BOUGHT_PAST_MONTH)?;
    non_empty(el.text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StaticSession;
    use crate::test_utils::WAITS;

    fn on(html: &str) -> StaticSession {
        let mut s = StaticSession::new().with_page("https://shop.test/dp/X", html);
        s.navigate_to("https://shop.test/dp/X").unwrap();
        s
    }

    #[test]
    fn ships_from_needs_exact_amazon_cell() {
        let s = on(r#"<span class="a-size-small tabular-buybox-text-message">  Amazon
            </span>"#);
        assert_eq!(ships_from(&s).as_deref(), Some("Amazon"));

        let s = on(r#"<span class="a-size-small tabular-buybox-text-message">SuperComNet</span>"#);
        assert_eq!(ships_from(&s), None);

        // Extra classes mean a different cell.
        let s = on(r#"<span class="a-size-small tabular-buybox-text-message other">Amazon</span>"#);
        assert_eq!(ships_from(&s), None);
    }

    #[test]
    fn blank_title_counts_as_missing() {
        let s = on(r#"<span id="productTitle">   </span>"#);
        assert_eq!(name(&s, &WAITS), None);
    }

    #[test]
    fn discount_drops_every_minus() {
        let s = on(r#"<span class="savingsPercentage"> -73% </span>"#);
        assert_eq!(sales_discount(&s).as_deref(), Some("73%"));
    }
}
