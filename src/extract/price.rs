use super::non_empty;
use crate::selectors::product;
use crate::session::{Script, Session};

/// The visible price is split across styled spans; the offscreen node's text
/// content is the only place it appears whole.
pub fn price<S: Session + ?Sized>(session: &S) -> Option<String> {
    let text = session
        .evaluate(Script::TextContent(&product::PRICE))
        .ok()
        .flatten()?;
    non_empty(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StaticSession;

    #[test]
    fn reads_first_offscreen_price() {
        let mut s = StaticSession::new().with_page(
            "https://shop.test/dp/X",
            r#"<div class="a-price"><span class="a-offscreen"> ₹2,199.00 </span>
                 <span aria-hidden="true"><span class="a-price-whole">2,199</span></span></div>
               <div class="a-price"><span class="a-offscreen">₹4,999.00</span></div>"#,
        );
        s.navigate_to("https://shop.test/dp/X").unwrap();
        assert_eq!(price(&s).as_deref(), Some("₹2,199.00"));
    }

    #[test]
    fn no_document_means_no_price() {
        assert_eq!(price(&StaticSession::new()), None);
    }
}
