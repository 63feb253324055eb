//! CSS selectors for the bestseller listing, product and sign-in pages.
//!
//! Site markup changes land here first; a selector that stops matching shows up
//! as a field falling back to its placeholder.

use std::sync::LazyLock;

use scraper::Selector;

fn parse(s: &str) -> Selector {
    Selector::parse(s).unwrap()
}

/// Bestseller listing page.
pub mod listing {
    use super::*;

    /// The product grid; one per page.
    pub static GRID: LazyLock<Selector> = LazyLock::new(|| parse("div.p13n-desktop-grid"));

    /// One grid cell. The site reuses this id for every cell.
    pub static ITEM: LazyLock<Selector> = LazyLock::new(|| parse("div#gridItemRoot"));

    /// Non-focusable anchors pointing at the product page.
    pub static PRODUCT_LINK: LazyLock<Selector> = LazyLock::new(|| parse(r#"a[tabindex="-1"]"#));

    /// Rank badge ("#1", "#2", ...).
    pub static RANK: LazyLock<Selector> = LazyLock::new(|| parse("span.zg-bdg-text"));
}

/// Product detail page.
pub mod product {
    use super::*;

    pub static TITLE: LazyLock<Selector> = LazyLock::new(|| parse("#productTitle"));

    /// Screen-reader price node; only its text content carries the price.
    pub static PRICE: LazyLock<Selector> = LazyLock::new(|| parse(".a-price span.a-offscreen"));

    pub static DESCRIPTION_LIST: LazyLock<Selector> =
        LazyLock::new(|| parse("ul.a-unordered-list.a-vertical.a-spacing-mini"));
    pub static DESCRIPTION_ITEM: LazyLock<Selector> = LazyLock::new(|| parse("li"));
    pub static DESCRIPTION_TEXT: LazyLock<Selector> = LazyLock::new(|| parse("span"));

    pub static RATING: LazyLock<Selector> = LazyLock::new(|| parse("#acrPopover"));

    /// Gallery thumbnails; video thumbnails carry no `data-ux-click`.
    pub static GALLERY_IMAGES: LazyLock<Selector> =
        LazyLock::new(|| parse("div#altImages > ul li[data-ux-click] img"));

    pub static DISCOUNT: LazyLock<Selector> = LazyLock::new(|| parse(".savingsPercentage"));

    /// Buy-box message cells (exact class list).
    pub static BUYBOX_MESSAGE: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"span[class="a-size-small tabular-buybox-text-message"]"#));

    pub static SELLER: LazyLock<Selector> = LazyLock::new(|| {
        parse(r#"span[class="a-size-small tabular-buybox-text-message"] a#sellerProfileTriggerId"#)
    });

    pub static BOUGHT_PAST_MONTH: LazyLock<Selector> =
        LazyLock::new(|| parse("span#social-proofing-faceout-title-tk_bought"));
}

/// Sign-in flow.
pub mod login {
    use super::*;

    pub static ACCOUNT_LINK: LazyLock<Selector> = LazyLock::new(|| parse("#nav-link-accountList"));
    pub static EMAIL: LazyLock<Selector> = LazyLock::new(|| parse("input#ap_email"));
    pub static PASSWORD: LazyLock<Selector> = LazyLock::new(|| parse("input#ap_password"));
    pub static FORM: LazyLock<Selector> = LazyLock::new(|| parse("form"));
    pub static HIDDEN_INPUT: LazyLock<Selector> = LazyLock::new(|| parse(r#"input[type="hidden"]"#));
    pub static AUTH_ERROR: LazyLock<Selector> = LazyLock::new(|| parse("#auth-error-message-box"));
}
