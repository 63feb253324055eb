pub mod lists;
pub mod price;
pub mod text;

use std::time::Duration;

use tracing::debug;

use crate::session::Session;

/// Wait budgets: primary fields, and the slower image gallery.
#[derive(Debug, Clone, Copy)]
pub struct Waits {
    pub primary: Duration,
    pub gallery: Duration,
}

/// Everything read from one product page. `None` means the lookup came up empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFields {
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<Vec<String>>,
    pub rating: Option<String>,
    pub featured_images: Option<Vec<String>>,
    pub sales_discount: Option<String>,
    pub ships_from: Option<String>,
    pub sold_by: Option<String>,
    pub bought_past_month: Option<String>,
}

/// Run every field extractor against the page the session is on. Each lookup
/// is independent; a miss on one never stops the others.
pub fn extract_all<S: Session + ?Sized>(session: &S, waits: &Waits) -> ProductFields {
    ProductFields {
        name: logged("name", text::name(session, waits)),
        price: logged("price", price::price(session)),
        description: logged("description", lists::description(session, waits)),
        rating: logged("rating", text::rating(session, waits)),
        featured_images: logged("featured_images", lists::featured_images(session, waits)),
        sales_discount: logged("sales_discount", text::sales_discount(session)),
        ships_from: logged("ships_from", text::ships_from(session)),
        sold_by: logged("sold_by", text::sold_by(session)),
        bought_past_month: logged("bought_past_month", text::bought_past_month(session)),
    }
}

fn logged<T>(field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        debug!("Field {} not found", field);
    }
    value
}

/// Trimmed text, or `None` if nothing is left.
fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}
