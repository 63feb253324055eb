use tracing::{debug, warn};

use crate::discount::{discount_value, is_deep_discount};
use crate::extract::{self, Waits};
use crate::record::{CategoryContext, ProductRecord, RankedLink, DISCOUNT_MISSING};
use crate::session::Session;

/// Turns one harvested link into a record, or nothing if the product isn't
/// discounted deeply enough.
pub struct RecordBuilder {
    waits: Waits,
}

impl RecordBuilder {
    pub fn new(waits: Waits) -> Self {
        Self { waits }
    }

    /// Expects an authenticated session; it is left on the product page.
    pub fn build<S: Session + ?Sized>(
        &self,
        session: &mut S,
        category: &CategoryContext,
        link: &RankedLink,
    ) -> Option<ProductRecord> {
        if let Err(e) = session.navigate_to(&link.url) {
            warn!("Skipping {}: {}", link.url, e);
            return None;
        }

        let fields = extract::extract_all(&*session, &self.waits);
        let discount = discount_value(fields.sales_discount.as_deref().unwrap_or(DISCOUNT_MISSING));
        if !is_deep_discount(discount) {
            debug!("Filtered {} ({}% off)", link.url, discount);
            return None;
        }

        Some(ProductRecord::assemble(fields, category, link))
    }
}
