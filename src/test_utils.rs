use std::time::Duration;

use crate::extract::Waits;
use crate::record::ProductRecord;
use crate::session::{Session, StaticSession};

pub const WAITS: Waits = Waits {
    primary: Duration::from_secs(10),
    gallery: Duration::from_secs(20),
};

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
}

/// Session already sitting on the named product fixture.
pub fn product_session(name: &str) -> StaticSession {
    let url = format!("https://www.amazon.in/dp/{}", name);
    let mut session = StaticSession::new().with_page(&url, &fixture(name));
    session.navigate_to(&url).unwrap();
    session
}

pub fn sample_record(i: usize) -> ProductRecord {
    ProductRecord {
        name: format!("Product {}", i),
        price: "₹999.00".to_string(),
        description: vec![
            "Bullet, with comma".to_string(),
            "Second \"quoted\"".to_string(),
        ],
        rating: "4.1 out of 5 stars".to_string(),
        featured_images: vec![format!("https://m.media-amazon.com/images/I/{}.jpg", i)],
        sales_discount: "60%".to_string(),
        ships_from: "Amazon".to_string(),
        sold_by: "Cloudtail India".to_string(),
        bought_past_month: "100+ bought in past month".to_string(),
        category_name: "kitchen".to_string(),
        best_seller_ranking: format!("#{}", i + 1),
        url: format!("https://www.amazon.in/dp/P{}", i),
    }
}
