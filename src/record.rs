use serde::Serialize;

use crate::extract::ProductFields;

pub const NAME_MISSING: &str = "Product name not available";
pub const PRICE_MISSING: &str = "Price not available";
pub const DESCRIPTION_MISSING: &str = "Description not available";
pub const RATING_MISSING: &str = "Ratings not available";
pub const IMAGE_MISSING: &str = "Image not available";
pub const DISCOUNT_MISSING: &str = "0%";
pub const SHIPS_FROM_MISSING: &str = "Ships from information not available";
pub const SOLD_BY_MISSING: &str = "Sold by information not available";
pub const BOUGHT_MISSING: &str = "Products bought information not available";
pub const CATEGORY_MISSING: &str = "Category name not available";
pub const NO_RANK: &str = "N/A";

/// A category listing URL and the name taken from its path.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryContext {
    pub url: String,
    pub name: String,
}

impl CategoryContext {
    /// `https://host/gp/bestsellers/<name>/...`: the name is the sixth `/` segment.
    pub fn from_url(url: &str) -> Self {
        let name = url
            .split('/')
            .nth(5)
            .map(str::to_string)
            .unwrap_or_else(|| CATEGORY_MISSING.to_string());
        Self {
            url: url.to_string(),
            name,
        }
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}?_encoding=UTF8&pg={}", self.url, page)
    }
}

/// Product URL paired with the rank label at the same index.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLink {
    pub url: String,
    pub rank: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Description")]
    pub description: Vec<String>,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Featured Images")]
    pub featured_images: Vec<String>,
    #[serde(rename = "Sales Discount")]
    pub sales_discount: String,
    #[serde(rename = "Ships From")]
    pub ships_from: String,
    #[serde(rename = "Sold By")]
    pub sold_by: String,
    #[serde(rename = "Products Bought in Past Month")]
    pub bought_past_month: String,
    #[serde(rename = "Category Name")]
    pub category_name: String,
    #[serde(rename = "Best Seller Ranking")]
    pub best_seller_ranking: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl ProductRecord {
    pub const HEADERS: [&'static str; 12] = [
        "Name",
        "Price",
        "Description",
        "Rating",
        "Featured Images",
        "Sales Discount",
        "Ships From",
        "Sold By",
        "Products Bought in Past Month",
        "Category Name",
        "Best Seller Ranking",
        "URL",
    ];

    /// Assemble a record, substituting each field's placeholder for anything
    /// that wasn't found.
    pub fn assemble(fields: ProductFields, category: &CategoryContext, link: &RankedLink) -> Self {
        fn or(value: Option<String>, missing: &str) -> String {
            value.unwrap_or_else(|| missing.to_string())
        }
        fn or_list(value: Option<Vec<String>>, missing: &str) -> Vec<String> {
            value.unwrap_or_else(|| vec![missing.to_string()])
        }

        Self {
            name: or(fields.name, NAME_MISSING),
            price: or(fields.price, PRICE_MISSING),
            description: or_list(fields.description, DESCRIPTION_MISSING),
            rating: or(fields.rating, RATING_MISSING),
            featured_images: or_list(fields.featured_images, IMAGE_MISSING),
            sales_discount: or(fields.sales_discount, DISCOUNT_MISSING),
            ships_from: or(fields.ships_from, SHIPS_FROM_MISSING),
            sold_by: or(fields.sold_by, SOLD_BY_MISSING),
            bought_past_month: or(fields.bought_past_month, BOUGHT_MISSING),
            category_name: category.name.clone(),
            best_seller_ranking: link.rank.clone(),
            url: link.url.clone(),
        }
    }

    /// One CSV row; list fields use their Rust sequence form.
    pub fn to_row(&self) -> [String; 12] {
        [
            self.name.clone(),
            self.price.clone(),
            format!("{:?}", self.description),
            self.rating.clone(),
            format!("{:?}", self.featured_images),
            self.sales_discount.clone(),
            self.ships_from.clone(),
            self.sold_by.clone(),
            self.bought_past_month.clone(),
            self.category_name.clone(),
            self.best_seller_ranking.clone(),
            self.url.clone(),
        ]
    }
}
