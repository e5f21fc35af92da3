//! Demo dataset loaded at startup when seeding is enabled.

use chrono::{DateTime, Duration, Utc};

use categorydesk_catalog::{
    NewCategoryMapping, NewProductSku, NewProductVariant, ProductTag, SkuStatus, TagColor, TagType,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn category_mappings() -> Vec<NewCategoryMapping> {
    vec![
        NewCategoryMapping {
            serial_number: 1,
            product_name: "Samsung Galaxy S24 Ultra 256GB".into(),
            incoming_seller_category: strings(&["Mobile", "Mobile", "Smartphone", "Android"]),
            ml_suggested_category: strings(&["Mobile phones", "Smartphones", "Mobile accessories"]),
            selected_category: strings(&["Mobile phones", "Smartphones", "Mobile accessories"]),
        },
        NewCategoryMapping {
            serial_number: 2,
            product_name: "PlayStation 5 DualSense Controller".into(),
            incoming_seller_category: strings(&["Home", "Gaming", "Accessories", "Cases"]),
            ml_suggested_category: strings(&["PlayStation accessories", "Gaming accessories"]),
            selected_category: strings(&["PlayStation accessories", "Gaming accessories"]),
        },
        NewCategoryMapping {
            serial_number: 3,
            product_name: "Sony WH-1000XM5 Wireless Headphones".into(),
            incoming_seller_category: strings(&["Electronics", "Audio", "Headphones"]),
            ml_suggested_category: strings(&["Audio equipment", "Headphones", "Wireless headphones"]),
            selected_category: strings(&["Audio equipment", "Headphones", "Wireless headphones"]),
        },
    ]
}

pub fn product_variants() -> Vec<NewProductVariant> {
    use TagColor::{Blue, Red};
    use TagType::Product;

    vec![
        NewProductVariant {
            serial_number: 1,
            seller: "Westcoast".into(),
            ee_category: "TV".into(),
            brand: "Samsung".into(),
            product_tags: vec![
                ProductTag::new("Samsung QLED TV | QLED43XYZ | 43 inch", Product, Blue),
                ProductTag::new("Samsung QLED TV | QLED55XYZ | 55 inch", Product, Blue),
                ProductTag::new("Samsung QLED TV | QLED55XYZ | 55 inch", Product, Red),
            ],
            grouping_logic: "Screen size".into(),
        },
        NewProductVariant {
            serial_number: 2,
            seller: "Exertis".into(),
            ee_category: "Audio~Earbuds".into(),
            brand: "Atp".into(),
            product_tags: vec![
                ProductTag::new("atp-beats-solo-buds | ABC1234 | Matte black", Product, Blue),
                ProductTag::new("atp-beats-solo-buds pro | ABCX1234 | Artic purple", Product, Blue),
                ProductTag::new("atp-beats-solo-buds | ABC1234 | Artic purple", Product, Red),
            ],
            grouping_logic: "Colour".into(),
        },
    ]
}

fn sku(
    mpn: &str,
    product_name: &str,
    seller: &str,
    brand: &str,
    category: &str,
    status: SkuStatus,
    available_on_brand_website: bool,
) -> NewProductSku {
    NewProductSku {
        mpn: mpn.into(),
        product_name: product_name.into(),
        seller: seller.into(),
        brand: brand.into(),
        category: category.into(),
        status,
        available_on_brand_website,
    }
}

pub fn product_skus() -> Vec<NewProductSku> {
    use SkuStatus::{Reviewed, ToBeReviewed, UnderReview};

    vec![
        sku("MPN-001", "Samsung Galaxy S24 Ultra", "Westcoast", "Samsung", "Mobile phones", ToBeReviewed, true),
        sku("MPN-002", "Sony WH-1000XM4 Headphones", "Exertis", "Sony", "Audio equipment", UnderReview, true),
        sku("MPN-003", "Dell XPS 13 Laptop", "TechTrade", "Dell", "Computers", Reviewed, false),
        sku("27US550-W.AEK", "LG UltraFine 27US550-W Monitor", "Westcoast", "LG", "Monitors", ToBeReviewed, true),
        sku("MPN-005", "iPhone 15 Pro Max", "Exertis", "Apple", "Mobile phones", UnderReview, true),
        sku("MPN-006", "MacBook Pro 16-inch", "TechTrade", "Apple", "Computers", Reviewed, false),
    ]
}

/// Upload time for the `index`-th of `count` seeded SKUs: one minute apart,
/// oldest first, the last one at `now`.
pub fn upload_time(now: DateTime<Utc>, index: usize, count: usize) -> DateTime<Utc> {
    let minutes_ago = count.saturating_sub(index + 1) as i64;
    now - Duration::minutes(minutes_ago)
}
