use serde::{Deserialize, Serialize};

use categorydesk_core::RecordId;

use crate::record::{merge, Patch, Record};

/// Grouping logic label given to variants split off by regrouping.
pub const NEW_GROUP_LOGIC: &str = "New group";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagType {
    Group,
    Product,
}

/// Suggested-membership confidence shown on a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Blue,
    Red,
}

/// Labeled reference to one product instance inside a variant group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductTag {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TagType,
    pub color: TagColor,
}

impl ProductTag {
    pub fn new(text: impl Into<String>, kind: TagType, color: TagColor) -> Self {
        Self {
            text: text.into(),
            kind,
            color,
        }
    }

    /// A product tag with the default (blue) confidence colour.
    pub fn product(text: impl Into<String>) -> Self {
        Self::new(text, TagType::Product, TagColor::Blue)
    }
}

/// Cluster of product tags sharing seller / category / brand, pending a
/// human split or merge decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: RecordId,
    pub serial_number: u32,
    pub seller: String,
    pub ee_category: String,
    pub brand: String,
    pub product_tags: Vec<ProductTag>,
    pub grouping_logic: String,
}

impl ProductVariant {
    pub fn has_tags(&self) -> bool {
        !self.product_tags.is_empty()
    }
}

impl Record for ProductVariant {
    const ENTITY: &'static str = "product variant";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductVariant {
    pub serial_number: u32,
    pub seller: String,
    pub ee_category: String,
    pub brand: String,
    pub product_tags: Vec<ProductTag>,
    pub grouping_logic: String,
}

impl NewProductVariant {
    /// Single-tag group split off `source`, keeping its seller / category /
    /// brand context.
    pub fn split_from(source: &ProductVariant, tag_text: &str, serial_number: u32) -> Self {
        Self {
            serial_number,
            seller: source.seller.clone(),
            ee_category: source.ee_category.clone(),
            brand: source.brand.clone(),
            product_tags: vec![ProductTag::product(tag_text)],
            grouping_logic: NEW_GROUP_LOGIC.to_string(),
        }
    }

    pub fn into_record(self, id: RecordId) -> ProductVariant {
        ProductVariant {
            id,
            serial_number: self.serial_number,
            seller: self.seller,
            ee_category: self.ee_category,
            brand: self.brand,
            product_tags: self.product_tags,
            grouping_logic: self.grouping_logic,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantPatch {
    pub serial_number: Option<u32>,
    pub seller: Option<String>,
    pub ee_category: Option<String>,
    pub brand: Option<String>,
    pub product_tags: Option<Vec<ProductTag>>,
    pub grouping_logic: Option<String>,
}

impl ProductVariantPatch {
    pub fn tags(product_tags: Vec<ProductTag>) -> Self {
        Self {
            product_tags: Some(product_tags),
            ..Default::default()
        }
    }
}

impl Patch<ProductVariant> for ProductVariantPatch {
    fn apply_to(self, target: &mut ProductVariant) {
        merge(&mut target.serial_number, self.serial_number);
        merge(&mut target.seller, self.seller);
        merge(&mut target.ee_category, self.ee_category);
        merge(&mut target.brand, self.brand);
        merge(&mut target.product_tags, self.product_tags);
        merge(&mut target.grouping_logic, self.grouping_logic);
    }
}
