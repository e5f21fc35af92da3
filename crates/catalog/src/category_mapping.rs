use serde::{Deserialize, Serialize};

use categorydesk_core::RecordId;

use crate::record::{merge, Patch, Record};

/// Association between a seller-provided category path and the platform
/// categories a reviewer selected for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMapping {
    pub id: RecordId,
    pub serial_number: u32,
    pub product_name: String,
    pub incoming_seller_category: Vec<String>,
    pub ml_suggested_category: Vec<String>,
    /// Reviewer-editable; length is independent of `ml_suggested_category`.
    pub selected_category: Vec<String>,
}

impl Record for CategoryMapping {
    const ENTITY: &'static str = "category mapping";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategoryMapping {
    pub serial_number: u32,
    pub product_name: String,
    pub incoming_seller_category: Vec<String>,
    pub ml_suggested_category: Vec<String>,
    pub selected_category: Vec<String>,
}

impl NewCategoryMapping {
    pub fn into_record(self, id: RecordId) -> CategoryMapping {
        CategoryMapping {
            id,
            serial_number: self.serial_number,
            product_name: self.product_name,
            incoming_seller_category: self.incoming_seller_category,
            ml_suggested_category: self.ml_suggested_category,
            selected_category: self.selected_category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMappingPatch {
    pub serial_number: Option<u32>,
    pub product_name: Option<String>,
    pub incoming_seller_category: Option<Vec<String>>,
    pub ml_suggested_category: Option<Vec<String>>,
    pub selected_category: Option<Vec<String>>,
}

impl CategoryMappingPatch {
    /// Patch that replaces only the reviewer selection, wholesale.
    pub fn selected(selected_category: Vec<String>) -> Self {
        Self {
            selected_category: Some(selected_category),
            ..Default::default()
        }
    }
}

impl Patch<CategoryMapping> for CategoryMappingPatch {
    fn apply_to(self, target: &mut CategoryMapping) {
        merge(&mut target.serial_number, self.serial_number);
        merge(&mut target.product_name, self.product_name);
        merge(&mut target.incoming_seller_category, self.incoming_seller_category);
        merge(&mut target.ml_suggested_category, self.ml_suggested_category);
        merge(&mut target.selected_category, self.selected_category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> CategoryMapping {
        NewCategoryMapping {
            serial_number: 1,
            product_name: "Sony WH-1000XM5".into(),
            incoming_seller_category: vec!["Electronics".into(), "Audio".into()],
            ml_suggested_category: vec!["Audio equipment".into(), "Headphones".into()],
            selected_category: vec!["Audio equipment".into(), "Headphones".into()],
        }
        .into_record(RecordId::new(1))
    }

    #[test]
    fn selected_patch_replaces_sequence_wholesale() {
        let mut m = mapping();
        CategoryMappingPatch::selected(vec!["Headphones".into()]).apply_to(&mut m);

        assert_eq!(m.selected_category, vec!["Headphones".to_string()]);
        assert_eq!(m.ml_suggested_category.len(), 2);
        assert_eq!(m.product_name, "Sony WH-1000XM5");
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut m = mapping();
        let before = m.clone();
        CategoryMappingPatch::default().apply_to(&mut m);
        assert_eq!(m, before);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(mapping()).unwrap();
        assert_eq!(json["serialNumber"], 1);
        assert!(json["incomingSellerCategory"].is_array());
        assert!(json["selectedCategory"].is_array());
    }
}
