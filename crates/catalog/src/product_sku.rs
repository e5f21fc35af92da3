use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use categorydesk_core::{DomainError, RecordId};

use crate::record::{merge, Patch, Record};

/// Enrichment review state of a SKU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkuStatus {
    #[default]
    #[serde(rename = "Saved")]
    Saved,
    #[serde(rename = "To be reviewed")]
    ToBeReviewed,
    #[serde(rename = "Under review")]
    UnderReview,
    #[serde(rename = "Reviewed")]
    Reviewed,
}

impl SkuStatus {
    pub const ALL: [SkuStatus; 4] = [
        SkuStatus::Saved,
        SkuStatus::ToBeReviewed,
        SkuStatus::UnderReview,
        SkuStatus::Reviewed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkuStatus::Saved => "Saved",
            SkuStatus::ToBeReviewed => "To be reviewed",
            SkuStatus::UnderReview => "Under review",
            SkuStatus::Reviewed => "Reviewed",
        }
    }
}

impl core::fmt::Display for SkuStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkuStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkuStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(
                    "status",
                    "status must be one of: Saved, To be reviewed, Under review, Reviewed",
                )
            })
    }
}

/// One sellable product record subject to enrichment review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSku {
    pub id: RecordId,
    pub mpn: String,
    pub product_name: String,
    /// Set once by the store at creation.
    pub date_uploaded: DateTime<Utc>,
    pub seller: String,
    pub brand: String,
    pub category: String,
    pub status: SkuStatus,
    pub available_on_brand_website: bool,
}

impl Record for ProductSku {
    const ENTITY: &'static str = "product SKU";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProductSku {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub mpn: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub product_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub seller: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub brand: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    #[serde(default)]
    pub status: SkuStatus,
    #[serde(default)]
    pub available_on_brand_website: bool,
}

impl NewProductSku {
    pub fn into_record(self, id: RecordId, date_uploaded: DateTime<Utc>) -> ProductSku {
        ProductSku {
            id,
            mpn: self.mpn,
            product_name: self.product_name,
            date_uploaded,
            seller: self.seller,
            brand: self.brand,
            category: self.category,
            status: self.status,
            available_on_brand_website: self.available_on_brand_website,
        }
    }
}

/// Partial SKU update. `id` and `dateUploaded` are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductSkuPatch {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub mpn: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub product_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub seller: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub brand: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: Option<String>,
    pub status: Option<SkuStatus>,
    pub available_on_brand_website: Option<bool>,
}

impl Patch<ProductSku> for ProductSkuPatch {
    fn apply_to(self, target: &mut ProductSku) {
        merge(&mut target.mpn, self.mpn);
        merge(&mut target.product_name, self.product_name);
        merge(&mut target.seller, self.seller);
        merge(&mut target.brand, self.brand);
        merge(&mut target.category, self.category);
        merge(&mut target.status, self.status);
        merge(&mut target.available_on_brand_website, self.available_on_brand_website);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation;

    fn new_sku() -> NewProductSku {
        NewProductSku {
            mpn: "MPN-003".into(),
            product_name: "Dell XPS 13 Laptop".into(),
            seller: "TechTrade".into(),
            brand: "Dell".into(),
            category: "Computers".into(),
            status: SkuStatus::Reviewed,
            available_on_brand_website: false,
        }
    }

    #[test]
    fn status_uses_display_labels_on_the_wire() {
        assert_eq!(
            serde_json::to_value(SkuStatus::ToBeReviewed).unwrap(),
            serde_json::json!("To be reviewed")
        );
        assert_eq!("Under review".parse::<SkuStatus>().unwrap(), SkuStatus::UnderReview);
        assert!("under review".parse::<SkuStatus>().is_err());
    }

    #[test]
    fn create_payload_defaults_status_and_availability() {
        let parsed: NewProductSku = serde_json::from_value(serde_json::json!({
            "mpn": "X1",
            "productName": "Thing",
            "seller": "Westcoast",
            "brand": "LG",
            "category": "Monitors",
        }))
        .unwrap();

        assert_eq!(parsed.status, SkuStatus::Saved);
        assert!(!parsed.available_on_brand_website);
    }

    #[test]
    fn create_payload_rejects_empty_required_fields() {
        let mut sku = new_sku();
        sku.mpn.clear();
        sku.brand.clear();

        let err = validation::check(&sku).unwrap_err();
        match err {
            DomainError::Validation(v) => {
                let fields: Vec<_> = v.violations().iter().map(|f| f.field.as_str()).collect();
                assert_eq!(fields, vec!["brand", "mpn"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn patch_rejects_empty_strings_but_allows_absent_fields() {
        assert!(validation::check(&ProductSkuPatch::default()).is_ok());

        let patch = ProductSkuPatch {
            product_name: Some(String::new()),
            ..Default::default()
        };
        let err = validation::check(&patch).unwrap_err();
        match err {
            DomainError::Validation(v) => assert_eq!(v.violations()[0].field, "productName"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let uploaded = Utc::now();
        let mut sku = new_sku().into_record(RecordId::new(3), uploaded);

        ProductSkuPatch {
            status: Some(SkuStatus::UnderReview),
            available_on_brand_website: Some(true),
            ..Default::default()
        }
        .apply_to(&mut sku);

        assert_eq!(sku.status, SkuStatus::UnderReview);
        assert!(sku.available_on_brand_website);
        assert_eq!(sku.mpn, "MPN-003");
        assert_eq!(sku.date_uploaded, uploaded);
    }

    #[test]
    fn patch_ignores_id_and_upload_date_in_payload() {
        let patch: ProductSkuPatch = serde_json::from_value(serde_json::json!({
            "id": 99,
            "dateUploaded": "2020-01-01T00:00:00Z",
            "brand": "Sony",
        }))
        .unwrap();
        assert_eq!(patch.brand.as_deref(), Some("Sony"));
        assert_eq!(patch.mpn, None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn status() -> impl Strategy<Value = SkuStatus> {
            prop::sample::select(SkuStatus::ALL.to_vec())
        }

        proptest! {
            /// Property: a patch never touches identity or upload time, and
            /// every unspecified field keeps its prior value.
            #[test]
            fn patch_preserves_identity_and_unspecified_fields(
                mpn in proptest::option::of("[A-Z0-9-]{1,12}"),
                brand in proptest::option::of("[A-Za-z]{1,12}"),
                status in proptest::option::of(status()),
                available in proptest::option::of(any::<bool>()),
            ) {
                let uploaded = Utc::now();
                let original = new_sku().into_record(RecordId::new(7), uploaded);
                let mut patched = original.clone();

                ProductSkuPatch {
                    mpn: mpn.clone(),
                    brand: brand.clone(),
                    status,
                    available_on_brand_website: available,
                    ..Default::default()
                }
                .apply_to(&mut patched);

                prop_assert_eq!(patched.id, original.id);
                prop_assert_eq!(patched.date_uploaded, original.date_uploaded);
                prop_assert_eq!(&patched.product_name, &original.product_name);
                prop_assert_eq!(&patched.seller, &original.seller);
                prop_assert_eq!(&patched.category, &original.category);
                prop_assert_eq!(patched.mpn, mpn.unwrap_or(original.mpn));
                prop_assert_eq!(patched.brand, brand.unwrap_or(original.brand));
                prop_assert_eq!(patched.status, status.unwrap_or(original.status));
                prop_assert_eq!(
                    patched.available_on_brand_website,
                    available.unwrap_or(original.available_on_brand_website)
                );
            }
        }
    }
}
