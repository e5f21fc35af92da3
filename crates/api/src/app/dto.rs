use serde::{Deserialize, Serialize};
use validator::Validate;

use categorydesk_catalog::{ProductTag, SkuStatus};
use categorydesk_core::{DomainResult, RecordId, ValidationErrors};
use categorydesk_infra::{PageRequest, SkuFilter, SkuQuery, SkuSort};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryMappingRequest {
    pub selected_category: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductVariantRequest {
    pub product_tags: Vec<ProductTag>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[validate(range(min = 1, message = "sourceVariantId is required"))]
    pub source_variant_id: u64,
    #[validate(length(min = 1, message = "tagText is required"))]
    pub tag_text: String,
}

impl CreateGroupRequest {
    pub fn source_variant_id(&self) -> RecordId {
        RecordId::new(self.source_variant_id)
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Raw `GET /api/product-skus` query string. Everything arrives as text and
/// is parsed in `into_query` so that every bad parameter is reported at once.
/// Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub seller: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub mpn: Option<String>,
    pub product_name: Option<String>,
    pub status: Option<String>,
    pub available_on_brand_website: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Substring filters match the value as sent; whitespace only counts as
/// absent.
fn needle(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SkuListParams {
    /// `limit` is capped at `max_page_size`.
    pub fn into_query(self, max_page_size: u32) -> DomainResult<SkuQuery> {
        let mut errors = ValidationErrors::new();
        let defaults = PageRequest::default();

        let mut number = |field: &'static str, value: &Option<String>, default: u32| match present(value) {
            None => default,
            Some(v) => v.parse::<u32>().unwrap_or_else(|_| {
                errors.push(field, format!("{field} must be a positive integer"));
                default
            }),
        };
        let page = number("page", &self.page, defaults.page());
        let limit = number("limit", &self.limit, defaults.limit()).min(max_page_size);

        let mut sort = SkuSort::default();
        if let Some(v) = present(&self.sort_by) {
            match v.parse() {
                Ok(field) => sort.field = field,
                Err(e) => errors.extend_from(e),
            }
        }
        if let Some(v) = present(&self.sort_order) {
            match v.parse() {
                Ok(order) => sort.order = order,
                Err(e) => errors.extend_from(e),
            }
        }

        let status = match present(&self.status).map(str::parse::<SkuStatus>) {
            None => None,
            Some(Ok(s)) => Some(s),
            Some(Err(e)) => {
                errors.extend_from(e);
                None
            }
        };

        let available_on_brand_website = match present(&self.available_on_brand_website) {
            None => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(_) => {
                errors.push(
                    "availableOnBrandWebsite",
                    "availableOnBrandWebsite must be true or false",
                );
                None
            }
        };

        let page = match PageRequest::new(page, limit) {
            Ok(p) => p,
            Err(e) => {
                errors.extend_from(e);
                defaults
            }
        };

        errors.into_result()?;

        Ok(SkuQuery {
            page,
            sort,
            filter: SkuFilter {
                seller: needle(self.seller),
                brand: needle(self.brand),
                category: needle(self.category),
                mpn: needle(self.mpn),
                product_name: needle(self.product_name),
                status,
                available_on_brand_website,
            },
        })
    }
}
