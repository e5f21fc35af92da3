//! Catalog entity model.
//!
//! Records owned by the store, the insert payloads that create them and the
//! explicit patch structs that update them. Pure data plus validation; no IO.

pub mod category_mapping;
pub mod product_sku;
pub mod product_variant;
pub mod record;
pub mod team_member;
pub mod user;
pub mod validation;

pub use category_mapping::{CategoryMapping, CategoryMappingPatch, NewCategoryMapping};
pub use product_sku::{NewProductSku, ProductSku, ProductSkuPatch, SkuStatus};
pub use product_variant::{
    NewProductVariant, ProductTag, ProductVariant, ProductVariantPatch, TagColor, TagType,
};
pub use record::{Patch, Record};
pub use team_member::{NewTeamMember, Role, TeamMember};
pub use user::{UpsertUser, User};
