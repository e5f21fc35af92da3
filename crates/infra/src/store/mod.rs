//! In-memory record store.
//!
//! One `RecordStore` is built at process start and shared by handle. All
//! collections sit behind a single `RwLock`, so every operation (including
//! the two-step regrouping) observes and leaves a consistent state.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use categorydesk_catalog::{
    validation, CategoryMapping, CategoryMappingPatch, NewCategoryMapping, NewProductSku,
    NewProductVariant, NewTeamMember, ProductSku, ProductSkuPatch, ProductTag, ProductVariant,
    TeamMember, UpsertUser, User,
};
use categorydesk_core::{DomainError, DomainResult, RecordId, UserId};

use crate::query::{Page, SkuQuery};

pub mod collection;
pub mod seed;
pub mod variants;

pub use collection::Collection;

#[derive(Debug, Default)]
struct Collections {
    category_mappings: Collection<CategoryMapping>,
    product_variants: Collection<ProductVariant>,
    product_skus: Collection<ProductSku>,
    team_members: Collection<TeamMember>,
    users: HashMap<UserId, User>,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    inner: RwLock<Collections>,
}

impl RecordStore {
    /// Empty store; id counters start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the demo dataset. Id counters continue after
    /// the seeded records.
    pub fn seeded() -> Self {
        let mut c = Collections::default();
        for m in seed::category_mappings() {
            c.category_mappings.insert_with(|id| m.into_record(id));
        }
        for v in seed::product_variants() {
            c.product_variants.insert_with(|id| v.into_record(id));
        }
        let now = Utc::now();
        let skus = seed::product_skus();
        let count = skus.len();
        for (i, s) in skus.into_iter().enumerate() {
            let uploaded = seed::upload_time(now, i, count);
            c.product_skus.insert_with(|id| s.into_record(id, uploaded));
        }

        tracing::info!(
            category_mappings = c.category_mappings.len(),
            product_variants = c.product_variants.len(),
            product_skus = c.product_skus.len(),
            "record store seeded"
        );

        Self {
            inner: RwLock::new(c),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| DomainError::internal("record store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| DomainError::internal("record store lock poisoned"))
    }

    // -------------------------
    // Category mappings
    // -------------------------

    pub fn category_mappings(&self) -> DomainResult<Vec<CategoryMapping>> {
        Ok(self.read()?.category_mappings.list())
    }

    pub fn insert_category_mapping(&self, data: NewCategoryMapping) -> DomainResult<CategoryMapping> {
        let created = self.write()?.category_mappings.insert_with(|id| data.into_record(id));
        tracing::debug!(mapping_id = %created.id, "category mapping inserted");
        Ok(created)
    }

    /// Replace the reviewer selection wholesale.
    pub fn update_category_mapping(
        &self,
        id: RecordId,
        selected_category: Vec<String>,
    ) -> DomainResult<CategoryMapping> {
        self.patch_category_mapping(id, CategoryMappingPatch::selected(selected_category))
    }

    pub fn patch_category_mapping(
        &self,
        id: RecordId,
        patch: CategoryMappingPatch,
    ) -> DomainResult<CategoryMapping> {
        let updated = self.write()?.category_mappings.update(id, patch)?;
        tracing::info!(mapping_id = %id, "category mapping updated");
        Ok(updated)
    }

    pub fn delete_category_mapping(&self, id: RecordId) -> DomainResult<bool> {
        Ok(self.write()?.category_mappings.remove(id).is_some())
    }

    /// Acknowledge the current mappings. Nothing is recorded on the entities
    /// yet; the signature is where persistence will hook in.
    pub fn approve_category_mappings(&self) -> DomainResult<()> {
        let count = self.read()?.category_mappings.len();
        tracing::info!(count, "category mappings approved");
        Ok(())
    }

    // -------------------------
    // Product variants
    // -------------------------

    pub fn product_variants(&self) -> DomainResult<Vec<ProductVariant>> {
        Ok(self.read()?.product_variants.list())
    }

    pub fn insert_product_variant(&self, data: NewProductVariant) -> DomainResult<ProductVariant> {
        let created = self.write()?.product_variants.insert_with(|id| data.into_record(id));
        tracing::debug!(variant_id = %created.id, "product variant inserted");
        Ok(created)
    }

    /// Replace a variant's tags. An empty list deletes the variant and the
    /// removed record is returned.
    pub fn update_product_variant(
        &self,
        id: RecordId,
        product_tags: Vec<ProductTag>,
    ) -> DomainResult<ProductVariant> {
        let mut c = self.write()?;
        variants::replace_tags(&mut c.product_variants, id, product_tags)
    }

    /// Split `tag_text` out of `source_variant_id` into a new group.
    pub fn create_new_group(
        &self,
        source_variant_id: RecordId,
        tag_text: &str,
    ) -> DomainResult<ProductVariant> {
        let mut c = self.write()?;
        variants::split_into_new_group(&mut c.product_variants, source_variant_id, tag_text)
    }

    pub fn approve_product_groupings(&self) -> DomainResult<()> {
        let count = self.read()?.product_variants.len();
        tracing::info!(count, "product groupings approved");
        Ok(())
    }

    // -------------------------
    // Product SKUs
    // -------------------------

    pub fn query_product_skus(&self, query: &SkuQuery) -> DomainResult<Page<ProductSku>> {
        let c = self.read()?;
        Ok(query.run(c.product_skus.iter()))
    }

    pub fn create_product_sku(&self, data: NewProductSku) -> DomainResult<ProductSku> {
        validation::check(&data)?;
        let uploaded = Utc::now();
        let created = self
            .write()?
            .product_skus
            .insert_with(|id| data.into_record(id, uploaded));
        tracing::info!(sku_id = %created.id, mpn = %created.mpn, "product SKU created");
        Ok(created)
    }

    pub fn update_product_sku(&self, id: RecordId, patch: ProductSkuPatch) -> DomainResult<ProductSku> {
        validation::check(&patch)?;
        let updated = self.write()?.product_skus.update(id, patch)?;
        tracing::info!(sku_id = %id, "product SKU updated");
        Ok(updated)
    }

    // -------------------------
    // Team members
    // -------------------------

    pub fn team_members(&self) -> DomainResult<Vec<TeamMember>> {
        Ok(self.read()?.team_members.list())
    }

    /// Validation runs before the lock is taken; invalid input never mutates.
    pub fn add_team_member(&self, data: NewTeamMember) -> DomainResult<TeamMember> {
        let data = data.normalized();
        validation::check(&data)?;
        let created = self.write()?.team_members.insert_with(|id| data.into_record(id));
        tracing::info!(member_id = %created.id, roles = created.roles.len(), "team member added");
        Ok(created)
    }

    /// Idempotent; returns whether a member was removed.
    pub fn remove_team_member(&self, id: RecordId) -> DomainResult<bool> {
        let removed = self.write()?.team_members.remove(id).is_some();
        tracing::info!(member_id = %id, removed, "team member removal");
        Ok(removed)
    }

    // -------------------------
    // Users
    // -------------------------

    pub fn get_user(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    pub fn upsert_user(&self, data: UpsertUser) -> DomainResult<User> {
        let user = data.into_user(Utc::now());
        self.write()?.users.insert(user.id, user.clone());
        tracing::debug!(user_id = %user.id, "user upserted");
        Ok(user)
    }
}
