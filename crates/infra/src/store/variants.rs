//! Variant regrouping: splitting a tag out of a group into a new group.

use categorydesk_catalog::{NewProductVariant, ProductTag, ProductVariant, ProductVariantPatch};
use categorydesk_core::{DomainResult, RecordId};

use super::collection::Collection;

/// Serial number for the next new group: one past the current maximum.
///
/// An empty collection starts at 1.
pub fn next_serial_number(variants: &Collection<ProductVariant>) -> u32 {
    variants
        .iter()
        .map(|v| v.serial_number)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Replace a variant's tags wholesale. A variant left with no tags is
/// deleted and the removed record is returned.
pub fn replace_tags(
    variants: &mut Collection<ProductVariant>,
    id: RecordId,
    tags: Vec<ProductTag>,
) -> DomainResult<ProductVariant> {
    let existing = variants.require(id)?;

    if tags.is_empty() {
        let removed = existing.clone();
        variants.remove(id);
        tracing::info!(variant_id = %id, "product variant emptied and removed");
        return Ok(removed);
    }

    variants.update(id, ProductVariantPatch::tags(tags))
}

/// Move every tag whose text equals `tag_text` out of `source_id` into a new
/// single-tag group with the same seller / category / brand.
///
/// The source is looked up before anything is touched, so a missing source
/// leaves the collection unchanged. The source is updated (or deleted when
/// it has no tags left) before the new group is created.
pub fn split_into_new_group(
    variants: &mut Collection<ProductVariant>,
    source_id: RecordId,
    tag_text: &str,
) -> DomainResult<ProductVariant> {
    let source = variants.require(source_id)?.clone();

    let remaining: Vec<ProductTag> = source
        .product_tags
        .iter()
        .filter(|tag| tag.text != tag_text)
        .cloned()
        .collect();
    let moved = source.product_tags.len() - remaining.len();

    let updated = variants.update(source_id, ProductVariantPatch::tags(remaining))?;
    let source_removed = !updated.has_tags();
    if source_removed {
        variants.remove(source_id);
    }

    let serial_number = next_serial_number(variants);
    let created = variants
        .insert_with(|id| NewProductVariant::split_from(&source, tag_text, serial_number).into_record(id));

    tracing::info!(
        source_id = %source_id,
        new_id = %created.id,
        serial_number,
        moved,
        source_removed,
        "split tag into new product group"
    );

    Ok(created)
}
