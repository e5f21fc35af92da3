use categorydesk_core::RecordId;

/// A value stored in a numbered collection.
pub trait Record: Clone {
    /// Human-readable entity name used in errors and logs.
    const ENTITY: &'static str;

    fn id(&self) -> RecordId;
}

/// Shallow partial update: every `Some` field replaces the target's field,
/// `None` leaves it untouched.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}

/// Replace `target` with `value` when present.
pub(crate) fn merge<V>(target: &mut V, value: Option<V>) {
    if let Some(v) = value {
        *target = v;
    }
}
