//! Stored-levels ledger.
//!
//! A container's stored levels live in its attached data under
//! [`STORED_LEVELS_KEY`]. Zero is never written: an empty container carries
//! no field at all.

use crate::host::AttachedDataStore;
use crate::types::STORED_LEVELS_KEY;

/// Levels stored in `container`.
///
/// Absent, non-integer and negative values all read as `0`.
#[must_use]
pub fn stored_levels<S: AttachedDataStore + ?Sized>(container: &S) -> i64 {
    container
        .get_long(STORED_LEVELS_KEY)
        .map_or(0, |levels| levels.max(0))
}

/// Overwrite the levels stored in `container`.
///
/// Values `<= 0` clear the field entirely.
pub fn set_stored_levels<S: AttachedDataStore + ?Sized>(container: &mut S, levels: i64) {
    if levels <= 0 {
        container.remove(STORED_LEVELS_KEY);
        return;
    }
    container.put_long(STORED_LEVELS_KEY, levels);
}

/// Levels the container can still accept before `i64::MAX`.
#[must_use]
pub fn headroom<S: AttachedDataStore + ?Sized>(container: &S) -> i64 {
    i64::MAX - stored_levels(container)
}

/// Add `levels` to the container and return the new total.
///
/// Saturates at `i64::MAX`; callers moving levels off a player cap the
/// amount at [`headroom`] first.
pub fn credit<S: AttachedDataStore + ?Sized>(container: &mut S, levels: i64) -> i64 {
    let total = stored_levels(container).saturating_add(levels);
    set_stored_levels(container, total);
    stored_levels(container)
}
