//! Interfaces consumed from the host engine.
//!
//! The core never owns item, player or inventory state. The host adapter
//! implements these traits over its own types and the core operates through
//! them, one event at a time, on the authoritative simulation thread.

use crate::types::{EnchantmentHandle, EnchantmentId, ItemKind};

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Named data attached to a single item instance.
pub trait AttachedDataStore {
    /// Read a 64-bit integer field.
    ///
    /// Returns `None` when the field is absent or holds something other than
    /// an integer.
    fn get_long(&self, key: &str) -> Option<i64>;

    /// Write a 64-bit integer field, replacing any previous value.
    fn put_long(&mut self, key: &str, value: i64);

    /// Remove a field. Removing an absent field does nothing.
    fn remove(&mut self, key: &str);

    /// Level of an enchantment applied to this item, `0` if absent.
    fn enchantment_level(&self, enchantment: EnchantmentHandle) -> u32;

    /// Set the level of an applied enchantment. `0` removes it.
    fn set_enchantment_level(&mut self, enchantment: EnchantmentHandle, level: u32);
}

/// One item stack as seen by the core.
pub trait ItemInstance: AttachedDataStore {
    /// Construct a fresh stack with no attached data.
    fn create(kind: &ItemKind, count: u32) -> Self
    where
        Self: Sized;

    /// The registry kind of this stack.
    fn kind(&self) -> &ItemKind;

    /// Number of items in the stack.
    fn count(&self) -> u32;

    /// Whether the slot holding this stack is effectively empty.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether this stack is of the given kind.
    fn is_of(&self, kind: &ItemKind) -> bool {
        !self.is_empty() && self.kind() == kind
    }

    /// Level of an enchantment *stored* in a book-like item (as opposed to
    /// applied to it), `0` if absent.
    fn stored_enchantment_level(&self, enchantment: EnchantmentHandle) -> u32;
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

/// A player's whole-level experience counter.
///
/// The fractional progress towards the next level is owned by the host and
/// never touched through this interface.
pub trait PlayerLevelState {
    /// Current level, always in `0..=i32::MAX`.
    fn experience_level(&self) -> i32;

    /// Apply a signed level delta. The host clamps the result into its
    /// non-negative, `i32::MAX`-bounded range.
    fn add_experience_levels(&mut self, delta: i32);
}

/// Ordered, indexable view of the items a player holds.
///
/// Slot order must be stable for the duration of one event.
pub trait InventoryView {
    /// The host's item stack type.
    type Item: ItemInstance;

    /// Number of slots.
    fn size(&self) -> usize;

    /// Stack in `slot`, if the slot exists.
    fn stack(&self, slot: usize) -> Option<&Self::Item>;

    /// Mutable stack in `slot`, if the slot exists.
    fn stack_mut(&mut self, slot: usize) -> Option<&mut Self::Item>;
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

/// Resolves well-known enchantment names to comparable handles.
pub trait EnchantmentRegistry {
    /// Look up an enchantment, `None` if the registry has no such entry.
    fn resolve(&self, id: &EnchantmentId) -> Option<EnchantmentHandle>;
}

// ---------------------------------------------------------------------------
// Crafting
// ---------------------------------------------------------------------------

/// Snapshot of a crafting grid, row-major.
pub trait CraftingGrid {
    /// The host's item stack type.
    type Item: ItemInstance + Clone;

    /// Grid width in cells.
    fn width(&self) -> usize;

    /// Grid height in cells.
    fn height(&self) -> usize;

    /// Stack at row-major `index`. Empty cells still yield an (empty) stack.
    fn stack_in_slot(&self, index: usize) -> &Self::Item;
}
