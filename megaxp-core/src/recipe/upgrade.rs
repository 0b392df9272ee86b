//! Upgrade recipe: an existing container surrounded by eight marker books.
//!
//! The container's stored levels are irrelevant to eligibility and are
//! carried over untouched; the result differs from the input only in its
//! marker enchantment.

use crate::config::{MergePolicy, RecipeConfig};
use crate::error::Result;
use crate::host::{AttachedDataStore, CraftingGrid, ItemInstance};
use crate::types::{EnchantmentHandle, Identifier, ItemKind, UPGRADE_SERIALIZER_PATH};

use super::{CENTER_SLOT, SpecialRecipe, is_full_grid, ring_slots};

/// The recipe that switches auto-capture on for a container.
#[derive(Debug, Clone)]
pub struct UpgradeRecipe {
    container: ItemKind,
    enchanted_book: ItemKind,
    marker: EnchantmentHandle,
    merge: MergePolicy,
    serializer: Identifier,
}

impl UpgradeRecipe {
    /// Build the recipe from configuration and the resolved marker.
    ///
    /// # Errors
    /// Returns an error if the serializer identifier cannot be formed.
    pub fn new(
        container: ItemKind,
        marker: EnchantmentHandle,
        config: &RecipeConfig,
    ) -> Result<Self> {
        Ok(Self {
            container,
            enchanted_book: config.enchanted_book.clone(),
            marker,
            merge: config.merge,
            serializer: Identifier::of_mod(UPGRADE_SERIALIZER_PATH)?,
        })
    }

    /// Marker level the upgraded container ends up with.
    #[must_use]
    pub fn upgraded_level(&self, existing: u32) -> u32 {
        match self.merge {
            MergePolicy::KeepHighest | MergePolicy::Reject => existing.max(1),
            MergePolicy::Increment => existing.saturating_add(1),
        }
    }

    fn is_marker_book<T: ItemInstance + ?Sized>(&self, stack: &T) -> bool {
        stack.is_of(&self.enchanted_book) && stack.stored_enchantment_level(self.marker) >= 1
    }
}

impl SpecialRecipe for UpgradeRecipe {
    fn matches<G: CraftingGrid>(&self, grid: &G) -> bool {
        if !is_full_grid(grid) {
            return false;
        }

        let center = grid.stack_in_slot(CENTER_SLOT);
        if !center.is_of(&self.container) {
            return false;
        }
        if self.merge == MergePolicy::Reject && center.enchantment_level(self.marker) > 0 {
            return false;
        }

        ring_slots().all(|slot| self.is_marker_book(grid.stack_in_slot(slot)))
    }

    fn craft<G: CraftingGrid>(&self, grid: &G) -> Option<G::Item> {
        if !self.matches(grid) {
            return None;
        }
        let mut out = grid.stack_in_slot(CENTER_SLOT).clone();
        let level = self.upgraded_level(out.enchantment_level(self.marker));
        out.set_enchantment_level(self.marker, level);
        Some(out)
    }

    fn serializer(&self) -> &Identifier {
        &self.serializer
    }
}
