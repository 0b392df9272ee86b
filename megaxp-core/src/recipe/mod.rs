//! Special crafting recipes for the container.
//!
//! Both recipes need an exact quantity in every cell, which a shaped
//! template cannot express, so they are evaluated as plain predicates over
//! the whole grid rather than handed to the host's pattern matcher.

pub mod create;
pub mod upgrade;

pub use create::CreateRecipe;
pub use upgrade::UpgradeRecipe;

use crate::host::CraftingGrid;
use crate::types::Identifier;

/// Side length of the only grid either recipe accepts.
pub const GRID_SIZE: usize = 3;

/// Row-major index of the centre cell.
pub const CENTER_SLOT: usize = 4;

/// A crafting recipe evaluated by predicate.
pub trait SpecialRecipe {
    /// Whether `grid` satisfies this recipe.
    fn matches<G: CraftingGrid>(&self, grid: &G) -> bool;

    /// Build the result for `grid`, `None` if it does not match.
    fn craft<G: CraftingGrid>(&self, grid: &G) -> Option<G::Item>;

    /// Whether a grid of this size could ever match.
    fn fits(&self, width: usize, height: usize) -> bool {
        width == GRID_SIZE && height == GRID_SIZE
    }

    /// Registry identity of this recipe's serializer.
    fn serializer(&self) -> &Identifier;

    /// Whether the host's recipe book lists this recipe.
    fn show_in_recipe_book(&self) -> bool {
        false
    }
}

/// Whether `grid` is exactly 3×3.
pub(crate) fn is_full_grid<G: CraftingGrid + ?Sized>(grid: &G) -> bool {
    grid.width() == GRID_SIZE && grid.height() == GRID_SIZE
}

/// Row-major indices of the eight cells around the centre.
pub(crate) fn ring_slots() -> impl Iterator<Item = usize> {
    (0..GRID_SIZE * GRID_SIZE).filter(|&slot| slot != CENTER_SLOT)
}
