//! Creation recipe: one reagent stack in the centre, books all around.
//!
//! Every cell needs exactly `required_count` items (64 by default). The
//! result is always a fresh, empty container; nothing is inherited from the
//! ingredients.

use crate::config::RecipeConfig;
use crate::error::Result;
use crate::host::{CraftingGrid, ItemInstance};
use crate::types::{CREATE_SERIALIZER_PATH, Identifier, ItemKind};

use super::{CENTER_SLOT, GRID_SIZE, SpecialRecipe, is_full_grid, ring_slots};

/// The recipe that produces a new container.
#[derive(Debug, Clone)]
pub struct CreateRecipe {
    container: ItemKind,
    reagent: ItemKind,
    book: ItemKind,
    required_count: u32,
    serializer: Identifier,
}

impl CreateRecipe {
    /// Build the recipe from configuration.
    ///
    /// # Errors
    /// Returns an error if the serializer identifier cannot be formed.
    pub fn new(container: ItemKind, config: &RecipeConfig) -> Result<Self> {
        Ok(Self {
            container,
            reagent: config.reagent.clone(),
            book: config.book.clone(),
            required_count: config.required_count,
            serializer: Identifier::of_mod(CREATE_SERIALIZER_PATH)?,
        })
    }

    /// Ingredient kind expected in each cell, row-major, for recipe-book
    /// display.
    #[must_use]
    pub fn ingredients(&self) -> [ItemKind; GRID_SIZE * GRID_SIZE] {
        std::array::from_fn(|slot| self.expected(slot).clone())
    }

    /// The item this recipe produces.
    #[must_use]
    pub fn result<T: ItemInstance>(&self) -> T {
        T::create(&self.container, 1)
    }

    fn expected(&self, slot: usize) -> &ItemKind {
        if slot == CENTER_SLOT {
            &self.reagent
        } else {
            &self.book
        }
    }
}

impl SpecialRecipe for CreateRecipe {
    fn matches<G: CraftingGrid>(&self, grid: &G) -> bool {
        if !is_full_grid(grid) {
            return false;
        }
        std::iter::once(CENTER_SLOT).chain(ring_slots()).all(|slot| {
            let stack = grid.stack_in_slot(slot);
            stack.is_of(self.expected(slot)) && stack.count() == self.required_count
        })
    }

    fn craft<G: CraftingGrid>(&self, grid: &G) -> Option<G::Item> {
        self.matches(grid).then(|| self.result())
    }

    fn serializer(&self) -> &Identifier {
        &self.serializer
    }

    fn show_in_recipe_book(&self) -> bool {
        true
    }
}
