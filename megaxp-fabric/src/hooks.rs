//! Integration hooks for the engine's player callbacks.
//!
//! The engine's `addExperience` resolves level thresholds itself, so the
//! level counter is sampled at the head of the call and again at the tail;
//! the difference becomes an [`ExperienceGainEvent`]. These would be
//! injected into the engine's player class in a full integration.

use crate::components::{PlayerEntity, World};
use crate::events::{ExperienceGainEvent, UseEvent};

/// Per-player state carried from the head to the tail of `addExperience`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddExperienceHook {
    levels_before: i32,
}

impl AddExperienceHook {
    /// Head of `addExperience`: remember the current level.
    pub fn before(&mut self, player: &PlayerEntity) {
        self.levels_before = player.level();
    }

    /// Tail of `addExperience`: the gain event, or `None` on the client.
    #[must_use]
    pub fn after(&self, world: &World, player: &PlayerEntity) -> Option<ExperienceGainEvent> {
        if world.is_client() {
            return None;
        }
        Some(ExperienceGainEvent {
            levels_before: self.levels_before,
            levels_after: player.level(),
            side: world.side,
        })
    }
}

/// Create a use event for the stack in the player's selected slot.
#[must_use]
pub fn on_use(world: &World, player: &PlayerEntity) -> UseEvent {
    UseEvent {
        slot: player.selected_slot,
        sneaking: player.sneaking,
        side: world.side,
    }
}
