//! Host-side entity state touched by Mega XP Storage.
//!
//! In a full Fabric integration these are views over the engine's own
//! `PlayerEntity` and `World`. Here they are standalone stand-ins holding
//! exactly the fields the mod reads and writes.

use megaxp_core::host::PlayerLevelState;
use megaxp_core::memory::Inventory;
use megaxp_core::types::{HOTBAR_SLOTS, Side};

/// The world a callback runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct World {
    /// Which half of the client/server split this world lives on.
    pub side: Side,
}

impl World {
    /// The authoritative server world.
    #[must_use]
    pub fn server() -> Self {
        Self { side: Side::Server }
    }

    /// A client-side mirror world.
    #[must_use]
    pub fn client() -> Self {
        Self { side: Side::Client }
    }

    /// Mirrors the engine's `world.isClient` check.
    #[must_use]
    pub fn is_client(&self) -> bool {
        self.side == Side::Client
    }
}

/// A player's experience counter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Experience {
    /// Whole experience levels.
    pub level: i32,
    /// Progress towards the next level, `0.0..1.0`. Never modified by the mod.
    pub progress: f32,
}

impl PlayerLevelState for Experience {
    fn experience_level(&self) -> i32 {
        self.level
    }

    /// Clamped to `0..=i32::MAX`. Going below zero also clears progress,
    /// as the engine's `addExperienceLevels` does.
    fn add_experience_levels(&mut self, delta: i32) {
        let level = self.level.saturating_add(delta);
        if level < 0 {
            self.level = 0;
            self.progress = 0.0;
        } else {
            self.level = level;
        }
    }
}

/// A player and the parts of its state the mod cares about.
#[derive(Debug, Clone)]
pub struct PlayerEntity {
    /// Level counter.
    pub experience: Experience,
    /// Whether the player is sneaking.
    pub sneaking: bool,
    /// Selected hotbar slot.
    pub selected_slot: usize,
    /// Main inventory, hotbar first.
    pub inventory: Inventory,
}

impl PlayerEntity {
    /// A fresh player with an empty inventory and no levels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            experience: Experience::default(),
            sneaking: false,
            selected_slot: 0,
            inventory: Inventory::player(),
        }
    }

    /// Builder: start at `levels`.
    #[must_use]
    pub fn with_levels(mut self, levels: i32) -> Self {
        self.experience.level = levels.max(0);
        self
    }

    /// Current level.
    #[must_use]
    pub fn level(&self) -> i32 {
        self.experience.level
    }

    /// Select a hotbar slot; out-of-range values are ignored.
    pub fn select_slot(&mut self, slot: usize) {
        if slot < HOTBAR_SLOTS {
            self.selected_slot = slot;
        }
    }
}

impl Default for PlayerEntity {
    fn default() -> Self {
        Self::new()
    }
}
