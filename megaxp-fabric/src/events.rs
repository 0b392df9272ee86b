//! Game events the mod reacts to.
//!
//! The hooks in [`crate::hooks`] turn engine callbacks into these values and
//! [`crate::systems`] consumes them.

use megaxp_core::types::Side;

/// A player's level counter changed because of an experience grant.
///
/// Fired after the engine has fully applied the grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceGainEvent {
    /// Level immediately before the grant.
    pub levels_before: i32,
    /// Level immediately after the grant.
    pub levels_after: i32,
    /// Where the grant was applied.
    pub side: Side,
}

impl ExperienceGainEvent {
    /// Signed level change caused by the grant.
    #[must_use]
    pub fn delta(&self) -> i64 {
        i64::from(self.levels_after) - i64::from(self.levels_before)
    }
}

/// A player used (right-clicked) the item in the selected hotbar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseEvent {
    /// Inventory slot of the used stack.
    pub slot: usize,
    /// Whether the player was sneaking.
    pub sneaking: bool,
    /// Where the interaction is being processed.
    pub side: Side,
}

/// Any event the mod handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// See [`ExperienceGainEvent`].
    ExperienceGained(ExperienceGainEvent),
    /// See [`UseEvent`].
    ItemUsed(UseEvent),
}

impl From<ExperienceGainEvent> for GameEvent {
    fn from(event: ExperienceGainEvent) -> Self {
        Self::ExperienceGained(event)
    }
}

impl From<UseEvent> for GameEvent {
    fn from(event: UseEvent) -> Self {
        Self::ItemUsed(event)
    }
}
