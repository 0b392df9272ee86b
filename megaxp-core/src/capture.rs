//! Automatic capture of gained levels.
//!
//! Runs once per experience grant, after the host has already applied it.
//! The host resolves level thresholds, so the hook only ever sees the level
//! counter before and after the grant. Any positive difference is moved into
//! the first qualifying container the player holds:
//!
//! 1. `gained = after - before`; stop unless `gained > 0`.
//! 2. Scan held slots in ascending index order for the first container that
//!    carries the marker enchantment.
//! 3. No container: the levels stay on the player.
//! 4. Otherwise credit the container and take the same amount back off the
//!    player. A ledger near `i64::MAX` only accepts what fits; the rest stays
//!    on the player.

use tracing::debug;

use crate::config::{CaptureConfig, CaptureScope};
use crate::host::{InventoryView, ItemInstance, PlayerLevelState};
use crate::ledger;
use crate::types::{EnchantmentHandle, HOTBAR_SLOTS, ItemKind, Side};

/// What a single capture attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Running in a presentation-only context.
    NotAuthoritative,
    /// Capture is switched off in configuration.
    Disabled,
    /// The grant did not raise the level.
    NoGain,
    /// Nothing in the scanned slots qualifies.
    NoContainer,
    /// The first qualifying container is at `i64::MAX` already.
    ContainerFull {
        /// Inventory slot of the full container.
        slot: usize,
    },
    /// Levels were moved into the container in `slot`.
    Captured {
        /// Inventory slot of the container that received the levels.
        slot: usize,
        /// Levels moved.
        levels: i32,
        /// Container total after the move.
        stored: i64,
    },
}

/// Level-gain interceptor, built once at startup with the resolved marker.
#[derive(Debug, Clone)]
pub struct AutoCapture {
    container: ItemKind,
    marker: EnchantmentHandle,
    min_level: u32,
    scope: CaptureScope,
    enabled: bool,
}

impl AutoCapture {
    /// Create an interceptor for `container` items carrying `marker`.
    #[must_use]
    pub fn new(container: ItemKind, marker: EnchantmentHandle, config: &CaptureConfig) -> Self {
        Self {
            container,
            marker,
            min_level: config.marker_min_level.max(1),
            scope: config.scope,
            enabled: config.enabled,
        }
    }

    /// Levels gained between two snapshots of the level counter, if any.
    #[must_use]
    pub fn gained_levels(levels_before: i32, levels_after: i32) -> Option<i32> {
        let gained = i64::from(levels_after) - i64::from(levels_before);
        i32::try_from(gained).ok().filter(|g| *g > 0)
    }

    /// Whether `stack` is a container with auto-capture switched on.
    #[must_use]
    pub fn qualifies<T: ItemInstance + ?Sized>(&self, stack: &T) -> bool {
        stack.is_of(&self.container) && stack.enchantment_level(self.marker) >= self.min_level
    }

    /// Slot of the first qualifying container in scan order.
    #[must_use]
    pub fn locate<I: InventoryView + ?Sized>(&self, inventory: &I) -> Option<usize> {
        let end = match self.scope {
            CaptureScope::Inventory => inventory.size(),
            CaptureScope::Hotbar => inventory.size().min(HOTBAR_SLOTS),
        };
        (0..end).find(|&slot| inventory.stack(slot).is_some_and(|s| self.qualifies(s)))
    }

    /// Redirect the levels a grant just added into a qualifying container.
    ///
    /// `levels_before` is the player's level immediately before the grant;
    /// the current level is read from `player`.
    pub fn on_experience_gained<P, I>(
        &self,
        side: Side,
        levels_before: i32,
        player: &mut P,
        inventory: &mut I,
    ) -> CaptureOutcome
    where
        P: PlayerLevelState + ?Sized,
        I: InventoryView + ?Sized,
    {
        if !side.is_authoritative() {
            return CaptureOutcome::NotAuthoritative;
        }
        if !self.enabled {
            return CaptureOutcome::Disabled;
        }

        let Some(gained) = Self::gained_levels(levels_before, player.experience_level()) else {
            return CaptureOutcome::NoGain;
        };

        let Some(slot) = self.locate(inventory) else {
            debug!(gained, "no qualifying container held, levels stay on player");
            return CaptureOutcome::NoContainer;
        };
        let Some(container) = inventory.stack_mut(slot) else {
            return CaptureOutcome::NoContainer;
        };

        let accepted = i64::from(gained).min(ledger::headroom(&*container));
        // `accepted <= gained`, so it fits in i32.
        let levels = i32::try_from(accepted).unwrap_or(0);
        if levels <= 0 {
            debug!(slot, gained, "container is full, levels stay on player");
            return CaptureOutcome::ContainerFull { slot };
        }

        let stored = ledger::credit(container, accepted);
        player.add_experience_levels(-levels);

        debug!(slot, gained, levels, stored, "captured gained levels into container");
        CaptureOutcome::Captured {
            slot,
            levels,
            stored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Inventory, ItemStack};

    const MARKER: EnchantmentHandle = EnchantmentHandle(7);

    struct Player(i32);

    impl PlayerLevelState for Player {
        fn experience_level(&self) -> i32 {
            self.0
        }
        fn add_experience_levels(&mut self, delta: i32) {
            self.0 = self.0.saturating_add(delta).max(0);
        }
    }

    fn hook() -> AutoCapture {
        AutoCapture::new(ItemKind::container(), MARKER, &CaptureConfig::default())
    }

    fn marked_container() -> ItemStack {
        ItemStack::new(ItemKind::container(), 1).with_enchantment(MARKER, 1)
    }

    #[test]
    fn gained_levels_only_positive() {
        assert_eq!(AutoCapture::gained_levels(3, 5), Some(2));
        assert_eq!(AutoCapture::gained_levels(5, 5), None);
        assert_eq!(AutoCapture::gained_levels(5, 2), None);
        assert_eq!(AutoCapture::gained_levels(0, i32::MAX), Some(i32::MAX));
    }

    #[test]
    fn captures_into_marked_container() {
        let mut inv = Inventory::player();
        inv.set(4, marked_container());
        let mut player = Player(12);

        let outcome = hook().on_experience_gained(Side::Server, 10, &mut player, &mut inv);

        assert_eq!(
            outcome,
            CaptureOutcome::Captured {
                slot: 4,
                levels: 2,
                stored: 2
            }
        );
        assert_eq!(player.0, 10);
        assert_eq!(ledger::stored_levels(inv.stack(4).unwrap()), 2);
    }

    #[test]
    fn unmarked_container_is_ignored() {
        let mut inv = Inventory::player();
        inv.set(0, ItemStack::new(ItemKind::container(), 1));
        let mut player = Player(12);

        let outcome = hook().on_experience_gained(Side::Server, 10, &mut player, &mut inv);

        assert_eq!(outcome, CaptureOutcome::NoContainer);
        assert_eq!(player.0, 12);
    }

    #[test]
    fn client_side_is_a_noop() {
        let mut inv = Inventory::player();
        inv.set(0, marked_container());
        let mut player = Player(12);

        let outcome = hook().on_experience_gained(Side::Client, 10, &mut player, &mut inv);

        assert_eq!(outcome, CaptureOutcome::NotAuthoritative);
        assert_eq!(player.0, 12);
        assert_eq!(ledger::stored_levels(inv.stack(0).unwrap()), 0);
    }

    #[test]
    fn disabled_config_is_a_noop() {
        let config = CaptureConfig {
            enabled: false,
            ..CaptureConfig::default()
        };
        let hook = AutoCapture::new(ItemKind::container(), MARKER, &config);
        let mut inv = Inventory::player();
        inv.set(0, marked_container());
        let mut player = Player(12);

        assert_eq!(
            hook.on_experience_gained(Side::Server, 10, &mut player, &mut inv),
            CaptureOutcome::Disabled
        );
        assert_eq!(player.0, 12);
    }

    #[test]
    fn first_slot_wins() {
        let mut inv = Inventory::player();
        inv.set(20, marked_container());
        inv.set(3, marked_container());
        assert_eq!(hook().locate(&inv), Some(3));
    }

    #[test]
    fn hotbar_scope_ignores_main_inventory() {
        let config = CaptureConfig {
            scope: CaptureScope::Hotbar,
            ..CaptureConfig::default()
        };
        let hook = AutoCapture::new(ItemKind::container(), MARKER, &config);
        let mut inv = Inventory::player();
        inv.set(20, marked_container());
        assert_eq!(hook.locate(&inv), None);

        inv.set(8, marked_container());
        assert_eq!(hook.locate(&inv), Some(8));
    }

    #[test]
    fn min_level_is_respected() {
        let config = CaptureConfig {
            marker_min_level: 2,
            ..CaptureConfig::default()
        };
        let hook = AutoCapture::new(ItemKind::container(), MARKER, &config);
        assert!(!hook.qualifies(&marked_container()));
        assert!(hook.qualifies(&marked_container().with_enchantment(MARKER, 3)));
    }

    #[test]
    fn adds_to_existing_stored_levels() {
        let mut inv = Inventory::player();
        let mut container = marked_container();
        ledger::set_stored_levels(&mut container, 100);
        inv.set(0, container);
        let mut player = Player(35);

        hook().on_experience_gained(Side::Server, 30, &mut player, &mut inv);

        assert_eq!(ledger::stored_levels(inv.stack(0).unwrap()), 105);
        assert_eq!(player.0, 30);
    }

    #[test]
    fn nearly_full_container_leaves_the_rest_on_player() {
        let mut inv = Inventory::player();
        let mut container = marked_container();
        ledger::set_stored_levels(&mut container, i64::MAX - 1);
        inv.set(0, container);
        let mut player = Player(10);

        let outcome = hook().on_experience_gained(Side::Server, 0, &mut player, &mut inv);

        assert_eq!(
            outcome,
            CaptureOutcome::Captured {
                slot: 0,
                levels: 1,
                stored: i64::MAX
            }
        );
        assert_eq!(player.0, 9);
        assert_eq!(ledger::stored_levels(inv.stack(0).unwrap()), i64::MAX);
    }

    #[test]
    fn full_container_captures_nothing() {
        let mut inv = Inventory::player();
        let mut container = marked_container();
        ledger::set_stored_levels(&mut container, i64::MAX);
        inv.set(0, container);
        let mut player = Player(10);

        let outcome = hook().on_experience_gained(Side::Server, 0, &mut player, &mut inv);

        assert_eq!(outcome, CaptureOutcome::ContainerFull { slot: 0 });
        assert_eq!(player.0, 10);
        assert_eq!(ledger::stored_levels(inv.stack(0).unwrap()), i64::MAX);
    }
}
