//! Transfer policy between a player's level counter and a container ledger.
//!
//! Both directions are computed here as plain values and applied by the
//! caller. A computed [`Transfer`] is always applied in full: the source
//! loses exactly `levels` and the destination gains exactly `levels`.
//!
//! | Direction | Amount                                           |
//! |-----------|--------------------------------------------------|
//! | Deposit   | `min(player, i64::MAX - stored)`                 |
//! | Withdraw  | `min(stored, i32::MAX - player)`                 |
//!
//! The deposit cap only bites on a ledger within `i32::MAX` of its ceiling;
//! whatever does not fit stays on the player.

use crate::types::MAX_PLAYER_LEVEL;

/// Direction of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Player levels into the container.
    Deposit,
    /// Container levels back to the player.
    Withdraw,
}

/// A validated, non-empty transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Which way the levels move.
    pub direction: Direction,
    /// How many levels move. Always `> 0` and always fits the player counter.
    pub levels: i32,
}

/// Both sides of a transfer, before or after it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balances {
    /// The player's live level counter.
    pub player_levels: i32,
    /// The container's stored levels.
    pub stored_levels: i64,
}

/// Compute a deposit of everything the player has, up to what the ledger
/// can still hold.
///
/// `None` when the player has no levels to give or the ledger is full.
#[must_use]
pub fn deposit(player_levels: i32, stored_levels: i64) -> Option<Transfer> {
    let room = i64::MAX - stored_levels.max(0);
    let transferable = i64::from(player_levels).min(room);
    if transferable <= 0 {
        return None;
    }
    i32::try_from(transferable).ok().map(|levels| Transfer {
        direction: Direction::Deposit,
        levels,
    })
}

/// Compute a withdrawal capped so the player counter cannot overflow.
///
/// `None` when the container is empty or the player is already at the
/// ceiling.
#[must_use]
pub fn withdraw(stored_levels: i64, player_levels: i32) -> Option<Transfer> {
    if stored_levels <= 0 {
        return None;
    }
    let headroom = i64::from(MAX_PLAYER_LEVEL) - i64::from(player_levels.max(0));
    let transferable = stored_levels.min(headroom);
    if transferable <= 0 {
        return None;
    }
    // `transferable <= headroom <= i32::MAX`, so the conversion cannot fail.
    i32::try_from(transferable).ok().map(|levels| Transfer {
        direction: Direction::Withdraw,
        levels,
    })
}

impl Transfer {
    /// The balances after this transfer.
    #[must_use]
    pub fn apply(self, before: Balances) -> Balances {
        match self.direction {
            Direction::Deposit => Balances {
                player_levels: before.player_levels - self.levels,
                stored_levels: before.stored_levels.saturating_add(i64::from(self.levels)),
            },
            Direction::Withdraw => Balances {
                player_levels: before.player_levels.saturating_add(self.levels),
                stored_levels: before.stored_levels - i64::from(self.levels),
            },
        }
    }

    /// Signed change to the player's level counter.
    #[must_use]
    pub fn player_delta(self) -> i32 {
        match self.direction {
            Direction::Deposit => -self.levels,
            Direction::Withdraw => self.levels,
        }
    }
}
