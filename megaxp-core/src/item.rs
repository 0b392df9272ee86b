//! The container item's interaction surface.
//!
//! Using the item moves levels between the player and the container:
//! sneaking withdraws, otherwise the player deposits everything. The
//! decision is a pure function of the two counters ([`use_item`]); the
//! host-facing [`apply_use`] drives it through the host traits.

use tracing::debug;

use crate::host::{AttachedDataStore, PlayerLevelState};
use crate::ledger;
use crate::transfer::{self, Balances, Transfer};
use crate::types::{ActionResult, MOD_ID, Side};

/// Whether the item always renders with an enchantment glint.
pub const HAS_GLINT: bool = true;

/// Whether the item can be enchanted at a table or anvil.
pub const IS_ENCHANTABLE: bool = true;

/// Enchantability weight.
pub const ENCHANTABILITY: u32 = 1;

/// The item never stacks.
pub const MAX_STACK_COUNT: u32 = 1;

/// Result of one use interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseOutcome {
    /// What to report back to the host.
    pub result: ActionResult,
    /// The transfer performed, if any.
    pub transfer: Option<Transfer>,
    /// Balances after the interaction.
    pub balances: Balances,
}

/// Decide what a use interaction does.
///
/// On the client nothing changes but the interaction still reports success,
/// so the hand animation plays while the server performs the real transfer.
#[must_use]
pub fn use_item(side: Side, sneaking: bool, before: Balances) -> UseOutcome {
    if !side.is_authoritative() {
        return UseOutcome {
            result: ActionResult::Success,
            transfer: None,
            balances: before,
        };
    }

    let transfer = if sneaking {
        transfer::withdraw(before.stored_levels, before.player_levels)
    } else {
        transfer::deposit(before.player_levels, before.stored_levels)
    };

    match transfer {
        Some(t) => UseOutcome {
            result: ActionResult::Success,
            transfer: Some(t),
            balances: t.apply(before),
        },
        None => UseOutcome {
            result: ActionResult::Pass,
            transfer: None,
            balances: before,
        },
    }
}

/// Perform a use interaction against live host state.
///
/// The player's level delta is handed to the host in pieces of at most
/// `level_chunk` levels.
pub fn apply_use<P, S>(
    side: Side,
    sneaking: bool,
    player: &mut P,
    container: &mut S,
    level_chunk: u32,
) -> UseOutcome
where
    P: PlayerLevelState + ?Sized,
    S: AttachedDataStore + ?Sized,
{
    let before = Balances {
        player_levels: player.experience_level(),
        stored_levels: ledger::stored_levels(container),
    };
    let outcome = use_item(side, sneaking, before);

    if let Some(t) = outcome.transfer {
        add_levels_chunked(player, t.player_delta(), level_chunk);
        ledger::set_stored_levels(container, outcome.balances.stored_levels);
        debug!(
            direction = ?t.direction,
            levels = t.levels,
            stored = outcome.balances.stored_levels,
            "container use transferred levels"
        );
    }

    outcome
}

/// Apply `delta` to the player in steps no larger than `chunk`.
pub fn add_levels_chunked<P: PlayerLevelState + ?Sized>(player: &mut P, delta: i32, chunk: u32) {
    let step = i64::from(chunk.max(1));
    let mut remaining = i64::from(delta);
    while remaining != 0 {
        // |piece| <= |delta|, so it fits in i32.
        #[allow(clippy::cast_possible_truncation)]
        let piece = remaining.clamp(-step, step) as i32;
        player.add_experience_levels(piece);
        remaining -= i64::from(piece);
    }
}

// ---------------------------------------------------------------------------
// Tooltip
// ---------------------------------------------------------------------------

/// Text colour of a tooltip line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipColor {
    /// Secondary information.
    Gray,
}

/// One line of tooltip text, resolved by the host's translation tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    /// Translation key.
    pub key: String,
    /// The single `%s` argument.
    pub stored_levels: i64,
    /// Formatting applied to the whole line.
    pub color: TooltipColor,
}

impl TooltipLine {
    /// Rendering used when no translation is loaded.
    #[must_use]
    pub fn fallback_text(&self) -> String {
        format!("Stored levels: {}", self.stored_levels)
    }
}

/// The stored-levels tooltip line for a container holding `stored_levels`.
#[must_use]
pub fn tooltip(stored_levels: i64) -> TooltipLine {
    TooltipLine {
        key: format!("item.{MOD_ID}.mega_xp_storage.stored_levels"),
        stored_levels: stored_levels.max(0),
        color: TooltipColor::Gray,
    }
}
