//! Event handling systems.
//!
//! Each system takes the resolved [`ModContext`] and the entity state for
//! one event, runs the core operation and applies the result. All of them
//! are no-ops when the mod is disabled in configuration.

use tracing::debug;

use megaxp_core::capture::CaptureOutcome;
use megaxp_core::host::{InventoryView, ItemInstance};
use megaxp_core::item::{self, TooltipLine};
use megaxp_core::ledger;
use megaxp_core::memory::{CraftingInput, ItemStack};
use megaxp_core::recipe::SpecialRecipe;
use megaxp_core::types::ActionResult;
use megaxp_core::ModContext;

use crate::components::PlayerEntity;
use crate::events::{ExperienceGainEvent, GameEvent, UseEvent};

/// Result of dispatching one [`GameEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Outcome of an experience grant.
    Capture(CaptureOutcome),
    /// Outcome of a use interaction.
    Use(ActionResult),
}

/// Route an event to its system.
pub fn dispatch(ctx: &ModContext, event: GameEvent, player: &mut PlayerEntity) -> EventResult {
    match event {
        GameEvent::ExperienceGained(e) => {
            EventResult::Capture(on_experience_gained(ctx, &e, player))
        }
        GameEvent::ItemUsed(e) => EventResult::Use(on_item_used(ctx, &e, player)),
    }
}

/// Redirect levels gained by `player` into a qualifying held container.
pub fn on_experience_gained(
    ctx: &ModContext,
    event: &ExperienceGainEvent,
    player: &mut PlayerEntity,
) -> CaptureOutcome {
    if !ctx.enabled() {
        return CaptureOutcome::Disabled;
    }
    ctx.capture.on_experience_gained(
        event.side,
        event.levels_before,
        &mut player.experience,
        &mut player.inventory,
    )
}

/// Deposit into or withdraw from the container in the used slot.
pub fn on_item_used(ctx: &ModContext, event: &UseEvent, player: &mut PlayerEntity) -> ActionResult {
    if !ctx.enabled() {
        return ActionResult::Pass;
    }
    let Some(stack) = player.inventory.stack_mut(event.slot) else {
        return ActionResult::Pass;
    };
    if !stack.is_of(&ctx.container) {
        return ActionResult::Pass;
    }

    let outcome = item::apply_use(
        event.side,
        event.sneaking,
        &mut player.experience,
        stack,
        ctx.level_chunk(),
    );
    if outcome.result == ActionResult::Pass {
        debug!(slot = event.slot, sneaking = event.sneaking, "nothing to transfer");
    }
    outcome.result
}

/// Try both special recipes against a crafting grid.
///
/// Creation is tried first; the two can never match the same grid since
/// their centre cells differ.
#[must_use]
pub fn craft(ctx: &ModContext, grid: &CraftingInput) -> Option<ItemStack> {
    if !ctx.enabled() {
        return None;
    }
    ctx.create.craft(grid).or_else(|| ctx.upgrade.craft(grid))
}

/// Tooltip line for `stack`, if it is a container.
#[must_use]
pub fn tooltip(ctx: &ModContext, stack: &ItemStack) -> Option<TooltipLine> {
    stack
        .is_of(&ctx.container)
        .then(|| item::tooltip(ledger::stored_levels(stack)))
}
