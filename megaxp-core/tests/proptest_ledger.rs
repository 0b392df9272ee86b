//! Property-Based Tests for the Mega XP Storage core.
//!
//! Uses `proptest` to check the ledger, transfer, capture and recipe
//! invariants over random inputs.

use proptest::prelude::*;

use megaxp_core::capture::{AutoCapture, CaptureOutcome};
use megaxp_core::config::{CaptureConfig, RecipeConfig};
use megaxp_core::host::{InventoryView, ItemInstance, PlayerLevelState};
use megaxp_core::ledger;
use megaxp_core::memory::{CraftingInput, Inventory, ItemStack};
use megaxp_core::recipe::{CENTER_SLOT, CreateRecipe, SpecialRecipe, UpgradeRecipe};
use megaxp_core::transfer::{self, Balances};
use megaxp_core::types::{
    EnchantmentHandle, ItemKind, MAX_PLAYER_LEVEL, PLAYER_INVENTORY_SLOTS, Side,
};

const MARKER: EnchantmentHandle = EnchantmentHandle(1);

struct Player(i32);

impl PlayerLevelState for Player {
    fn experience_level(&self) -> i32 {
        self.0
    }
    fn add_experience_levels(&mut self, delta: i32) {
        self.0 = self.0.saturating_add(delta).max(0);
    }
}

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn kind(raw: &str) -> ItemKind {
    ItemKind::parse(raw).unwrap()
}

fn marked_container(stored: i64) -> ItemStack {
    let mut stack = ItemStack::new(ItemKind::container(), 1).with_enchantment(MARKER, 1);
    ledger::set_stored_levels(&mut stack, stored);
    stack
}

fn arb_filler() -> impl Strategy<Value = ItemStack> {
    prop_oneof![
        Just(ItemStack::empty()),
        (1..=64u32).prop_map(|n| ItemStack::new(kind("dirt"), n)),
        Just(ItemStack::new(ItemKind::container(), 1)),
        Just(ItemStack::new(kind("diamond_sword"), 1).with_enchantment(MARKER, 1)),
    ]
}

/// An inventory of random non-qualifying stacks plus a set of slots that
/// hold qualifying containers.
fn arb_inventory() -> impl Strategy<Value = (Inventory, Vec<usize>)> {
    (
        proptest::collection::vec(arb_filler(), PLAYER_INVENTORY_SLOTS),
        proptest::collection::btree_set(0..PLAYER_INVENTORY_SLOTS, 0..4),
    )
        .prop_map(|(fillers, marked)| {
            let mut inv = Inventory::player();
            for (slot, stack) in fillers.into_iter().enumerate() {
                inv.set(slot, stack);
            }
            for &slot in &marked {
                inv.set(slot, marked_container(0));
            }
            (inv, marked.into_iter().collect())
        })
}

fn hook() -> AutoCapture {
    AutoCapture::new(ItemKind::container(), MARKER, &CaptureConfig::default())
}

fn creation_grid() -> CraftingInput {
    let mut cells: [ItemStack; 9] = std::array::from_fn(|_| ItemStack::new(kind("book"), 64));
    cells[CENTER_SLOT] = ItemStack::new(kind("lapis_block"), 64);
    CraftingInput::square(cells)
}

// ---------------------------------------------------------------------------
// Property: get(set(v)) == max(v, 0)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn ledger_set_get_clamps_at_zero(v in any::<i64>()) {
        let mut stack = ItemStack::new(ItemKind::container(), 1);
        ledger::set_stored_levels(&mut stack, v);
        prop_assert_eq!(ledger::stored_levels(&stack), v.max(0));
        prop_assert_eq!(
            stack.custom_data().contains_key(megaxp_core::STORED_LEVELS_KEY),
            v > 0
        );
    }
}

// ---------------------------------------------------------------------------
// Property: withdraw moves min(stored, MAX - player) and never overflows
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn withdraw_is_capped_and_conserving(
        stored in 0..i64::MAX,
        player in 0..=MAX_PLAYER_LEVEL,
    ) {
        let expected = stored.min(i64::from(MAX_PLAYER_LEVEL) - i64::from(player));
        match transfer::withdraw(stored, player) {
            None => prop_assert!(expected <= 0),
            Some(t) => {
                prop_assert_eq!(i64::from(t.levels), expected);
                let after = t.apply(Balances { player_levels: player, stored_levels: stored });
                prop_assert_eq!(after.stored_levels, stored - expected);
                prop_assert_eq!(i64::from(after.player_levels), i64::from(player) + expected);
                prop_assert!(after.player_levels <= MAX_PLAYER_LEVEL);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: deposit moves everything the player has
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn deposit_moves_all_player_levels(
        player in 0..=MAX_PLAYER_LEVEL,
        stored in 0..i64::from(u32::MAX),
    ) {
        match transfer::deposit(player, stored) {
            None => prop_assert_eq!(player, 0),
            Some(t) => {
                let after = t.apply(Balances { player_levels: player, stored_levels: stored });
                prop_assert_eq!(after.player_levels, 0);
                prop_assert_eq!(after.stored_levels, stored + i64::from(player));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: levels are conserved even against a nearly full ledger
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn deposit_and_capture_conserve_near_ceiling(
        gap in 0..1000i64,
        player in 0..1000i32,
    ) {
        let stored = i64::MAX - gap;
        let total = i128::from(stored) + i128::from(player);

        let mut p = Player(player);
        let mut stack = marked_container(stored);
        megaxp_core::item::apply_use(Side::Server, false, &mut p, &mut stack, 1_000_000);
        prop_assert_eq!(
            i128::from(ledger::stored_levels(&stack)) + i128::from(p.0),
            total
        );

        let mut p = Player(player);
        let mut inv = Inventory::player();
        inv.set(0, marked_container(stored));
        hook().on_experience_gained(Side::Server, 0, &mut p, &mut inv);
        prop_assert_eq!(
            i128::from(ledger::stored_levels(inv.stack(0).unwrap())) + i128::from(p.0),
            total
        );
    }
}

// ---------------------------------------------------------------------------
// Property: no gain means no change anywhere
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn capture_without_gain_changes_nothing(
        (mut inv, _) in arb_inventory(),
        before in 0..1000i32,
        drop in 0..1000i32,
    ) {
        let snapshot = inv.clone();
        let after = (before - drop).max(0);
        let mut player = Player(after);

        let outcome = hook().on_experience_gained(Side::Server, before, &mut player, &mut inv);

        prop_assert_eq!(outcome, CaptureOutcome::NoGain);
        prop_assert_eq!(player.0, after);
        prop_assert_eq!(inv, snapshot);
    }
}

// ---------------------------------------------------------------------------
// Property: the first qualifying slot is always chosen, deterministically
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn capture_picks_first_qualifying_slot(
        (mut inv, marked) in arb_inventory(),
        gained in 1..500i32,
    ) {
        let hook = hook();
        let first = marked.iter().min().copied();
        prop_assert_eq!(hook.locate(&inv), first);
        prop_assert_eq!(hook.locate(&inv), first);

        let mut player = Player(gained);
        let outcome = hook.on_experience_gained(Side::Server, 0, &mut player, &mut inv);

        match first {
            None => {
                prop_assert_eq!(outcome, CaptureOutcome::NoContainer);
                prop_assert_eq!(player.0, gained);
            }
            Some(slot) => {
                prop_assert_eq!(
                    outcome,
                    CaptureOutcome::Captured { slot, levels: gained, stored: i64::from(gained) }
                );
                prop_assert_eq!(player.0, 0);
                for &other in marked.iter().filter(|&&s| s != slot) {
                    prop_assert_eq!(ledger::stored_levels(inv.stack(other).unwrap()), 0);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: creation recipe is exact-quantity in every cell
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn creation_requires_exact_counts(slot in 0..9usize, count in 1..=128u32) {
        let recipe = CreateRecipe::new(ItemKind::container(), &RecipeConfig::default()).unwrap();
        let mut grid = creation_grid();
        let item = if slot == CENTER_SLOT { kind("lapis_block") } else { kind("book") };
        grid.set(slot, ItemStack::new(item, count));

        prop_assert_eq!(recipe.matches(&grid), count == 64);
        if let Some(out) = recipe.craft(&grid) {
            prop_assert_eq!(ledger::stored_levels(&out), 0);
            prop_assert!(out.custom_data().is_empty());
        }
    }
}

// ---------------------------------------------------------------------------
// Property: upgrade preserves whatever was stored
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn upgrade_preserves_stored_levels(stored in 0..i64::MAX) {
        let recipe =
            UpgradeRecipe::new(ItemKind::container(), MARKER, &RecipeConfig::default()).unwrap();
        let book = ItemStack::new(kind("enchanted_book"), 1).with_stored_enchantment(MARKER, 1);
        let mut cells: [ItemStack; 9] = std::array::from_fn(|_| book.clone());
        let mut center = ItemStack::new(ItemKind::container(), 1);
        ledger::set_stored_levels(&mut center, stored);
        cells[CENTER_SLOT] = center.clone();
        let grid = CraftingInput::square(cells);

        let out = recipe.craft(&grid).unwrap();
        prop_assert_eq!(out.custom_data(), center.custom_data());
        prop_assert!(out.is_of(&ItemKind::container()));
    }
}

// ---------------------------------------------------------------------------
// Property: non-3×3 grids never match either recipe
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn non_square_grids_never_match(width in 0..5usize, height in 0..5usize) {
        prop_assume!(!(width == 3 && height == 3));
        let create = CreateRecipe::new(ItemKind::container(), &RecipeConfig::default()).unwrap();
        let upgrade =
            UpgradeRecipe::new(ItemKind::container(), MARKER, &RecipeConfig::default()).unwrap();
        let stacks = vec![ItemStack::new(kind("book"), 64); width * height];
        let grid = CraftingInput::new(width, height, stacks);

        prop_assert!(!create.matches(&grid));
        prop_assert!(!upgrade.matches(&grid));
        prop_assert!(!create.fits(width, height));
    }
}
