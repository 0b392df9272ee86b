//! Plain in-memory implementations of the host item interfaces.
//!
//! Used by the adapter layer as its item representation and by tests. The
//! attached data is a JSON object, which mirrors the loosely-typed compound
//! tags hosts keep on item stacks and lets malformed values exist at all.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::host::{AttachedDataStore, CraftingGrid, InventoryView, ItemInstance};
use crate::types::{EnchantmentHandle, ItemKind, PLAYER_INVENTORY_SLOTS};

// ---------------------------------------------------------------------------
// ItemStack
// ---------------------------------------------------------------------------

/// An item stack with attached custom data and two enchantment maps.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    kind: ItemKind,
    count: u32,
    custom_data: Map<String, Value>,
    enchantments: BTreeMap<EnchantmentHandle, u32>,
    stored_enchantments: BTreeMap<EnchantmentHandle, u32>,
}

impl ItemStack {
    /// A stack of `count` items with nothing attached.
    #[must_use]
    pub fn new(kind: ItemKind, count: u32) -> Self {
        Self {
            kind,
            count,
            custom_data: Map::new(),
            enchantments: BTreeMap::new(),
            stored_enchantments: BTreeMap::new(),
        }
    }

    /// An empty slot.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ItemKind::air(), 0)
    }

    /// Builder: apply an enchantment.
    #[must_use]
    pub fn with_enchantment(mut self, enchantment: EnchantmentHandle, level: u32) -> Self {
        self.set_enchantment_level(enchantment, level);
        self
    }

    /// Builder: store an enchantment (enchanted-book style).
    #[must_use]
    pub fn with_stored_enchantment(mut self, enchantment: EnchantmentHandle, level: u32) -> Self {
        if level > 0 {
            self.stored_enchantments.insert(enchantment, level);
        }
        self
    }

    /// Builder: attach an arbitrary custom-data value.
    #[must_use]
    pub fn with_custom(mut self, key: &str, value: Value) -> Self {
        self.custom_data.insert(key.to_string(), value);
        self
    }

    /// The raw custom data compound.
    #[must_use]
    pub fn custom_data(&self) -> &Map<String, Value> {
        &self.custom_data
    }

    /// All applied enchantments.
    #[must_use]
    pub fn enchantments(&self) -> &BTreeMap<EnchantmentHandle, u32> {
        &self.enchantments
    }
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl AttachedDataStore for ItemStack {
    fn get_long(&self, key: &str) -> Option<i64> {
        self.custom_data.get(key).and_then(Value::as_i64)
    }

    fn put_long(&mut self, key: &str, value: i64) {
        self.custom_data.insert(key.to_string(), Value::from(value));
    }

    fn remove(&mut self, key: &str) {
        self.custom_data.remove(key);
    }

    fn enchantment_level(&self, enchantment: EnchantmentHandle) -> u32 {
        self.enchantments.get(&enchantment).copied().unwrap_or(0)
    }

    fn set_enchantment_level(&mut self, enchantment: EnchantmentHandle, level: u32) {
        if level == 0 {
            self.enchantments.remove(&enchantment);
        } else {
            self.enchantments.insert(enchantment, level);
        }
    }
}

impl ItemInstance for ItemStack {
    fn create(kind: &ItemKind, count: u32) -> Self {
        Self::new(kind.clone(), count)
    }

    fn kind(&self) -> &ItemKind {
        &self.kind
    }

    fn count(&self) -> u32 {
        self.count
    }

    fn is_empty(&self) -> bool {
        self.count == 0 || self.kind == ItemKind::air()
    }

    fn stored_enchantment_level(&self, enchantment: EnchantmentHandle) -> u32 {
        self.stored_enchantments
            .get(&enchantment)
            .copied()
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// A fixed-size, slot-ordered inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    slots: Vec<ItemStack>,
}

impl Inventory {
    /// An inventory of `size` empty slots.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![ItemStack::empty(); size],
        }
    }

    /// A standard player inventory.
    #[must_use]
    pub fn player() -> Self {
        Self::new(PLAYER_INVENTORY_SLOTS)
    }

    /// Put `stack` in `slot`, returning what was there. Out-of-range slots
    /// hand the stack straight back.
    pub fn set(&mut self, slot: usize, stack: ItemStack) -> ItemStack {
        match self.slots.get_mut(slot) {
            Some(existing) => std::mem::replace(existing, stack),
            None => stack,
        }
    }
}

impl InventoryView for Inventory {
    type Item = ItemStack;

    fn size(&self) -> usize {
        self.slots.len()
    }

    fn stack(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot)
    }

    fn stack_mut(&mut self, slot: usize) -> Option<&mut ItemStack> {
        self.slots.get_mut(slot)
    }
}

// ---------------------------------------------------------------------------
// Crafting input
// ---------------------------------------------------------------------------

/// A row-major crafting grid snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftingInput {
    width: usize,
    height: usize,
    stacks: Vec<ItemStack>,
}

impl CraftingInput {
    /// Build a grid. Missing cells are padded with empty stacks and surplus
    /// stacks are dropped, so the grid always has `width * height` cells.
    #[must_use]
    pub fn new(width: usize, height: usize, mut stacks: Vec<ItemStack>) -> Self {
        stacks.resize_with(width * height, ItemStack::empty);
        Self {
            width,
            height,
            stacks,
        }
    }

    /// A full 3×3 grid.
    #[must_use]
    pub fn square(stacks: [ItemStack; 9]) -> Self {
        Self::new(3, 3, stacks.into())
    }

    /// Replace one cell.
    pub fn set(&mut self, index: usize, stack: ItemStack) {
        if let Some(cell) = self.stacks.get_mut(index) {
            *cell = stack;
        }
    }
}

impl CraftingGrid for CraftingInput {
    type Item = ItemStack;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn stack_in_slot(&self, index: usize) -> &ItemStack {
        &self.stacks[index]
    }
}
