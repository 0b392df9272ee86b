//! Host registries touched at startup.
//!
//! Stand-ins for the engine's item, recipe-serializer and enchantment
//! registries plus the creative item groups. Registration is write-once:
//! a second entry under the same identifier is an error.

use std::collections::HashMap;

use megaxp_core::error::{MegaXpError, Result};
use megaxp_core::host::EnchantmentRegistry;
use megaxp_core::item;
use megaxp_core::types::{EnchantmentHandle, EnchantmentId, Identifier};

// ---------------------------------------------------------------------------
// Enchantments
// ---------------------------------------------------------------------------

/// Vanilla enchantments registered by [`EnchantmentTable::vanilla`].
const VANILLA_ENCHANTMENTS: &[&str] = &[
    "protection",
    "fire_protection",
    "feather_falling",
    "sharpness",
    "smite",
    "efficiency",
    "silk_touch",
    "unbreaking",
    "fortune",
    "power",
    "infinity",
    "mending",
    "vanishing_curse",
];

/// Enchantment registry keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct EnchantmentTable {
    entries: HashMap<EnchantmentId, EnchantmentHandle>,
}

impl EnchantmentTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the common vanilla enchantments, mending included.
    #[must_use]
    pub fn vanilla() -> Self {
        let mut table = Self::new();
        for (handle, name) in (0..).zip(VANILLA_ENCHANTMENTS) {
            if let Ok(id) = EnchantmentId::parse(name) {
                table.entries.insert(id, EnchantmentHandle(handle));
            }
        }
        table
    }

    /// Register `id`, handing out the next free handle.
    ///
    /// # Errors
    /// Returns [`MegaXpError::DuplicateRegistration`] if `id` is already known.
    pub fn register(&mut self, id: EnchantmentId) -> Result<EnchantmentHandle> {
        if self.entries.contains_key(&id) {
            return Err(MegaXpError::DuplicateRegistration(id.0));
        }
        let next = u32::try_from(self.entries.len())
            .map_err(|_| MegaXpError::Config("enchantment registry is full".to_string()))?;
        let handle = EnchantmentHandle(next);
        self.entries.insert(id, handle);
        Ok(handle)
    }

    /// Number of registered enchantments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EnchantmentRegistry for EnchantmentTable {
    fn resolve(&self, id: &EnchantmentId) -> Option<EnchantmentHandle> {
        self.entries.get(id).copied()
    }
}

// ---------------------------------------------------------------------------
// Items, serializers, item groups
// ---------------------------------------------------------------------------

/// Static properties of a registered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSettings {
    /// Largest stack size.
    pub max_count: u32,
    /// Always rendered with the enchantment shimmer.
    pub glint: bool,
    /// Accepted by enchanting tables and anvils.
    pub enchantable: bool,
    /// Enchanting-table weight.
    pub enchantability: u32,
}

impl ItemSettings {
    /// Settings of the experience container.
    #[must_use]
    pub fn container() -> Self {
        Self {
            max_count: item::MAX_STACK_COUNT,
            glint: item::HAS_GLINT,
            enchantable: item::IS_ENCHANTABLE,
            enchantability: item::ENCHANTABILITY,
        }
    }
}

/// A registered special-recipe serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializerEntry {
    /// Whether the recipe book lists recipes of this serializer.
    pub show_in_recipe_book: bool,
}

/// Creative inventory tabs the mod adds entries to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemGroup {
    /// Tools and utilities.
    Tools,
}

/// The item, serializer and item-group registries.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    items: HashMap<Identifier, ItemSettings>,
    serializers: HashMap<Identifier, SerializerEntry>,
    groups: HashMap<ItemGroup, Vec<Identifier>>,
}

impl Registries {
    /// Empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item.
    ///
    /// # Errors
    /// Returns [`MegaXpError::DuplicateRegistration`] if `id` is taken.
    pub fn register_item(&mut self, id: Identifier, settings: ItemSettings) -> Result<()> {
        if self.items.contains_key(&id) {
            return Err(MegaXpError::DuplicateRegistration(id));
        }
        self.items.insert(id, settings);
        Ok(())
    }

    /// Register a recipe serializer.
    ///
    /// # Errors
    /// Returns [`MegaXpError::DuplicateRegistration`] if `id` is taken.
    pub fn register_serializer(&mut self, id: Identifier, entry: SerializerEntry) -> Result<()> {
        if self.serializers.contains_key(&id) {
            return Err(MegaXpError::DuplicateRegistration(id));
        }
        self.serializers.insert(id, entry);
        Ok(())
    }

    /// Append a registered item to a creative tab.
    ///
    /// # Errors
    /// Returns [`MegaXpError::Config`] if the item was never registered and
    /// [`MegaXpError::DuplicateRegistration`] if the tab already lists it.
    pub fn add_to_group(&mut self, group: ItemGroup, id: Identifier) -> Result<()> {
        if !self.items.contains_key(&id) {
            return Err(MegaXpError::Config(format!(
                "cannot add unregistered item {id} to {group:?}"
            )));
        }
        let entries = self.groups.entry(group).or_default();
        if entries.contains(&id) {
            return Err(MegaXpError::DuplicateRegistration(id));
        }
        entries.push(id);
        Ok(())
    }

    /// Settings of a registered item.
    #[must_use]
    pub fn item(&self, id: &Identifier) -> Option<&ItemSettings> {
        self.items.get(id)
    }

    /// A registered serializer.
    #[must_use]
    pub fn serializer(&self, id: &Identifier) -> Option<&SerializerEntry> {
        self.serializers.get(id)
    }

    /// Items listed in a creative tab, in insertion order.
    #[must_use]
    pub fn group_entries(&self, group: ItemGroup) -> &[Identifier] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }
}
