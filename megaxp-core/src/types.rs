//! Core type definitions for Mega XP Storage.
//!
//! Identifiers follow the host's `namespace:path` convention. Everything the
//! core needs to know about items and enchantments is carried by these small
//! value types; the host resolves them to its own registry entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MegaXpError;

// ---------------------------------------------------------------------------
// Well-known names
// ---------------------------------------------------------------------------

/// Mod identifier, used as the namespace of everything this crate registers.
pub const MOD_ID: &str = "mega-xp-storage";

/// Namespace assumed when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Registry path of the container item.
pub const CONTAINER_PATH: &str = "mega_xp_storage";

/// Serializer path of the creation recipe.
pub const CREATE_SERIALIZER_PATH: &str = "crafting_special_mega_xp_storage";

/// Serializer path of the marker upgrade recipe.
pub const UPGRADE_SERIALIZER_PATH: &str = "crafting_special_mega_xp_storage_mending";

/// Key of the stored-levels field in a container's attached data.
pub const STORED_LEVELS_KEY: &str = "StoredLevels";

/// Ceiling of the host's player level counter.
pub const MAX_PLAYER_LEVEL: i32 = i32::MAX;

/// Number of slots in a player's main inventory.
pub const PLAYER_INVENTORY_SLOTS: usize = 36;

/// Number of hotbar slots at the front of the main inventory.
pub const HOTBAR_SLOTS: usize = 9;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// A namespaced registry identifier, e.g. `minecraft:book`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Build an identifier from its two parts.
    ///
    /// # Errors
    /// Returns [`MegaXpError::InvalidIdentifier`] if either part contains
    /// characters the host does not accept.
    pub fn new(namespace: &str, path: &str) -> Result<Self, MegaXpError> {
        if namespace.is_empty()
            || path.is_empty()
            || !namespace.chars().all(is_namespace_char)
            || !path.chars().all(is_path_char)
        {
            return Err(MegaXpError::InvalidIdentifier(format!("{namespace}:{path}")));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Parse `namespace:path`, defaulting the namespace to `minecraft`.
    ///
    /// # Errors
    /// Returns [`MegaXpError::InvalidIdentifier`] on malformed input.
    pub fn parse(raw: &str) -> Result<Self, MegaXpError> {
        match raw.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, raw),
        }
    }

    /// An identifier in this mod's namespace.
    ///
    /// # Errors
    /// Returns [`MegaXpError::InvalidIdentifier`] if `path` is malformed.
    pub fn of_mod(path: &str) -> Result<Self, MegaXpError> {
        Self::new(MOD_ID, path)
    }

    /// An identifier in the default namespace. Callers pass literals only.
    pub(crate) fn vanilla(path: &str) -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: path.to_string(),
        }
    }

    /// The namespace half.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path half.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = MegaXpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = MegaXpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.to_string()
    }
}

/// The kind of an item (its registry identity), independent of any stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKind(pub Identifier);

impl ItemKind {
    /// Parse an item kind from `namespace:path`.
    ///
    /// # Errors
    /// Returns [`MegaXpError::InvalidIdentifier`] on malformed input.
    pub fn parse(raw: &str) -> Result<Self, MegaXpError> {
        Identifier::parse(raw).map(Self)
    }

    /// The container item registered by this mod.
    #[must_use]
    pub fn container() -> Self {
        Self(Identifier {
            namespace: MOD_ID.to_string(),
            path: CONTAINER_PATH.to_string(),
        })
    }

    /// The "nothing here" item the host uses for empty slots.
    #[must_use]
    pub fn air() -> Self {
        Self(Identifier::vanilla("air"))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A well-known enchantment name, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnchantmentId(pub Identifier);

impl EnchantmentId {
    /// Parse an enchantment identifier from `namespace:path`.
    ///
    /// # Errors
    /// Returns [`MegaXpError::InvalidIdentifier`] on malformed input.
    pub fn parse(raw: &str) -> Result<Self, MegaXpError> {
        Identifier::parse(raw).map(Self)
    }
}

impl fmt::Display for EnchantmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Comparable handle to a resolved enchantment registry entry.
///
/// Only obtainable through [`crate::host::EnchantmentRegistry`], so holding
/// one means the lookup already succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnchantmentHandle(pub u32);

// ---------------------------------------------------------------------------
// Execution context
// ---------------------------------------------------------------------------

/// Which half of the client/server split a callback is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Presentation-only context; state changes here are discarded.
    Client,
    /// Authoritative simulation.
    Server,
}

impl Side {
    /// Whether state changes made here are authoritative.
    #[must_use]
    pub fn is_authoritative(self) -> bool {
        matches!(self, Self::Server)
    }
}

/// Outcome of an item interaction as reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionResult {
    /// The interaction did something (or will, on the authoritative side).
    Success,
    /// Nothing to do; the host may try other handlers.
    Pass,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
