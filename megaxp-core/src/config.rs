//! Configuration for Mega XP Storage.
//!
//! Maps directly to `mega-xp-storage.toml`. Every field has a default, so an
//! empty file (or no file) gives the stock behaviour.

use serde::{Deserialize, Serialize};

use crate::error::{MegaXpError, Result};
use crate::types::{EnchantmentId, Identifier, ItemKind};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MegaXpConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Automatic capture of gained levels.
    #[serde(default)]
    pub capture: CaptureConfig,
    /// Player/container transfers.
    #[serde(default)]
    pub transfer: TransferConfig,
    /// The two special recipes.
    #[serde(default)]
    pub recipes: RecipeConfig,
}

impl MegaXpConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `MegaXpError::Config` if the TOML is invalid or fails
    /// [`validate`](Self::validate).
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| MegaXpError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check values serde cannot check on its own.
    ///
    /// # Errors
    /// Returns `MegaXpError::Config` describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if self.transfer.level_chunk == 0 {
            return Err(MegaXpError::Config(
                "transfer.level_chunk must be at least 1".to_string(),
            ));
        }
        if self.recipes.required_count == 0 {
            return Err(MegaXpError::Config(
                "recipes.required_count must be at least 1".to_string(),
            ));
        }
        if self.capture.marker_min_level == 0 {
            return Err(MegaXpError::Config(
                "capture.marker_min_level must be at least 1".to_string(),
            ));
        }
        if self.recipes.reagent == self.recipes.book {
            return Err(MegaXpError::Config(format!(
                "recipes.reagent and recipes.book are both {}",
                self.recipes.book
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Whether the item's behaviour is active at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: default_log_level(),
            log_format: LogFormat::Text,
        }
    }
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Which inventory slots the auto-capture scan looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureScope {
    /// Every slot of the held inventory.
    #[default]
    Inventory,
    /// Only the hotbar.
    Hotbar,
}

/// Auto-capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Whether gained levels are redirected at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Slots scanned for a qualifying container.
    #[serde(default)]
    pub scope: CaptureScope,
    /// Minimum marker level for a container to qualify.
    #[serde(default = "default_1_u32")]
    pub marker_min_level: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scope: CaptureScope::Inventory,
            marker_min_level: 1,
        }
    }
}

/// Transfer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Largest single level delta handed to the host in one call.
    #[serde(default = "default_level_chunk")]
    pub level_chunk: u32,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            level_chunk: default_level_chunk(),
        }
    }
}

/// What the upgrade recipe does when the centre container already carries
/// the marker enchantment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Result keeps `max(existing, 1)`, i.e. an existing marker is unchanged.
    #[default]
    KeepHighest,
    /// Result gets `existing + 1`.
    Increment,
    /// The grid does not match.
    Reject,
}

/// Recipe settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeConfig {
    /// Centre ingredient of the creation recipe.
    #[serde(default = "default_reagent")]
    pub reagent: ItemKind,
    /// Surrounding ingredient of the creation recipe.
    #[serde(default = "default_book")]
    pub book: ItemKind,
    /// Surrounding ingredient of the upgrade recipe.
    #[serde(default = "default_enchanted_book")]
    pub enchanted_book: ItemKind,
    /// Exact stack size required in every creation cell.
    #[serde(default = "default_required_count")]
    pub required_count: u32,
    /// Enchantment that toggles auto-capture.
    #[serde(default = "default_marker")]
    pub marker: EnchantmentId,
    /// Upgrade behaviour when the marker is already present.
    #[serde(default)]
    pub merge: MergePolicy,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            reagent: default_reagent(),
            book: default_book(),
            enchanted_book: default_enchanted_book(),
            required_count: default_required_count(),
            marker: default_marker(),
            merge: MergePolicy::KeepHighest,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}
fn default_1_u32() -> u32 {
    1
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_level_chunk() -> u32 {
    1_000_000
}
fn default_required_count() -> u32 {
    64
}

fn default_reagent() -> ItemKind {
    ItemKind(Identifier::vanilla("lapis_block"))
}
fn default_book() -> ItemKind {
    ItemKind(Identifier::vanilla("book"))
}
fn default_enchanted_book() -> ItemKind {
    ItemKind(Identifier::vanilla("enchanted_book"))
}
fn default_marker() -> EnchantmentId {
    EnchantmentId(Identifier::vanilla("mending"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
