//! Startup context.
//!
//! Everything resolved once at initialization (the marker enchantment, the
//! container's identity, the configured recipes) lives in a [`ModContext`]
//! that the host threads into its callbacks. Nothing here is global.

use tracing::info;

use crate::capture::AutoCapture;
use crate::config::MegaXpConfig;
use crate::error::{MegaXpError, Result};
use crate::host::EnchantmentRegistry;
use crate::recipe::{CreateRecipe, UpgradeRecipe};
use crate::types::{EnchantmentHandle, ItemKind};

/// Resolved, immutable state shared by every event handler.
#[derive(Debug, Clone)]
pub struct ModContext {
    /// The configuration the context was built from.
    pub config: MegaXpConfig,
    /// Identity of the container item.
    pub container: ItemKind,
    /// The resolved marker enchantment.
    pub marker: EnchantmentHandle,
    /// Level-gain interceptor.
    pub capture: AutoCapture,
    /// Creation recipe.
    pub create: CreateRecipe,
    /// Marker upgrade recipe.
    pub upgrade: UpgradeRecipe,
}

impl ModContext {
    /// Resolve everything the handlers need.
    ///
    /// # Errors
    /// Returns [`MegaXpError::MarkerUnresolved`] if the registry does not
    /// know the configured marker; callers must treat this as fatal.
    /// Returns [`MegaXpError::Config`] if the configuration is invalid.
    pub fn build<R>(config: MegaXpConfig, registry: &R) -> Result<Self>
    where
        R: EnchantmentRegistry + ?Sized,
    {
        config.validate()?;

        let marker_id = &config.recipes.marker;
        let marker = registry
            .resolve(marker_id)
            .ok_or_else(|| MegaXpError::MarkerUnresolved(marker_id.clone()))?;

        let container = ItemKind::container();
        let capture = AutoCapture::new(container.clone(), marker, &config.capture);
        let create = CreateRecipe::new(container.clone(), &config.recipes)?;
        let upgrade = UpgradeRecipe::new(container.clone(), marker, &config.recipes)?;

        info!(
            marker = %marker_id,
            scope = ?config.capture.scope,
            merge = ?config.recipes.merge,
            "Mega XP Storage context resolved"
        );

        Ok(Self {
            config,
            container,
            marker,
            capture,
            create,
            upgrade,
        })
    }

    /// Largest level delta handed to the host in one call.
    #[must_use]
    pub fn level_chunk(&self) -> u32 {
        self.config.transfer.level_chunk
    }

    /// Whether the item's behaviour is switched on.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.general.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EnchantmentId;

    struct OnlyMending;

    impl EnchantmentRegistry for OnlyMending {
        fn resolve(&self, id: &EnchantmentId) -> Option<EnchantmentHandle> {
            (id.to_string() == "minecraft:mending").then_some(EnchantmentHandle(11))
        }
    }

    #[test]
    fn resolves_default_marker() {
        let ctx = ModContext::build(MegaXpConfig::default(), &OnlyMending).unwrap();
        assert_eq!(ctx.marker, EnchantmentHandle(11));
        assert_eq!(ctx.container, ItemKind::container());
        assert_eq!(ctx.level_chunk(), 1_000_000);
        assert!(ctx.enabled());
    }

    #[test]
    fn unknown_marker_is_fatal() {
        let config = MegaXpConfig::from_toml("[recipes]\nmarker = \"unbreaking\"").unwrap();
        let err = ModContext::build(config, &OnlyMending).unwrap_err();
        assert!(matches!(
            err,
            MegaXpError::MarkerUnresolved(ref id) if id.to_string() == "minecraft:unbreaking"
        ));
    }

    #[test]
    fn invalid_config_is_rejected_before_lookup() {
        let mut config = MegaXpConfig::default();
        config.transfer.level_chunk = 0;
        assert!(matches!(
            ModContext::build(config, &OnlyMending),
            Err(MegaXpError::Config(_))
        ));
    }
}
