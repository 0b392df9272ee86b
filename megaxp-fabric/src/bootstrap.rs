//! Mod initializer.
//!
//! Runs once when the loader starts the mod: load config, set up logging,
//! resolve the [`ModContext`] and register the item, both recipe
//! serializers and the tools-tab entry. Any failure here aborts startup.

use std::path::Path;

use tracing::info;

use megaxp_core::config::MegaXpConfig;
use megaxp_core::error::Result;
use megaxp_core::host::EnchantmentRegistry;
use megaxp_core::recipe::SpecialRecipe;
use megaxp_core::ModContext;

use crate::registry::{ItemGroup, ItemSettings, Registries, SerializerEntry};
use crate::{config, logging};

/// Resolve the context and register everything the mod contributes.
///
/// # Errors
/// Returns [`megaxp_core::MegaXpError::MarkerUnresolved`] if the marker is
/// unknown, [`megaxp_core::MegaXpError::DuplicateRegistration`] if any of
/// the mod's identifiers is already taken, or a config error.
pub fn initialize<R>(
    config: MegaXpConfig,
    enchantments: &R,
    registries: &mut Registries,
) -> Result<ModContext>
where
    R: EnchantmentRegistry + ?Sized,
{
    let ctx = ModContext::build(config, enchantments)?;
    let item_id = ctx.container.0.clone();

    registries.register_item(item_id.clone(), ItemSettings::container())?;
    register_recipe(registries, &ctx.create)?;
    register_recipe(registries, &ctx.upgrade)?;
    registries.add_to_group(ItemGroup::Tools, item_id)?;

    info!(
        item = %ctx.container.0,
        enabled = ctx.enabled(),
        "Mega XP Storage loaded"
    );
    Ok(ctx)
}

fn register_recipe<T: SpecialRecipe>(registries: &mut Registries, recipe: &T) -> Result<()> {
    registries.register_serializer(
        recipe.serializer().clone(),
        SerializerEntry {
            show_in_recipe_book: recipe.show_in_recipe_book(),
        },
    )
}

/// Full startup from the loader's config directory: load the config file,
/// install logging at its level, then [`initialize`].
///
/// # Errors
/// As [`config::load_or_default`] and [`initialize`].
pub fn start<R>(
    config_dir: &Path,
    enchantments: &R,
    registries: &mut Registries,
) -> Result<ModContext>
where
    R: EnchantmentRegistry + ?Sized,
{
    let config = config::load_or_default(config_dir)?;
    logging::init(&config.general);
    initialize(config, enchantments, registries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::EnchantmentTable;
    use megaxp_core::MegaXpError;
    use megaxp_core::types::{
        CONTAINER_PATH, CREATE_SERIALIZER_PATH, Identifier, UPGRADE_SERIALIZER_PATH,
    };

    #[test]
    fn registers_item_serializers_and_tab() {
        let mut registries = Registries::new();
        let ctx = initialize(
            MegaXpConfig::default(),
            &EnchantmentTable::vanilla(),
            &mut registries,
        )
        .unwrap();

        let item_id = Identifier::of_mod(CONTAINER_PATH).unwrap();
        assert_eq!(ctx.container.0, item_id);
        assert_eq!(registries.item(&item_id), Some(&ItemSettings::container()));
        assert_eq!(registries.group_entries(ItemGroup::Tools), &[item_id]);

        let create = registries
            .serializer(&Identifier::of_mod(CREATE_SERIALIZER_PATH).unwrap())
            .unwrap();
        assert!(create.show_in_recipe_book);
        let upgrade = registries
            .serializer(&Identifier::of_mod(UPGRADE_SERIALIZER_PATH).unwrap())
            .unwrap();
        assert!(!upgrade.show_in_recipe_book);
    }

    #[test]
    fn second_initialization_collides() {
        let mut registries = Registries::new();
        let table = EnchantmentTable::vanilla();
        initialize(MegaXpConfig::default(), &table, &mut registries).unwrap();
        let err = initialize(MegaXpConfig::default(), &table, &mut registries).unwrap_err();
        assert!(matches!(err, MegaXpError::DuplicateRegistration(_)));
    }

    #[test]
    fn unknown_marker_registers_nothing() {
        let mut registries = Registries::new();
        let err = initialize(
            MegaXpConfig::default(),
            &EnchantmentTable::new(),
            &mut registries,
        )
        .unwrap_err();
        assert!(matches!(err, MegaXpError::MarkerUnresolved(_)));
        assert!(registries.group_entries(ItemGroup::Tools).is_empty());
    }

    #[test]
    fn start_reads_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            config::config_path(dir.path()),
            "[general]\nlog_level = \"debug\"\n[transfer]\nlevel_chunk = 500\n",
        )
        .unwrap();

        let mut registries = Registries::new();
        let ctx = start(dir.path(), &EnchantmentTable::vanilla(), &mut registries).unwrap();
        assert_eq!(ctx.level_chunk(), 500);
    }
}
