//! # Mega XP Storage Core Library
//!
//! Engine-agnostic core of the Mega XP Storage item: a portable container
//! that stores a player's experience levels.
//!
//! - **Ledger**: the container's stored levels, an `i64` kept in attached
//!   item data, absent when zero
//! - **Transfer**: deposit/withdraw amounts, capped so the player's
//!   32-bit level counter never overflows
//! - **Capture**: redirects levels a player gains into a held container
//!   enchanted with the marker
//! - **Recipes**: creation (reagent ×64 in a ring of books ×64) and
//!   marker upgrade (container in a ring of marker books)
//!
//! The host engine is reached only through the traits in [`host`]; all
//! operations are O(1) or bounded by inventory size and run on the host's
//! authoritative thread.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capture;
pub mod config;
pub mod context;
pub mod error;
pub mod host;
pub mod item;
pub mod ledger;
pub mod memory;
pub mod recipe;
pub mod transfer;
pub mod types;

pub use capture::{AutoCapture, CaptureOutcome};
pub use config::MegaXpConfig;
pub use context::ModContext;
pub use error::MegaXpError;
pub use recipe::{CreateRecipe, SpecialRecipe, UpgradeRecipe};
pub use types::*;
