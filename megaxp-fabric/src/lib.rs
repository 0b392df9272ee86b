//! # megaxp-fabric: Fabric Integration for Mega XP Storage
//!
//! This crate provides the integration layer between the engine-agnostic
//! `megaxp-core` library and the Fabric mod loader.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Fabric / engine               │
//! │  ┌───────────────────────────────────┐  │
//! │  │        megaxp-fabric              │  │
//! │  │  ┌─────────┐ ┌───────┐ ┌────────┐ │  │
//! │  │  │  Hooks  │→│Events │→│Systems │ │  │
//! │  │  └─────────┘ └───────┘ └───┬────┘ │  │
//! │  │  ┌───────────┐             │      │  │
//! │  │  │ Bootstrap │─┐           │      │  │
//! │  │  └───────────┘ ▼           ▼      │  │
//! │  │    ┌─────────────────────────┐    │  │
//! │  │    │      megaxp-core        │    │  │
//! │  │    └─────────────────────────┘    │  │
//! │  └───────────────────────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `components`: player and world state the mod reads and writes
//! - `events`: experience-gain and item-use events
//! - `hooks`: head/tail bracketing of the engine's `addExperience`
//! - `systems`: capture, use, crafting and tooltip handlers
//! - `registry`: item, serializer, enchantment and item-group registries
//! - `bootstrap`: the mod initializer
//! - `config`: config file location and loading
//! - `logging`: tracing subscriber setup

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod events;
pub mod hooks;
pub mod logging;
pub mod registry;
pub mod systems;
