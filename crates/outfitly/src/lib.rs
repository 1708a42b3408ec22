//! Weather-aware outfit recommendations.
//!
//! The crate is organised the way a host application consumes it: the
//! [`domain`] model, the pure [`engine`] (scoring, tips, risk alerts), the
//! collaborator ports and reference adapters ([`catalog`], [`wardrobe`],
//! [`preferences`], [`weather`]), and the [`orchestrator`] that ties weather
//! and preference updates to fresh recommendations.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestrator;
pub mod preferences;
pub mod telemetry;
pub mod wardrobe;
pub mod weather;
