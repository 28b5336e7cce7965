//! gamelog application core.
//!
//! State management for the game-browsing page and the profile favorites
//! panel: fetch-strategy selection, pagination, and cancellation-safe
//! result state on top of the catalog-client collaborators. Rendering is
//! out of scope; views read controller snapshots.

pub mod bootstrap;
pub mod config;
pub mod services;
