//! Musiclib - Browse the Deezer music catalog
//!
//! This library provides a client for the Deezer charts, artist, album and track
//! endpoints, and the per-screen state stores that turn user actions into
//! requests and fold the responses back into state.

/// Client modules for the remote catalog API
pub mod clients;
/// Client configuration from builder or environment
pub mod config;
/// Actions, reducers, effects and the store that runs them
pub mod store;
