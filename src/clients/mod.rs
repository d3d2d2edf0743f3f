/// Catalog queries as a trait, the seam between stores and the network
pub mod api;
/// Deezer API client
pub mod deezer;
/// Endpoint paths and URL construction
pub mod endpoint;
/// Data entities for charts, artists, albums and tracks
pub mod entities;
/// Error types and result aliases
pub mod errors;

pub use api::MusicApi;
pub use deezer::DeezerClient;
