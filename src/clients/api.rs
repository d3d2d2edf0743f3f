use futures::future::BoxFuture;

use crate::clients::{
    entities::{Album, Artist, Chart, Track},
    errors::Result,
};

/// The catalog queries a store environment can issue.
///
/// Returned futures own everything they need so they can be spawned as effects.
/// `DeezerClient` is the production implementation; tests substitute fakes.
pub trait MusicApi: Send + Sync {
    /// Currently trending artists.
    fn fetch_chart(&self) -> BoxFuture<'static, Result<Chart>>;

    /// Albums released by an artist.
    fn fetch_artist_albums(&self, artist_id: i64) -> BoxFuture<'static, Result<Vec<Album>>>;

    /// Artists matching `query`, starting at offset `index`.
    fn search_artists(&self, query: &str, index: u32) -> BoxFuture<'static, Result<Vec<Artist>>>;

    /// Album details, including its track list.
    fn fetch_album(&self, album_id: i64) -> BoxFuture<'static, Result<Album>>;

    /// Track details.
    fn fetch_track(&self, track_id: i64) -> BoxFuture<'static, Result<Track>>;
}
