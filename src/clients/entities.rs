use serde::{Deserialize, Serialize};

/// Currently trending artists, as returned by `/chart/0/artists`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    /// Ranked artists, most popular first.
    #[serde(rename = "data")]
    pub artists: Vec<Artist>,
}

/// A performer in the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    /// Catalog identifier. Negative for personal uploads.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL of the medium-sized picture.
    pub picture_medium: Option<String>,
    /// Never sent by the API, filled in by the artist screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<Album>>,
}

/// An album, either as a summary in a listing or with full details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Catalog identifier. Negative for personal uploads.
    pub id: i64,
    /// Album title.
    pub title: String,
    /// URL of the medium-sized cover.
    pub cover_medium: Option<String>,
    /// Release date as sent by the API, `YYYY-MM-DD`.
    pub release_date: Option<String>,
    /// Only present on the album detail endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Page<Track>>,
}

impl Album {
    /// Tracks embedded in an album detail response, empty for summaries.
    pub fn track_list(&self) -> &[Track] {
        self.tracks.as_ref().map_or(&[], |page| page.data.as_slice())
    }
}

/// A single recording.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Catalog identifier. Negative for personal uploads.
    pub id: i64,
    /// Track title.
    pub title: String,
    /// Length in seconds.
    pub duration: u32,
    /// One-based position on its album.
    pub track_position: Option<u32>,
    /// URL of a 30 second preview clip.
    pub preview: Option<String>,
    /// Public web page of the track.
    pub link: Option<String>,
    /// Performing artist, on the track detail endpoint.
    pub artist: Option<Artist>,
    /// Album summary, on the track detail endpoint.
    pub album: Option<Box<Album>>,
}

/// Paginated envelope wrapping a payload sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items of this page.
    pub data: Vec<T>,
    /// Number of items across all pages.
    pub total: Option<u32>,
    /// URL of the following page, absent on the last one.
    pub next: Option<String>,
}

/// Envelope of `/artist/*/albums`.
pub type AlbumResponse = Page<Album>;
/// Envelope of `/search/artist`.
pub type ArtistsResponse = Page<Artist>;
