use futures::FutureExt;
use futures::future::BoxFuture;
use log::{debug, warn};
use reqwest::Url;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::clients::{
    api::MusicApi,
    endpoint::Endpoint,
    entities::{Album, AlbumResponse, Artist, ArtistsResponse, Chart, Track},
    errors::{Error, Result},
};
use crate::config::{Config, parse_base_url};

// Deezer answers some failures with 200 and this body instead of the record.
// The status carried no failure, so it surfaces as a decode error with the service message.
#[derive(Deserialize, Debug)]
struct ServiceErrorResponse {
    error: ServiceError,
}

#[derive(Deserialize, Debug)]
struct ServiceError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: Option<String>,
    code: Option<i64>,
}

/// Client for the Deezer catalog API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DeezerClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DeezerClient {
    /// Wraps an existing HTTP client. Fails if `base_url` cannot carry a request path.
    pub fn new(http: reqwest::Client, base_url: Url) -> Result<Self> {
        let base_url = parse_base_url(base_url.as_str())?;
        Ok(DeezerClient { http, base_url })
    }

    /// Builds a client with its own connection pool and the configured user agent.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::ConfigurationError(e.to_string()))?;
        Self::new(http, config.base_url.clone())
    }

    /// Creates a client from `MUSICLIB_*` environment variables or fails with a configuration error.
    pub fn try_default() -> Result<Self> {
        Self::from_config(&Config::from_env()?)
    }

    /// Root every endpoint path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Currently trending artists.
    pub async fn chart_artists(&self) -> Result<Chart> {
        self.get(Endpoint::ChartArtists).await
    }

    /// Albums of an artist, unwrapped from the page envelope.
    pub async fn artist_albums(&self, artist_id: i64) -> Result<Vec<Album>> {
        let response: AlbumResponse = self.get(Endpoint::ArtistAlbums(artist_id)).await?;
        Ok(response.data)
    }

    /// One page of artists matching `query`, starting at offset `index`.
    pub async fn search_artist(&self, query: &str, index: u32) -> Result<Vec<Artist>> {
        let response: ArtistsResponse = self.get(Endpoint::SearchArtist { query, index }).await?;
        Ok(response.data)
    }

    /// Album details with the embedded track list.
    pub async fn album(&self, album_id: i64) -> Result<Album> {
        self.get(Endpoint::Album(album_id)).await
    }

    /// Track details.
    pub async fn track(&self, track_id: i64) -> Result<Track> {
        self.get(Endpoint::Track(track_id)).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let url = endpoint.url(&self.base_url);
        debug!("GET {url}");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{url} answered with {status}");
            return Err(Error::TransportError(format!("{url} answered with {status}")));
        }
        let body = response.bytes().await?;
        debug!("Received {} bytes from {url}", body.len());
        decode(&body)
    }
}

/// Strictly decodes a response body, telling a service error apart from a schema mismatch.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    match serde_json::from_slice::<T>(body) {
        Ok(value) => Ok(value),
        Err(decode_err) => match serde_json::from_slice::<ServiceErrorResponse>(body) {
            Ok(ServiceErrorResponse { error }) => {
                warn!("Service error: {error:?}");
                Err(Error::DecodeError(format!(
                    "{} (code {}): {}",
                    error.kind.as_deref().unwrap_or("ServiceException"),
                    error.code.map_or_else(|| "?".to_string(), |c| c.to_string()),
                    error.message.as_deref().unwrap_or("no message"),
                )))
            }
            Err(_) => Err(Error::from(decode_err)),
        },
    }
}

impl MusicApi for DeezerClient {
    fn fetch_chart(&self) -> BoxFuture<'static, Result<Chart>> {
        let client = self.clone();
        async move { client.chart_artists().await }.boxed()
    }

    fn fetch_artist_albums(&self, artist_id: i64) -> BoxFuture<'static, Result<Vec<Album>>> {
        let client = self.clone();
        async move { client.artist_albums(artist_id).await }.boxed()
    }

    fn search_artists(&self, query: &str, index: u32) -> BoxFuture<'static, Result<Vec<Artist>>> {
        let client = self.clone();
        let query = query.to_string();
        async move { client.search_artist(&query, index).await }.boxed()
    }

    fn fetch_album(&self, album_id: i64) -> BoxFuture<'static, Result<Album>> {
        let client = self.clone();
        async move { client.album(album_id).await }.boxed()
    }

    fn fetch_track(&self, track_id: i64) -> BoxFuture<'static, Result<Track>> {
        let client = self.clone();
        async move { client.track(track_id).await }.boxed()
    }
}
