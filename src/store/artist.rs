use futures::FutureExt;
use log::warn;

use super::{Effect, EffectId, Environment, Reducer};
use crate::clients::{
    entities::{Album, Artist},
    errors::{Error, Result},
};

/// Request for the artist's albums.
pub const ALBUMS_EFFECT: EffectId = EffectId("artist.albums");

/// Events of the artist screen.
#[derive(Debug)]
pub enum ArtistAction {
    /// The screen became visible; fetch the albums.
    OnAppear,
    /// Result of the albums request.
    AlbumsDataLoaded(Result<Vec<Album>>),
    /// The screen was closed; any pending request is cancelled.
    OnDisappear,
}

/// State of the artist screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistState {
    /// The artist shown, with `albums` filled in once loaded.
    pub artist: Artist,
    /// The albums request is in flight.
    pub is_loading: bool,
    /// Failure of the last albums request.
    pub error: Option<Error>,
}

impl ArtistState {
    /// Initial state for an artist picked from the chart or search results.
    pub fn new(artist: Artist) -> Self {
        ArtistState {
            artist,
            is_loading: false,
            error: None,
        }
    }

    /// Loaded albums, empty until the request succeeds.
    pub fn albums(&self) -> &[Album] {
        self.artist.albums.as_deref().unwrap_or_default()
    }
}

/// Reducer of the artist screen.
pub struct ArtistReducer;

impl Reducer for ArtistReducer {
    type State = ArtistState;
    type Action = ArtistAction;
    type Environment = Environment;

    fn reduce(
        state: &mut ArtistState,
        action: ArtistAction,
        env: &Environment,
    ) -> Effect<ArtistAction> {
        match action {
            ArtistAction::OnAppear => {
                state.is_loading = true;
                state.error = None;
                Effect::run(
                    ALBUMS_EFFECT,
                    env.api
                        .fetch_artist_albums(state.artist.id)
                        .map(ArtistAction::AlbumsDataLoaded),
                )
            }
            ArtistAction::AlbumsDataLoaded(result) => {
                state.is_loading = false;
                match result {
                    Ok(albums) => state.artist.albums = Some(albums),
                    Err(err) => {
                        warn!("Failed to load albums of artist {}: {err}", state.artist.id);
                        state.error = Some(err);
                    }
                }
                Effect::None
            }
            ArtistAction::OnDisappear => {
                state.is_loading = false;
                Effect::Cancel(ALBUMS_EFFECT)
            }
        }
    }
}
