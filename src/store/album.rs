use futures::FutureExt;
use log::warn;

use super::{Effect, EffectId, Environment, Loadable, Reducer};
use crate::clients::{
    entities::{Album, Track},
    errors::{Error, Result},
};

/// Album detail request.
pub const ALBUM_EFFECT: EffectId = EffectId("album.details");
/// Selected track request.
pub const TRACK_EFFECT: EffectId = EffectId("album.track");

/// Events of the album screen.
#[derive(Debug)]
pub enum AlbumAction {
    /// The screen became visible; fetch the album details.
    OnAppear,
    /// Result of the album detail request.
    AlbumDataLoaded(Result<Album>),
    /// The user picked a track from the list.
    TrackSelected(i64),
    /// Result of the track request.
    TrackDataLoaded(Result<Track>),
    /// The track detail view was closed.
    TrackDismissed,
}

/// State of the album screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumState {
    /// Starts as the summary the user tapped, replaced by the detail response.
    pub album: Album,
    /// The detail request is in flight.
    pub is_loading: bool,
    /// Failure of the last detail request.
    pub error: Option<Error>,
    /// Details of the track the user picked.
    pub selected_track: Loadable<Track>,
}

impl AlbumState {
    /// Initial state for the album the user tapped.
    pub fn new(album: Album) -> Self {
        AlbumState {
            album,
            is_loading: false,
            error: None,
            selected_track: Loadable::Idle,
        }
    }
}

/// Reducer of the album screen.
pub struct AlbumReducer;

impl Reducer for AlbumReducer {
    type State = AlbumState;
    type Action = AlbumAction;
    type Environment = Environment;

    fn reduce(
        state: &mut AlbumState,
        action: AlbumAction,
        env: &Environment,
    ) -> Effect<AlbumAction> {
        match action {
            AlbumAction::OnAppear => {
                state.is_loading = true;
                state.error = None;
                Effect::run(
                    ALBUM_EFFECT,
                    env.api
                        .fetch_album(state.album.id)
                        .map(AlbumAction::AlbumDataLoaded),
                )
            }
            AlbumAction::AlbumDataLoaded(result) => {
                state.is_loading = false;
                match result {
                    Ok(album) => state.album = album,
                    Err(err) => {
                        warn!("Failed to load album {}: {err}", state.album.id);
                        state.error = Some(err);
                    }
                }
                Effect::None
            }
            AlbumAction::TrackSelected(track_id) => {
                state.selected_track = Loadable::Loading;
                Effect::run(
                    TRACK_EFFECT,
                    env.api
                        .fetch_track(track_id)
                        .map(AlbumAction::TrackDataLoaded),
                )
            }
            AlbumAction::TrackDataLoaded(result) => {
                if let Err(err) = &result {
                    warn!("Failed to load track: {err}");
                }
                state.selected_track = Loadable::from(result);
                Effect::None
            }
            AlbumAction::TrackDismissed => {
                state.selected_track = Loadable::Idle;
                Effect::Cancel(TRACK_EFFECT)
            }
        }
    }
}
