//! `MusicApi` fake whose replies are sent by the test.

use futures::FutureExt;
use futures::future::BoxFuture;
use musiclib::clients::{
    MusicApi,
    entities::{Album, Artist, Chart, Track},
    errors::{Error, Result},
};
use parking_lot::Mutex;
use tokio::sync::oneshot;

/// A request the fake has received but not answered yet.
pub struct Pending<T> {
    pub request: String,
    reply: oneshot::Sender<Result<T>>,
}

impl<T> Pending<T> {
    /// Answer the request. Returns false if the effect was already aborted.
    pub fn reply(self, result: Result<T>) -> bool {
        self.reply.send(result).is_ok()
    }
}

#[derive(Default)]
pub struct ScriptedApi {
    charts: Mutex<Vec<Pending<Chart>>>,
    artist_albums: Mutex<Vec<Pending<Vec<Album>>>>,
    searches: Mutex<Vec<Pending<Vec<Artist>>>>,
    albums: Mutex<Vec<Pending<Album>>>,
    tracks: Mutex<Vec<Pending<Track>>>,
}

fn enqueue<T: Send + 'static>(
    queue: &Mutex<Vec<Pending<T>>>,
    request: String,
) -> BoxFuture<'static, Result<T>> {
    let (reply, rx) = oneshot::channel();
    queue.lock().push(Pending { request, reply });
    async move {
        rx.await
            .unwrap_or_else(|_| Err(Error::TransportError("reply dropped".into())))
    }
    .boxed()
}

impl ScriptedApi {
    pub fn take_charts(&self) -> Vec<Pending<Chart>> {
        std::mem::take(&mut *self.charts.lock())
    }

    pub fn take_artist_albums(&self) -> Vec<Pending<Vec<Album>>> {
        std::mem::take(&mut *self.artist_albums.lock())
    }

    pub fn take_searches(&self) -> Vec<Pending<Vec<Artist>>> {
        std::mem::take(&mut *self.searches.lock())
    }

    pub fn take_albums(&self) -> Vec<Pending<Album>> {
        std::mem::take(&mut *self.albums.lock())
    }

    pub fn take_tracks(&self) -> Vec<Pending<Track>> {
        std::mem::take(&mut *self.tracks.lock())
    }
}

impl MusicApi for ScriptedApi {
    fn fetch_chart(&self) -> BoxFuture<'static, Result<Chart>> {
        enqueue(&self.charts, "chart".to_string())
    }

    fn fetch_artist_albums(&self, artist_id: i64) -> BoxFuture<'static, Result<Vec<Album>>> {
        enqueue(&self.artist_albums, artist_id.to_string())
    }

    fn search_artists(&self, query: &str, index: u32) -> BoxFuture<'static, Result<Vec<Artist>>> {
        enqueue(&self.searches, format!("q={query}&index={index}"))
    }

    fn fetch_album(&self, album_id: i64) -> BoxFuture<'static, Result<Album>> {
        enqueue(&self.albums, album_id.to_string())
    }

    fn fetch_track(&self, track_id: i64) -> BoxFuture<'static, Result<Track>> {
        enqueue(&self.tracks, track_id.to_string())
    }
}
