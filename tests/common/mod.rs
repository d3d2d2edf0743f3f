//! Shared test utilities: a mock catalog server and a scripted `MusicApi`.

#![allow(dead_code)]

pub mod mock_server;
pub mod scripted_api;

use std::time::Duration;

use musiclib::clients::entities::{Album, Artist, Track};
use musiclib::store::{Reducer, Store};

/// Wait until `done` holds for the store state, or fail the test.
pub async fn wait_until<R: Reducer>(
    store: &Store<R>,
    done: impl FnMut(&R::State) -> bool,
) -> R::State {
    let mut changes = store.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(2), changes.wait_for(done))
        .await
        .expect("timed out waiting for state")
        .expect("store dropped");
    (*state).clone()
}

/// Wait until the store has no effect in flight.
pub async fn settle<R: Reducer>(store: &Store<R>) {
    for _ in 0..200 {
        if store.in_flight() == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("effects did not settle");
}

pub fn artist(id: i64, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        picture_medium: None,
        albums: None,
    }
}

pub fn album(id: i64, title: &str) -> Album {
    Album {
        id,
        title: title.to_string(),
        cover_medium: None,
        release_date: None,
        tracks: None,
    }
}

pub fn track(id: i64, title: &str, duration: u32) -> Track {
    Track {
        id,
        title: title.to_string(),
        duration,
        track_position: None,
        preview: None,
        link: None,
        artist: None,
        album: None,
    }
}
