//! Unidirectional state layer.
//!
//! A UI event becomes an action, the screen's [`Reducer`] folds it into state
//! and may return an [`Effect`] (a catalog request). The [`Store`] runs the
//! effect and feeds the resulting action back to the reducer.

use std::sync::Arc;

use crate::clients::{DeezerClient, MusicApi};

/// Album screen: album details and track selection
pub mod album;
/// Artist screen: the artist's albums
pub mod artist;
/// Charts screen: top artists and artist search
pub mod charts;
mod effect;
mod loadable;
mod reducer;
mod runtime;

pub use effect::{Effect, EffectId};
pub use loadable::Loadable;
pub use reducer::Reducer;
pub use runtime::Store;

/// Dependencies injected into every screen reducer.
#[derive(Clone)]
pub struct Environment {
    /// Catalog queries.
    pub api: Arc<dyn MusicApi>,
}

impl Environment {
    /// Environment backed by any catalog implementation.
    pub fn new(api: Arc<dyn MusicApi>) -> Self {
        Environment { api }
    }

    /// Environment backed by the Deezer API.
    pub fn live(client: DeezerClient) -> Self {
        Self::new(Arc::new(client))
    }
}
