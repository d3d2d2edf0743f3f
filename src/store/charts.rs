use futures::FutureExt;
use log::{debug, warn};

use super::{Effect, EffectId, Environment, Loadable, Reducer};
use crate::clients::{
    entities::{Artist, Chart},
    errors::Result,
};

/// Top chart request.
pub const CHART_EFFECT: EffectId = EffectId("charts.chart");
/// Artist search request, first page or follow-up pages.
pub const SEARCH_EFFECT: EffectId = EffectId("charts.search");

/// Events of the charts screen.
#[derive(Debug)]
pub enum ChartsAction {
    /// The screen became visible; fetch the chart.
    OnAppear,
    /// Result of the chart request.
    ChartDataLoaded(Result<Chart>),
    /// The search text changed. A blank text clears the results.
    SearchArtistByText(String),
    /// Result of the first search page.
    SearchResultDataLoaded(Result<Vec<Artist>>),
    /// The user scrolled to the end of the results.
    LoadNextSearchPage,
    /// Result of a follow-up search page.
    NextSearchPageLoaded(Result<Vec<Artist>>),
}

/// State of the charts screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartsState {
    /// Top artists.
    pub chart: Loadable<Chart>,
    /// Text as typed, untrimmed.
    pub search_query: String,
    /// Artists matching the query, all loaded pages.
    pub search_results: Loadable<Vec<Artist>>,
    /// A follow-up page request is in flight.
    pub loading_next_page: bool,
    /// The last follow-up page came back empty.
    pub search_exhausted: bool,
}

impl ChartsState {
    /// Whether the screen shows search results rather than the chart.
    pub fn is_searching(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

/// Reducer of the charts screen.
pub struct ChartsReducer;

impl Reducer for ChartsReducer {
    type State = ChartsState;
    type Action = ChartsAction;
    type Environment = Environment;

    fn reduce(
        state: &mut ChartsState,
        action: ChartsAction,
        env: &Environment,
    ) -> Effect<ChartsAction> {
        match action {
            ChartsAction::OnAppear => {
                state.chart = Loadable::Loading;
                Effect::run(
                    CHART_EFFECT,
                    env.api.fetch_chart().map(ChartsAction::ChartDataLoaded),
                )
            }
            ChartsAction::ChartDataLoaded(result) => {
                if let Err(err) = &result {
                    warn!("Failed to load chart: {err}");
                }
                state.chart = Loadable::from(result);
                Effect::None
            }
            ChartsAction::SearchArtistByText(query) => {
                state.search_query = query;
                state.loading_next_page = false;
                state.search_exhausted = false;

                let query = state.search_query.trim();
                if query.is_empty() {
                    state.search_results = Loadable::Idle;
                    return Effect::Cancel(SEARCH_EFFECT);
                }
                debug!("Searching artists for {query:?}");
                state.search_results = Loadable::Loading;
                Effect::run(
                    SEARCH_EFFECT,
                    env.api
                        .search_artists(query, 0)
                        .map(ChartsAction::SearchResultDataLoaded),
                )
            }
            ChartsAction::SearchResultDataLoaded(result) => {
                if let Err(err) = &result {
                    warn!("Artist search failed: {err}");
                }
                state.search_results = Loadable::from(result);
                Effect::None
            }
            ChartsAction::LoadNextSearchPage => {
                let Some(loaded) = state.search_results.value() else {
                    return Effect::None;
                };
                if state.loading_next_page || state.search_exhausted {
                    return Effect::None;
                }
                let index = u32::try_from(loaded.len()).unwrap_or(u32::MAX);
                debug!("Loading search page at index {index}");
                state.loading_next_page = true;
                Effect::run(
                    SEARCH_EFFECT,
                    env.api
                        .search_artists(state.search_query.trim(), index)
                        .map(ChartsAction::NextSearchPageLoaded),
                )
            }
            ChartsAction::NextSearchPageLoaded(result) => {
                state.loading_next_page = false;
                match result {
                    Ok(page) if page.is_empty() => state.search_exhausted = true,
                    Ok(page) => {
                        if let Loadable::Loaded(artists) = &mut state.search_results {
                            artists.extend(page);
                        }
                    }
                    // Keep what is already shown; the next request retries the same index
                    Err(err) => warn!("Failed to load next search page: {err}"),
                }
                Effect::None
            }
        }
    }
}
