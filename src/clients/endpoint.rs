use reqwest::Url;

const WILDCARD: &str = "*";

/// Logical queries supported by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `/chart/0/artists`
    ChartArtists,
    /// `/artist/*/albums`
    ArtistAlbums(i64),
    /// `/search/artist?q=..&index=..`
    SearchArtist {
        /// Free text query.
        query: &'a str,
        /// Pagination offset.
        index: u32,
    },
    /// `/album/*`
    Album(i64),
    /// `/track/*`
    Track(i64),
}

impl Endpoint<'_> {
    /// Path template, `*` marks the identifier slot.
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::ChartArtists => "/chart/0/artists",
            Endpoint::ArtistAlbums(_) => "/artist/*/albums",
            Endpoint::SearchArtist { .. } => "/search/artist",
            Endpoint::Album(_) => "/album/*",
            Endpoint::Track(_) => "/track/*",
        }
    }

    /// Path with the identifier substituted.
    pub fn path(&self) -> String {
        match self {
            Endpoint::ArtistAlbums(id) | Endpoint::Album(id) | Endpoint::Track(id) => {
                self.template().replacen(WILDCARD, &id.to_string(), 1)
            }
            Endpoint::ChartArtists | Endpoint::SearchArtist { .. } => self.template().to_string(),
        }
    }

    /// Full request URL relative to `base`.
    ///
    /// `base` must be able to carry a path, which `DeezerClient::new` checks.
    /// A path prefix on `base` is kept and its query string is dropped.
    pub fn url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        let path = format!("{}{}", base.path().trim_end_matches('/'), self.path());
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        if let Endpoint::SearchArtist { query, index } = self {
            url.query_pairs_mut()
                .append_pair("q", query)
                .append_pair("index", &index.to_string());
        }
        url
    }
}
