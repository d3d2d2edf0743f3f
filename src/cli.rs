use clap::{Parser, Subcommand};
use log::info;
use musiclib::clients::{
    DeezerClient,
    entities::{Album, Artist, Track},
    errors::{Error, Result},
};
use musiclib::store::{
    Environment, Loadable, Reducer, Store,
    album::{AlbumAction, AlbumReducer, AlbumState},
    artist::{ArtistAction, ArtistReducer, ArtistState},
    charts::{ChartsAction, ChartsReducer, ChartsState},
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "musiclib")]
#[command(version, about = "Browse Deezer charts, artists, albums and tracks", long_about = None)]
struct Cli {
    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top artists chart
    Chart {},
    /// Search artists by name
    Search {
        query: String,
        /// Number of result pages to load
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },
    /// List the albums of an artist
    Albums {
        #[arg(allow_negative_numbers = true)]
        artist_id: i64,
    },
    /// Show an album and its tracks
    Album {
        #[arg(allow_negative_numbers = true)]
        album_id: i64,
    },
    /// Show a single track
    Track {
        #[arg(allow_negative_numbers = true)]
        track_id: i64,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building client ...");
    let client = DeezerClient::try_default()?;
    info!("Using catalog at {}", client.base_url());
    let env = Environment::live(client);

    match cli.command {
        Commands::Chart {} => show_chart(env, cli.json).await,
        Commands::Search { query, pages } => search(env, query, pages, cli.json).await,
        Commands::Albums { artist_id } => show_albums(env, artist_id, cli.json).await,
        Commands::Album { album_id } => show_album(env, album_id, cli.json).await,
        Commands::Track { track_id } => show_track(env, track_id, cli.json).await,
    }
}

// Waits until `done` holds for the store state
async fn settle<R: Reducer>(store: &Store<R>, done: impl FnMut(&R::State) -> bool) -> R::State {
    let mut changes = store.subscribe();
    match changes.wait_for(done).await {
        Ok(state) => state.clone(),
        // Unreachable while we hold the store, fall back to a snapshot
        Err(_) => store.state(),
    }
}

fn into_result<T: Clone>(loadable: &Loadable<T>) -> Result<T> {
    match loadable {
        Loadable::Loaded(value) => Ok(value.clone()),
        Loadable::Failed(err) => Err(err.clone()),
        Loadable::Idle | Loadable::Loading => {
            Err(Error::TransportError("request did not complete".into()))
        }
    }
}

async fn show_chart(env: Environment, json: bool) -> Result<()> {
    let store = Store::<ChartsReducer>::new(ChartsState::default(), env);
    store.send(ChartsAction::OnAppear);
    let state = settle(&store, |s: &ChartsState| s.chart.is_settled()).await;
    let chart = into_result(&state.chart)?;
    print_artists(&chart.artists, json)
}

async fn search(env: Environment, query: String, pages: u32, json: bool) -> Result<()> {
    let store = Store::<ChartsReducer>::new(ChartsState::default(), env);
    store.send(ChartsAction::SearchArtistByText(query));
    let mut state = settle(&store, |s: &ChartsState| !s.search_results.is_loading()).await;

    for _ in 1..pages {
        if state.search_exhausted || state.search_results.value().is_none() {
            break;
        }
        store.send(ChartsAction::LoadNextSearchPage);
        state = settle(&store, |s: &ChartsState| !s.loading_next_page).await;
    }

    match &state.search_results {
        // Blank query, nothing was requested
        Loadable::Idle => Ok(()),
        results => print_artists(&into_result(results)?, json),
    }
}

async fn show_albums(env: Environment, artist_id: i64, json: bool) -> Result<()> {
    let artist = Artist {
        id: artist_id,
        name: String::new(),
        picture_medium: None,
        albums: None,
    };
    let store = Store::<ArtistReducer>::new(ArtistState::new(artist), env);
    store.send(ArtistAction::OnAppear);
    let state = settle(&store, |s: &ArtistState| !s.is_loading).await;
    if let Some(err) = &state.error {
        return Err(err.clone());
    }
    print_albums(state.albums(), json)
}

fn album_stub(album_id: i64) -> Album {
    Album {
        id: album_id,
        title: String::new(),
        cover_medium: None,
        release_date: None,
        tracks: None,
    }
}

async fn show_album(env: Environment, album_id: i64, json: bool) -> Result<()> {
    let store = Store::<AlbumReducer>::new(AlbumState::new(album_stub(album_id)), env);
    store.send(AlbumAction::OnAppear);
    let state = settle(&store, |s: &AlbumState| !s.is_loading).await;
    if let Some(err) = &state.error {
        return Err(err.clone());
    }

    if json {
        return print_json(&state.album);
    }
    let album = &state.album;
    println!("{}\t{}\t{}", album.id, album.title, album.release_date.as_deref().unwrap_or("-"));
    for track in album.track_list() {
        print_track_line(track);
    }
    Ok(())
}

async fn show_track(env: Environment, track_id: i64, json: bool) -> Result<()> {
    let store = Store::<AlbumReducer>::new(AlbumState::new(album_stub(0)), env);
    store.send(AlbumAction::TrackSelected(track_id));
    let state = settle(&store, |s: &AlbumState| s.selected_track.is_settled()).await;
    let track = into_result(&state.selected_track)?;

    if json {
        return print_json(&track);
    }
    print_track_line(&track);
    if let Some(artist) = &track.artist {
        println!("  artist: {}", artist.name);
    }
    if let Some(album) = &track.album {
        println!("  album:  {}", album.title);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_artists(artists: &[Artist], json: bool) -> Result<()> {
    if json {
        return print_json(artists);
    }
    for artist in artists {
        println!("{}\t{}", artist.id, artist.name);
    }
    Ok(())
}

fn print_albums(albums: &[Album], json: bool) -> Result<()> {
    if json {
        return print_json(albums);
    }
    if albums.is_empty() {
        println!("No albums");
    }
    for album in albums {
        println!("{}\t{}", album.id, album.title);
    }
    Ok(())
}

fn print_track_line(track: &Track) {
    let position = track
        .track_position
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    println!(
        "{position:>3}  {}\t{}\t{}:{:02}",
        track.id,
        track.title,
        track.duration / 60,
        track.duration % 60
    );
}
