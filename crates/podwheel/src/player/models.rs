use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct TrackId(String);

crate::impl_string_newtype!(TrackId);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct PlaylistId(String);

crate::impl_string_newtype!(PlaylistId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub track_count: usize,
}

/// Last known playback snapshot, fed by the service and read by the UI.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    pub track: Option<Track>,
    pub is_playing: bool,
    /// Fraction of track duration in `[0, 1]`.
    pub progress: f64,
}

/// Built-in library shown when the real service has nothing to offer yet.
pub fn mock_playlists() -> Vec<Playlist> {
    vec![
        Playlist {
            id: PlaylistId::new("mock-road-trip"),
            name: "Road Trip".into(),
            owner: Some("podwheel".into()),
            track_count: 24,
        },
        Playlist {
            id: PlaylistId::new("mock-late-night"),
            name: "Late Night".into(),
            owner: Some("podwheel".into()),
            track_count: 18,
        },
        Playlist {
            id: PlaylistId::new("mock-workout"),
            name: "Workout".into(),
            owner: Some("podwheel".into()),
            track_count: 31,
        },
    ]
}

/// Ordered fallback for the initial highlight when a playlist page opens:
/// the playlist that is currently playing, else the first non-empty one,
/// else the top of the list.
pub fn default_playlist_index(playlists: &[Playlist], playing: Option<&PlaylistId>) -> usize {
    if let Some(id) = playing
        && let Some(index) = playlists.iter().position(|p| &p.id == id)
    {
        return index;
    }
    playlists
        .iter()
        .position(|p| p.track_count > 0)
        .unwrap_or(0)
}
