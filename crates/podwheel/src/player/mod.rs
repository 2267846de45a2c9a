use crate::nav::TransportAction;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

pub mod models;
pub mod token;

pub use models::{Playlist, PlaylistId, PlayerState, Track, TrackId};
pub use token::{AccessToken, AuthStatus, TokenPurpose, TokenSet};

/// Failure taxonomy of the streaming service. The gesture side fires commands
/// and moves on; these are logged by the runtime and never fed back into the
/// state machine.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("not authenticated with the streaming service")]
    NotAuthenticated,
    #[error("connection to the streaming service lost: {0}")]
    ConnectionLost(String),
    #[error("rate limited by the streaming service")]
    RateLimited,
    #[error("invalid response from the streaming service")]
    InvalidResponse,
    #[error("authorization failed")]
    AuthorizationFailed,
    #[error("streaming service API error: {0}")]
    Api(String),
}

/// Intent sent to the playback service, produced by applying effects to the
/// navigation store.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCommand {
    Resume,
    Pause,
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
    PlayPlaylist(PlaylistId),
    /// Position as a fraction of track duration in `[0, 1]`.
    Seek(f64),
}

impl From<TransportAction> for PlaybackCommand {
    fn from(action: TransportAction) -> Self {
        match action {
            TransportAction::TogglePlayPause => Self::TogglePlayPause,
            TransportAction::NextTrack => Self::NextTrack,
            TransportAction::PreviousTrack => Self::PreviousTrack,
        }
    }
}

pub type PlaybackFuture<'a> = Pin<Box<dyn Future<Output = Result<(), PlaybackError>> + Send + 'a>>;

/// Async contract of the external playback service. Every operation may fail
/// independently of gesture processing; callers dispatch fire-and-forget.
pub trait PlaybackService: Send + Sync {
    fn resume(&self) -> PlaybackFuture<'_>;
    fn pause(&self) -> PlaybackFuture<'_>;
    fn toggle(&self) -> PlaybackFuture<'_>;
    fn next(&self) -> PlaybackFuture<'_>;
    fn previous(&self) -> PlaybackFuture<'_>;
    fn play_playlist(&self, id: &PlaylistId) -> PlaybackFuture<'_>;
    fn seek(&self, fraction: f64) -> PlaybackFuture<'_>;
}

/// Stand-in service that only logs, for the demo binary and for running
/// without credentials.
pub struct MockPlaybackService;

impl MockPlaybackService {
    fn ack(&self, what: String) -> PlaybackFuture<'_> {
        Box::pin(async move {
            log::info!("mock playback: {what}");
            Ok(())
        })
    }
}

impl PlaybackService for MockPlaybackService {
    fn resume(&self) -> PlaybackFuture<'_> {
        self.ack("resume".into())
    }

    fn pause(&self) -> PlaybackFuture<'_> {
        self.ack("pause".into())
    }

    fn toggle(&self) -> PlaybackFuture<'_> {
        self.ack("toggle play/pause".into())
    }

    fn next(&self) -> PlaybackFuture<'_> {
        self.ack("next track".into())
    }

    fn previous(&self) -> PlaybackFuture<'_> {
        self.ack("previous track".into())
    }

    fn play_playlist(&self, id: &PlaylistId) -> PlaybackFuture<'_> {
        self.ack(format!("play playlist {id}"))
    }

    fn seek(&self, fraction: f64) -> PlaybackFuture<'_> {
        self.ack(format!("seek to {:.0}%", fraction * 100.0))
    }
}
