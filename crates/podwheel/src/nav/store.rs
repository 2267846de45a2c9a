use super::context::{HomeItem, NavigationContext, Page, SettingsItem};
use super::effect::{Effect, TransportAction};
use crate::player::models::default_playlist_index;
use crate::player::{PlaybackCommand, PlayerState, Playlist, PlaylistId};

/// Owns what the source system kept in a global observable singleton: the page
/// stack, per-page selections, and the playback snapshot. Gesture logic never
/// touches it directly; it consumes `Effect`s and answers with the playback
/// commands the runtime should fire.
pub struct NavigationStore {
    stack: Vec<Page>,
    home_index: usize,
    settings_index: usize,
    playlist_index: usize,
    playlists: Vec<Playlist>,
    playing_playlist: Option<PlaylistId>,
    player: PlayerState,
    scrubbing: bool,
    preview_progress: Option<f64>,
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new(Page::Home)
    }
}

impl NavigationStore {
    pub fn new(start_page: Page) -> Self {
        Self {
            stack: vec![start_page],
            home_index: 0,
            settings_index: 0,
            playlist_index: 0,
            playlists: Vec::new(),
            playing_playlist: None,
            player: PlayerState::default(),
            scrubbing: false,
            preview_progress: None,
        }
    }

    pub fn current_page(&self) -> Page {
        *self.stack.last().unwrap_or(&Page::Home)
    }

    /// Snapshot handed to the mapper for one dispatch.
    pub fn context(&self) -> NavigationContext {
        let page = self.current_page();
        let (item_count, selected_index) = match page {
            Page::Home => (Some(HomeItem::count()), self.home_index),
            Page::Settings => (Some(SettingsItem::count()), self.settings_index),
            Page::Playlist => (Some(self.playlists.len()), self.playlist_index),
            _ => (None, 0),
        };
        NavigationContext::new(page, item_count, selected_index)
            .with_progress(self.player.progress)
    }

    /// Progress the UI should render: the pending scrub position while a seek
    /// gesture is live, the committed position otherwise.
    pub fn displayed_progress(&self) -> f64 {
        self.preview_progress.unwrap_or(self.player.progress)
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Replace the library, re-seating the highlight on the playlist that is
    /// playing, else the first non-empty one.
    pub fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
        self.playlist_index =
            default_playlist_index(&self.playlists, self.playing_playlist.as_ref());
    }

    /// Externally driven progress update (service polling). Suppressed while
    /// the user is scrubbing so the wheel owns the position.
    pub fn observe_progress(&mut self, fraction: f64) {
        if !self.scrubbing {
            self.player.progress = fraction.clamp(0.0, 1.0);
        }
    }

    pub fn observe_player(&mut self, player: PlayerState) {
        if self.scrubbing {
            let held = self.player.progress;
            self.player = player;
            self.player.progress = held;
        } else {
            self.player = player;
        }
    }

    pub fn apply(&mut self, effect: Effect) -> Option<PlaybackCommand> {
        match effect {
            Effect::SetSelection { page, index } => {
                self.set_selection(page, index);
                None
            }
            Effect::NavigateTo(page) => {
                if self.current_page() != page {
                    self.stack.push(page);
                }
                None
            }
            Effect::NavigateBack => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
                None
            }
            Effect::ActivateSelection { page: Page::Playlist, index } => {
                let playlist = self.playlists.get(index)?;
                let id = playlist.id.clone();
                self.playlist_index = index;
                self.playing_playlist = Some(id.clone());
                self.player.is_playing = true;
                if self.current_page() != Page::NowPlaying {
                    self.stack.push(Page::NowPlaying);
                }
                Some(PlaybackCommand::PlayPlaylist(id))
            }
            Effect::ActivateSelection { page, index } => {
                log::debug!("no activation defined for {page} index {index}");
                None
            }
            Effect::Transport(action) => {
                if action == TransportAction::TogglePlayPause {
                    self.player.is_playing = !self.player.is_playing;
                }
                Some(PlaybackCommand::from(action))
            }
            Effect::SeekPreview(fraction) => {
                self.preview_progress = Some(fraction);
                None
            }
            Effect::SeekCommit(fraction) => {
                self.player.progress = fraction;
                self.preview_progress = None;
                Some(PlaybackCommand::Seek(fraction))
            }
            Effect::ScrubbingChanged(scrubbing) => {
                self.scrubbing = scrubbing;
                if !scrubbing {
                    self.preview_progress = None;
                }
                None
            }
            // haptics are routed to the sink by the caller, not stored
            Effect::Haptic(_) => None,
        }
    }

    fn set_selection(&mut self, page: Page, index: usize) {
        match page {
            Page::Home => self.home_index = index.min(HomeItem::count().saturating_sub(1)),
            Page::Settings => {
                self.settings_index = index.min(SettingsItem::count().saturating_sub(1));
            }
            Page::Playlist => {
                self.playlist_index = index.min(self.playlists.len().saturating_sub(1));
            }
            _ => log::debug!("no selection to set on {page}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::models::mock_playlists;

    fn store_with_library() -> NavigationStore {
        let mut store = NavigationStore::default();
        store.set_playlists(mock_playlists());
        store
    }

    #[test]
    fn test_navigate_back_pops_to_home_and_stops() {
        let mut store = NavigationStore::default();
        store.apply(Effect::NavigateTo(Page::Playlist));
        store.apply(Effect::NavigateTo(Page::NowPlaying));
        assert_eq!(store.current_page(), Page::NowPlaying);

        store.apply(Effect::NavigateBack);
        assert_eq!(store.current_page(), Page::Playlist);
        store.apply(Effect::NavigateBack);
        store.apply(Effect::NavigateBack);
        store.apply(Effect::NavigateBack);
        assert_eq!(store.current_page(), Page::Home);
    }

    #[test]
    fn test_activating_a_playlist_starts_playback_and_navigates() {
        let mut store = store_with_library();
        store.apply(Effect::NavigateTo(Page::Playlist));

        let command = store.apply(Effect::ActivateSelection {
            page: Page::Playlist,
            index: 1,
        });
        assert_eq!(
            command,
            Some(PlaybackCommand::PlayPlaylist(PlaylistId::new(
                "mock-late-night"
            )))
        );
        assert_eq!(store.current_page(), Page::NowPlaying);
        assert!(store.player().is_playing);
    }

    #[test]
    fn test_activating_out_of_range_selection_is_a_no_op() {
        let mut store = store_with_library();
        let command = store.apply(Effect::ActivateSelection {
            page: Page::Playlist,
            index: 99,
        });
        assert_eq!(command, None);
        assert_eq!(store.current_page(), Page::Home);
    }

    #[test]
    fn test_scrubbing_suppresses_external_progress() {
        let mut store = NavigationStore::default();
        store.observe_progress(0.3);
        assert_eq!(store.displayed_progress(), 0.3);

        store.apply(Effect::ScrubbingChanged(true));
        store.observe_progress(0.9);
        assert_eq!(store.player().progress, 0.3);

        store.apply(Effect::SeekPreview(0.5));
        assert_eq!(store.displayed_progress(), 0.5);
        // preview never issues a command
        let command = store.apply(Effect::SeekPreview(0.45));
        assert_eq!(command, None);

        let command = store.apply(Effect::SeekCommit(0.45));
        assert_eq!(command, Some(PlaybackCommand::Seek(0.45)));
        store.apply(Effect::ScrubbingChanged(false));

        store.observe_progress(0.6);
        assert_eq!(store.displayed_progress(), 0.6);
    }

    #[test]
    fn test_context_reflects_current_page_list() {
        let mut store = store_with_library();
        let ctx = store.context();
        assert_eq!(ctx.page, Page::Home);
        assert_eq!(ctx.item_count, Some(HomeItem::count()));

        store.apply(Effect::NavigateTo(Page::Playlist));
        let ctx = store.context();
        assert_eq!(ctx.item_count, Some(3));

        store.apply(Effect::NavigateTo(Page::NowPlaying));
        assert_eq!(store.context().item_count, None);
    }

    #[test]
    fn test_toggle_flips_local_playing_state() {
        let mut store = NavigationStore::default();
        let command = store.apply(Effect::Transport(TransportAction::TogglePlayPause));
        assert_eq!(command, Some(PlaybackCommand::TogglePlayPause));
        assert!(store.player().is_playing);
    }
}
