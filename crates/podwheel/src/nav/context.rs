use serde_with::DeserializeFromStr;
use serde::Serialize;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Playlist,
    NowPlaying,
    Settings,
    Themes,
    Upgrade,
    User,
}

impl Page {
    /// Status-bar caption for the page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "podwheel",
            Self::Playlist => "Cover Flow",
            Self::NowPlaying => "Now Playing",
            Self::Settings => "Settings",
            Self::Themes => "Themes",
            Self::Upgrade => "Upgrade to Pro",
            Self::User => "User",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum HomeItem {
    Playlist,
    Settings,
    User,
}

impl HomeItem {
    pub fn count() -> usize {
        Self::iter().count()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn target_page(&self) -> Page {
        match self {
            Self::Playlist => Page::Playlist,
            Self::Settings => Page::Settings,
            Self::User => Page::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay)]
pub enum SettingsItem {
    Themes,
    Upgrade,
    About,
    Privacy,
}

impl SettingsItem {
    pub fn count() -> usize {
        Self::iter().count()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// About and Privacy are inline panels, not pages.
    pub fn target_page(&self) -> Option<Page> {
        match self {
            Self::Themes => Some(Page::Themes),
            Self::Upgrade => Some(Page::Upgrade),
            Self::About | Self::Privacy => None,
        }
    }
}

/// Read-only snapshot of the navigation store handed to the mapper per
/// dispatch. The mapper never mutates shared state; it answers with effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationContext {
    pub page: Page,
    /// Number of selectable items on the page, `None` for pages without a list.
    pub item_count: Option<usize>,
    pub selected_index: usize,
    /// Committed playback position as a fraction of track duration.
    pub playback_progress: f64,
}

impl NavigationContext {
    pub fn new(page: Page, item_count: Option<usize>, selected_index: usize) -> Self {
        Self {
            page,
            item_count,
            selected_index,
            playback_progress: 0.0,
        }
    }

    pub fn with_progress(mut self, fraction: f64) -> Self {
        self.playback_progress = fraction;
        self
    }
}
