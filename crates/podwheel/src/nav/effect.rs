use super::context::Page;
use crate::haptics::HapticEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportAction {
    TogglePlayPause,
    NextTrack,
    PreviousTrack,
}

/// Page-scoped outcome of one gesture event. Effects are plain data: the
/// navigation store applies them and the runtime fires the resulting playback
/// commands without the mapper ever awaiting anything.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetSelection { page: Page, index: usize },
    NavigateTo(Page),
    NavigateBack,
    /// Run whatever the current selection on `page` stands for (play the
    /// selected playlist, open the selected menu entry).
    ActivateSelection { page: Page, index: usize },
    Transport(TransportAction),
    /// UI-visible pending seek position while the wheel is still turning.
    SeekPreview(f64),
    /// The single committed seek issued when the gesture ends.
    SeekCommit(f64),
    /// True from rotation start to rotation end on the now-playing page;
    /// suppresses externally driven progress updates while the user scrubs.
    ScrubbingChanged(bool),
    Haptic(HapticEvent),
}
