use strum::Display as StrumDisplay;

/// Cosmetic feedback cues. Sinks are fire-and-forget and never gate gesture
/// or navigation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum HapticEvent {
    SelectionChanged,
    ButtonTap,
    PlaybackToggle,
    Scrubbing,
}

pub trait HapticSink: Send + Sync {
    fn buzz(&self, event: HapticEvent);
}

/// For hosts without a vibration motor.
pub struct NoopHaptics;

impl HapticSink for NoopHaptics {
    fn buzz(&self, _event: HapticEvent) {}
}

/// Logs each cue instead of buzzing; used by the demo binary.
pub struct LogHaptics;

impl HapticSink for LogHaptics {
    fn buzz(&self, event: HapticEvent) {
        log::debug!("haptic: {event}");
    }
}
