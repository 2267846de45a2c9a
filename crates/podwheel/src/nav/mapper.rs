use super::context::{HomeItem, NavigationContext, Page, SettingsItem};
use super::effect::{Effect, TransportAction};
use crate::haptics::HapticEvent;
use crate::wheel::{RotationDirection, Sector, WheelEvent};

/// Translates interpreter events into page-scoped effects. Pure dispatch: the
/// only state it keeps is the pending seek position of the gesture currently
/// in flight, so a drag nudges a preview instead of flooding the playback
/// service with one seek per tick.
pub struct Mapper {
    seek_fraction_per_step: f64,
    pending_seek: Option<f64>,
    scrubbing: bool,
}

impl Mapper {
    pub fn new(seek_fraction_per_step: f64) -> Self {
        Self {
            seek_fraction_per_step,
            pending_seek: None,
            scrubbing: false,
        }
    }

    pub fn set_seek_fraction_per_step(&mut self, fraction: f64) {
        self.seek_fraction_per_step = fraction;
    }

    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    pub fn dispatch(&mut self, event: WheelEvent, context: &NavigationContext) -> Vec<Effect> {
        match event {
            WheelEvent::RotationStarted => self.rotation_started(context),
            WheelEvent::RotationStep(direction) => self.rotation_step(direction, context),
            WheelEvent::RotationEnded => self.rotation_ended(),
            WheelEvent::ButtonActivated(sector) => self.button_activated(sector, context),
        }
    }

    /// The always-on center button; pressed resolution depends on the page.
    pub fn center_pressed(&self, context: &NavigationContext) -> Vec<Effect> {
        let mut effects = vec![Effect::Haptic(HapticEvent::ButtonTap)];
        match context.page {
            Page::Home => {
                if let Some(item) = HomeItem::from_index(context.selected_index) {
                    effects.push(Effect::SetSelection {
                        page: Page::Home,
                        index: context.selected_index,
                    });
                    effects.push(Effect::NavigateTo(item.target_page()));
                }
            }
            Page::Settings => {
                if let Some(item) = SettingsItem::from_index(context.selected_index) {
                    effects.push(Effect::SetSelection {
                        page: Page::Settings,
                        index: context.selected_index,
                    });
                    if let Some(page) = item.target_page() {
                        effects.push(Effect::NavigateTo(page));
                    }
                }
            }
            Page::Playlist => effects.push(Effect::ActivateSelection {
                page: Page::Playlist,
                index: context.selected_index,
            }),
            Page::NowPlaying => {
                effects.push(Effect::Transport(TransportAction::TogglePlayPause));
            }
            _ => {}
        }
        effects
    }

    fn rotation_started(&mut self, context: &NavigationContext) -> Vec<Effect> {
        if context.page == Page::NowPlaying {
            self.scrubbing = true;
            self.pending_seek = Some(context.playback_progress.clamp(0.0, 1.0));
            vec![
                Effect::ScrubbingChanged(true),
                Effect::Haptic(HapticEvent::Scrubbing),
            ]
        } else {
            Vec::new()
        }
    }

    fn rotation_step(
        &mut self,
        direction: RotationDirection,
        context: &NavigationContext,
    ) -> Vec<Effect> {
        match context.page {
            Page::NowPlaying => {
                let base = self
                    .pending_seek
                    .unwrap_or(context.playback_progress);
                let nudged = (base + direction.step() as f64 * self.seek_fraction_per_step)
                    .clamp(0.0, 1.0);
                self.pending_seek = Some(nudged);
                vec![
                    Effect::SeekPreview(nudged),
                    Effect::Haptic(HapticEvent::SelectionChanged),
                ]
            }
            _ => match context.item_count {
                Some(count) if count > 0 => {
                    // clamp at the list edges; the wheel wraps, the list does not
                    let max = (count - 1) as i64;
                    let index =
                        (context.selected_index as i64 + direction.step()).clamp(0, max) as usize;
                    vec![
                        Effect::SetSelection {
                            page: context.page,
                            index,
                        },
                        Effect::Haptic(HapticEvent::SelectionChanged),
                    ]
                }
                _ => Vec::new(),
            },
        }
    }

    fn rotation_ended(&mut self) -> Vec<Effect> {
        let pending = self.pending_seek.take();
        if !self.scrubbing {
            return Vec::new();
        }
        self.scrubbing = false;

        let mut effects = Vec::new();
        if let Some(fraction) = pending {
            effects.push(Effect::SeekCommit(fraction));
        }
        effects.push(Effect::ScrubbingChanged(false));
        effects
    }

    fn button_activated(&mut self, sector: Sector, context: &NavigationContext) -> Vec<Effect> {
        match sector {
            Sector::Menu => vec![
                Effect::Haptic(HapticEvent::ButtonTap),
                Effect::NavigateBack,
            ],
            Sector::Left => match context.page {
                Page::NowPlaying => vec![
                    Effect::Haptic(HapticEvent::ButtonTap),
                    Effect::Transport(TransportAction::PreviousTrack),
                ],
                _ => vec![Effect::Haptic(HapticEvent::ButtonTap)],
            },
            Sector::Right => match context.page {
                Page::NowPlaying => vec![
                    Effect::Haptic(HapticEvent::ButtonTap),
                    Effect::Transport(TransportAction::NextTrack),
                ],
                _ => vec![Effect::Haptic(HapticEvent::ButtonTap)],
            },
            Sector::PlayPause => match context.page {
                Page::NowPlaying => vec![
                    Effect::Haptic(HapticEvent::PlaybackToggle),
                    Effect::Transport(TransportAction::TogglePlayPause),
                ],
                Page::Playlist => vec![
                    Effect::Haptic(HapticEvent::PlaybackToggle),
                    Effect::ActivateSelection {
                        page: Page::Playlist,
                        index: context.selected_index,
                    },
                ],
                _ => vec![Effect::Haptic(HapticEvent::PlaybackToggle)],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> Mapper {
        Mapper::new(0.05)
    }

    fn step(direction: RotationDirection) -> WheelEvent {
        WheelEvent::RotationStep(direction)
    }

    fn selections(effects: &[Effect]) -> Vec<usize> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::SetSelection { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_menu_steps_clamp_without_wrap() {
        let mut m = mapper();
        // five items, already on the last one
        let ctx = NavigationContext::new(Page::Playlist, Some(5), 4);
        let fx = m.dispatch(step(RotationDirection::Clockwise), &ctx);
        assert_eq!(selections(&fx), vec![4]);

        // and on the first one, stepping back
        let ctx = NavigationContext::new(Page::Playlist, Some(5), 0);
        let fx = m.dispatch(step(RotationDirection::CounterClockwise), &ctx);
        assert_eq!(selections(&fx), vec![0]);
    }

    #[test]
    fn test_steps_on_empty_or_listless_pages_do_nothing() {
        let mut m = mapper();
        let ctx = NavigationContext::new(Page::Playlist, Some(0), 0);
        assert!(m.dispatch(step(RotationDirection::Clockwise), &ctx).is_empty());

        let ctx = NavigationContext::new(Page::Themes, None, 0);
        assert!(m.dispatch(step(RotationDirection::Clockwise), &ctx).is_empty());
    }

    #[test]
    fn test_seek_gesture_commits_once() {
        let mut m = mapper();
        let ctx = NavigationContext::new(Page::NowPlaying, None, 0).with_progress(0.5);

        let fx = m.dispatch(WheelEvent::RotationStarted, &ctx);
        assert!(fx.contains(&Effect::ScrubbingChanged(true)));
        assert!(m.is_scrubbing());

        // three ticks backward nudge the pending position only
        for _ in 0..3 {
            let fx = m.dispatch(step(RotationDirection::CounterClockwise), &ctx);
            assert!(fx.iter().any(|e| matches!(e, Effect::SeekPreview(_))));
            assert!(!fx.iter().any(|e| matches!(e, Effect::SeekCommit(_))));
        }

        let fx = m.dispatch(WheelEvent::RotationEnded, &ctx);
        let commits: Vec<f64> = fx
            .iter()
            .filter_map(|e| match e {
                Effect::SeekCommit(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(commits.len(), 1);
        assert!((commits[0] - 0.35).abs() < 1e-9);
        assert!(fx.contains(&Effect::ScrubbingChanged(false)));
        assert!(!m.is_scrubbing());
    }

    #[test]
    fn test_seek_position_clamps_to_unit_range() {
        let mut m = mapper();
        let ctx = NavigationContext::new(Page::NowPlaying, None, 0).with_progress(0.95);
        m.dispatch(WheelEvent::RotationStarted, &ctx);
        for _ in 0..4 {
            m.dispatch(step(RotationDirection::Clockwise), &ctx);
        }
        let fx = m.dispatch(WheelEvent::RotationEnded, &ctx);
        assert!(fx.contains(&Effect::SeekCommit(1.0)));
    }

    #[test]
    fn test_rotation_on_menu_pages_ends_silently() {
        let mut m = mapper();
        let ctx = NavigationContext::new(Page::Home, Some(3), 0);
        assert!(m.dispatch(WheelEvent::RotationStarted, &ctx).is_empty());
        assert!(m.dispatch(WheelEvent::RotationEnded, &ctx).is_empty());
    }

    #[test]
    fn test_menu_button_navigates_back_everywhere() {
        let mut m = mapper();
        for page in [Page::Home, Page::Playlist, Page::NowPlaying, Page::Settings] {
            let ctx = NavigationContext::new(page, None, 0);
            let fx = m.dispatch(WheelEvent::ButtonActivated(Sector::Menu), &ctx);
            assert!(fx.contains(&Effect::NavigateBack));
        }
    }

    #[test]
    fn test_skip_buttons_only_act_on_now_playing() {
        let mut m = mapper();
        let now_playing = NavigationContext::new(Page::NowPlaying, None, 0);
        let fx = m.dispatch(WheelEvent::ButtonActivated(Sector::Right), &now_playing);
        assert!(fx.contains(&Effect::Transport(TransportAction::NextTrack)));
        let fx = m.dispatch(WheelEvent::ButtonActivated(Sector::Left), &now_playing);
        assert!(fx.contains(&Effect::Transport(TransportAction::PreviousTrack)));

        let home = NavigationContext::new(Page::Home, Some(3), 0);
        let fx = m.dispatch(WheelEvent::ButtonActivated(Sector::Right), &home);
        assert!(!fx.iter().any(|e| matches!(e, Effect::Transport(_))));
    }

    #[test]
    fn test_play_pause_button_per_page() {
        let mut m = mapper();
        let now_playing = NavigationContext::new(Page::NowPlaying, None, 0);
        let fx = m.dispatch(WheelEvent::ButtonActivated(Sector::PlayPause), &now_playing);
        assert!(fx.contains(&Effect::Transport(TransportAction::TogglePlayPause)));

        let playlist = NavigationContext::new(Page::Playlist, Some(8), 3);
        let fx = m.dispatch(WheelEvent::ButtonActivated(Sector::PlayPause), &playlist);
        assert!(fx.contains(&Effect::ActivateSelection {
            page: Page::Playlist,
            index: 3
        }));
    }

    #[test]
    fn test_center_press_per_page() {
        let m = mapper();

        let home = NavigationContext::new(Page::Home, Some(HomeItem::count()), 0);
        let fx = m.center_pressed(&home);
        assert!(fx.contains(&Effect::NavigateTo(Page::Playlist)));

        let settings = NavigationContext::new(Page::Settings, Some(SettingsItem::count()), 2);
        let fx = m.center_pressed(&settings);
        // About has no target page; selection is still recorded
        assert!(fx.contains(&Effect::SetSelection {
            page: Page::Settings,
            index: 2
        }));
        assert!(!fx.iter().any(|e| matches!(e, Effect::NavigateTo(_))));

        let now_playing = NavigationContext::new(Page::NowPlaying, None, 0);
        let fx = m.center_pressed(&now_playing);
        assert!(fx.contains(&Effect::Transport(TransportAction::TogglePlayPause)));
    }
}
