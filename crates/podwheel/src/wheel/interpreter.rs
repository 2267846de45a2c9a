use super::{Point, Sector, WheelGeometry, WheelTuning, sectors, wrap_delta};
use std::time::Duration;

/// One raw input sample from the host UI layer. `at` is a monotonic
/// timestamp; only differences between samples of one session are used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Point,
    pub at: Duration,
}

impl PointerSample {
    pub fn new(position: Point, at: Duration) -> Self {
        Self { position, at }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    fn from_accumulator(accumulator: f64) -> Self {
        if accumulator > 0.0 {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// Index delta for list navigation: clockwise walks forward.
    pub fn step(&self) -> i64 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Committed gesture output, emitted in the exact order produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    RotationStarted,
    RotationStep(RotationDirection),
    RotationEnded,
    ButtonActivated(Sector),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Observing,
    Rotating,
    Clicking,
}

/// Live only for the duration of one touch. A new pointer-down always starts
/// a fresh session with cleared accumulators.
#[derive(Debug, Clone, Copy)]
struct Session {
    phase: Phase,
    start: Point,
    started_at: Duration,
    last_position: Point,
    travelled: f64,
    last_angle_degrees: f64,
    accumulator_degrees: f64,
}

/// Classifies one continuous touch into either a directional button press or
/// a rotary scroll, and converts angular travel into discrete steps.
///
/// The observation window exists because a drag is ambiguous between "tap a
/// fixed control" and "spin the wheel" until enough distance or time has
/// passed. A fast flick past the quick threshold commits to rotation without
/// waiting out the delay.
pub struct GestureInterpreter {
    tuning: WheelTuning,
    step_degrees: f64,
    session: Option<Session>,
    highlight: Option<Sector>,
}

impl GestureInterpreter {
    pub fn new(tuning: WheelTuning) -> Self {
        let step_degrees = tuning.menu_step_degrees;
        Self {
            tuning,
            step_degrees,
            session: None,
            highlight: None,
        }
    }

    /// Swap thresholds (config reload). Applies from the next sample on; the
    /// live session is not restarted.
    pub fn set_tuning(&mut self, tuning: WheelTuning) {
        self.tuning = tuning;
    }

    /// Degrees of travel per emitted step. Contexts that want finer ticks
    /// (seek scrubbing) lower this between sessions.
    pub fn set_step_degrees(&mut self, degrees: f64) {
        self.step_degrees = degrees;
    }

    pub fn tuning(&self) -> &WheelTuning {
        &self.tuning
    }

    /// Sector under the finger while the gesture is still undecided, for the
    /// host UI to render as a pressed-button preview.
    pub fn highlighted_sector(&self) -> Option<Sector> {
        self.highlight
    }

    pub fn is_rotating(&self) -> bool {
        self.session
            .is_some_and(|s| s.phase == Phase::Rotating)
    }

    pub fn on_pointer_down(
        &mut self,
        sample: PointerSample,
        geometry: &WheelGeometry,
    ) -> Vec<WheelEvent> {
        self.session = Some(Session {
            phase: Phase::Observing,
            start: sample.position,
            started_at: sample.at,
            last_position: sample.position,
            travelled: 0.0,
            last_angle_degrees: geometry.angle_degrees(sample.position),
            accumulator_degrees: 0.0,
        });
        self.highlight = sectors::locate(sample.position, geometry, &self.tuning);
        Vec::new()
    }

    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        geometry: &WheelGeometry,
    ) -> Vec<WheelEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };

        let mut events = Vec::new();
        match session.phase {
            Phase::Observing => {
                let (dx, dy) = (
                    sample.position.x - session.last_position.x,
                    sample.position.y - session.last_position.y,
                );
                session.travelled += dx.hypot(dy);
                session.last_position = sample.position;

                let displacement = {
                    let (dx, dy) = (
                        sample.position.x - session.start.x,
                        sample.position.y - session.start.y,
                    );
                    dx.hypot(dy)
                };

                if displacement >= self.tuning.quick_slop()
                    || displacement >= self.tuning.base_slop
                {
                    session.phase = Phase::Rotating;
                    self.highlight = None;
                    events.push(WheelEvent::RotationStarted);
                    Self::accumulate(session, sample, geometry, self.step_degrees, &mut events);
                } else if sample.at.saturating_sub(session.started_at)
                    >= self.tuning.intent_delay()
                {
                    // held still long enough: this touch is a button press
                    session.phase = Phase::Clicking;
                } else {
                    self.highlight = sectors::locate(sample.position, geometry, &self.tuning);
                }
            }
            Phase::Rotating => {
                session.last_position = sample.position;
                Self::accumulate(session, sample, geometry, self.step_degrees, &mut events);
            }
            Phase::Clicking => {}
        }
        events
    }

    pub fn on_pointer_up(
        &mut self,
        sample: PointerSample,
        geometry: &WheelGeometry,
    ) -> Vec<WheelEvent> {
        self.highlight = None;
        let Some(session) = self.session.take() else {
            return Vec::new();
        };

        match session.phase {
            Phase::Rotating => vec![WheelEvent::RotationEnded],
            Phase::Clicking => self.resolve_tap(sample.position, geometry),
            Phase::Observing => {
                if session.travelled < self.tuning.base_slop {
                    self.resolve_tap(sample.position, geometry)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Discard the session without committing anything.
    pub fn on_pointer_cancel(&mut self) {
        self.session = None;
        self.highlight = None;
    }

    fn resolve_tap(&self, position: Point, geometry: &WheelGeometry) -> Vec<WheelEvent> {
        // a miss includes the innermost region: the center button is its own
        // always-on control and never arrives here
        match sectors::locate(position, geometry, &self.tuning) {
            Some(sector) => vec![WheelEvent::ButtonActivated(sector)],
            None => Vec::new(),
        }
    }

    fn accumulate(
        session: &mut Session,
        sample: PointerSample,
        geometry: &WheelGeometry,
        step_degrees: f64,
        events: &mut Vec<WheelEvent>,
    ) {
        let angle = geometry.angle_degrees(sample.position);
        let delta = wrap_delta(angle - session.last_angle_degrees);
        session.accumulator_degrees += delta;
        session.last_angle_degrees = angle;

        if session.accumulator_degrees.abs() >= step_degrees {
            let direction = RotationDirection::from_accumulator(session.accumulator_degrees);
            session.accumulator_degrees = 0.0;
            events.push(WheelEvent::RotationStep(direction));
        }
    }
}
