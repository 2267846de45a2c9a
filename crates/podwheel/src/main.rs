use clap::Parser;
use podwheel::config;
use podwheel::events::{AppEvent, RemoteCommand};
use podwheel::haptics::{HapticSink, LogHaptics};
use podwheel::nav::{Effect, Mapper, NavigationStore, Page};
use podwheel::player::models::mock_playlists;
use podwheel::player::{MockPlaybackService, PlaybackCommand};
use podwheel::sys::runtime;
use podwheel::wheel::{GestureInterpreter, Point, PointerSample, WheelGeometry};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "podwheel", version, about = "Click-wheel remote for a streaming music service", long_about = None)]
struct Cli {
    /// Replay a scripted wheel session against the mock service and exit.
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Ok(path) = config::write_default_config() {
        log::debug!("config at {}", path.display());
    }
    let config = config::load_or_default();

    let mut store = NavigationStore::new(config.start_page);
    store.set_playlists(mock_playlists());
    let mut mapper = Mapper::new(config.wheel.seek_fraction_per_step);
    let mut interpreter = GestureInterpreter::new(config.wheel);
    let haptics = LogHaptics;

    let (tx, rx) = async_channel::bounded(32);
    let (cmd_tx, cmd_rx) = async_channel::bounded(32);

    runtime::start_background_services(
        tx.clone(),
        cmd_rx,
        Arc::new(MockPlaybackService),
        config.socket_path.clone(),
    );

    if cli.demo {
        let mut rig = Rig {
            interpreter,
            mapper,
            store,
            haptics: &haptics,
            cmd_tx: &cmd_tx,
            geometry: WheelGeometry::new(Point::new(200.0, 200.0), 150.0),
            clock_ms: 0,
        };
        run_demo(&mut rig);
        // let the pump drain before the process tears the runtime down
        std::thread::sleep(Duration::from_millis(100));
        return Ok(());
    }

    log::info!(
        "listening on {} (send play/pause/toggle/next/prev)",
        config.socket_path.display()
    );
    while let Ok(event) = rx.recv_blocking() {
        match event {
            AppEvent::Remote(command) => {
                let _ = cmd_tx.send_blocking(remote_to_playback(command));
            }
            AppEvent::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    mapper.set_seek_fraction_per_step(new_config.wheel.seek_fraction_per_step);
                    interpreter.set_tuning(new_config.wheel);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
    Ok(())
}

fn remote_to_playback(command: RemoteCommand) -> PlaybackCommand {
    match command {
        RemoteCommand::Play => PlaybackCommand::Resume,
        RemoteCommand::Pause => PlaybackCommand::Pause,
        RemoteCommand::Toggle => PlaybackCommand::TogglePlayPause,
        RemoteCommand::Next => PlaybackCommand::NextTrack,
        RemoteCommand::Prev => PlaybackCommand::PreviousTrack,
    }
}

/// Everything the demo needs to drive the full pipeline: interpreter →
/// mapper → store → playback pump, exactly as a touch surface would.
struct Rig<'a> {
    interpreter: GestureInterpreter,
    mapper: Mapper,
    store: NavigationStore,
    haptics: &'a dyn HapticSink,
    cmd_tx: &'a async_channel::Sender<PlaybackCommand>,
    geometry: WheelGeometry,
    clock_ms: u64,
}

impl Rig<'_> {
    fn rim(&self, angle_degrees: f64) -> Point {
        let rad = angle_degrees.to_radians();
        Point::new(
            self.geometry.center.x + 120.0 * rad.cos(),
            self.geometry.center.y + 120.0 * rad.sin(),
        )
    }

    fn sample(&mut self, angle_degrees: f64) -> PointerSample {
        self.clock_ms += 10;
        PointerSample::new(self.rim(angle_degrees), Duration::from_millis(self.clock_ms))
    }

    /// One full touch along the given rim angles: down, moves, up.
    fn swipe(&mut self, degrees: &[f64]) {
        let (&first, rest) = degrees.split_first().expect("swipe needs at least one angle");

        let sample = self.sample(first);
        let events = self.interpreter.on_pointer_down(sample, &self.geometry);
        self.route(events);

        for &angle in rest {
            let sample = self.sample(angle);
            let events = self.interpreter.on_pointer_move(sample, &self.geometry);
            self.route(events);
        }

        let sample = self.sample(*degrees.last().unwrap_or(&first));
        let events = self.interpreter.on_pointer_up(sample, &self.geometry);
        self.route(events);
    }

    fn center_press(&mut self) {
        let effects = self.mapper.center_pressed(&self.store.context());
        self.apply(effects);
    }

    fn route(&mut self, events: Vec<podwheel::wheel::WheelEvent>) {
        for event in events {
            let effects = self.mapper.dispatch(event, &self.store.context());
            self.apply(effects);
        }
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if let Effect::Haptic(event) = effect {
                self.haptics.buzz(event);
            } else if let Some(command) = self.store.apply(effect) {
                let _ = self.cmd_tx.send_blocking(command);
            }
        }
    }
}

/// Scripted tour: spin through the home menu, open the playlist page, start a
/// playlist, scrub backwards, and back out.
fn run_demo(rig: &mut Rig<'_>) {
    log::info!("demo: spinning the home menu down and back up");
    rig.swipe(&[0.0, 20.0, 40.0, 60.0, 80.0]);
    rig.swipe(&[80.0, 60.0, 40.0, 20.0, 0.0]);
    log::info!(
        "demo: page={} selection={}",
        rig.store.current_page(),
        rig.store.context().selected_index
    );

    log::info!("demo: center press opens the selected entry");
    rig.center_press();
    log::info!("demo: page={}", rig.store.current_page());

    log::info!("demo: center press starts the highlighted playlist");
    rig.center_press();
    log::info!("demo: page={}", rig.store.current_page());

    if rig.store.current_page() == Page::NowPlaying {
        log::info!("demo: scrubbing backwards");
        rig.store.observe_progress(0.5);
        let seek_step = rig.interpreter.tuning().seek_step_degrees;
        rig.interpreter.set_step_degrees(seek_step);
        rig.swipe(&[90.0, 70.0, 50.0, 30.0]);
        let menu_step = rig.interpreter.tuning().menu_step_degrees;
        rig.interpreter.set_step_degrees(menu_step);
        log::info!(
            "demo: progress now {:.0}%",
            rig.store.displayed_progress() * 100.0
        );
    }

    log::info!("demo: menu button backs out");
    rig.swipe(&[270.0]);
    log::info!("demo: page={}", rig.store.current_page());
}
