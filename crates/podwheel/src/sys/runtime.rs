use crate::events::AppEvent;
use crate::player::{PlaybackCommand, PlaybackService};
use async_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tokio::runtime::Runtime;

/// Spawns the control-socket server, the config watcher, and the playback
/// command pump on a dedicated thread owning its own Tokio runtime.
pub fn start_background_services(
    tx: Sender<AppEvent>,
    commands: Receiver<PlaybackCommand>,
    service: Arc<dyn PlaybackService>,
    socket_path: PathBuf,
) {
    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create Tokio runtime");

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::server::run_server(socket_path, tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(tx).await;
                });
            }

            tokio::spawn(async move {
                run_playback_pump(commands, service).await;
            });

            std::future::pending::<()>().await;
        });
    });
}

/// Fires each queued command at the service without awaiting it inline:
/// commands from one session stay ordered at dispatch, and a slow or failing
/// call never stalls the next one. Failures are logged and dropped; the
/// gesture side has already moved on.
async fn run_playback_pump(commands: Receiver<PlaybackCommand>, service: Arc<dyn PlaybackService>) {
    while let Ok(command) = commands.recv().await {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let label = format!("{command:?}");
            let result = match command {
                PlaybackCommand::Resume => service.resume().await,
                PlaybackCommand::Pause => service.pause().await,
                PlaybackCommand::TogglePlayPause => service.toggle().await,
                PlaybackCommand::NextTrack => service.next().await,
                PlaybackCommand::PreviousTrack => service.previous().await,
                PlaybackCommand::PlayPlaylist(id) => service.play_playlist(&id).await,
                PlaybackCommand::Seek(fraction) => service.seek(fraction).await,
            };
            if let Err(e) = result {
                log::error!("Playback command {label} failed: {e}");
            }
        });
    }
}
