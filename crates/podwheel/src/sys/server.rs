use crate::events::{AppEvent, RemoteCommand};
use async_channel::Sender;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

/// Line-oriented control socket: each line is one `RemoteCommand` verb.
pub async fn run_server(socket_path: PathBuf, tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(&socket_path).is_ok() {
        let _ = std::fs::remove_file(&socket_path);
    }

    let listener = match UnixListener::bind(&socket_path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match RemoteCommand::from_str(line.trim()) {
                            Ok(command) => {
                                let _ = tx.send(AppEvent::Remote(command)).await;
                            }
                            Err(_) => {
                                if !line.trim().is_empty() {
                                    log::warn!("Unknown remote command: {:?}", line.trim());
                                }
                            }
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
