use clap::{Parser, Subcommand};
use podwheel::config;
use podwheel::events::RemoteCommand;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "podctl", version, about = "Send transport commands to a running podwheel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Control socket of the running podwheel instance.
    #[arg(short, long)]
    socket: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Resume playback
    Play,
    /// Pause playback
    Pause,
    /// Toggle play/pause
    Toggle,
    /// Skip to the next track
    Next,
    /// Skip to the previous track
    Prev,
    /// Print the effective configuration and its file path
    ShowConfig,
}

impl Commands {
    /// Wire verb for the command, `None` for commands resolved locally.
    fn remote(&self) -> Option<RemoteCommand> {
        match self {
            Self::Play => Some(RemoteCommand::Play),
            Self::Pause => Some(RemoteCommand::Pause),
            Self::Toggle => Some(RemoteCommand::Toggle),
            Self::Next => Some(RemoteCommand::Next),
            Self::Prev => Some(RemoteCommand::Prev),
            Self::ShowConfig => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command.remote() {
        Some(remote) => {
            let socket = cli
                .socket
                .unwrap_or_else(|| config::load_or_default().socket_path);
            log::debug!("connecting to {}", socket.display());
            let mut stream = UnixStream::connect(&socket)?;
            writeln!(stream, "{remote}")?;
        }
        None => show_config()?,
    }
    Ok(())
}

fn show_config() -> anyhow::Result<()> {
    let path = config::get_config_path()?;
    let config = config::load_or_default();
    println!("# {}", path.display());
    println!("{config:#?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_commands_map_to_remote_verbs() {
        assert_eq!(Commands::Play.remote(), Some(RemoteCommand::Play));
        assert_eq!(Commands::Pause.remote(), Some(RemoteCommand::Pause));
        assert_eq!(Commands::Toggle.remote(), Some(RemoteCommand::Toggle));
        assert_eq!(Commands::Next.remote(), Some(RemoteCommand::Next));
        assert_eq!(Commands::Prev.remote(), Some(RemoteCommand::Prev));
    }

    #[test]
    fn test_show_config_is_resolved_locally() {
        // no wire verb: the config is read by podctl itself, not the daemon
        assert_eq!(Commands::ShowConfig.remote(), None);
    }
}
