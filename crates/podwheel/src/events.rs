use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Transport verbs accepted over the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RemoteCommand {
    Play,
    Pause,
    Toggle,
    Next,
    Prev,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Remote(RemoteCommand),
    ConfigReload,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_remote_command_parsing() {
        assert_eq!(RemoteCommand::from_str("play"), Ok(RemoteCommand::Play));
        assert_eq!(RemoteCommand::from_str("NEXT"), Ok(RemoteCommand::Next));
        assert!(RemoteCommand::from_str("louder").is_err());
    }
}
