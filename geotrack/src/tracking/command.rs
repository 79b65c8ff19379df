//! External commands accepted by the tracking supervisor.

/// Command delivered asynchronously to the supervisor from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingCommand {
    /// Begin a tracking cycle.
    Start,
    /// End the active tracking cycle.
    Stop,
}

impl TrackingCommand {
    /// Parse a named command.
    ///
    /// Recognizes `START` and `STOP`, case-insensitively and ignoring
    /// surrounding whitespace. Anything else yields `None`; unrecognized
    /// commands are ignored at the intake boundary.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "START" => Some(Self::Start),
            "STOP" => Some(Self::Stop),
            _ => None,
        }
    }
}

impl std::fmt::Display for TrackingCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::Stop => write!(f, "STOP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_commands() {
        assert_eq!(TrackingCommand::parse("START"), Some(TrackingCommand::Start));
        assert_eq!(TrackingCommand::parse("STOP"), Some(TrackingCommand::Stop));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TrackingCommand::parse("start"), Some(TrackingCommand::Start));
        assert_eq!(TrackingCommand::parse(" Stop "), Some(TrackingCommand::Stop));
    }

    #[test]
    fn test_parse_ignores_unrecognized() {
        assert_eq!(TrackingCommand::parse("PAUSE"), None);
        assert_eq!(TrackingCommand::parse(""), None);
        assert_eq!(TrackingCommand::parse("START NOW"), None);
    }

    #[test]
    fn test_display_round_trips() {
        for command in [TrackingCommand::Start, TrackingCommand::Stop] {
            assert_eq!(TrackingCommand::parse(&command.to_string()), Some(command));
        }
    }
}
