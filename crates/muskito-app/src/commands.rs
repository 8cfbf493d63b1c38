//! Slash-command parsing for the chat loop.

/// One line of user input, interpreted.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Blank line.
    Empty,
    /// Plain text to send to the model.
    Say(String),
    /// `/mode` with an optional identifier; without one, list the modes.
    Mode(Option<String>),
    Clear,
    History,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Self::Say(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        match name {
            "mode" => Self::Mode(parts.next().map(String::from)),
            "clear" | "reset" => Self::Clear,
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

pub const HELP: &str = "\
Commands:
  /mode [id]   switch personality (clears the conversation) or list modes
  /clear       forget the conversation so far
  /history     show the conversation so far
  /help        show this help
  /quit        leave
Anything else is sent to Muskito.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_said_trimmed() {
        assert_eq!(Command::parse("  hello there \n"), Command::Say("hello there".into()));
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[test]
    fn mode_with_and_without_argument() {
        assert_eq!(
            Command::parse("/mode brutal_roaster"),
            Command::Mode(Some("brutal_roaster".into()))
        );
        assert_eq!(Command::parse("/mode"), Command::Mode(None));
    }

    #[test]
    fn aliases() {
        assert_eq!(Command::parse("/reset"), Command::Clear);
        assert_eq!(Command::parse("/exit"), Command::Quit);
        assert_eq!(Command::parse("/?"), Command::Help);
        assert_eq!(Command::parse("/history"), Command::History);
    }

    #[test]
    fn unknown_command() {
        assert_eq!(Command::parse("/dance"), Command::Unknown("dance".into()));
        assert_eq!(Command::parse("/"), Command::Unknown(String::new()));
    }
}
