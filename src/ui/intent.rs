use std::path::PathBuf;

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    EditPrompt(String),
    EditSteps(String),
    Generate,
    Save(Option<PathBuf>),
    Show,
    Vocabulary,
    Help,
    Quit,
    /// Whitespace-only line; nothing changes.
    Blank,
    Unknown(String),
}

impl Intent {
    /// Lines starting with `/` are commands; anything else edits the prompt.
    /// A prompt that itself starts with `/` is typed as `//...`.
    pub fn parse(line: &str) -> Intent {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Intent::Blank;
        }
        if let Some(escaped) = line.strip_prefix("//") {
            return Intent::EditPrompt(format!("/{}", escaped));
        }
        let Some(command) = line.strip_prefix('/') else {
            return Intent::EditPrompt(line.to_string());
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name {
            "clear" => Intent::EditPrompt(String::new()),
            "steps" | "s" => Intent::EditSteps(rest.to_string()),
            "generate" | "gen" | "g" => Intent::Generate,
            "save" => Intent::Save((!rest.is_empty()).then(|| PathBuf::from(rest))),
            "state" | "show" => Intent::Show,
            "words" => Intent::Vocabulary,
            "help" | "h" | "?" => Intent::Help,
            "quit" | "exit" | "q" => Intent::Quit,
            other => Intent::Unknown(other.to_string()),
        }
    }
}

pub const HELP: &str = "\
Type a prompt and press Enter to set it, then /generate.
Start a prompt that begins with '/' with '//'.
  /clear        clear the prompt
  /steps N      set generation steps (1-10)
  /generate     translate the prompt and generate an image
  /save [DIR]   save the current image as generated-image.png
  /state        show the current state
  /words        list the offline dictionary
  /quit         exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_edits_prompt() {
        assert_eq!(
            Intent::parse("черная пантера\n"),
            Intent::EditPrompt("черная пантера".to_string())
        );
    }

    #[test]
    fn test_blank_line_keeps_prompt() {
        assert_eq!(Intent::parse(""), Intent::Blank);
        assert_eq!(Intent::parse("   \r\n"), Intent::Blank);
        assert_eq!(Intent::parse("/clear"), Intent::EditPrompt(String::new()));
    }

    #[test]
    fn test_double_slash_escapes_prompt() {
        assert_eq!(
            Intent::parse("//imagine a dragon"),
            Intent::EditPrompt("/imagine a dragon".to_string())
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(Intent::parse("/steps 8"), Intent::EditSteps("8".to_string()));
        assert_eq!(Intent::parse("/steps"), Intent::EditSteps(String::new()));
        assert_eq!(Intent::parse("/g"), Intent::Generate);
        assert_eq!(Intent::parse("/save"), Intent::Save(None));
        assert_eq!(
            Intent::parse("/save /tmp/out"),
            Intent::Save(Some(PathBuf::from("/tmp/out")))
        );
        assert_eq!(Intent::parse("/quit"), Intent::Quit);
        assert_eq!(Intent::parse("/dance"), Intent::Unknown("dance".to_string()));
    }
}
