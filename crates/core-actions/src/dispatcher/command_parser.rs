//! Menu input classification.
//!
//! Converts one raw line of menu input into a `MenuChoice`. Choices that need a
//! follow-up argument expose the prompt to show; `into_command` pairs the
//! choice with that argument. No side effects here; pure classification.

use crate::Command;
use std::path::PathBuf;

pub const MENU: &str = "Text Editor Menu:
1. Create a new file
2. Open a file
3. Save to file
4. Write a sentence
5. Undo
6. Redo
7. Clear the content
8. Print the text in editor
0. Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Open,
    Save,
    Write,
    Undo,
    Redo,
    Clear,
    Print,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(raw: &str) -> MenuChoice {
        match raw.trim() {
            "1" => MenuChoice::Create,
            "2" => MenuChoice::Open,
            "3" => MenuChoice::Save,
            "4" => MenuChoice::Write,
            "5" => MenuChoice::Undo,
            "6" => MenuChoice::Redo,
            "7" => MenuChoice::Clear,
            "8" => MenuChoice::Print,
            "0" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }

    /// Prompt for the argument this choice needs, if any.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            MenuChoice::Open => Some("Enter the filename to open: "),
            MenuChoice::Save => Some("Enter the filename to save: "),
            MenuChoice::Write => Some("Enter the sentence: "),
            _ => None,
        }
    }

    /// Message for when the prompted argument is missing or blank.
    pub fn missing_argument(&self) -> Option<&'static str> {
        match self {
            MenuChoice::Open | MenuChoice::Save => Some("A filename is required."),
            MenuChoice::Write => Some("A sentence is required."),
            _ => None,
        }
    }

    /// Build the command. Filenames are trimmed; sentences are taken verbatim
    /// minus the line terminator. Returns `None` for invalid input or a missing
    /// or blank filename.
    pub fn into_command(self, argument: Option<&str>) -> Option<Command> {
        let filename = || {
            argument
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };
        match self {
            MenuChoice::Create => Some(Command::Create),
            MenuChoice::Open => filename().map(Command::Open),
            MenuChoice::Save => filename().map(Command::Save),
            MenuChoice::Write => argument
                .map(|s| s.trim_end_matches(['\r', '\n']).to_string())
                .map(Command::Write),
            MenuChoice::Undo => Some(Command::Undo),
            MenuChoice::Redo => Some(Command::Redo),
            MenuChoice::Clear => Some(Command::Clear),
            MenuChoice::Print => Some(Command::Print),
            MenuChoice::Exit => Some(Command::Exit),
            MenuChoice::Invalid(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Create);
        assert_eq!(MenuChoice::parse(" 5 \n"), MenuChoice::Undo);
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Exit);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(MenuChoice::parse("42"), MenuChoice::Invalid("42".into()));
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid(String::new()));
    }

    #[test]
    fn prompts_only_for_argument_choices() {
        assert!(MenuChoice::Open.prompt().is_some());
        assert!(MenuChoice::Write.prompt().is_some());
        assert!(MenuChoice::Undo.prompt().is_none());
    }

    #[test]
    fn open_needs_filename() {
        assert_eq!(MenuChoice::Open.into_command(Some("  ")), None);
        assert_eq!(
            MenuChoice::Open.into_command(Some(" notes.txt\n")),
            Some(Command::Open(PathBuf::from("notes.txt")))
        );
    }

    #[test]
    fn missing_argument_names_what_was_asked_for() {
        assert_eq!(MenuChoice::Save.missing_argument(), Some("A filename is required."));
        assert_eq!(MenuChoice::Write.missing_argument(), Some("A sentence is required."));
        assert_eq!(MenuChoice::Print.missing_argument(), None);
        assert_eq!(MenuChoice::Write.into_command(None), None);
    }

    #[test]
    fn write_keeps_inner_whitespace() {
        assert_eq!(
            MenuChoice::Write.into_command(Some("  two  words \n")),
            Some(Command::Write("  two  words ".into()))
        );
    }
}
