// File: src/model/parser.rs
//! Turns one line of user input into a typed [`Command`].
//!
//! Dispatch is on the first whitespace-delimited token, matched case-sensitively.
//! Arguments of `deadline` and `event` are split on literal markers:
//!
//! ```text
//! deadline <description> /by <due>
//! event <description> /from <start> /to <end>
//! ```
//!
//! The first occurrence of each marker wins, and `/to` is only looked for after `/from`.
use crate::error::{Result, TaskError};
use std::num::IntErrorKind;
use std::str::FromStr;
use strum::EnumString;

pub const BY_MARKER: &str = "/by";
pub const FROM_MARKER: &str = "/from";
pub const TO_MARKER: &str = "/to";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    List,
    Bye,
    Mark,
    Unmark,
    Todo,
    Deadline,
    Event,
    Delete,
    Find,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Exit,
    /// Raw, trimmed index text; checked by [`parse_index`] before the store is touched.
    Mark(String),
    Unmark(String),
    AddTodo(String),
    AddDeadline {
        description: String,
        due: String,
    },
    AddEvent {
        description: String,
        from: String,
        to: String,
    },
    Delete(String),
    Find(String),
    Unrecognized,
}

/// Splits off the leading token. Returns `None` for a blank line.
fn split_keyword(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(line.split_once(char::is_whitespace).unwrap_or((line, "")))
}

fn non_empty(part: &str, msg: &str) -> Result<String> {
    let part = part.trim();
    if part.is_empty() {
        return Err(TaskError::format(msg));
    }
    Ok(part.to_string())
}

pub fn parse_command(line: &str) -> Result<Command> {
    let Some((head, rest)) = split_keyword(line) else {
        return Ok(Command::Unrecognized);
    };
    let Ok(keyword) = Keyword::from_str(head) else {
        return Ok(Command::Unrecognized);
    };

    match keyword {
        Keyword::List => Ok(Command::List),
        Keyword::Bye => Ok(Command::Exit),
        Keyword::Mark => Ok(Command::Mark(rest.trim().to_string())),
        Keyword::Unmark => Ok(Command::Unmark(rest.trim().to_string())),
        Keyword::Delete => Ok(Command::Delete(rest.trim().to_string())),
        Keyword::Todo => parse_todo(rest),
        Keyword::Deadline => parse_deadline(rest),
        Keyword::Event => parse_event(rest),
        Keyword::Find => parse_find(rest),
    }
}

fn parse_todo(rest: &str) -> Result<Command> {
    let description = rest.trim();
    if description.is_empty() {
        return Err(TaskError::validation(
            "Description of a todo cannot be empty!!",
        ));
    }
    Ok(Command::AddTodo(description.to_string()))
}

fn parse_deadline(rest: &str) -> Result<Command> {
    if rest.trim().is_empty() {
        return Err(TaskError::validation(
            "Deadline Task Details cannot be empty!!",
        ));
    }
    let (description, due) = rest
        .split_once(BY_MARKER)
        .ok_or_else(|| TaskError::format("You are missing a '/by' in your details!!"))?;

    Ok(Command::AddDeadline {
        description: non_empty(description, "Deadline Task Description cannot be empty!!")?,
        due: non_empty(due, "Deadline Task deadline cannot be empty!!")?,
    })
}

fn parse_event(rest: &str) -> Result<Command> {
    if rest.trim().is_empty() {
        return Err(TaskError::validation("Event Task Details cannot be empty!!"));
    }
    let (description, range) = rest
        .split_once(FROM_MARKER)
        .ok_or_else(|| TaskError::format("You are missing a '/from' in your details!!"))?;

    let Some((from, to)) = range.split_once(TO_MARKER) else {
        if description.contains(TO_MARKER) {
            return Err(TaskError::format(
                "'/from' must come before '/to' in your details!!",
            ));
        }
        return Err(TaskError::format("You are missing a '/to' in your details!!"));
    };

    Ok(Command::AddEvent {
        description: non_empty(description, "Event Task Description cannot be empty!!")?,
        from: non_empty(from, "You are missing 'from' information from your details!!")?,
        to: non_empty(to, "You are missing 'to' information from your details!!")?,
    })
}

fn parse_find(rest: &str) -> Result<Command> {
    let keyword = rest.trim();
    if keyword.is_empty() {
        return Err(TaskError::validation("Find keyword cannot be empty!"));
    }
    Ok(Command::Find(keyword.to_string()))
}

/// Validates raw index text as a positive, 1-based task number.
///
/// `action` names the command in messages, e.g. "Mark".
pub fn parse_index(raw: &str, action: &str) -> Result<usize> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TaskError::validation("Task Number cannot be empty!!"));
    }
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        // Too large for any list.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(TaskError::Range(format!(
            "Invalid Task Number!! {} is beyond the end of the list.",
            raw
        ))),
        _ => Err(TaskError::Type(format!(
            "{} Task Details must be a positive integer",
            action
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_keyword_must_be_whole_token() {
        assert_eq!(parse_command("todoread").unwrap(), Command::Unrecognized);
        assert_eq!(parse_command("LIST").unwrap(), Command::Unrecognized);
        assert_eq!(parse_command("").unwrap(), Command::Unrecognized);
        assert_eq!(parse_command("  list  ").unwrap(), Command::List);
    }

    #[test]
    fn test_split_keyword_handles_tabs() {
        assert_eq!(split_keyword("todo\tread"), Some(("todo", "read")));
        assert_eq!(split_keyword("bye"), Some(("bye", "")));
    }

    #[test]
    fn test_parse_index_kinds() {
        assert_eq!(parse_index("3", "Mark").unwrap(), 3);
        assert_eq!(parse_index("", "Mark").unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(parse_index("abc", "Mark").unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(parse_index("0", "Mark").unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(parse_index("-2", "Delete").unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(
            parse_index("99999999999999999999999", "Mark").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_event_to_before_from_is_format_error() {
        let err = parse_command("event x /to B /from A").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("before"));
    }
}
