// File: ./src/model/item.rs
use crate::error::{Result, TaskError};
use std::fmt;
use std::str::FromStr;

/// Separator between the fields of a serialized task line.
pub const FIELD_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline { due: String },
    Event { from: String, to: String },
}

impl TaskKind {
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

fn require(value: &str, msg: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TaskError::validation(msg));
    }
    Ok(value.to_string())
}

impl Task {
    pub fn todo(description: &str) -> Result<Self> {
        Ok(Self {
            description: require(description, "Description of a todo cannot be empty!!")?,
            done: false,
            kind: TaskKind::Todo,
        })
    }

    pub fn deadline(description: &str, due: &str) -> Result<Self> {
        Ok(Self {
            description: require(description, "Deadline Task Description cannot be empty!!")?,
            done: false,
            kind: TaskKind::Deadline {
                due: require(due, "Deadline Task deadline cannot be empty!!")?,
            },
        })
    }

    pub fn event(description: &str, from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            description: require(description, "Event Task Description cannot be empty!!")?,
            done: false,
            kind: TaskKind::Event {
                from: require(from, "You are missing 'from' information from your details!!")?,
                to: require(to, "You are missing 'to' information from your details!!")?,
            },
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn status_icon(&self) -> char {
        if self.done { 'X' } else { ' ' }
    }

    /// Canonical one-line form, used both on screen and in the task file.
    ///
    /// `T | X | read book`, `D |   | return book (by: Sunday)`,
    /// `E |   | project meeting (from: Mon 2pm to: 4pm)`.
    pub fn serialize(&self) -> String {
        let mut line = format!(
            "{}{sep}{}{sep}{}",
            self.kind.tag(),
            self.status_icon(),
            self.description,
            sep = FIELD_SEPARATOR
        );
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due } => line.push_str(&format!(" (by: {})", due)),
            TaskKind::Event { from, to } => {
                line.push_str(&format!(" (from: {} to: {})", from, to))
            }
        }
        line
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// Parses a line previously produced by [`Task::serialize`].
///
/// The error is a human-readable reason; the storage layer attaches the line number.
impl FromStr for Task {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = line.splitn(3, FIELD_SEPARATOR);
        let (Some(tag), Some(status), Some(body)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err("expected '<kind> | <status> | <description>'".to_string());
        };

        let done = match status {
            "X" => true,
            " " => false,
            other => return Err(format!("unknown status '{}'", other)),
        };

        let mut task = match tag {
            "T" => Task::todo(body),
            "D" => {
                let (description, due) = body
                    .strip_suffix(')')
                    .and_then(|b| b.rsplit_once(" (by: "))
                    .ok_or_else(|| "deadline without '(by: ...)'".to_string())?;
                Task::deadline(description, due)
            }
            "E" => {
                let (description, from, to) = body
                    .strip_suffix(')')
                    .and_then(|b| b.rsplit_once(" (from: "))
                    .and_then(|(d, range)| range.split_once(" to: ").map(|(f, t)| (d, f, t)))
                    .ok_or_else(|| "event without '(from: ... to: ...)'".to_string())?;
                Task::event(description, from, to)
            }
            other => return Err(format!("unknown task kind '{}'", other)),
        }
        .map_err(|e| e.to_string())?;

        if done {
            task.mark_done();
        }
        Ok(task)
    }
}
