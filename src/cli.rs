// File: ./src/cli.rs
//! Shared command-line interface logic: argument handling, help text, and
//! turning controller results into the text shown between horizontal rules.
use crate::controller::Outcome;
use crate::error::TaskError;
use crate::storage::SkippedLine;
use anyhow::{Result, bail};
use std::fmt::Write;
use std::path::PathBuf;

pub const HORIZONTAL_LINE: &str =
    "____________________________________________________________";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run,
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub action: CliAction,
}

/// Parses process arguments, excluding the binary name.
pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs {
        root: None,
        action: CliAction::Run,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => parsed.action = CliAction::Help,
            "-V" | "--version" => parsed.action = CliAction::Version,
            "-r" | "--root" => match args.next() {
                Some(path) => parsed.root = Some(PathBuf::from(path)),
                None => bail!("--root needs a path"),
            },
            other => bail!("Unknown argument '{}'. Try --help.", other),
        }
    }
    Ok(parsed)
}

pub fn print_help(binary_name: &str) {
    println!(
        "Taskline v{} - a line-oriented task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -V, --version         Print the version.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (one per line once started):");
    println!("    list                                   Show all tasks");
    println!("    todo <description>                     Add a plain task");
    println!("    deadline <description> /by <due>       Add a task with a due date");
    println!("    event <description> /from <a> /to <b>  Add a task spanning a period");
    println!("    mark <n>                               Mark task n as done");
    println!("    unmark <n>                             Mark task n as not done");
    println!("    delete <n>                             Remove task n");
    println!("    find <keyword>                         Show tasks containing keyword");
    println!("    bye                                    Quit");
}

fn boxed(body: &str) -> String {
    format!("{line}\n{body}{line}", line = HORIZONTAL_LINE, body = body)
}

pub fn greeting() -> String {
    boxed("Hello! I'm Taskline, your task keeper.\nHow can I help you?\n")
}

pub fn farewell() -> String {
    boxed("Bye. Hope to see you again soon!\n")
}

fn task_count(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("Now you have {} {} in the list.\n", count, noun)
}

pub fn render_outcome(outcome: &Outcome) -> String {
    let mut body = String::new();
    match outcome {
        Outcome::Listed(lines) if lines.is_empty() => {
            body.push_str("Your task list is empty!\n");
        }
        Outcome::Listed(lines) => {
            body.push_str("Here are the tasks in your list:\n");
            for (i, line) in lines.iter().enumerate() {
                let _ = writeln!(body, "{}. {}", i + 1, line);
            }
        }
        Outcome::Added { task, count } => {
            let _ = writeln!(body, "Got it. I've added this task:\n  {}", task);
            body.push_str(&task_count(*count));
        }
        Outcome::Marked(task) => {
            let _ = writeln!(body, "Nice! I've marked this task as done:\n  {}", task);
        }
        Outcome::Unmarked(task) => {
            let _ = writeln!(body, "OK, I've marked this task as not done yet:\n  {}", task);
        }
        Outcome::Deleted { task, count } => {
            let _ = writeln!(body, "Noted. I've removed this task:\n  {}", task);
            body.push_str(&task_count(*count));
        }
        Outcome::Found(hits) => {
            body.push_str("Here are the matching tasks in your list:\n");
            for hit in hits {
                let _ = writeln!(body, "{}. {}", hit.position, hit.line);
            }
        }
        Outcome::NoMatches => body.push_str("There are no matching tasks in your list!\n"),
        Outcome::Exit => return farewell(),
        Outcome::Unrecognized => {
            body.push_str("What are you trying to say man. Re-enter your command\n");
        }
    }
    boxed(&body)
}

/// Turns one raw stdin line into text, dropping the line ending.
/// Bytes that are not valid UTF-8 become U+FFFD instead of ending the session.
pub fn decode_input_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

pub fn render_error(err: &TaskError) -> String {
    boxed(&format!("{}\n", err))
}

/// Startup notice for task file lines that could not be read back.
pub fn render_skipped(skipped: &[SkippedLine]) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }
    let mut body = format!(
        "Skipped {} unreadable line(s) in your task file:\n",
        skipped.len()
    );
    for line in skipped {
        let _ = writeln!(body, "  line {}: {} ({})", line.line_no, line.content, line.reason);
    }
    Some(boxed(&body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchHit;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args(&[])).unwrap().action, CliAction::Run);
        assert_eq!(parse_args(args(&["-h"])).unwrap().action, CliAction::Help);
        let parsed = parse_args(args(&["--root", "/tmp/x"])).unwrap();
        assert_eq!(parsed.root, Some(PathBuf::from("/tmp/x")));
        assert!(parse_args(args(&["--root"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_render_added_reports_count() {
        let text = render_outcome(&Outcome::Added {
            task: "T |   | read".to_string(),
            count: 2,
        });
        assert!(text.contains("Got it. I've added this task:\n  T |   | read\n"));
        assert!(text.contains("Now you have 2 tasks in the list."));
        assert!(text.starts_with(HORIZONTAL_LINE));
        assert!(text.ends_with(HORIZONTAL_LINE));
    }

    #[test]
    fn test_render_found_uses_hit_numbers() {
        let text = render_outcome(&Outcome::Found(vec![SearchHit {
            position: 1,
            line: "T | X | foo bar".to_string(),
        }]));
        assert!(text.contains("1. T | X | foo bar"));
    }

    #[test]
    fn test_decode_input_line() {
        assert_eq!(decode_input_line(b"todo read\r\n"), "todo read");
        assert_eq!(decode_input_line(b"list"), "list");
        assert_eq!(decode_input_line(b"todo caf\xe9\n"), "todo caf\u{fffd}");
    }

    #[test]
    fn test_render_error_is_message_only() {
        let text = render_error(&TaskError::State("You cannot mark a completed task!!".into()));
        assert!(text.contains("\nYou cannot mark a completed task!!\n"));
    }
}
