// File: src/controller.rs
//! Central logic controller for task commands.
//! Maps a parsed [`Command`] onto the [`TaskStore`] and reports either an
//! [`Outcome`] for display or a [`TaskError`]. Nothing here prints.
use crate::config::Config;
use crate::context::AppContext;
use crate::error::Result;
use crate::model::{Command, SearchHit, SearchResult, Task, parse_command, parse_index};
use crate::storage::{LocalStorage, SkippedLine};
use crate::store::TaskStore;

/// Successful result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Serialized tasks in list order.
    Listed(Vec<String>),
    Added { task: String, count: usize },
    Marked(String),
    Unmarked(String),
    Deleted { task: String, count: usize },
    Found(Vec<SearchHit>),
    NoMatches,
    Exit,
    Unrecognized,
}

#[derive(Debug)]
pub struct TaskController {
    store: TaskStore,
}

impl TaskController {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Opens the configured task file. Lines that could not be read back are
    /// returned so the caller can tell the user about them.
    pub fn open(
        ctx: &dyn AppContext,
        config: &Config,
    ) -> anyhow::Result<(Self, Vec<SkippedLine>)> {
        let storage = LocalStorage::from_context(ctx, config)?;
        let (store, skipped) = TaskStore::open(storage)?;
        Ok((Self::new(store), skipped))
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Parses and executes one line of input.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        let command = parse_command(line).inspect_err(|e| {
            log::debug!("Rejected input {:?}: {}", line, e);
        })?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::List => Ok(Outcome::Listed(
                self.store.tasks().iter().map(Task::serialize).collect(),
            )),
            Command::Exit => Ok(Outcome::Exit),
            Command::Mark(raw) => {
                let index = parse_index(&raw, "Mark")?;
                let task = self.store.mark(index)?;
                Ok(Outcome::Marked(task.serialize()))
            }
            Command::Unmark(raw) => {
                let index = parse_index(&raw, "Unmark")?;
                let task = self.store.unmark(index)?;
                Ok(Outcome::Unmarked(task.serialize()))
            }
            Command::Delete(raw) => {
                let index = parse_index(&raw, "Delete")?;
                let (task, count) = self.store.delete(index)?;
                Ok(Outcome::Deleted {
                    task: task.serialize(),
                    count,
                })
            }
            Command::AddTodo(description) => self.add(Task::todo(&description)?),
            Command::AddDeadline { description, due } => {
                self.add(Task::deadline(&description, &due)?)
            }
            Command::AddEvent {
                description,
                from,
                to,
            } => self.add(Task::event(&description, &from, &to)?),
            Command::Find(keyword) => Ok(match self.store.find(&keyword) {
                SearchResult::Matches(hits) => Outcome::Found(hits),
                SearchResult::NoMatches => Outcome::NoMatches,
            }),
            Command::Unrecognized => Ok(Outcome::Unrecognized),
        }
    }

    fn add(&mut self, task: Task) -> Result<Outcome> {
        let line = task.serialize();
        let count = self.store.add(task)?;
        Ok(Outcome::Added { task: line, count })
    }
}
