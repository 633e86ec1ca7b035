// File: src/store.rs
//! The ordered task list and its on-disk mirror.
//!
//! Every mutation is applied in memory, written out in full, and undone in
//! memory if the write fails, so the list and the file never disagree after a
//! call returns.
use crate::error::{Result, TaskError};
use crate::model::matcher::{self, SearchResult};
use crate::model::Task;
use crate::storage::{LocalStorage, SkippedLine};

#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: LocalStorage,
}

impl TaskStore {
    /// Loads the task file. Malformed lines are returned alongside the store.
    pub fn open(storage: LocalStorage) -> anyhow::Result<(Self, Vec<SkippedLine>)> {
        let report = storage.load()?;
        let store = Self {
            tasks: report.tasks,
            storage,
        };
        Ok((store, report.skipped))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Rewrites the backing file from memory.
    pub fn persist(&self) -> Result<()> {
        self.storage.save(&self.tasks).map_err(|e| {
            log::warn!("Persisting {} tasks failed: {:#}", self.tasks.len(), e);
            TaskError::from(e)
        })
    }

    /// Maps a 1-based task number to a position in the list.
    fn slot(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskError::Range(format!(
                "Invalid Task Number!! There are {} tasks in the list.",
                self.tasks.len()
            )));
        }
        Ok(index - 1)
    }

    /// Appends a task and returns the new task count.
    pub fn add(&mut self, task: Task) -> Result<usize> {
        self.tasks.push(task);
        if let Err(e) = self.persist() {
            self.tasks.pop();
            return Err(e);
        }
        log::debug!("Added task #{}", self.tasks.len());
        Ok(self.tasks.len())
    }

    pub fn mark(&mut self, index: usize) -> Result<Task> {
        let slot = self.slot(index)?;
        if self.tasks[slot].is_done() {
            return Err(TaskError::State(
                "You cannot mark a completed task!!".to_string(),
            ));
        }
        self.tasks[slot].mark_done();
        if let Err(e) = self.persist() {
            self.tasks[slot].mark_undone();
            return Err(e);
        }
        log::debug!("Marked task #{} done", index);
        Ok(self.tasks[slot].clone())
    }

    pub fn unmark(&mut self, index: usize) -> Result<Task> {
        let slot = self.slot(index)?;
        if !self.tasks[slot].is_done() {
            return Err(TaskError::State(
                "You cannot unmark an incomplete task!!".to_string(),
            ));
        }
        self.tasks[slot].mark_undone();
        if let Err(e) = self.persist() {
            self.tasks[slot].mark_done();
            return Err(e);
        }
        log::debug!("Marked task #{} not done", index);
        Ok(self.tasks[slot].clone())
    }

    /// Removes a task; later tasks shift down by one. Returns it with the new count.
    pub fn delete(&mut self, index: usize) -> Result<(Task, usize)> {
        let slot = self.slot(index)?;
        let removed = self.tasks.remove(slot);
        if let Err(e) = self.persist() {
            self.tasks.insert(slot, removed);
            return Err(e);
        }
        log::debug!("Deleted task #{}", index);
        Ok((removed, self.tasks.len()))
    }

    pub fn find(&self, keyword: &str) -> SearchResult {
        matcher::find(&self.tasks, keyword)
    }
}
