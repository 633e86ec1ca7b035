// Manages the task file on disk.
//
// Format: one task per line in its canonical serialization (see `Task::serialize`).
// Every save rewrites the whole file through a temp file + rename, under an
// exclusive lock on a sidecar `.lock` file.
use crate::context::AppContext;
use crate::config::Config;
use crate::model::Task;
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// A stored line that could not be turned back into a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_no: usize,
    pub content: String,
    pub reason: String,
}

/// Outcome of reading the task file: the tasks that parsed, plus what didn't.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolves the task file from the configured name, relative to the data dir.
    pub fn from_context(ctx: &dyn AppContext, config: &Config) -> Result<Self> {
        let data_file = Path::new(&config.data_file);
        if data_file.is_absolute() {
            return Ok(Self::new(data_file));
        }
        Ok(Self::new(ctx.get_data_dir()?.join(data_file)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Helper to get a sidecar lock file path
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {:?}", lock_path))?;

        file.lock_exclusive()
            .with_context(|| format!("Failed to lock {:?}", lock_path))?;
        let result = f();
        FileExt::unlock(&file)?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write {:?}", tmp_path))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to replace {:?}", path))?;
        Ok(())
    }

    /// Renders tasks exactly as they are stored.
    pub fn render(tasks: &[Task]) -> String {
        let mut out = String::new();
        for task in tasks {
            out.push_str(&task.serialize());
            out.push('\n');
        }
        out
    }

    /// Parses file contents. Blank lines are ignored; malformed lines, including
    /// ones that are not valid UTF-8, are reported and skipped.
    pub fn parse(contents: &[u8]) -> LoadReport {
        let mut report = LoadReport::default();
        for (i, raw) in contents.split(|b| *b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let parsed = match std::str::from_utf8(raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => line.parse::<Task>(),
                Err(e) => Err(format!("not valid UTF-8 ({})", e)),
            };
            match parsed {
                Ok(task) => report.tasks.push(task),
                Err(reason) => {
                    let content = String::from_utf8_lossy(raw).into_owned();
                    log::warn!("Skipping malformed line {}: {:?} ({})", i + 1, content, reason);
                    report.skipped.push(SkippedLine {
                        line_no: i + 1,
                        content,
                        reason,
                    });
                }
            }
        }
        report
    }

    /// Reads the task file. A missing file is an empty list.
    pub fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            log::info!("No task file at {:?}, starting empty", self.path);
            return Ok(LoadReport::default());
        }
        let contents = Self::with_lock(&self.path, || {
            fs::read(&self.path)
                .with_context(|| format!("Failed to read task file {:?}", self.path))
        })?;
        let report = Self::parse(&contents);
        log::info!(
            "Loaded {} tasks from {:?} ({} lines skipped)",
            report.tasks.len(),
            self.path,
            report.skipped.len()
        );
        Ok(report)
    }

    /// Rewrites the whole file from `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let contents = Self::render(tasks);
        Self::with_lock(&self.path, || Self::atomic_write(&self.path, &contents))?;
        log::debug!("Saved {} tasks to {:?}", tasks.len(), self.path);
        Ok(())
    }
}
