// File: ./src/model/mod.rs
pub mod item;
pub mod matcher;
pub mod parser;

pub use item::{Task, TaskKind};
pub use matcher::{SearchHit, SearchResult};
pub use parser::{Command, parse_command, parse_index};
