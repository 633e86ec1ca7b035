// Logic for the `find` command.
//
// A task matches when its serialized line contains the keyword as a
// case-sensitive substring, so the kind tag and status column are searchable
// too ("D |" finds every deadline).

use crate::model::item::Task;

/// One hit of a search, numbered in scan order starting at 1.
///
/// `position` is a display number for the result list only; it is not the
/// task's index in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub position: usize,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Matches(Vec<SearchHit>),
    NoMatches,
}

impl Task {
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.serialize().contains(keyword)
    }
}

pub fn find<'a, I>(tasks: I, keyword: &str) -> SearchResult
where
    I: IntoIterator<Item = &'a Task>,
{
    let hits: Vec<SearchHit> = tasks
        .into_iter()
        .filter(|task| task.matches_keyword(keyword))
        .enumerate()
        .map(|(i, task)| SearchHit {
            position: i + 1,
            line: task.serialize(),
        })
        .collect();

    if hits.is_empty() {
        SearchResult::NoMatches
    } else {
        SearchResult::Matches(hits)
    }
}
