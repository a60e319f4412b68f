//! # User directory state
//!
//! [`DirectoryState`] holds the fetched batch, the loading flag, the last
//! error and the live search term. Fetches are tracked by [`FetchTicket`]:
//! every [`DirectoryState::begin_fetch`] hands out a newer generation and
//! [`DirectoryState::resolve`] drops any resolution that is not from the
//! newest fetch, so a slow response can never overwrite a fresher one.

use serde::{Deserialize, Serialize};

/// One user as served by the directory endpoint. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
}

impl UserRecord {
    /// Case-insensitive substring match against name, email or username.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.username]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Records matching `search_term`, in their original order.
pub fn filter<'a>(records: &'a [UserRecord], search_term: &str) -> Vec<&'a UserRecord> {
    let needle = search_term.to_lowercase();
    records.iter().filter(|r| r.matches(&needle)).collect()
}

/// Handle identifying one fetch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// How a fetch attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchResolution {
    Loaded(Vec<UserRecord>),
    Failed(String),
    /// The owner went away before the response; nothing is applied.
    Cancelled,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub records: Vec<UserRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    generation: u64,
}

/// What the directory should render right now.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectoryView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Rows(Vec<&'a UserRecord>),
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Apply the end of a fetch. Returns whether the state changed.
    pub fn resolve(&mut self, ticket: FetchTicket, resolution: FetchResolution) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match resolution {
            FetchResolution::Cancelled => return false,
            FetchResolution::Loaded(records) => {
                self.records = records;
                self.error = None;
            }
            FetchResolution::Failed(message) => {
                self.error = Some(message);
            }
        }
        self.loading = false;
        true
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// The clear-search control is only useful with a term present.
    pub fn can_clear_search(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn filtered_records(&self) -> Vec<&UserRecord> {
        filter(&self.records, &self.search_term)
    }

    pub fn view(&self) -> DirectoryView<'_> {
        if self.loading {
            return DirectoryView::Loading;
        }
        if let Some(error) = &self.error {
            return DirectoryView::Error(error);
        }
        let rows = self.filtered_records();
        if rows.is_empty() {
            DirectoryView::Empty
        } else {
            DirectoryView::Rows(rows)
        }
    }
}
