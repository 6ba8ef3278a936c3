//! # Command Layer
//!
//! One module per verb. Commands fetch what they need from a [`NoteService`],
//! run it through the [query engine](crate::query) and return a [`CmdResult`].
//! They never format output or touch the terminal.

use crate::model::Note;
use crate::query::SearchHit;

pub mod display;
pub mod helpers;
pub mod list;
pub mod search;
pub mod version;

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_notes: Vec<Note>,
    pub search_hits: Vec<SearchHit>,
    pub version: Option<String>,
}

impl CmdResult {
    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_search_hits(mut self, hits: Vec<SearchHit>) -> Self {
        self.search_hits = hits;
        self
    }

    pub fn with_version(mut self, version: String) -> Self {
        self.version = Some(version);
        self
    }
}
