//! # Query Engine
//!
//! Pure transformations over collections of [`Note`]s: filtering, ordering,
//! limiting and content search. Nothing here talks to the note service; the
//! command layer fetches notes and hands them over.
//!
//! ## Filter Semantics
//!
//! Tags and notebooks deliberately filter differently:
//! - **tags** use AND: a note must carry every requested tag
//! - **notebooks** use OR: membership in any requested notebook is enough
//!
//! Both read the sets produced by [`NoteTags::classify`](crate::model::NoteTags::classify),
//! so notebook tags never satisfy a tag filter and vice versa.

use crate::model::Note;

/// Whether templates take part in a listing or search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateMode {
    #[default]
    Exclude,
    /// Keep templates, after every regular note
    Include,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub tags: Vec<String>,
    pub notebooks: Vec<String>,
    pub templates: TemplateMode,
    pub limit: Option<usize>,
}

impl NoteFilter {
    /// Filter, order and cut `notes` down to what a listing shows.
    pub fn apply(&self, notes: Vec<Note>) -> Vec<Note> {
        let mut notes = filter_by_tags(notes, &self.tags);
        if !self.notebooks.is_empty() {
            notes = filter_by_notebooks(notes, &self.notebooks);
        }
        let notes = arrange_templates(notes, self.templates);
        match self.limit {
            Some(n) => limit(notes, n),
            None => notes,
        }
    }
}

/// Keep notes whose plain tags include every tag in `required`.
pub fn filter_by_tags(notes: Vec<Note>, required: &[String]) -> Vec<Note> {
    notes
        .into_iter()
        .filter(|n| n.tags.has_all_tags(required))
        .collect()
}

/// Keep notes filed in at least one of `books`.
pub fn filter_by_notebooks(notes: Vec<Note>, books: &[String]) -> Vec<Note> {
    notes
        .into_iter()
        .filter(|n| n.tags.in_any_notebook(books))
        .collect()
}

/// Most recent first. The sort is stable, so equal dates keep service order.
pub fn sort_by_recency(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.changed.cmp(&a.changed));
}

/// Sort by recency and either drop templates or move them to the end.
pub fn arrange_templates(notes: Vec<Note>, mode: TemplateMode) -> Vec<Note> {
    let (mut regular, mut templates): (Vec<Note>, Vec<Note>) =
        notes.into_iter().partition(|n| !n.is_template());
    sort_by_recency(&mut regular);

    if mode == TemplateMode::Include {
        sort_by_recency(&mut templates);
        regular.append(&mut templates);
    }
    regular
}

pub fn limit(mut notes: Vec<Note>, n: usize) -> Vec<Note> {
    notes.truncate(n);
    notes
}

/// First line of a note matching a search phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    /// 0-based line number within the note content
    pub line: usize,
    /// The matching line, trimmed
    pub text: String,
}

/// Case-insensitive substring search through note contents.
///
/// Produces at most one hit per note, for the first matching line, in the
/// order the notes were given.
pub fn search(notes: &[Note], phrase: &str) -> Vec<SearchHit> {
    let phrase = phrase.to_lowercase();
    notes
        .iter()
        .filter_map(|note| {
            note.content()
                .lines()
                .enumerate()
                .find(|(_, line)| line.to_lowercase().contains(&phrase))
                .map(|(line, text)| SearchHit {
                    title: note.title.clone(),
                    line,
                    text: text.trim().to_string(),
                })
        })
        .collect()
}
