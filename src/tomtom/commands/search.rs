use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{arrange_templates, search, sort_by_recency, TemplateMode};
use crate::service::NoteService;

use super::helpers::{all_notes, notes_by_titles, with_content};

/// Search note contents for `phrase`.
///
/// With no `titles`, every non-template note is searched. Otherwise only the
/// named notes are, templates included, and an unknown title aborts the
/// search. Hits come out most recent first.
pub fn run<S, T>(service: &S, phrase: &str, titles: &[T]) -> Result<CmdResult>
where
    S: NoteService + ?Sized,
    T: AsRef<str>,
{
    let candidates = if titles.is_empty() {
        arrange_templates(all_notes(service)?, TemplateMode::Exclude)
    } else {
        let mut named = notes_by_titles(service, titles)?;
        sort_by_recency(&mut named);
        named
    };

    let notes = candidates
        .into_iter()
        .map(|note| with_content(service, note))
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_search_hits(search(&notes, phrase)))
}
