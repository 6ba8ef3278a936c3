use crate::commands::CmdResult;
use crate::error::Result;
use crate::service::NoteService;

use super::helpers::{notes_by_titles, with_content};

/// Fetch the named notes with their content, in the order requested.
pub fn run<S, T>(service: &S, titles: &[T]) -> Result<CmdResult>
where
    S: NoteService + ?Sized,
    T: AsRef<str>,
{
    let notes = notes_by_titles(service, titles)?
        .into_iter()
        .map(|note| with_content(service, note))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_notes(notes))
}
