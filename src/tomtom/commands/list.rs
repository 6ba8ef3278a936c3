use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::NoteFilter;
use crate::service::NoteService;

use super::helpers::all_notes;

pub fn run<S: NoteService + ?Sized>(service: &S, filter: &NoteFilter) -> Result<CmdResult> {
    let notes = all_notes(service)?;
    Ok(CmdResult::default().with_listed_notes(filter.apply(notes)))
}
