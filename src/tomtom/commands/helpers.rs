use crate::error::{Result, TomtomError};
use crate::model::{Note, NoteId, NoteTags};
use crate::service::NoteService;

/// Build a note from the service's metadata. Content is left unfetched.
pub fn fetch_note<S: NoteService + ?Sized>(service: &S, id: NoteId) -> Result<Note> {
    let title = service.get_title(&id)?;
    let changed = service.get_change_date(&id)?;
    let tags = NoteTags::classify(service.get_tags(&id)?);
    Ok(Note::new(id, title, changed, tags))
}

/// Every note the service knows about, in service order.
pub fn all_notes<S: NoteService + ?Sized>(service: &S) -> Result<Vec<Note>> {
    service
        .list_note_ids()?
        .into_iter()
        .map(|id| fetch_note(service, id))
        .collect()
}

/// Resolve every title before fetching anything, so an unknown title aborts
/// the whole request.
pub fn notes_by_titles<S, T>(service: &S, titles: &[T]) -> Result<Vec<Note>>
where
    S: NoteService + ?Sized,
    T: AsRef<str>,
{
    let ids = titles
        .iter()
        .map(|title| {
            let title = title.as_ref();
            service
                .find_by_title(title)?
                .ok_or_else(|| TomtomError::NoteNotFound(title.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    ids.into_iter().map(|id| fetch_note(service, id)).collect()
}

pub fn with_content<S: NoteService + ?Sized>(service: &S, note: Note) -> Result<Note> {
    let content = service.get_content(&note.id)?;
    Ok(note.with_content(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::memory::fixtures::sample_service;
    use crate::service::memory::InMemoryService;

    #[test]
    fn all_notes_keeps_service_order_and_skips_content() {
        let service = sample_service();
        let notes = all_notes(&service).unwrap();
        assert_eq!(notes.len(), 13);
        assert_eq!(notes[0].title, "addressbook");
        assert!(notes.iter().all(|n| n.content.is_none()));
        assert_eq!(service.content_fetches(), 0);
    }

    #[test]
    fn notes_by_titles_keeps_requested_order() {
        let service = sample_service();
        let notes = notes_by_titles(&service, &["python-work", "TODO-list"]).unwrap();
        assert_eq!(notes[0].title, "python-work");
        assert_eq!(notes[1].title, "TODO-list");
        assert_eq!(notes[1].tags.notebooks, vec!["reminders".to_string()]);
    }

    #[test]
    fn unknown_title_is_not_found() {
        let service = sample_service();
        let err = notes_by_titles(&service, &["TDD", "unexistant"]).unwrap_err();
        assert!(matches!(err, TomtomError::NoteNotFound(t) if t == "unexistant"));
    }

    #[test]
    fn transport_failure_is_not_a_missing_note() {
        let service = InMemoryService::unavailable();
        let err = notes_by_titles(&service, &["TDD"]).unwrap_err();
        assert!(matches!(err, TomtomError::ServiceUnavailable(_)));
    }
}
