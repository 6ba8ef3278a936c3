use super::NoteService;
use crate::error::{Result, TomtomError};
use crate::model::NoteId;
use std::cell::Cell;

#[derive(Debug, Clone)]
struct StoredNote {
    id: NoteId,
    title: String,
    changed: i64,
    tags: Vec<String>,
    content: String,
}

/// In-memory note service for testing and development.
/// Notes are reported in insertion order.
#[derive(Debug)]
pub struct InMemoryService {
    notes: Vec<StoredNote>,
    version: String,
    available: bool,
    content_fetches: Cell<usize>,
}

impl Default for InMemoryService {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            version: "1.0.1".to_string(),
            available: true,
            content_fetches: Cell::new(0),
        }
    }
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose every call fails, as when the application is not running.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn add_note(&mut self, id: &str, title: &str, changed: i64, tags: &[&str], content: &str) {
        self.notes.push(StoredNote {
            id: NoteId::new(id),
            title: title.to_string(),
            changed,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            content: content.to_string(),
        });
    }

    /// Number of `get_content` calls answered so far.
    pub fn content_fetches(&self) -> usize {
        self.content_fetches.get()
    }

    fn check(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(TomtomError::ServiceUnavailable(
                "in-memory service is offline".to_string(),
            ))
        }
    }

    fn note(&self, id: &NoteId) -> Result<&StoredNote> {
        self.check()?;
        self.notes
            .iter()
            .find(|n| &n.id == id)
            .ok_or_else(|| TomtomError::ServiceUnavailable(format!("unknown note {}", id)))
    }
}

impl NoteService for InMemoryService {
    fn list_note_ids(&self) -> Result<Vec<NoteId>> {
        self.check()?;
        Ok(self.notes.iter().map(|n| n.id.clone()).collect())
    }

    fn get_title(&self, id: &NoteId) -> Result<String> {
        Ok(self.note(id)?.title.clone())
    }

    fn get_change_date(&self, id: &NoteId) -> Result<i64> {
        Ok(self.note(id)?.changed)
    }

    fn get_tags(&self, id: &NoteId) -> Result<Vec<String>> {
        Ok(self.note(id)?.tags.clone())
    }

    fn get_content(&self, id: &NoteId) -> Result<String> {
        let content = self.note(id)?.content.clone();
        self.content_fetches.set(self.content_fetches.get() + 1);
        Ok(content)
    }

    fn find_by_title(&self, title: &str) -> Result<Option<NoteId>> {
        self.check()?;
        Ok(self
            .notes
            .iter()
            .find(|n| n.title == title)
            .map(|n| n.id.clone()))
    }

    fn get_version(&self) -> Result<String> {
        self.check()?;
        Ok(self.version.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Titles of the sample notes, most recent first. The template is not listed.
    pub const SAMPLE_TITLES: [&str; 12] = [
        "addressbook",
        "TODO-list",
        "Bash",
        "dell 750",
        "python-work",
        "TDD",
        "OpenSource Conference X",
        "business contacts",
        "japanese",
        "Webpidgin",
        "conquer the world",
        "R&D",
    ];

    pub const TEMPLATE_TITLE: &str = "recipes";

    /// Thirteen notes as a Tomboy instance would report them: twelve regular
    /// notes in descending date order followed by one notebook template.
    pub fn sample_service() -> InMemoryService {
        let mut service = InMemoryService::new();
        service.add_note(
            "note://tomboy/b332eb31-8139-4351-9f5d-738bf64ce172",
            "addressbook",
            1257805144,
            &["pim", "system:notebook:pim"],
            "addressbook\n\nJane Roe - 555-5500\n   John Doe (cell) - 555-5512  \nJOHN DOE (home) - 555-5513",
        );
        service.add_note(
            "note://tomboy/30ae533a-2789-4789-a409-16a6f65edf54",
            "TODO-list",
            1257140572,
            &["reminders", "pim", "system:notebook:reminders"],
            "TODO-list\n\nBuild unit tests for tomtom\nChew up some gum\nPlay pool with the queen of england",
        );
        service.add_note(
            "note://tomboy/4652f914-85dd-487d-b614-188242f52241",
            "Bash",
            1257138697,
            &["reminders", "system:notebook:reminders"],
            "Bash\n\nset -euo pipefail\nfor f in *; do echo \"$f\"; done",
        );
        service.add_note(
            "note://tomboy/5815160c-7143-4c56-9c5f-007acca375ad",
            "dell 750",
            1256265529,
            &["projects"],
            "dell 750\n\nInstall debian\nInstall python 2.5\nConfigure python path",
        );
        service.add_note(
            "note://tomboy/89277e3b-bdb7-4cfe-a42c-7c8b207370fd",
            "python-work",
            1256257835,
            &[],
            "python-work\n\nSet up a buildbot\nto use a python buildbot for automatic bundling",
        );
        service.add_note(
            "note://tomboy/bece0d43-19ba-41cf-92b5-7b30a5411a0c",
            "TDD",
            1255898778,
            &[],
            "TDD\n\nRed, green, refactor\nWrite the test first with Python unittest",
        );
        service.add_note(
            "note://tomboy/1a1994da-1b98-41d2-8eab-26e8581fc391",
            "OpenSource Conference X",
            1255890996,
            &[],
            "OpenSource Conference X\n\nTalks\n  Presentation: Python by all means\nKeynote on python packaging",
        );
        service.add_note(
            "note://tomboy/21612e71-e2ec-4afb-82bb-7e663e58e88c",
            "business contacts",
            1254553804,
            &["pim", "system:notebook:pim"],
            "business contacts\n\nAcme Corp - 555-5000\nJohn Doe Sr. (office) - 555-5534",
        );
        service.add_note(
            "note://tomboy/8dd14cf8-4766-4122-8178-192cdc0e99dc",
            "japanese",
            1254384931,
            &["reminders"],
            "japanese\n\nhiragana first, then katakana",
        );
        service.add_note(
            "note://tomboy/c0263232-c3b8-45a8-bfdc-7cb8ee4b2a5d",
            "Webpidgin",
            1253378270,
            &["projects", "system:notebook:projects"],
            "Webpidgin\n\nA web front end for pidgin",
        );
        service.add_note(
            "note://tomboy/ea6f4c7f-1b82-4835-9aa2-2df002d788f4",
            "conquer the world",
            1253342190,
            &["projects", "pim"],
            "conquer the world\n\nStep 1: write notes\nStep 2: ???",
        );
        service.add_note(
            "note://tomboy/5df0fd74-cbdd-4cf3-bb08-7a7f09997afd",
            "R&D",
            1253340600,
            &["reminders"],
            "R&D\n\nRead the papers on note taking",
        );
        service.add_note(
            "note://tomboy/461fb1a2-1e02-4447-8891-c3c6fcbb26eb",
            "recipes",
            1253340981,
            &["system:template", "system:notebook:recipes"],
            "recipes\n\nIngredients:\nJohn Doe's famous python pie",
        );
        service
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_service;
    use super::*;

    #[test]
    fn find_by_title_answers_none_for_unknown_titles() {
        let service = sample_service();
        assert!(service.find_by_title("unexistant").unwrap().is_none());
        let id = service.find_by_title("TDD").unwrap().unwrap();
        assert_eq!(service.get_title(&id).unwrap(), "TDD");
    }

    #[test]
    fn lists_ids_in_insertion_order() {
        let service = sample_service();
        let ids = service.list_note_ids().unwrap();
        assert_eq!(ids.len(), 13);
        assert_eq!(service.get_title(&ids[0]).unwrap(), "addressbook");
        assert_eq!(service.get_title(&ids[12]).unwrap(), "recipes");
    }

    #[test]
    fn offline_service_fails_every_call() {
        let service = InMemoryService::unavailable();
        assert!(matches!(
            service.list_note_ids(),
            Err(TomtomError::ServiceUnavailable(_))
        ));
        assert!(matches!(
            service.get_version(),
            Err(TomtomError::ServiceUnavailable(_))
        ));
    }

    #[test]
    fn counts_content_fetches() {
        let service = sample_service();
        let id = service.find_by_title("Bash").unwrap().unwrap();
        service.get_content(&id).unwrap();
        assert_eq!(service.content_fetches(), 1);
    }
}
