use std::fmt;

/// Tag prefix the note service uses to file a note into a notebook.
pub const NOTEBOOK_PREFIX: &str = "system:notebook:";

/// Tag carried by notebook templates.
pub const TEMPLATE_TAG: &str = "system:template";

/// Last path segment of the identifier the service gives its "start here" note.
pub const START_HERE_SEGMENT: &str = "start-here";

/// Opaque note handle issued by the remote service (e.g. `note://tomboy/<uuid>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_start_here(&self) -> bool {
        self.0.rsplit('/').next() == Some(START_HERE_SEGMENT)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A note's raw tags, split into what the user sees and what the service uses
/// for bookkeeping.
///
/// `plain` and `notebooks` are disjoint: a `system:notebook:<name>` tag only
/// ever shows up as `<name>` in `notebooks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteTags {
    pub plain: Vec<String>,
    pub notebooks: Vec<String>,
    pub template: bool,
}

impl NoteTags {
    pub fn classify<I, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut tags = NoteTags::default();
        for tag in raw {
            let tag = tag.as_ref();
            if tag == TEMPLATE_TAG {
                tags.template = true;
            } else if let Some(book) = tag.strip_prefix(NOTEBOOK_PREFIX) {
                push_unique(&mut tags.notebooks, book);
            } else {
                push_unique(&mut tags.plain, tag);
            }
        }
        tags
    }

    pub fn has_all_tags(&self, required: &[String]) -> bool {
        required.iter().all(|tag| self.plain.contains(tag))
    }

    pub fn in_any_notebook(&self, books: &[String]) -> bool {
        books.iter().any(|book| self.notebooks.contains(book))
    }
}

fn push_unique(into: &mut Vec<String>, value: &str) {
    if !into.iter().any(|v| v == value) {
        into.push(value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Last modification, seconds since the epoch
    pub changed: i64,
    pub tags: NoteTags,
    // Only filled once the content has been requested from the service
    pub content: Option<String>,
}

impl Note {
    pub fn new(id: NoteId, title: String, changed: i64, tags: NoteTags) -> Self {
        Self {
            id,
            title,
            changed,
            tags,
            content: None,
        }
    }

    pub fn with_content(self, content: String) -> Self {
        Self {
            content: Some(content),
            ..self
        }
    }

    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn is_template(&self) -> bool {
        self.tags.template || self.id.is_start_here()
    }
}
