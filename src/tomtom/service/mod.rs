//! # Note Service Layer
//!
//! The notes live inside a running desktop application (Tomboy or Gnote) and
//! are only reachable through its remote-control interface. [`NoteService`]
//! is the call surface tomtom needs from it; everything above this module
//! works against the trait.
//!
//! ## Implementations
//!
//! - [`dbus::DbusNoteService`]: production client over the session bus
//! - [`memory::InMemoryService`]: in-memory notes for testing
//!
//! ## Failure Model
//!
//! Any call may fail with [`TomtomError::ServiceUnavailable`](crate::error::TomtomError).
//! The remote application is either running or it is not: there is no retry,
//! no timeout and no partial result.

use crate::error::Result;
use crate::model::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod dbus;
pub mod memory;

/// Remote-procedure surface of the note application.
pub trait NoteService {
    /// Identifiers of every note, in the order the service reports them
    fn list_note_ids(&self) -> Result<Vec<NoteId>>;

    fn get_title(&self, id: &NoteId) -> Result<String>;

    /// Last modification time, seconds since the epoch
    fn get_change_date(&self, id: &NoteId) -> Result<i64>;

    fn get_tags(&self, id: &NoteId) -> Result<Vec<String>>;

    fn get_content(&self, id: &NoteId) -> Result<String>;

    /// Resolve an exact title. `Ok(None)` is the normal "no such note" answer.
    fn find_by_title(&self, title: &str) -> Result<Option<NoteId>>;

    fn get_version(&self) -> Result<String>;
}

/// Which note application to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    #[default]
    Tomboy,
    Gnote,
}

impl Application {
    pub fn name(&self) -> &'static str {
        match self {
            Application::Tomboy => "Tomboy",
            Application::Gnote => "Gnote",
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
