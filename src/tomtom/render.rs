//! # Rendering
//!
//! Turns command results into the plain text the actions print. Every function
//! returns a `String` without a trailing newline; writing it out is left to
//! the binary.

use crate::model::Note;
use crate::query::SearchHit;
use crate::service::Application;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Line printed between notes when several are displayed.
pub const NOTE_SEPARATOR: &str = "==========================";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time zone used to turn modification timestamps into calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    #[default]
    Local,
    Utc,
}

pub fn format_date(timestamp: i64, zone: DateZone) -> String {
    let Some(utc) = DateTime::from_timestamp(timestamp, 0) else {
        return "????-??-??".to_string();
    };
    match zone {
        DateZone::Utc => utc.format(DATE_FORMAT).to_string(),
        DateZone::Local => utc.with_timezone(&Local).format(DATE_FORMAT).to_string(),
    }
}

/// `title`, followed by `  (tag, tag)` when the note has visible tags.
pub fn note_header(note: &Note) -> String {
    if note.tags.plain.is_empty() {
        note.title.clone()
    } else {
        format!("{}  ({})", note.title, note.tags.plain.join(", "))
    }
}

/// One `YYYY-MM-DD | header` line per note.
pub fn render_note_list(notes: &[Note], zone: DateZone) -> String {
    notes
        .iter()
        .map(|note| format!("{} | {}", format_date(note.changed, zone), note_header(note)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header, blank line, then the note body; notes separated by [`NOTE_SEPARATOR`].
pub fn render_full_notes(notes: &[Note]) -> String {
    notes
        .iter()
        .map(render_full_note)
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", NOTE_SEPARATOR))
}

fn render_full_note(note: &Note) -> String {
    format!("{}\n\n{}", note_header(note), note_body(note))
}

// The service hands back contents starting with the title line; drop it so the
// title only shows once, in the header.
fn note_body(note: &Note) -> &str {
    let content = note.content();
    let Some((first, rest)) = content.split_once('\n') else {
        return if content.trim() == note.title { "" } else { content };
    };
    if first.trim() != note.title {
        return content;
    }
    let mut rest = rest;
    while let Some((line, tail)) = rest.split_once('\n') {
        if !line.trim().is_empty() {
            break;
        }
        rest = tail;
    }
    rest
}

/// `title : line : text` for every hit.
pub fn render_search_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("{} : {} : {}", hit.title, hit.line, hit.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_version(app: Application, version: &str) -> String {
    format!("{} version {}", app, version)
}
