//! # tomtom
//!
//! Query Tomboy and Gnote notes from the command line. The running note
//! application is reached over the session D-Bus; tomtom only reads.
//!
//! ## Layers
//!
//! 1. **Dispatch** ([`dispatch`]): resolves the argument list into help, a
//!    usage error or an action to run, and produces an [`dispatch::Outcome`].
//!    Printing and exiting happen once, in the binary.
//! 2. **Actions** ([`actions`]): one [`actions::ActionPlugin`] per verb, each
//!    owning its option grammar and its rendering. Found through
//!    [`actions::registry::ActionRegistry`].
//! 3. **Commands** ([`commands`]): business logic per verb over a
//!    [`service::NoteService`], returning plain values.
//! 4. **Query** ([`query`]): pure filtering, ordering and search over
//!    [`model::Note`]s.
//! 5. **Service** ([`service`]): the remote interface, with a D-Bus client
//!    and an in-memory implementation for tests.
//!
//! [`render`] formats results, [`config`] holds user settings and [`error`]
//! the crate error type.

pub mod actions;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exitcode;
pub mod logging;
pub mod model;
pub mod query;
pub mod render;
pub mod service;
