use thiserror::Error;

use crate::exitcode;

#[derive(Error, Debug)]
pub enum TomtomError {
    /// Bad or missing arguments for an action
    #[error("{0}")]
    Usage(String),

    #[error("No action named \"{0}\". Use -h to list the available actions.")]
    UnknownAction(String),

    #[error("Note named \"{0}\" not found.")]
    NoteNotFound(String),

    /// The remote application could not be reached. Never retried.
    #[error("Could not reach the note service: {0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    SearchArgument(String),

    #[error("Could not load action \"{0}\": {1}")]
    PluginLoad(String, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TomtomError>;

impl TomtomError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TomtomError::Usage(_)
            | TomtomError::UnknownAction(_)
            | TomtomError::SearchArgument(_) => exitcode::USAGE,
            TomtomError::NoteNotFound(_) => exitcode::DATAERR,
            TomtomError::ServiceUnavailable(_) => exitcode::UNAVAILABLE,
            TomtomError::Io(_) | TomtomError::Serialization(_) => exitcode::IOERR,
            TomtomError::PluginLoad(..) => exitcode::SOFTWARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_not_found_names_the_title() {
        let err = TomtomError::NoteNotFound("unexistant".into());
        assert_eq!(err.to_string(), "Note named \"unexistant\" not found.");
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn argument_errors_are_usage_errors() {
        assert_eq!(
            TomtomError::SearchArgument("x".into()).exit_code(),
            exitcode::USAGE
        );
        assert_eq!(
            TomtomError::UnknownAction("x".into()).exit_code(),
            exitcode::USAGE
        );
        assert_ne!(
            TomtomError::ServiceUnavailable("down".into()).exit_code(),
            exitcode::OK
        );
    }
}
