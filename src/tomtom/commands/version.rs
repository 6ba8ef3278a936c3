use crate::commands::CmdResult;
use crate::error::Result;
use crate::service::NoteService;

pub fn run<S: NoteService + ?Sized>(service: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_version(service.get_version()?))
}
