use colored::*;
use tomtom::actions::registry::ActionRegistry;
use tomtom::config::{config_dir, TomtomConfig};
use tomtom::dispatch::{Dispatcher, Outcome};
use tomtom::error::Result;
use tomtom::logging;
use tomtom::service::dbus::DbusNoteService;
use tomtom::service::{Application, NoteService};
use tracing::warn;

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config();
    let registry = ActionRegistry::builtin();

    let outcome = Dispatcher::new(&registry, &config).run(&args, connect);
    finish(outcome)
}

fn load_config() -> TomtomConfig {
    let Some(dir) = config_dir() else {
        return TomtomConfig::default();
    };
    TomtomConfig::load(&dir).unwrap_or_else(|e| {
        warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
        TomtomConfig::default()
    })
}

fn connect(app: Application) -> Result<Box<dyn NoteService>> {
    Ok(Box::new(DbusNoteService::connect(app)?))
}

fn finish(outcome: Outcome) -> ! {
    let code = outcome.exit_code();
    match outcome {
        Outcome::Success(text) | Outcome::Help(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Outcome::Usage(text) => eprintln!("{}", text),
        Outcome::Failure(err) => eprintln!("{} {}", "Error:".red().bold(), err),
    }
    std::process::exit(code)
}
