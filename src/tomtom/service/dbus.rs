use super::{Application, NoteService};
use crate::error::{Result, TomtomError};
use crate::model::NoteId;
use tracing::debug;
use zbus::blocking::{Connection, Proxy};

struct BusNames {
    destination: &'static str,
    path: &'static str,
    interface: &'static str,
}

fn bus_names(app: Application) -> BusNames {
    match app {
        Application::Tomboy => BusNames {
            destination: "org.gnome.Tomboy",
            path: "/org/gnome/Tomboy/RemoteControl",
            interface: "org.gnome.Tomboy.RemoteControl",
        },
        Application::Gnote => BusNames {
            destination: "org.gnome.Gnote",
            path: "/org/gnome/Gnote/RemoteControl",
            interface: "org.gnome.Gnote.RemoteControl",
        },
    }
}

fn unavailable(app: Application, err: zbus::Error) -> TomtomError {
    TomtomError::ServiceUnavailable(format!("{}: {}", app, err))
}

/// Client for the `RemoteControl` interface Tomboy and Gnote export on the
/// session bus.
///
/// The connection is opened once in [`DbusNoteService::connect`] and held
/// until the value is dropped.
pub struct DbusNoteService {
    app: Application,
    proxy: Proxy<'static>,
}

impl DbusNoteService {
    pub fn connect(app: Application) -> Result<Self> {
        debug!(%app, "connecting to session bus");
        let connection = Connection::session().map_err(|e| unavailable(app, e))?;
        Self::with_connection(&connection, app)
    }

    /// Talk to `app` over an already open bus connection.
    pub fn with_connection(connection: &Connection, app: Application) -> Result<Self> {
        let names = bus_names(app);
        debug!(destination = names.destination, "creating remote control proxy");

        let proxy = Proxy::new(connection, names.destination, names.path, names.interface)
            .map_err(|e| unavailable(app, e))?;

        Ok(Self { app, proxy })
    }

    fn call0<R>(&self, method: &'static str) -> Result<R>
    where
        R: for<'d> zbus::zvariant::DynamicDeserialize<'d>,
    {
        debug!(method, "remote call");
        self.proxy
            .call(method, &())
            .map_err(|e| unavailable(self.app, e))
    }

    fn call1<R>(&self, method: &'static str, arg: &str) -> Result<R>
    where
        R: for<'d> zbus::zvariant::DynamicDeserialize<'d>,
    {
        debug!(method, arg, "remote call");
        self.proxy
            .call(method, &(arg,))
            .map_err(|e| unavailable(self.app, e))
    }
}

impl NoteService for DbusNoteService {
    fn list_note_ids(&self) -> Result<Vec<NoteId>> {
        let uris: Vec<String> = self.call0("ListAllNotes")?;
        Ok(uris.into_iter().map(NoteId::new).collect())
    }

    fn get_title(&self, id: &NoteId) -> Result<String> {
        self.call1("GetNoteTitle", id.as_str())
    }

    fn get_change_date(&self, id: &NoteId) -> Result<i64> {
        // Tomboy answers with int64, some builds with int32.
        debug!(method = "GetNoteChangeDate", arg = id.as_str(), "remote call");
        let reply = self
            .proxy
            .call_method("GetNoteChangeDate", &(id.as_str(),))
            .map_err(|e| unavailable(self.app, e))?;
        let body = reply.body();
        body.deserialize::<i64>()
            .or_else(|_| body.deserialize::<i32>().map(i64::from))
            .map_err(|e| unavailable(self.app, e))
    }

    fn get_tags(&self, id: &NoteId) -> Result<Vec<String>> {
        self.call1("GetTagsForNote", id.as_str())
    }

    fn get_content(&self, id: &NoteId) -> Result<String> {
        self.call1("GetNoteContents", id.as_str())
    }

    fn find_by_title(&self, title: &str) -> Result<Option<NoteId>> {
        let uri: String = self.call1("FindNote", title)?;
        if uri.is_empty() {
            Ok(None)
        } else {
            Ok(Some(NoteId::new(uri)))
        }
    }

    fn get_version(&self) -> Result<String> {
        self.call0("Version")
    }
}
