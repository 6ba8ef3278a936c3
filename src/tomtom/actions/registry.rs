//! Action discovery.
//!
//! A [`PluginSource`] announces the actions it can provide as lazily loaded
//! [`PluginEntry`]s. [`ActionRegistry::discover`] loads each of them and keeps
//! the ones that load; a broken plugin is logged and skipped so the remaining
//! actions stay usable.

use super::display::DisplayAction;
use super::list::ListAction;
use super::search::SearchAction;
use super::version::VersionAction;
use super::ActionPlugin;
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{debug, warn};

type Loader = Box<dyn FnOnce() -> Result<Box<dyn ActionPlugin>>>;

pub struct PluginEntry {
    pub name: String,
    load: Loader,
}

impl PluginEntry {
    pub fn new<F>(name: impl Into<String>, load: F) -> Self
    where
        F: FnOnce() -> Result<Box<dyn ActionPlugin>> + 'static,
    {
        Self {
            name: name.into(),
            load: Box::new(load),
        }
    }

    pub fn load(self) -> Result<Box<dyn ActionPlugin>> {
        (self.load)()
    }
}

pub trait PluginSource {
    fn discover(&self) -> Vec<PluginEntry>;
}

/// The actions compiled into the binary.
pub struct BuiltinActions;

impl PluginSource for BuiltinActions {
    fn discover(&self) -> Vec<PluginEntry> {
        vec![
            PluginEntry::new("display", || Ok(Box::new(DisplayAction) as Box<dyn ActionPlugin>)),
            PluginEntry::new("list", || Ok(Box::new(ListAction) as Box<dyn ActionPlugin>)),
            PluginEntry::new("search", || Ok(Box::new(SearchAction) as Box<dyn ActionPlugin>)),
            PluginEntry::new("version", || Ok(Box::new(VersionAction) as Box<dyn ActionPlugin>)),
        ]
    }
}

/// Loaded actions, keyed and iterated by name.
#[derive(Default)]
pub struct ActionRegistry {
    actions: BTreeMap<String, Box<dyn ActionPlugin>>,
}

impl ActionRegistry {
    pub fn discover<P: PluginSource + ?Sized>(source: &P) -> Self {
        let mut actions = BTreeMap::new();
        for entry in source.discover() {
            let name = entry.name.clone();
            match entry.load() {
                Ok(plugin) => {
                    debug!(action = %name, "loaded action");
                    actions.insert(name, plugin);
                }
                Err(err) => warn!(action = %name, error = %err, "skipping action that failed to load"),
            }
        }
        Self { actions }
    }

    pub fn builtin() -> Self {
        Self::discover(&BuiltinActions)
    }

    pub fn get(&self, name: &str) -> Option<&dyn ActionPlugin> {
        self.actions.get(name).map(|plugin| plugin.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ActionPlugin)> {
        self.actions
            .iter()
            .map(|(name, plugin)| (name.as_str(), plugin.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
