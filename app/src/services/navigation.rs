//! Navigation seam.
//!
//! The controllers observe the current route and occasionally navigate,
//! but do not own a router. The real application adapts its router to
//! this trait; tests and the demo bin use [`MemoryNavigator`].

use std::collections::HashMap;

/// Transient state handed over by a navigating view (e.g. the navbar
/// passing which menu to preselect). Consumed at most once.
#[derive(Debug, Clone, Default)]
pub struct TransientNav {
    pub menu: Option<String>,
}

pub trait Navigator {
    /// Current route path, e.g. `/games/search/zelda`.
    fn path(&self) -> &str;

    /// Named route parameter, if the route pattern bound one.
    fn path_param(&self, name: &str) -> Option<&str>;

    /// Consume transient navigation state, clearing it so a later
    /// re-render does not re-apply it.
    fn take_transient(&mut self) -> Option<TransientNav>;

    /// Navigate to a new path.
    fn navigate(&mut self, path: &str);
}

/// In-memory navigator for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    path: String,
    params: HashMap<String, String>,
    transient: Option<TransientNav>,
}

impl MemoryNavigator {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    pub fn set_transient(&mut self, transient: TransientNav) {
        self.transient = Some(transient);
    }
}

impl Navigator for MemoryNavigator {
    fn path(&self) -> &str {
        &self.path
    }

    fn path_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn take_transient(&mut self) -> Option<TransientNav> {
        self.transient.take()
    }

    fn navigate(&mut self, path: &str) {
        self.path = path.to_owned();
        // Params belong to the route being left behind.
        self.params.clear();
    }
}
