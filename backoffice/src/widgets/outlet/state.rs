use std::collections::HashMap;

use backoffice_layout::RouteTable;

use super::model::Page;
use super::services::PageLoader;

/// Active route and the pages loaded so far.
#[derive(Debug, Default)]
pub(super) struct OutletState {
    active_path: Option<String>,
    pages: HashMap<String, Page>,
}

impl OutletState {
    pub(super) fn active_path(&self) -> Option<&str> {
        self.active_path.as_deref()
    }

    pub(super) fn active_page(&self) -> Option<&Page> {
        self.active_path
            .as_deref()
            .and_then(|path| self.pages.get(path))
    }

    /// Make `path` active, loading its page on first visit.
    pub(super) fn activate(
        &mut self,
        path: &str,
        loader: &dyn PageLoader,
        routes: &RouteTable,
    ) -> &Page {
        self.active_path = Some(path.to_string());
        self.pages
            .entry(path.to_string())
            .or_insert_with(|| loader.load(routes, path))
    }

    pub(super) fn loaded_count(&self) -> usize {
        self.pages.len()
    }
}
