use backoffice_layout::RouteTable;

use super::model::{Page, PageBody};

/// Produces page content for a route path.
pub(crate) trait PageLoader {
    fn load(&self, routes: &RouteTable, path: &str) -> Page;
}

/// Builds placeholder pages straight from the route table.
#[derive(Debug, Default)]
pub(crate) struct RoutePageLoader;

impl PageLoader for RoutePageLoader {
    fn load(&self, routes: &RouteTable, path: &str) -> Page {
        let Some((group, entry)) = routes.find(path) else {
            return Page::not_found(path);
        };

        Page {
            path: entry.path.clone(),
            title: entry.name.clone(),
            group: Some(group.label.clone()),
            body: PageBody::Route {
                summary: format!("{} content is rendered here.", entry.name),
            },
        }
    }
}
