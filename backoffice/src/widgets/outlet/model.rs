/// Body of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageBody {
    Route { summary: String },
    NotFound,
}

/// A page produced for one route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Page {
    pub(crate) path: String,
    pub(crate) title: String,
    pub(crate) group: Option<String>,
    pub(crate) body: PageBody,
}

impl Page {
    pub(crate) fn not_found(path: &str) -> Self {
        Self {
            path: path.to_string(),
            title: String::from("Not found"),
            group: None,
            body: PageBody::NotFound,
        }
    }

    pub(crate) fn is_not_found(&self) -> bool {
        self.body == PageBody::NotFound
    }
}

/// Read-only outlet snapshot for the view layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutletViewModel<'a> {
    pub(crate) page: Option<&'a Page>,
    /// Left padding that keeps content clear of the panel track.
    pub(crate) inset: f32,
}

impl<'a> OutletViewModel<'a> {
    /// Title shown in the header for the current page.
    pub(crate) fn title(&self) -> &'a str {
        self.page.map_or("", |page| page.title.as_str())
    }
}
