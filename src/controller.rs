use crate::index::{DocIndex, Group};
use crate::render::render_accordion;
use crate::search::filter_groups;
use std::io::{self, Write};

/// Key input as the controller sees it. Only `Enter` triggers a search;
/// everything else collapses to `Other` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Enter,
    Other,
}

/// The two logical view states of the navigation list.
///
/// Collapsed is the empty-query state: every group rendered closed with
/// its method list hidden. Filtered is the non-empty-query state:
/// matching groups rendered open with method lists visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Collapsed,
    Filtered,
}

impl ViewMode {
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            ViewMode::Collapsed
        } else {
            ViewMode::Filtered
        }
    }

    /// Class placed on each group `<li>`.
    pub fn open_class(self) -> &'static str {
        match self {
            ViewMode::Collapsed => "",
            ViewMode::Filtered => "open",
        }
    }

    /// Inline style of each nested method `<ul>`.
    pub fn display_style(self) -> &'static str {
        match self {
            ViewMode::Collapsed => "display: none",
            ViewMode::Filtered => "display: block",
        }
    }
}

/// Outcome of one Enter press: the mode entered, the groups that
/// survived the filter and the fragment that replaces the container's
/// contents.
#[derive(Debug, Clone)]
pub struct SearchView {
    pub mode: ViewMode,
    pub groups: Vec<Group>,
    pub html: String,
}

/// Drives the search box of a generated documentation page: an
/// immutable injected index, a pure filter and renderer, and an
/// Enter-keyed state machine over them.
#[derive(Debug, Clone)]
pub struct SearchController {
    index: DocIndex,
}

impl SearchController {
    pub fn new(index: DocIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &DocIndex {
        &self.index
    }

    /// Feed one key press with the search input's current value.
    /// Returns the new view on Enter, `None` for every other key.
    pub fn handle_key(&self, key: KeyEvent, query: &str) -> Option<SearchView> {
        match key {
            KeyEvent::Enter => Some(self.on_enter(query)),
            KeyEvent::Other => None,
        }
    }

    /// Run the full filter-and-render pass for a query. The raw value
    /// is used as typed, no trimming.
    pub fn on_enter(&self, query: &str) -> SearchView {
        let mode = ViewMode::for_query(query);
        let groups = filter_groups(self.index.groups(), query);
        let html = render_accordion(&groups, mode.open_class(), mode.display_style());
        tracing::debug!(
            "Enter with query \"{}\": {:?}, {} groups rendered",
            query,
            mode,
            groups.len()
        );
        SearchView { mode, groups, html }
    }

    /// Attach a sink that receives the rendered fragment on every
    /// Enter. The returned session owns the binding; dropping it
    /// detaches the sink.
    pub fn attach<W: Write>(&self, sink: W) -> SearchSession<'_, W> {
        SearchSession {
            controller: self,
            sink,
        }
    }
}

/// A live key-event subscription. Exists so the binding has a defined
/// lifetime instead of living in process-global state.
#[derive(Debug)]
pub struct SearchSession<'a, W: Write> {
    controller: &'a SearchController,
    sink: W,
}

impl<W: Write> SearchSession<'_, W> {
    /// Handle one key press; on Enter the rendered fragment is written
    /// to the sink followed by a newline.
    pub fn key(&mut self, key: KeyEvent, query: &str) -> io::Result<Option<ViewMode>> {
        match self.controller.handle_key(key, query) {
            Some(view) => {
                self.sink.write_all(view.html.as_bytes())?;
                self.sink.write_all(b"\n")?;
                Ok(Some(view.mode))
            }
            None => Ok(None),
        }
    }

    /// Detach, handing the sink back.
    pub fn into_sink(self) -> W {
        self.sink
    }
}
