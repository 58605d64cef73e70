//! Modal fuzzy command palette.
//!
//! The palette owns an active item set, a search term and the ranked
//! results for that term, and at most one focused item. Hosts feed it
//! [`PaletteInput`]s through [`Palette::handle`] and draw [`Palette::rows`].
//!
//! Items carry an optional [`ItemAction`]; its hooks receive the
//! [`Context`] handed to [`Palette::show`] / [`Palette::show_with`], and
//! every selection is recorded at the front of `context.selected`.
//!
//! Lookups that fail (unknown or duplicated ids, empty sets) are logged and
//! ignored. The palette never panics on bad ids.

pub mod error;
pub mod input;
pub mod item;
pub mod matcher;

pub use error::PaletteError;
pub use input::{PaletteInput, Transition};
pub use item::{Context, Item, ItemAction, ItemId, SelectFn};
pub use matcher::{CaseMatching, Fragment, Match, Scorer, SkimScorer};

use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

const DEFAULT_VIEWPORT_ROWS: usize = 10;

/// A displayed row, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub id: &'a ItemId,
    pub fragments: &'a [Fragment],
    pub focused: bool,
}

pub struct Palette<T> {
    initialized: bool,
    base: Vec<Item<T>>,
    items: Vec<Item<T>>,
    results: Vec<Match>,
    term: String,
    focused: Option<ItemId>,
    visible: bool,
    help: Option<String>,
    context: Context<T>,
    scroll_offset: usize,
    viewport_rows: usize,
    scorer: Box<dyn Scorer>,
}

impl<T: Default> Default for Palette<T> {
    fn default() -> Self {
        Self::new(Box::new(SkimScorer::default()))
    }
}

impl<T: Default> Palette<T> {
    pub fn new(scorer: Box<dyn Scorer>) -> Self {
        Self {
            initialized: false,
            base: Vec::new(),
            items: Vec::new(),
            results: Vec::new(),
            term: String::new(),
            focused: None,
            visible: false,
            help: None,
            context: Context::default(),
            scroll_offset: 0,
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
            scorer,
        }
    }

    /// Hands the context back to the host, leaving a fresh one behind.
    pub fn take_context(&mut self) -> Context<T> {
        std::mem::take(&mut self.context)
    }
}

impl<T> Palette<T> {
    /// Enables input handling. Only the first call has an effect.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            debug!("palette already initialized");
            return false;
        }
        self.initialized = true;
        true
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Sets the item set used by [`Palette::show`].
    pub fn set_base_items(&mut self, items: Vec<Item<T>>) {
        self.base = items;
    }

    #[must_use]
    pub fn base_items(&self) -> &[Item<T>] {
        &self.base
    }

    /// Opens over the base item set. Does nothing when that set is empty.
    pub fn show(&mut self, initial_term: &str, context: Context<T>) -> bool {
        self.show_with(self.base.clone(), initial_term, context)
    }

    /// Replaces the active item set and opens over it. Does nothing when
    /// `items` is empty.
    pub fn show_with(
        &mut self,
        items: Vec<Item<T>>,
        initial_term: &str,
        mut context: Context<T>,
    ) -> bool {
        if items.is_empty() {
            debug!("{}; palette stays closed", PaletteError::EmptySet);
            self.context = context;
            return false;
        }
        warn_duplicates(&items);
        context.selected.get_or_insert_with(Vec::new);
        self.items = items;
        self.open(initial_term, context);
        true
    }

    fn open(&mut self, initial_term: &str, context: Context<T>) {
        self.context = context;
        self.visible = true;
        self.search(initial_term);
    }

    /// Recomputes the displayed results for `term` and focuses the first.
    pub fn search(&mut self, term: &str) {
        self.term = term.to_string();
        self.results = matcher::rank(self.scorer.as_ref(), term, &self.items);
        self.scroll_offset = 0;
        self.focused = None;
        self.help = None;

        let first = self
            .results
            .first()
            .map(|m| self.items[m.index].id.clone());
        if let Some(id) = first {
            self.focus(&id);
        }
    }

    /// Focuses a displayed item, showing its help and running its focus hook.
    pub fn focus(&mut self, id: &ItemId) {
        let pos = match self.resolve_displayed(id) {
            Ok(pos) => pos,
            Err(e) => {
                warn!("focus ignored: {e}");
                return;
            }
        };

        self.focused = Some(id.clone());
        self.scroll_into_view(pos);

        let item = &self.items[self.results[pos].index];
        self.help = if item.help.is_empty() {
            None
        } else {
            Some(item.help.clone())
        };
        if let Some(action) = &item.action {
            action.on_focus(&mut self.context, item);
        }
    }

    /// Closes the palette and runs the item's select hook, recording the
    /// selection. Returns whether an item with that id was found.
    pub fn select(&mut self, id: &ItemId) -> bool {
        self.close();

        let idx = match self.resolve_active(id) {
            Ok(idx) => idx,
            Err(e) => {
                warn!("select ignored: {e}");
                return false;
            }
        };

        let item = &self.items[idx];
        match &item.action {
            Some(action) => {
                self.context
                    .selected
                    .get_or_insert_with(Vec::new)
                    .insert(0, id.clone());
                action.on_select(&mut self.context, item);
            }
            None => debug!(id = %id, "selected item has no action"),
        }
        true
    }

    /// Closes without running any hook.
    pub fn hide(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.visible = false;
        self.help = None;
    }

    /// Applies one input to the open palette.
    pub fn handle(&mut self, input: PaletteInput) -> Transition {
        if !self.initialized {
            warn!(?input, "palette input before initialize");
            return Transition::Ignored;
        }
        if !self.visible {
            return Transition::Ignored;
        }

        match input {
            PaletteInput::Up => self.move_focus(-1),
            PaletteInput::Down => self.move_focus(1),
            PaletteInput::PageUp => self.move_focus(-(self.viewport_rows.max(1) as isize)),
            PaletteInput::PageDown => self.move_focus(self.viewport_rows.max(1) as isize),
            PaletteInput::Char(c) => {
                let mut term = self.term.clone();
                term.push(c);
                self.search(&term);
                Transition::Searched
            }
            PaletteInput::Backspace => {
                let mut term = self.term.clone();
                term.pop();
                self.search(&term);
                Transition::Searched
            }
            PaletteInput::ClearTerm => {
                self.search("");
                Transition::Searched
            }
            PaletteInput::Tab | PaletteInput::Escape => {
                self.hide();
                Transition::Closed
            }
            PaletteInput::Enter => match self.focused.clone() {
                Some(id) => self.select_transition(id),
                None => {
                    self.hide();
                    Transition::Closed
                }
            },
            PaletteInput::MouseDown(row) => match self.id_at_row(row) {
                Some(id) if self.focused.as_ref() != Some(&id) => {
                    self.focus(&id);
                    Transition::Moved
                }
                _ => Transition::Unchanged,
            },
            PaletteInput::Click(row) => match self.id_at_row(row) {
                Some(id) => self.select_transition(id),
                None => Transition::Unchanged,
            },
        }
    }

    fn select_transition(&mut self, id: ItemId) -> Transition {
        if self.select(&id) {
            Transition::Selected(id)
        } else {
            Transition::Closed
        }
    }

    fn move_focus(&mut self, delta: isize) -> Transition {
        if self.results.is_empty() {
            return Transition::Unchanged;
        }
        let last = self.results.len() - 1;
        let target = match self.focused_position() {
            Some(current) => current.saturating_add_signed(delta).min(last),
            // Nothing focused: moving down lands on the first focusable row
            None if delta > 0 => match (0..=last).find(|&pos| {
                self.resolve_displayed(&self.items[self.results[pos].index].id) == Ok(pos)
            }) {
                Some(pos) => pos,
                None => return Transition::Unchanged,
            },
            None => return Transition::Unchanged,
        };
        if Some(target) == self.focused_position() {
            return Transition::Unchanged;
        }
        let before = self.focused.clone();
        let id = self.items[self.results[target].index].id.clone();
        self.focus(&id);
        if self.focused == before {
            Transition::Unchanged
        } else {
            Transition::Moved
        }
    }

    fn id_at_row(&self, row: usize) -> Option<ItemId> {
        if row >= self.viewport_rows {
            return None;
        }
        self.results
            .get(self.scroll_offset + row)
            .map(|m| self.items[m.index].id.clone())
    }

    fn scroll_into_view(&mut self, pos: usize) {
        let rows = self.viewport_rows.max(1);
        if pos < self.scroll_offset {
            self.scroll_offset = pos;
        } else if pos >= self.scroll_offset + rows {
            self.scroll_offset = pos + 1 - rows;
        }
    }

    fn resolve_displayed(&self, id: &ItemId) -> Result<usize, PaletteError> {
        let hits: Vec<usize> = self
            .results
            .iter()
            .enumerate()
            .filter(|(_, m)| self.items[m.index].id == *id)
            .map(|(pos, _)| pos)
            .collect();
        single(id, &hits)
    }

    fn resolve_active(&self, id: &ItemId) -> Result<usize, PaletteError> {
        let hits: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.id == *id)
            .map(|(idx, _)| idx)
            .collect();
        single(id, &hits)
    }

    /// Number of result rows the host can show at once.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        if let Some(pos) = self.focused_position() {
            self.scroll_into_view(pos);
        }
    }

    #[must_use]
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn focused(&self) -> Option<&ItemId> {
        self.focused.as_ref()
    }

    #[must_use]
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    #[must_use]
    pub fn results(&self) -> &[Match] {
        &self.results
    }

    #[must_use]
    pub fn displayed_ids(&self) -> Vec<&ItemId> {
        self.results
            .iter()
            .map(|m| &self.items[m.index].id)
            .collect()
    }

    fn focused_position(&self) -> Option<usize> {
        let id = self.focused.as_ref()?;
        self.results
            .iter()
            .position(|m| self.items[m.index].id == *id)
    }

    /// The rows inside the current viewport.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.results
            .iter()
            .skip(self.scroll_offset)
            .take(self.viewport_rows)
            .map(move |m| {
                let id = &self.items[m.index].id;
                Row {
                    id,
                    fragments: &m.fragments,
                    focused: self.focused.as_ref() == Some(id),
                }
            })
    }

    #[must_use]
    pub fn context(&self) -> &Context<T> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context<T> {
        &mut self.context
    }
}

fn single(id: &ItemId, hits: &[usize]) -> Result<usize, PaletteError> {
    match hits {
        [] => Err(PaletteError::NotFound(id.clone())),
        [one] => Ok(*one),
        many => Err(PaletteError::Ambiguous {
            id: id.clone(),
            count: many.len(),
        }),
    }
}

fn warn_duplicates<T>(items: &[Item<T>]) {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(&item.id) {
            warn!(id = %item.id, "duplicate item id in palette set");
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Palette<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("initialized", &self.initialized)
            .field("items", &self.items)
            .field("term", &self.term)
            .field("focused", &self.focused)
            .field("visible", &self.visible)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
