use super::item::ItemId;

/// Toolkit-independent input understood by [`super::Palette::handle`].
///
/// Row numbers carried by mouse inputs are relative to the visible
/// results viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteInput {
    Up,
    Down,
    PageUp,
    PageDown,
    Char(char),
    Backspace,
    ClearTerm,
    Tab,
    Escape,
    Enter,
    MouseDown(usize),
    Click(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The palette is closed or not initialized; nothing happened.
    Ignored,
    /// Open, but the input changed nothing (e.g. Up on the first row).
    Unchanged,
    Moved,
    Searched,
    Closed,
    Selected(ItemId),
}

impl Transition {
    /// Whether the palette went from open to closed.
    #[must_use]
    pub fn closed(&self) -> bool {
        matches!(self, Transition::Closed | Transition::Selected(_))
    }
}
