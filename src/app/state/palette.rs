use crate::app::action::Action;
use crate::palette::{Context, Palette};

/// Host data threaded through palette item hooks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteEffects {
    // Actions requested by selected items, dispatched once the palette closes
    pub queued: Vec<Action>,
    // Blueprint of the focused processor
    pub preview: Option<String>,
}

pub type PaletteContext = Context<PaletteEffects>;
pub type CommandPalette = Palette<PaletteEffects>;
